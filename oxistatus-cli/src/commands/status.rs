//! Status command implementation.

use crate::utils::{CliResult, InputFormat, load_status_list, open_reader, status_label};
use oxistatus_core::{ReadStatus, StatusIndex};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One looked-up entry, as printed with `--json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusRecord {
    pub index: u64,
    pub status: u8,
    pub kind: &'static str,
}

pub fn cmd_status(
    file: &Path,
    indices: &[u64],
    format: InputFormat,
    json: bool,
    max_size: Option<usize>,
) -> CliResult<()> {
    let loaded = load_status_list(file, format)?;
    let reader = open_reader(&loaded.list, max_size)?;

    let mut out = std::io::stdout().lock();
    write_statuses(&mut out, &reader, indices, json)
}

/// Look up every index and print the results.
///
/// Fails on the first index outside the list.
pub fn write_statuses<W: Write>(
    out: &mut W,
    reader: &ReadStatus,
    indices: &[u64],
    json: bool,
) -> CliResult<()> {
    let records = lookup(reader, indices)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        return Ok(());
    }

    write_table(out, &records)?;
    Ok(())
}

fn lookup(reader: &ReadStatus, indices: &[u64]) -> CliResult<Vec<StatusRecord>> {
    indices
        .iter()
        .map(|&index| {
            let status = reader.status_at(StatusIndex(index))?;
            Ok(StatusRecord {
                index,
                status: status.value(),
                kind: status.kind().name(),
            })
        })
        .collect()
}

fn write_table<W: Write>(out: &mut W, records: &[StatusRecord]) -> std::io::Result<()> {
    writeln!(out, "{:>12}  Status", "Index")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for record in records {
        writeln!(
            out,
            "{:>12}  {}",
            record.index,
            status_label(record.status.into())
        )?;
    }
    Ok(())
}
