//! Info command implementation.

use crate::utils::{
    CliResult, InputFormat, LoadedList, format_size, load_status_list, open_reader, status_label,
};
use oxistatus_core::ReadStatus;
use std::io::Write;
use std::path::Path;

pub fn cmd_info(file: &Path, format: InputFormat, max_size: Option<usize>) -> CliResult<()> {
    let loaded = load_status_list(file, format)?;
    let reader = open_reader(&loaded.list, max_size)?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "Status List Information")?;
    writeln!(out, "=======================")?;
    writeln!(out, "File: {}", file.display())?;
    write_info(&mut out, &loaded, &reader)?;
    Ok(())
}

pub fn write_info<W: Write>(
    out: &mut W,
    loaded: &LoadedList,
    reader: &ReadStatus,
) -> std::io::Result<()> {
    let compressed = loaded.list.lst.len() as u64;
    let raw = reader.as_bytes().len() as u64;

    writeln!(out, "Format: {}", loaded.format)?;
    writeln!(out, "File size: {}", format_size(loaded.file_size))?;
    writeln!(out, "Bits per status: {}", reader.bits())?;
    if let Some(uri) = &loaded.list.aggregation_uri {
        writeln!(out, "Aggregation URI: {}", uri)?;
    }

    writeln!(out)?;
    writeln!(out, "Payload:")?;
    writeln!(out, "  Compressed size: {}", format_size(compressed))?;
    writeln!(out, "  Decompressed size: {}", format_size(raw))?;
    if raw > 0 {
        writeln!(
            out,
            "  Compression ratio: {:.1}%",
            (1.0 - compressed as f64 / raw as f64) * 100.0
        )?;
    }
    writeln!(out, "  Entries: {}", reader.len())?;

    writeln!(out)?;
    writeln!(out, "Statuses:")?;
    for (status, count) in reader.count_by_status() {
        writeln!(out, "  {:<28} {:>12}", status_label(status), count)?;
    }
    Ok(())
}
