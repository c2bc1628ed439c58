//! Utility functions for the CLI.

use clap::ValueEnum;
use oxistatus_core::{ReadStatus, Status, StatusList};
use oxistatus_deflate::{DEFAULT_MAX_OUTPUT_SIZE, InflateConfig, ZlibDecompressor};
use oxistatus_format::DocumentFormat;
use std::path::Path;

/// Boxed error returned by every command.
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Input document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum InputFormat {
    /// Detect from the leading bytes
    #[default]
    Auto,
    /// JSON object with a base64url `lst`
    Json,
    /// CBOR map with a byte string `lst`
    Cbor,
}

impl From<InputFormat> for DocumentFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Auto => DocumentFormat::Unknown,
            InputFormat::Json => DocumentFormat::Json,
            InputFormat::Cbor => DocumentFormat::Cbor,
        }
    }
}

/// A status list document loaded from disk.
pub struct LoadedList {
    /// Encoding the document was parsed as.
    pub format: DocumentFormat,
    /// Size of the file in bytes.
    pub file_size: u64,
    /// The parsed document.
    pub list: StatusList,
}

/// Read and parse a status list file.
pub fn load_status_list(path: &Path, format: InputFormat) -> CliResult<LoadedList> {
    let data = std::fs::read(path)?;

    let format = match format {
        InputFormat::Auto => DocumentFormat::from_magic(&data),
        forced => forced.into(),
    };
    tracing::info!(path = %path.display(), %format, size = data.len(), "loading status list");

    let list = oxistatus_format::parse(&data, format)?;
    Ok(LoadedList {
        format,
        file_size: data.len() as u64,
        list,
    })
}

/// Decompress a status list with the zlib codec.
pub fn open_reader(list: &StatusList, max_size: Option<usize>) -> CliResult<ReadStatus> {
    let config = InflateConfig::new(max_size.unwrap_or(DEFAULT_MAX_OUTPUT_SIZE));
    let codec = ZlibDecompressor::with_config(config);
    Ok(ReadStatus::from_status_list_blocking(list, &codec)?)
}

/// Human-readable label for a status value.
pub fn status_label(status: Status) -> String {
    format!("{} ({})", status.value(), status.kind())
}

/// Format a byte count.
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;

    if bytes >= MIB {
        format!("{:.1} MiB ({} bytes)", bytes as f64 / MIB as f64, bytes)
    } else if bytes >= KIB {
        format!("{:.1} KiB ({} bytes)", bytes as f64 / KIB as f64, bytes)
    } else {
        format!("{} bytes", bytes)
    }
}
