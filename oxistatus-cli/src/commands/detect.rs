//! Detect command implementation.

use crate::utils::CliResult;
use oxistatus_format::DocumentFormat;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn cmd_detect(file: &Path) -> CliResult<()> {
    let f = File::open(file)?;
    let mut reader = BufReader::new(f);

    let (format, magic) = DocumentFormat::detect(&mut reader)?;

    println!("File: {}", file.display());
    println!("Format: {}", format);
    if format != DocumentFormat::Unknown {
        println!("Extension: .{}", format.extension());
    }
    println!("MIME type: {}", format.mime_type());
    println!("Magic bytes: {:02X?}", &magic[..magic.len().min(16)]);

    Ok(())
}
