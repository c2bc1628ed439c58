//! OxiStatus CLI - Token Status List lookups
//!
//! Reads a JSON or CBOR status list document and reports the status stored
//! at one or more indices.

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand};
use commands::{cmd_detect, cmd_info, cmd_status};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use utils::InputFormat;

#[derive(Parser)]
#[command(name = "oxistatus")]
#[command(author, version, about = "Pure Rust Token Status List decoder")]
#[command(long_about = "
OxiStatus decodes Token Status Lists: compressed, bit-packed arrays of
credential statuses published as JSON or CBOR documents.

Examples:
  oxistatus status list.json 0 1993 1000345
  oxistatus status list.cbor 42 --json
  oxistatus info list.json
  oxistatus detect list.cbor
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the status at one or more indices
    #[command(alias = "s")]
    Status {
        /// Status list document
        file: PathBuf,

        /// Indices to look up
        #[arg(required = true)]
        indices: Vec<u64>,

        /// Document encoding
        #[arg(short, long, value_enum, default_value_t = InputFormat::Auto)]
        format: InputFormat,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Largest decompressed list accepted, in bytes
        #[arg(long, value_name = "BYTES")]
        max_size: Option<usize>,
    },

    /// Show information about a status list
    #[command(alias = "i")]
    Info {
        /// Status list document
        file: PathBuf,

        /// Document encoding
        #[arg(short, long, value_enum, default_value_t = InputFormat::Auto)]
        format: InputFormat,

        /// Largest decompressed list accepted, in bytes
        #[arg(long, value_name = "BYTES")]
        max_size: Option<usize>,
    },

    /// Detect document format
    Detect {
        /// File to detect
        file: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Status {
            file,
            indices,
            format,
            json,
            max_size,
        } => cmd_status(&file, &indices, format, json, max_size),
        Commands::Info {
            file,
            format,
            max_size,
        } => cmd_info(&file, format, max_size),
        Commands::Detect { file } => cmd_detect(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
