//! # OxiStatus Deflate
//!
//! zlib decompression capability for status list readers.
//!
//! Status list payloads are DEFLATE data in the zlib format (RFC 1950). This
//! crate validates the zlib header, inflates the payload with `flate2`, and
//! bounds the decompressed size so a hostile list cannot exhaust memory.
//!
//! ## Features
//!
//! - [`ZlibDecompressor`]: implements both the sync and async capability traits
//! - [`InflateConfig`]: output limit and header checking
//! - `tokio` feature: `BlockingDecompressor` runs any decompressor on Tokio's
//!   blocking pool
//!
//! ## Example
//!
//! ```rust
//! use oxistatus_core::{ReadStatus, StatusList};
//! use oxistatus_deflate::{InflateConfig, ZlibDecompressor};
//!
//! let lst = vec![0x78, 0x9C, 0xDB, 0xB9, 0x18, 0x00, 0x02, 0x17, 0x01, 0x5D];
//! let list = StatusList::new(1, lst);
//!
//! let codec = ZlibDecompressor::with_config(InflateConfig::new(1024 * 1024));
//! let reader = ReadStatus::from_status_list_blocking(&list, &codec).unwrap();
//! assert_eq!(reader.len(), 16);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "tokio")]
pub mod blocking;
pub mod config;
pub mod zlib;

// Re-exports
#[cfg(feature = "tokio")]
pub use blocking::BlockingDecompressor;
pub use config::{DEFAULT_MAX_OUTPUT_SIZE, InflateConfig};
pub use zlib::{
    ZlibDecompressor, ZlibHeader, ZlibLevel, is_zlib, zlib_decompress, zlib_decompress_with_config,
};
