//! # OxiStatus Core
//!
//! Core components for decoding Token Status Lists.
//!
//! A status list packs one fixed-width status per referenced token into a
//! byte buffer and compresses it. This crate provides the decode pipeline:
//!
//! - [`model`]: the parsed [`StatusList`] document, [`BitWidth`], [`StatusIndex`], [`Status`]
//! - [`traits`]: the [`Decompressor`] / [`AsyncDecompressor`] capabilities
//! - [`bitfield`]: random-access extraction of fixed-width fields
//! - [`reader`]: [`ReadStatus`], the lookup API
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Document                                            │
//! │     JSON / CBOR parsing, base64url (oxistatus-format)   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     zlib capability (oxistatus-deflate)                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Lookup (this crate)                                 │
//! │     StatusList, ReadStatus, BitFieldExtractor           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxistatus_core::{ReadStatus, Status, StatusList};
//! use oxistatus_core::traits::FnDecompressor;
//!
//! // Any codec can be plugged in; this one passes the payload through.
//! let codec = FnDecompressor::new(|input: &[u8]| Ok(input.to_vec()));
//!
//! let list = StatusList::new(1, vec![0b0000_0101]);
//! let reader = ReadStatus::from_status_list_blocking(&list, &codec).unwrap();
//!
//! assert_eq!(reader.status_at(0u64).unwrap(), Status::INVALID);
//! assert_eq!(reader.status_at(1u64).unwrap(), Status::VALID);
//! assert_eq!(reader.len(), 8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitfield;
pub mod error;
pub mod model;
pub mod reader;
pub mod traits;

// Re-exports for convenience
pub use bitfield::{BitFieldExtractor, extract_bits};
pub use error::{Result, StatusListError};
pub use model::{BitWidth, Status, StatusIndex, StatusKind, StatusList};
pub use reader::{ReadStatus, Statuses};
pub use traits::{AsyncDecompressor, AsyncDecompressorWrapper, Decompressor, FnDecompressor};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Result, StatusListError};
    pub use crate::model::{BitWidth, Status, StatusIndex, StatusList};
    pub use crate::reader::ReadStatus;
    pub use crate::traits::{AsyncDecompressor, Decompressor};
}
