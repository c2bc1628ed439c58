//! Document format auto-detection.
//!
//! A JSON status list is an object, so its first significant byte is `{`. A
//! CBOR status list is a map, so its first byte carries major type 5.

use crate::error::Result;
use std::io::{ErrorKind, Read};

/// Number of significant bytes inspected by [`DocumentFormat::detect`].
pub const MAGIC_LEN: usize = 64;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Known status list encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// JSON object with a base64url `lst` member.
    Json,
    /// CBOR map with a byte string `lst` member.
    Cbor,
    /// Unknown format.
    Unknown,
}

impl DocumentFormat {
    /// Detect format from leading bytes.
    pub fn from_magic(magic: &[u8]) -> Self {
        let Some(&first) = magic.first() else {
            return Self::Unknown;
        };

        // CBOR map: major type 5 (0xA0..=0xBF)
        if first >> 5 == 5 {
            return Self::Cbor;
        }

        let significant = magic
            .strip_prefix(UTF8_BOM)
            .unwrap_or(magic)
            .iter()
            .find(|b| !b.is_ascii_whitespace());

        match significant {
            Some(b'{') => Self::Json,
            _ => Self::Unknown,
        }
    }

    /// Detect format from a reader.
    ///
    /// Leading whitespace (and a UTF-8 BOM) is consumed without counting
    /// towards [`MAGIC_LEN`], so pretty-printed JSON with a long indent is
    /// still recognised. Returns the format together with the first
    /// significant bytes read.
    pub fn detect<R: Read>(reader: &mut R) -> Result<(Self, Vec<u8>)> {
        let mut magic = Vec::with_capacity(MAGIC_LEN);
        let mut buf = [0u8; MAGIC_LEN];

        while magic.len() < MAGIC_LEN {
            let n = match reader.read(&mut buf[..MAGIC_LEN - magic.len()]) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            let mut chunk = &buf[..n];
            if magic.is_empty() {
                if let Some(rest) = chunk.strip_prefix(UTF8_BOM) {
                    magic.extend_from_slice(UTF8_BOM);
                    chunk = rest;
                }
            }
            if magic.is_empty() || magic == UTF8_BOM {
                let start = chunk
                    .iter()
                    .position(|b| !b.is_ascii_whitespace())
                    .unwrap_or(chunk.len());
                chunk = &chunk[start..];
            }
            magic.extend_from_slice(chunk);
        }

        let format = Self::from_magic(&magic);
        Ok((format, magic))
    }

    /// Get the typical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Cbor => "cbor",
            Self::Unknown => "",
        }
    }

    /// Get the media type registered for status lists.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Json => "application/statuslist+json",
            Self::Cbor => "application/statuslist+cbor",
            Self::Unknown => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Cbor => write!(f, "CBOR"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
