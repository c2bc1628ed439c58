//! Zlib decompression for status list payloads.
//!
//! A status list `lst` is a zlib stream (RFC 1950). Before handing it to
//! `flate2`, [`ZlibHeader::parse`] checks the two leading bytes so a payload
//! that is not zlib at all (base64 text, raw DEFLATE, gzip) is rejected with a
//! precise message:
//!
//! - the method nibble must select DEFLATE and the window must fit 32 KiB
//! - the header must pass its mod-31 check
//! - preset dictionaries are refused, since a status list cannot name one
//!
//! The compression level hint is exposed as [`ZlibLevel`] for diagnostics and
//! otherwise ignored. Inflation itself and the Adler-32 trailer check are left
//! to `flate2`; this module only bounds how much output it may produce.

use crate::config::InflateConfig;
use flate2::{Decompress, FlushDecompress, Status as FlateStatus};
use oxistatus_core::error::{Result, StatusListError};
use oxistatus_core::traits::{AsyncDecompressor, DecompressFuture, Decompressor};

/// Output growth step while inflating.
const CHUNK_SIZE: usize = 32 * 1024;

/// Smallest well-formed zlib stream: header plus Adler-32 trailer.
pub const MIN_STREAM_LEN: usize = 6;

/// Compression level hint carried in the FLEVEL bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ZlibLevel {
    /// Fastest compression.
    Fastest = 0,
    /// Fast compression.
    Fast = 1,
    /// Default compression.
    Default = 2,
    /// Maximum compression.
    Maximum = 3,
}

impl ZlibLevel {
    fn from_flevel(flevel: u8) -> Self {
        match flevel & 0x03 {
            0 => Self::Fastest,
            1 => Self::Fast,
            2 => Self::Default,
            _ => Self::Maximum,
        }
    }

    /// Get the level name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fastest => "fastest",
            Self::Fast => "fast",
            Self::Default => "default",
            Self::Maximum => "maximum",
        }
    }
}

impl std::fmt::Display for ZlibLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated zlib stream header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZlibHeader {
    /// Compression method and info byte.
    pub cmf: u8,
    /// Flags byte.
    pub flg: u8,
}

impl ZlibHeader {
    /// Parse and validate the header at the start of `input`.
    ///
    /// # Errors
    ///
    /// Returns `DecompressionFailed` if the stream is shorter than
    /// [`MIN_STREAM_LEN`], the method is not DEFLATE, the window is larger than
    /// 32KB, the check bits are wrong, or a preset dictionary is required.
    pub fn parse(input: &[u8]) -> Result<Self> {
        if input.len() < MIN_STREAM_LEN {
            return Err(StatusListError::decompression_failed(format!(
                "zlib data too short: {} bytes",
                input.len()
            )));
        }

        let header = Self {
            cmf: input[0],
            flg: input[1],
        };

        if header.method() != 8 {
            return Err(StatusListError::decompression_failed(format!(
                "unsupported zlib compression method {}",
                header.method()
            )));
        }

        if header.cmf >> 4 > 7 {
            return Err(StatusListError::decompression_failed(
                "invalid zlib window size",
            ));
        }

        let check = u16::from(header.cmf) * 256 + u16::from(header.flg);
        if check % 31 != 0 {
            return Err(StatusListError::decompression_failed(
                "zlib header check failed",
            ));
        }

        if header.has_dictionary() {
            return Err(StatusListError::decompression_failed(
                "zlib preset dictionary is not supported",
            ));
        }

        Ok(header)
    }

    /// Compression method (8 for DEFLATE).
    pub fn method(&self) -> u8 {
        self.cmf & 0x0F
    }

    /// LZ77 window size in bytes.
    pub fn window_size(&self) -> usize {
        1 << (8 + (self.cmf >> 4))
    }

    /// Check if a preset dictionary is required.
    pub fn has_dictionary(&self) -> bool {
        (self.flg >> 5) & 1 != 0
    }

    /// Compression level hint.
    pub fn level(&self) -> ZlibLevel {
        ZlibLevel::from_flevel(self.flg >> 6)
    }
}

/// Check if `input` starts with a valid zlib header.
pub fn is_zlib(input: &[u8]) -> bool {
    ZlibHeader::parse(input).is_ok()
}

/// Decompress a zlib stream with the default limits.
///
/// # Example
///
/// ```
/// use oxistatus_deflate::zlib_decompress;
///
/// let compressed = [0x78, 0x9C, 0xDB, 0xB9, 0x18, 0x00, 0x02, 0x17, 0x01, 0x5D];
/// assert_eq!(zlib_decompress(&compressed).unwrap(), vec![0xB9, 0xA3]);
/// ```
///
/// # Errors
///
/// Returns `DecompressionFailed` for a malformed header, corrupt or truncated
/// DEFLATE data, an Adler-32 mismatch, or output above the default limit.
pub fn zlib_decompress(input: &[u8]) -> Result<Vec<u8>> {
    zlib_decompress_with_config(input, &InflateConfig::default())
}

/// Grow `output` geometrically without letting its capacity pass `ceiling`.
fn grow_output(output: &mut Vec<u8>, ceiling: usize) {
    let len = output.len();
    let step = len.max(CHUNK_SIZE).min(ceiling.saturating_sub(len)).max(1);
    output.reserve_exact(step);
}

/// Decompress a zlib stream with explicit limits.
///
/// # Errors
///
/// See [`zlib_decompress`].
pub fn zlib_decompress_with_config(input: &[u8], config: &InflateConfig) -> Result<Vec<u8>> {
    if config.verify_header {
        if let Err(err) = ZlibHeader::parse(input) {
            tracing::warn!(error = %err, "rejected zlib header");
            return Err(err);
        }
    }

    let limit = config.max_output_size;
    // One byte of headroom is enough to observe an overflow.
    let ceiling = limit.saturating_add(1);
    let mut inflater = Decompress::new(true);
    let initial = input
        .len()
        .saturating_mul(8)
        .clamp(CHUNK_SIZE.min(ceiling), ceiling);
    let mut output = Vec::with_capacity(initial);

    loop {
        if output.len() == output.capacity() {
            grow_output(&mut output, ceiling);
        }

        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();
        let status = inflater
            .decompress_vec(&input[consumed..], &mut output, FlushDecompress::None)
            .map_err(|e| {
                StatusListError::decompression_failed(format!("invalid zlib stream: {e}"))
            })?;

        if output.len() > limit {
            tracing::warn!(limit, "decompressed status list exceeds output limit");
            return Err(StatusListError::decompression_failed(format!(
                "decompressed size exceeds limit of {limit} bytes"
            )));
        }

        match status {
            FlateStatus::StreamEnd => break,
            FlateStatus::Ok | FlateStatus::BufError => {
                let stalled = inflater.total_in() as usize == consumed
                    && inflater.total_out() == produced;
                if stalled {
                    return Err(StatusListError::decompression_failed(
                        "truncated zlib stream",
                    ));
                }
            }
        }
    }

    let trailing = input.len() - inflater.total_in() as usize;
    if trailing > 0 {
        tracing::debug!(trailing, "ignoring bytes after end of zlib stream");
    }

    output.shrink_to_fit();
    Ok(output)
}

/// Zlib decompressor capability for status list readers.
///
/// Implements both [`Decompressor`] and [`AsyncDecompressor`]; the async form
/// inflates inline on the polling task.
///
/// # Example
///
/// ```
/// use oxistatus_core::{ReadStatus, Status, StatusList};
/// use oxistatus_deflate::ZlibDecompressor;
///
/// // Two 8-bit entries: 0xB9, 0xA3
/// let lst = vec![0x78, 0x9C, 0xDB, 0xB9, 0x18, 0x00, 0x02, 0x17, 0x01, 0x5D];
/// let list = StatusList::new(8, lst);
///
/// let reader = ReadStatus::from_status_list_blocking(&list, &ZlibDecompressor::new()).unwrap();
/// assert_eq!(reader.status_at(1u64).unwrap(), Status(0xA3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZlibDecompressor {
    config: InflateConfig,
}

impl ZlibDecompressor {
    /// Create a decompressor with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decompressor with explicit limits.
    pub fn with_config(config: InflateConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &InflateConfig {
        &self.config
    }
}

impl Decompressor for ZlibDecompressor {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let output = zlib_decompress_with_config(input, &self.config)?;
        tracing::debug!(
            compressed = input.len(),
            decompressed = output.len(),
            "inflated zlib payload"
        );
        Ok(output)
    }
}

impl AsyncDecompressor for ZlibDecompressor {
    fn decompress_async<'a>(&'a self, input: &'a [u8]) -> DecompressFuture<'a> {
        Box::pin(async move { self.decompress(input) })
    }
}
