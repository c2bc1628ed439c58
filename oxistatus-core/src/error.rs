//! Error types for OxiStatus operations.
//!
//! Construction of a reader can fail because the declared bit width is not
//! supported or because the payload does not decompress. A single lookup can
//! fail because the requested index lies outside the decompressed buffer; such
//! a failure leaves the reader usable for other indices.

use thiserror::Error;

/// The main error type for status list decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusListError {
    /// The declared bit width is not one of 1, 2, 4 or 8.
    #[error("Invalid bit width: {bits} (must be 1, 2, 4 or 8)")]
    InvalidBitWidth {
        /// The width found in the document.
        bits: u64,
    },

    /// The payload could not be turned into a packed bit buffer.
    #[error("Decompression failed: {message}")]
    DecompressionFailed {
        /// Description of the codec failure.
        message: String,
    },

    /// The bit field for the requested index lies outside the buffer.
    #[error("Status index {index} out of range: list holds {len} entries")]
    IndexOutOfRange {
        /// The requested index.
        index: u64,
        /// Number of entries the buffer holds.
        len: u64,
    },
}

/// Result type alias for status list operations.
pub type Result<T> = std::result::Result<T, StatusListError>;

impl StatusListError {
    /// Create an invalid bit width error.
    pub fn invalid_bit_width(bits: impl Into<u64>) -> Self {
        Self::InvalidBitWidth { bits: bits.into() }
    }

    /// Create a decompression failure.
    pub fn decompression_failed(message: impl Into<String>) -> Self {
        Self::DecompressionFailed {
            message: message.into(),
        }
    }

    /// Create an index out of range error.
    pub fn index_out_of_range(index: u64, len: u64) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Returns `true` if this error only affects a single lookup.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatusListError::invalid_bit_width(3u8);
        assert!(err.to_string().contains("Invalid bit width: 3"));

        let err = StatusListError::decompression_failed("bad zlib header");
        assert!(err.to_string().contains("bad zlib header"));

        let err = StatusListError::index_out_of_range(16, 8);
        assert_eq!(
            err.to_string(),
            "Status index 16 out of range: list holds 8 entries"
        );
    }

    #[test]
    fn test_lookup_error_classification() {
        assert!(StatusListError::index_out_of_range(1, 0).is_lookup_error());
        assert!(!StatusListError::invalid_bit_width(0u8).is_lookup_error());
        assert!(!StatusListError::decompression_failed("x").is_lookup_error());
    }
}
