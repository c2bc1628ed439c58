//! Inflate limits and checks.

/// Default upper bound on the decompressed buffer (64 MiB).
///
/// A 1-bit list of 2^29 entries fits; anything larger is treated as hostile.
pub const DEFAULT_MAX_OUTPUT_SIZE: usize = 64 * 1024 * 1024;

/// Configuration for [`ZlibDecompressor`](crate::ZlibDecompressor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InflateConfig {
    /// Largest decompressed buffer accepted, in bytes.
    pub max_output_size: usize,
    /// Whether to validate the two-byte zlib header before inflating.
    ///
    /// The codec rejects malformed headers on its own; the upfront check only
    /// produces a more precise error message.
    pub verify_header: bool,
}

impl InflateConfig {
    /// Default configuration.
    pub const DEFAULT: Self = Self {
        max_output_size: DEFAULT_MAX_OUTPUT_SIZE,
        verify_header: true,
    };

    /// Create a configuration with the given output limit.
    pub fn new(max_output_size: usize) -> Self {
        Self {
            max_output_size,
            ..Self::DEFAULT
        }
    }

    /// Set the output limit.
    pub fn with_max_output_size(mut self, max_output_size: usize) -> Self {
        self.max_output_size = max_output_size;
        self
    }

    /// Enable or disable the upfront header check.
    pub fn with_verify_header(mut self, verify_header: bool) -> Self {
        self.verify_header = verify_header;
        self
    }
}

impl Default for InflateConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
