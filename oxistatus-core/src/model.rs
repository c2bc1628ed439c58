//! Status list data model.
//!
//! This module defines the values that flow through the decode pipeline: the
//! parsed [`StatusList`] document, the validated [`BitWidth`], and the
//! [`StatusIndex`] / [`Status`] pair used for lookups.

use crate::error::{Result, StatusListError};

/// Number of bits allocated to each entry of a status list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BitWidth {
    /// One bit per entry (valid / invalid).
    One,
    /// Two bits per entry.
    Two,
    /// Four bits per entry.
    Four,
    /// Eight bits per entry, one entry per byte.
    Eight,
}

impl BitWidth {
    /// All supported widths, narrowest first.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Four, Self::Eight];

    /// Validate a declared width.
    pub fn new(bits: u64) -> Result<Self> {
        match bits {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            other => Err(StatusListError::invalid_bit_width(other)),
        }
    }

    /// Get the width in bits.
    pub fn bits(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Mask isolating a single entry.
    pub fn mask(&self) -> u8 {
        ((1u16 << self.bits()) - 1) as u8
    }

    /// Largest status value an entry can hold.
    pub fn max_status(&self) -> Status {
        Status(self.mask())
    }

    /// Number of entries packed into one byte.
    pub fn entries_per_byte(&self) -> u8 {
        8 / self.bits()
    }

    /// Number of entries a buffer of `byte_len` bytes holds.
    pub fn capacity(&self, byte_len: usize) -> u64 {
        (byte_len as u64 * 8) / u64::from(self.bits())
    }
}

impl TryFrom<u64> for BitWidth {
    type Error = StatusListError;

    fn try_from(bits: u64) -> Result<Self> {
        Self::new(bits)
    }
}

impl TryFrom<u8> for BitWidth {
    type Error = StatusListError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(u64::from(bits))
    }
}

impl From<BitWidth> for u8 {
    fn from(width: BitWidth) -> Self {
        width.bits()
    }
}

impl std::fmt::Display for BitWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Zero-based position of an entry in a status list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StatusIndex(pub u64);

impl StatusIndex {
    /// Create a new index.
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Offset of the first bit of this entry for the given width.
    ///
    /// Returns `None` when the offset does not fit in 64 bits.
    pub fn bit_offset(&self, width: BitWidth) -> Option<u64> {
        self.0.checked_mul(u64::from(width.bits()))
    }
}

impl From<u64> for StatusIndex {
    fn from(index: u64) -> Self {
        Self(index)
    }
}

impl From<u32> for StatusIndex {
    fn from(index: u32) -> Self {
        Self(u64::from(index))
    }
}

impl From<usize> for StatusIndex {
    fn from(index: usize) -> Self {
        Self(index as u64)
    }
}

impl std::fmt::Display for StatusIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status value stored for one entry.
///
/// The decoder does not interpret the value; [`Status::kind`] only classifies
/// it against the registered codes for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Status(pub u8);

impl Status {
    /// The referenced token is valid.
    pub const VALID: Self = Self(0x00);
    /// The referenced token is revoked or otherwise invalid.
    pub const INVALID: Self = Self(0x01);
    /// The referenced token is temporarily suspended.
    pub const SUSPENDED: Self = Self(0x02);

    /// Get the raw value.
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Check if this is the valid status.
    pub fn is_valid(&self) -> bool {
        *self == Self::VALID
    }

    /// Classify against the registered status codes.
    pub fn kind(&self) -> StatusKind {
        match self.0 {
            0x00 => StatusKind::Valid,
            0x01 => StatusKind::Invalid,
            0x02 => StatusKind::Suspended,
            0x03 | 0x0C..=0x0F => StatusKind::ApplicationSpecific,
            _ => StatusKind::Reserved,
        }
    }
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status.0
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// Registered meaning of a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// 0x00
    Valid,
    /// 0x01
    Invalid,
    /// 0x02
    Suspended,
    /// 0x03 and 0x0C-0x0F.
    ApplicationSpecific,
    /// Any other value.
    Reserved,
}

impl StatusKind {
    /// Get the kind name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
            Self::Suspended => "SUSPENDED",
            Self::ApplicationSpecific => "APPLICATION_SPECIFIC",
            Self::Reserved => "RESERVED",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed status list document.
///
/// `bits` keeps the width exactly as declared so that unsupported widths are
/// reported by the reader rather than lost during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusList {
    /// Declared number of bits per entry.
    pub bits: u64,
    /// Compressed packed buffer.
    pub lst: Vec<u8>,
    /// URI of a status list aggregation, if published.
    pub aggregation_uri: Option<String>,
}

impl StatusList {
    /// Create a new status list document.
    pub fn new(bits: u64, lst: impl Into<Vec<u8>>) -> Self {
        Self {
            bits,
            lst: lst.into(),
            aggregation_uri: None,
        }
    }

    /// Set the aggregation URI.
    pub fn with_aggregation_uri(mut self, uri: impl Into<String>) -> Self {
        self.aggregation_uri = Some(uri.into());
        self
    }

    /// Validate the declared bit width.
    pub fn bit_width(&self) -> Result<BitWidth> {
        BitWidth::new(self.bits)
    }

    /// Get the compressed payload.
    pub fn compressed(&self) -> &[u8] {
        &self.lst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_width_validation() {
        for bits in [1u64, 2, 4, 8] {
            assert_eq!(BitWidth::new(bits).unwrap().bits() as u64, bits);
        }
        for bits in [0u64, 3, 5, 6, 7, 9, 16, 255, u64::MAX] {
            assert_eq!(
                BitWidth::new(bits),
                Err(StatusListError::InvalidBitWidth { bits })
            );
        }
    }

    #[test]
    fn test_bit_width_mask() {
        assert_eq!(BitWidth::One.mask(), 0b1);
        assert_eq!(BitWidth::Two.mask(), 0b11);
        assert_eq!(BitWidth::Four.mask(), 0x0F);
        assert_eq!(BitWidth::Eight.mask(), 0xFF);
        assert_eq!(BitWidth::Four.max_status(), Status(15));
    }

    #[test]
    fn test_bit_width_capacity() {
        assert_eq!(BitWidth::One.capacity(16_384), 131_072);
        assert_eq!(BitWidth::Two.capacity(3), 12);
        assert_eq!(BitWidth::Eight.capacity(3), 3);
        assert_eq!(BitWidth::Four.capacity(0), 0);
        assert_eq!(BitWidth::Two.entries_per_byte(), 4);
    }

    #[test]
    fn test_index_bit_offset() {
        assert_eq!(StatusIndex(1993).bit_offset(BitWidth::Two), Some(3986));
        assert_eq!(StatusIndex(u64::MAX).bit_offset(BitWidth::One), Some(u64::MAX));
        assert_eq!(StatusIndex(u64::MAX).bit_offset(BitWidth::Two), None);
    }

    #[test]
    fn test_status_kind() {
        assert_eq!(Status::VALID.kind(), StatusKind::Valid);
        assert_eq!(Status::INVALID.kind(), StatusKind::Invalid);
        assert_eq!(Status::SUSPENDED.kind(), StatusKind::Suspended);
        assert_eq!(Status(3).kind(), StatusKind::ApplicationSpecific);
        assert_eq!(Status(0x0D).kind(), StatusKind::ApplicationSpecific);
        assert_eq!(Status(0x07).kind(), StatusKind::Reserved);
        assert_eq!(Status(0xFF).kind(), StatusKind::Reserved);
        assert_eq!(Status(0x0F).to_string(), "0x0f");
    }

    #[test]
    fn test_status_list_bit_width() {
        let list = StatusList::new(3, vec![0x78, 0x9C]);
        assert!(matches!(
            list.bit_width(),
            Err(StatusListError::InvalidBitWidth { bits: 3 })
        ));

        let list = StatusList::new(4, vec![0x78, 0x9C]).with_aggregation_uri("https://example.com/agg");
        assert_eq!(list.bit_width().unwrap(), BitWidth::Four);
        assert_eq!(list.aggregation_uri.as_deref(), Some("https://example.com/agg"));
    }
}
