//! Random-access bit-field extraction from packed byte buffers.
//!
//! A status list stores fixed-width fields contiguously in a byte buffer.
//! Unlike a streaming bit reader, lookups here jump straight to the field for
//! a given index, so extraction is a pure function of `(buffer, bit offset,
//! width)`.
//!
//! # Bit Ordering
//!
//! Fields are packed LSB-first within each byte and bytes are consumed in
//! ascending order. Field 0 occupies the lowest bits of byte 0; a field whose
//! window crosses a byte boundary continues in the low bits of the next byte.
//!
//! # Example
//!
//! ```
//! use oxistatus_core::bitfield::{BitFieldExtractor, extract_bits};
//!
//! // 2-bit fields: [1, 2, 0, 3] packed into one byte
//! let buf = [0b11_00_10_01u8];
//! assert_eq!(extract_bits(&buf, 2, 2), Some(2));
//!
//! let fields = BitFieldExtractor::new(&buf, 2);
//! assert_eq!(fields.len(), 4);
//! assert_eq!(fields.get(3), Some(3));
//! assert_eq!(fields.get(4), None);
//! ```

/// Widest field [`extract_bits`] can return.
pub const MAX_FIELD_WIDTH: u8 = 32;

/// Extract a `width`-bit field starting at `bit_offset`.
///
/// Gathers every byte the field touches into a little-endian window, shifts
/// out the bits below the field and masks off the bits above it. Returns
/// `None` when the field extends past the end of `buf` or `width` exceeds
/// [`MAX_FIELD_WIDTH`]. A zero width yields `Some(0)`.
#[inline]
pub fn extract_bits(buf: &[u8], bit_offset: u64, width: u8) -> Option<u32> {
    if width == 0 {
        return Some(0);
    }
    if width > MAX_FIELD_WIDTH {
        return None;
    }

    let end_bit = bit_offset.checked_add(u64::from(width))?;
    if end_bit.div_ceil(8) > buf.len() as u64 {
        return None;
    }

    // Both bounds are <= buf.len() here, so the casts are lossless.
    let start = (bit_offset / 8) as usize;
    let end = end_bit.div_ceil(8) as usize;
    let shift = (bit_offset % 8) as u32;

    // At most 5 bytes: 7 leading bits + 32 field bits.
    let window = buf[start..end]
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));

    let mask = (1u64 << width) - 1;
    Some(((window >> shift) & mask) as u32)
}

/// A view over a packed buffer of fixed-width fields.
#[derive(Debug, Clone, Copy)]
pub struct BitFieldExtractor<'a> {
    buf: &'a [u8],
    width: u8,
}

impl<'a> BitFieldExtractor<'a> {
    /// Create a view of `buf` as consecutive `width`-bit fields.
    pub fn new(buf: &'a [u8], width: u8) -> Self {
        debug_assert!(
            (1..=MAX_FIELD_WIDTH).contains(&width),
            "field width must be 1-32 bits"
        );
        Self { buf, width }
    }

    /// Get the field width in bits.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get the underlying buffer.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    /// Number of whole fields in the buffer.
    pub fn len(&self) -> u64 {
        if self.width == 0 {
            return 0;
        }
        (self.buf.len() as u64 * 8) / u64::from(self.width)
    }

    /// Check if the buffer holds no whole field.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the field at `index`, or `None` if it lies outside the buffer.
    #[inline]
    pub fn get(&self, index: u64) -> Option<u32> {
        let bit_offset = index.checked_mul(u64::from(self.width))?;
        extract_bits(self.buf, bit_offset, self.width)
    }

    /// Iterate over every whole field in index order.
    pub fn iter(&self) -> Fields<'a> {
        Fields {
            extractor: *self,
            next: 0,
            len: self.len(),
        }
    }
}

impl<'a> IntoIterator for BitFieldExtractor<'a> {
    type Item = u32;
    type IntoIter = Fields<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the fields of a [`BitFieldExtractor`].
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    extractor: BitFieldExtractor<'a>,
    next: u64,
    len: u64,
}

impl Iterator for Fields<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let value = self.extractor.get(self.next);
        self.next += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.next);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
