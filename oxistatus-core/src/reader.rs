//! Status lookups against a decompressed status list.
//!
//! [`ReadStatus`] validates the declared bit width, runs the supplied
//! decompressor once, and keeps the packed buffer for the rest of its life.
//! Lookups after that are bounded arithmetic on an immutable buffer, so a
//! reader can be shared freely across threads.

use crate::bitfield::{BitFieldExtractor, Fields};
use crate::error::{Result, StatusListError};
use crate::model::{BitWidth, Status, StatusIndex, StatusList};
use crate::traits::{AsyncDecompressor, Decompressor};
use std::collections::BTreeMap;

/// A decoded status list ready for lookups.
///
/// # Example
///
/// ```
/// use oxistatus_core::{BitWidth, ReadStatus, Status, StatusList};
/// use oxistatus_core::traits::FnDecompressor;
///
/// // Stand-in codec: the payload is already the packed buffer.
/// let identity = FnDecompressor::new(|input: &[u8]| Ok(input.to_vec()));
/// let list = StatusList::new(2, vec![0b11_10_01_00]);
///
/// let reader = ReadStatus::from_status_list_blocking(&list, &identity).unwrap();
/// assert_eq!(reader.bits(), BitWidth::Two);
/// assert_eq!(reader.status_at(2u64).unwrap(), Status::SUSPENDED);
/// assert!(reader.status_at(4u64).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadStatus {
    bits: BitWidth,
    raw: Vec<u8>,
}

impl ReadStatus {
    /// Decode a status list with an asynchronous decompressor.
    ///
    /// The bit width is validated before the decompressor is invoked.
    ///
    /// # Errors
    ///
    /// * `InvalidBitWidth` if `bits` is not 1, 2, 4 or 8.
    /// * `DecompressionFailed` if the payload does not decompress.
    pub async fn from_status_list<D>(list: &StatusList, decompressor: &D) -> Result<Self>
    where
        D: AsyncDecompressor + ?Sized,
    {
        let bits = list.bit_width()?;
        let raw = decompressor
            .decompress_async(list.compressed())
            .await
            .map_err(as_decompression_failure)?;
        Ok(Self::decoded(bits, list, raw))
    }

    /// Decode a status list with a synchronous decompressor.
    ///
    /// # Errors
    ///
    /// Same as [`ReadStatus::from_status_list`].
    pub fn from_status_list_blocking<D>(list: &StatusList, decompressor: &D) -> Result<Self>
    where
        D: Decompressor + ?Sized,
    {
        let bits = list.bit_width()?;
        let raw = decompressor
            .decompress(list.compressed())
            .map_err(as_decompression_failure)?;
        Ok(Self::decoded(bits, list, raw))
    }

    /// Wrap an already decompressed packed buffer.
    pub fn from_raw(bits: BitWidth, raw: Vec<u8>) -> Self {
        Self { bits, raw }
    }

    fn decoded(bits: BitWidth, list: &StatusList, raw: Vec<u8>) -> Self {
        let reader = Self::from_raw(bits, raw);
        tracing::debug!(
            bits = bits.bits(),
            compressed = list.lst.len(),
            decompressed = reader.raw.len(),
            entries = reader.len(),
            "status list decoded"
        );
        reader
    }

    /// Get the status stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the entry's bit field does not lie entirely
    /// within the buffer. The reader stays usable afterwards.
    pub fn status_at(&self, index: impl Into<StatusIndex>) -> Result<Status> {
        let index = index.into();
        self.extractor()
            .get(index.value())
            .map(|field| Status(field as u8))
            .ok_or_else(|| StatusListError::index_out_of_range(index.value(), self.len()))
    }

    /// Get the status stored at `index`, or `None` when out of range.
    pub fn get(&self, index: impl Into<StatusIndex>) -> Option<Status> {
        self.status_at(index).ok()
    }

    /// Get the bit width.
    pub fn bits(&self) -> BitWidth {
        self.bits
    }

    /// Number of entries the buffer holds.
    pub fn len(&self) -> u64 {
        self.bits.capacity(self.raw.len())
    }

    /// Check if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highest valid index, or `None` for an empty list.
    pub fn max_index(&self) -> Option<StatusIndex> {
        self.len().checked_sub(1).map(StatusIndex)
    }

    /// Get the decompressed packed buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Iterate over every status in index order.
    pub fn iter(&self) -> Statuses<'_> {
        Statuses {
            fields: self.extractor().iter(),
        }
    }

    /// Count how many entries carry each status value.
    pub fn count_by_status(&self) -> BTreeMap<Status, u64> {
        let mut counts = BTreeMap::new();
        for status in self.iter() {
            *counts.entry(status).or_insert(0) += 1;
        }
        counts
    }

    fn extractor(&self) -> BitFieldExtractor<'_> {
        BitFieldExtractor::new(&self.raw, self.bits.bits())
    }
}

impl<'a> IntoIterator for &'a ReadStatus {
    type Item = Status;
    type IntoIter = Statuses<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the statuses of a [`ReadStatus`].
#[derive(Debug, Clone)]
pub struct Statuses<'a> {
    fields: Fields<'a>,
}

impl Iterator for Statuses<'_> {
    type Item = Status;

    fn next(&mut self) -> Option<Self::Item> {
        self.fields.next().map(|field| Status(field as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.fields.size_hint()
    }
}

/// Capabilities are expected to fail with `DecompressionFailed`; anything else
/// they surface is folded into it.
fn as_decompression_failure(err: StatusListError) -> StatusListError {
    match err {
        StatusListError::DecompressionFailed { .. } => err,
        other => {
            tracing::warn!(error = %other, "decompressor reported a non-codec error");
            StatusListError::decompression_failed(other.to_string())
        }
    }
}
