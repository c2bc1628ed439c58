//! Decompression capabilities.
//!
//! The core never links a codec. Callers hand a [`Decompressor`] (or an
//! [`AsyncDecompressor`] when the platform codec may suspend) to the reader,
//! which invokes it exactly once per status list.
//!
//! Implementations report failures as
//! [`StatusListError::DecompressionFailed`](crate::StatusListError::DecompressionFailed).

use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`AsyncDecompressor`].
pub type DecompressFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;

/// A one-shot decompressor turning a compressed payload into the packed buffer.
pub trait Decompressor: Send + Sync {
    /// Decompress the whole payload.
    ///
    /// # Errors
    ///
    /// Returns `DecompressionFailed` if `input` is not valid compressed data.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// A decompressor that may suspend while the codec runs.
pub trait AsyncDecompressor: Send + Sync {
    /// Decompress the whole payload asynchronously.
    ///
    /// # Errors
    ///
    /// Returns `DecompressionFailed` if `input` is not valid compressed data or
    /// the underlying task was cancelled.
    fn decompress_async<'a>(&'a self, input: &'a [u8]) -> DecompressFuture<'a>;
}

impl<D: Decompressor + ?Sized> Decompressor for &D {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(input)
    }
}

impl<D: Decompressor + ?Sized> Decompressor for Box<D> {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(input)
    }
}

impl<D: AsyncDecompressor + ?Sized> AsyncDecompressor for &D {
    fn decompress_async<'a>(&'a self, input: &'a [u8]) -> DecompressFuture<'a> {
        (**self).decompress_async(input)
    }
}

impl<D: AsyncDecompressor + ?Sized> AsyncDecompressor for Box<D> {
    fn decompress_async<'a>(&'a self, input: &'a [u8]) -> DecompressFuture<'a> {
        (**self).decompress_async(input)
    }
}

/// An async wrapper around a synchronous decompressor.
///
/// The wrapped codec runs inline on the polling task. Use it for codecs that
/// are cheap enough not to need a dedicated worker.
///
/// # Example
///
/// ```
/// use oxistatus_core::traits::{AsyncDecompressorWrapper, FnDecompressor};
///
/// let identity = FnDecompressor::new(|input: &[u8]| Ok(input.to_vec()));
/// let async_identity = AsyncDecompressorWrapper::new(identity);
/// # let _ = async_identity;
/// ```
#[derive(Debug, Clone, Default)]
pub struct AsyncDecompressorWrapper<D> {
    inner: D,
}

impl<D: Decompressor> AsyncDecompressorWrapper<D> {
    /// Create a new async wrapper.
    pub fn new(decompressor: D) -> Self {
        Self {
            inner: decompressor,
        }
    }

    /// Get a reference to the inner decompressor.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Consume the wrapper and return the inner decompressor.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Decompressor> AsyncDecompressor for AsyncDecompressorWrapper<D> {
    fn decompress_async<'a>(&'a self, input: &'a [u8]) -> DecompressFuture<'a> {
        Box::pin(async move { self.inner.decompress(input) })
    }
}

/// Adapts a closure into a [`Decompressor`].
#[derive(Clone)]
pub struct FnDecompressor<F> {
    f: F,
}

impl<F> FnDecompressor<F>
where
    F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Decompressor for FnDecompressor<F>
where
    F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (self.f)(input)
    }
}

impl<F> std::fmt::Debug for FnDecompressor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDecompressor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatusListError;

    fn reverse() -> FnDecompressor<impl Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync> {
        FnDecompressor::new(|input: &[u8]| Ok(input.iter().rev().copied().collect()))
    }

    #[test]
    fn test_fn_decompressor() {
        let d = reverse();
        assert_eq!(d.decompress(&[1, 2, 3]).unwrap(), vec![3, 2, 1]);

        let failing = FnDecompressor::new(|_: &[u8]| {
            Err(StatusListError::decompression_failed("corrupt"))
        });
        assert!(matches!(
            failing.decompress(&[0]),
            Err(StatusListError::DecompressionFailed { .. })
        ));
    }

    #[test]
    fn test_reference_and_box_forwarding() {
        let d = reverse();
        let by_ref: &dyn Decompressor = &d;
        assert_eq!(by_ref.decompress(&[1, 2]).unwrap(), vec![2, 1]);

        let boxed: Box<dyn Decompressor> = Box::new(reverse());
        assert_eq!(boxed.decompress(&[4, 5]).unwrap(), vec![5, 4]);
    }

    #[tokio::test]
    async fn test_async_wrapper_runs_inline() {
        let wrapper = AsyncDecompressorWrapper::new(reverse());
        let out = wrapper.decompress_async(&[7, 8, 9]).await.unwrap();
        assert_eq!(out, vec![9, 8, 7]);

        let dyn_wrapper: &dyn AsyncDecompressor = &wrapper;
        assert_eq!(dyn_wrapper.decompress_async(&[1]).await.unwrap(), vec![1]);
    }
}
