//! Offloading decompression to Tokio's blocking pool.
//!
//! Inflating a large status list is CPU-bound. [`BlockingDecompressor`] moves
//! the work onto `tokio::task::spawn_blocking` so the async executor keeps
//! serving other tasks while it runs.
//!
//! # Feature Flag
//!
//! This module is only available when the `tokio` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! oxistatus-deflate = { version = "0.1.0", features = ["tokio"] }
//! ```

use oxistatus_core::error::{Result, StatusListError};
use oxistatus_core::traits::{AsyncDecompressor, DecompressFuture, Decompressor};
use std::sync::Arc;
use tokio::task::JoinError;

/// Runs a synchronous decompressor on a blocking worker thread.
///
/// # Example
///
/// ```rust,ignore
/// use oxistatus_deflate::{BlockingDecompressor, ZlibDecompressor};
///
/// let decompressor = BlockingDecompressor::new(ZlibDecompressor::new());
/// let reader = ReadStatus::from_status_list(&list, &decompressor).await?;
/// ```
#[derive(Debug)]
pub struct BlockingDecompressor<D> {
    inner: Arc<D>,
}

impl<D> Clone for BlockingDecompressor<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Decompressor + 'static> BlockingDecompressor<D> {
    /// Wrap a decompressor.
    pub fn new(decompressor: D) -> Self {
        Self {
            inner: Arc::new(decompressor),
        }
    }

    /// Get a reference to the inner decompressor.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: Decompressor + 'static> AsyncDecompressor for BlockingDecompressor<D> {
    fn decompress_async<'a>(&'a self, input: &'a [u8]) -> DecompressFuture<'a> {
        let inner = Arc::clone(&self.inner);
        let input = input.to_vec();

        Box::pin(async move {
            join_outcome(tokio::task::spawn_blocking(move || inner.decompress(&input)).await)
        })
    }
}

/// Map a finished worker to the decompression result.
///
/// Cancelled and panicked workers both fail with `DecompressionFailed`.
fn join_outcome(joined: std::result::Result<Result<Vec<u8>>, JoinError>) -> Result<Vec<u8>> {
    match joined {
        Ok(result) => result,
        Err(err) if err.is_cancelled() => Err(StatusListError::decompression_failed(
            "decompression task cancelled",
        )),
        Err(err) => {
            tracing::warn!(error = %err, "decompression task panicked");
            Err(StatusListError::decompression_failed(format!(
                "decompression task failed: {err}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZlibDecompressor;
    use oxistatus_core::traits::FnDecompressor;
    use oxistatus_core::{ReadStatus, Status, StatusList};

    const TWO_BYTES: [u8; 10] = [0x78, 0x9C, 0xDB, 0xB9, 0x18, 0x00, 0x02, 0x17, 0x01, 0x5D];

    #[tokio::test]
    async fn test_blocking_zlib() {
        let decompressor = BlockingDecompressor::new(ZlibDecompressor::new());
        let list = StatusList::new(8, TWO_BYTES.to_vec());
        let reader = ReadStatus::from_status_list(&list, &decompressor).await.unwrap();
        assert_eq!(reader.status_at(0u64).unwrap(), Status(0xB9));
        assert_eq!(reader.status_at(1u64).unwrap(), Status(0xA3));
    }

    #[tokio::test]
    async fn test_blocking_error_propagates() {
        let decompressor = BlockingDecompressor::new(ZlibDecompressor::new());
        let list = StatusList::new(1, vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00]);
        let err = ReadStatus::from_status_list(&list, &decompressor).await.unwrap_err();
        assert!(matches!(err, StatusListError::DecompressionFailed { .. }));
    }

    /// Hands its work to a task that is aborted before it runs.
    struct AbortedWorker;

    impl AsyncDecompressor for AbortedWorker {
        fn decompress_async<'a>(&'a self, _input: &'a [u8]) -> DecompressFuture<'a> {
            Box::pin(async {
                let handle = tokio::spawn(std::future::pending::<Result<Vec<u8>>>());
                handle.abort();
                join_outcome(handle.await)
            })
        }
    }

    #[tokio::test]
    async fn test_cancelled_worker_builds_no_reader() {
        let list = StatusList::new(8, TWO_BYTES.to_vec());
        let err = ReadStatus::from_status_list(&list, &AbortedWorker)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StatusListError::DecompressionFailed {
                message: "decompression task cancelled".into()
            }
        );
    }

    #[tokio::test]
    async fn test_panicking_codec_is_decompression_failure() {
        let decompressor = BlockingDecompressor::new(FnDecompressor::new(|_: &[u8]| {
            panic!("codec bug");
        }));
        let err = decompressor.decompress_async(&[0]).await.unwrap_err();
        assert!(err.to_string().contains("decompression task failed"));
    }
}
