//! Error taxonomy for the test-data core.

use thiserror::Error;

use posts_api::ApiError;

/// Failures raised by the data extractor and the test data manager.
///
/// Everything is surfaced to the caller; the one place failures are caught
/// instead is the cleanup batch, which counts per-entry delete failures
/// and keeps going.
#[derive(Debug, Error)]
pub enum DataError {
    /// The collection fetch answered with an unexpected status.
    #[error("failed to fetch posts collection: unexpected status {status}")]
    Fetch { status: u16 },

    /// A random draw was attempted before any fetch populated the cache.
    #[error("no cached posts available; fetch the collection first")]
    EmptyCache,

    /// The manager was used before `initialize`.
    #[error("test data manager not initialized; call initialize() first")]
    NotInitialized,

    /// The create call did not answer the expected success status.
    #[error("failed to create post: unexpected status {status}")]
    CreateFailed { status: u16 },

    /// Transport or decode failure below the bookkeeping layer.
    #[error(transparent)]
    Api(#[from] ApiError),
}
