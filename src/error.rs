//! Fetch failure type shared across the pipeline.
//!
//! All repository-side failures (network, decoding, non-2xx responses) are
//! caught at the boundary and converted into a [`FetchError`] carried by an
//! ERROR resource. Downstream layers never see a raw transport error.

use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

/// The single failure kind produced at the repository boundary.
///
/// Carries a human-readable message (used verbatim as the UI error text) and
/// optionally the underlying cause. The cause is shared behind an `Arc` so
/// error-carrying resources stay cloneable when states are broadcast to
/// multiple observers.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
    cause: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl FetchError {
    /// Create a fetch error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a fetch error wrapping an underlying cause.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// The human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying cause, if one was captured.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// Equality compares the message only; the cause is diagnostic detail.
impl PartialEq for FetchError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::with_cause(err.to_string(), err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_cause(format!("JSON error: {}", err), err)
    }
}
