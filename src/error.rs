use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for calls made through [`crate::client::ApiClient`].
///
/// `Unauthorized` is the only variant the client recovers from on its own
/// (once per request, via refresh-and-retry); everything else propagates to
/// the caller unchanged. `RefreshFailed` additionally tears down the stored
/// session before propagating.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The transport produced no response at all (connect, DNS, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The backend answered 401 for a request that has not been retried yet.
    #[error("unauthorized")]
    Unauthorized,
    /// The refresh endpoint rejected the call or returned no usable token.
    /// The stored session has been cleared by the time this is observed.
    #[error("token refresh failed: {0}")]
    RefreshFailed(String),
    /// The caller aborted the request via its cancellation token.
    #[error("request cancelled")]
    Cancelled,
    /// Any non-401 error status, with a best-effort message from the body.
    #[error("request failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),
    /// The session store could not be read or written.
    #[error("session store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Whether this error should be surfaced to a user at all. Cancellation
    /// is a deliberate caller action, not a failure to report.
    #[must_use]
    pub const fn is_user_visible(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}
