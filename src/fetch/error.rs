/// Errors surfaced by the data fetch layer. All of these are non-fatal: the
/// UI keeps the last good payload (or a placeholder) on screen and the next
/// poll retries naturally.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// The request never completed (DNS, connect, TLS, or mid-body failure).
    #[error("network error: {0}")]
    Network(String),

    /// The backend no longer knows the requested entry.
    #[error("not found")]
    NotFound,

    /// Non-2xx status or a body that failed to decode as the expected JSON.
    #[error("decode error: {0}")]
    Decode(String),
}
