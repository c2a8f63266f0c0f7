use thiserror::Error;

/// Failure of a single fetch against the stats service
///
/// This is contained at the fetch scheduler: it is logged and the cached
/// list stays as it was.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}
