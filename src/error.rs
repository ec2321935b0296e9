use thiserror::Error;

/// Anything that went wrong while retrieving or decoding the release index.
///
/// The variants only matter for debug logging; users always see
/// [`NetworkError::USER_MESSAGE`].
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("release index is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl NetworkError {
    pub const USER_MESSAGE: &'static str = "Could not fetch remote versions. Are you offline?";
}
