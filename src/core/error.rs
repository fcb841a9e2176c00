use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum CpError {
    /// The requested handle does not exist on the platform, or the page it
    /// returned was missing the markup the strategy expects. The two are
    /// deliberately conflated: the overwhelmingly common cause of a missing
    /// element is a mistyped or nonexistent handle.
    #[error("username not found")]
    UsernameNotFound,

    /// The platform identifier is not one of the six supported values.
    #[error("platform not supported: {0}")]
    PlatformNotSupported(String),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from upstream was in an unexpected format or was
    /// missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}
