use thiserror::Error;

/// Ways the single dashboard fetch can fail. Each one replaces the whole
/// dashboard with an error panel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The endpoint could not be reached at all.
    #[error("Cannot connect to API server. Please ensure the server is running at {origin}")]
    Connectivity { origin: String },

    /// The endpoint answered with a non-success status.
    #[error("API request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// The body parsed, but `installed_apps` is missing or not a list.
    #[error("Invalid data format received from API")]
    Format,

    /// The body could not be read or parsed.
    #[error("Malformed response from API: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Connectivity { .. } => "connectivity",
            FetchError::Http { .. } => "http",
            FetchError::Format => "format",
            FetchError::Decode(_) => "decode",
        }
    }
}
