use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("missing API credentials: enter the client id and secret in the side panel")]
    MissingCredentials,
    #[error("invalid API credentials: the client id or secret contains unsupported characters")]
    InvalidCredentials,
    #[error("missing keyword: enter a search term")]
    MissingKeyword,
    #[error("authentication failed: check the client id and secret")]
    Unauthorized,
    #[error("rate limit exceeded: the daily API quota has been used up")]
    RateLimited,
    #[error("request failed with HTTP status {status}")]
    Http { status: u16 },
    #[error("connection failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// How loudly the frontend should report an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl SearchError {
    pub fn severity(&self) -> Severity {
        match self {
            SearchError::MissingKeyword => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Maps a non-success HTTP status onto the error taxonomy.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => SearchError::Unauthorized,
            429 => SearchError::RateLimited,
            other => SearchError::Http { status: other },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not locate the user configuration directory")]
    NoConfigDir,
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
