//! Error types for the dashboard client

/// Errors that can occur while talking to the dashboard backend
#[derive(Debug, thiserror::Error)]
pub enum ProtekError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("{url} returned status {status}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dashboard client operations
pub type Result<T> = std::result::Result<T, ProtekError>;
