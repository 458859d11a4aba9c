//! Error types

/// Resolution errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed wallet address or domain key
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Name service unreachable or request failed
    #[error("Network error: {0}")]
    Network(String),

    /// Record or account data could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Account or domain does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid resolver configuration
    #[error("Config error: {0}")]
    Config(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
