use thiserror::Error;

/// Core error type shared across mockledger crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration cannot drive a generation run.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A lookup by column name found nothing.
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    /// The config file extension is not a known format.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias for results returned by mockledger crates.
pub type Result<T> = std::result::Result<T, Error>;
