use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("config error: {0}")]
    Config(#[from] mockledger_core::Error),
    #[error("no palette for column '{0}'")]
    MissingPalette(String),
    #[error("palette for column '{0}' is empty")]
    EmptyPalette(String),
    #[error("date column '{column}' has no entry for period {offset}")]
    DateOutOfRange { column: String, offset: u64 },
    #[error("date overflow while building palette for column '{0}'")]
    DateOverflow(String),
    #[error("money column '{0}' needs a positive cardinality")]
    EmptyMoneyRange(String),
    #[error("money drift bound must be positive, got {0}")]
    InvalidDriftBound(i64),
    #[error("column '{column}' at position {position} does not hold {expected}")]
    CellMismatch {
        column: String,
        position: usize,
        expected: &'static str,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
