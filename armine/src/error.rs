use thiserror::Error;

/// Errors raised by the mining engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    #[error("Invalid minimum support: {0} (must be > 0)")]
    InvalidThreshold(f64),

    #[error("Invalid minimum confidence: {0} (must be in [0, 1])")]
    InvalidConfidence(f64),

    #[error("Malformed transaction #{index}: duplicate item {item}")]
    MalformedTransaction { index: usize, item: String },

    #[error("Unknown mining strategy: {0:?}")]
    UnknownStrategy(String),

    #[error("Support map has no entry for itemset {itemset:?}")]
    MissingSupport { itemset: Vec<usize> },
}

pub type Result<T> = std::result::Result<T, MiningError>;
