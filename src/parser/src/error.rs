use thiserror::Error;

use crate::MAX_PRECISION;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("--precision must lie within the range 0-{MAX_PRECISION} (got {0})")]
    InvalidPrecision(usize),

    #[error("Failed to serialize command line arguments")]
    Serialize(#[from] serde_yaml::Error),
}
