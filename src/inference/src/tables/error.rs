use thiserror::Error;

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("Invalid {name}: {value} does not lie within [0, 1]")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("Gene prior probabilities must sum to 1 (got {sum})")]
    UnnormalizedPrior { sum: f64 },
}
