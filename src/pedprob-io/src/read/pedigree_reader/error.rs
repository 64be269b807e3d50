use thiserror::Error;

use pedigree::PedigreeError;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Failed to read pedigree record")]
    Parse(#[from] csv::Error),

    #[error("Found a record with a missing 'name' field")]
    MissingName,

    #[error("Individual '{name}' carries exactly one recorded parent (expected none, or both)")]
    SingleParent { name: String },

    #[error("Individual '{name}' carries an invalid trait value: '{value}' (expected '1', '0', or a blank field)")]
    InvalidTrait { name: String, value: String },

    #[error(transparent)]
    InvalidPedigree(#[from] PedigreeError),
}
