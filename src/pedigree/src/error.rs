use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Cannot add an individual with an empty name")]
    EmptyName,

    #[error("Duplicate individual name: '{0}'")]
    DuplicateIndividual(String),

    #[error("Individual '{individual}' references parent '{parent}', which is absent from the pedigree")]
    UnknownParent { individual: String, parent: String },
}
