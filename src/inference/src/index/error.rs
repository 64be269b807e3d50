use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Individual '{individual}' references parent '{parent}', which is absent from the pedigree")]
    UnknownParent { individual: String, parent: String },
}
