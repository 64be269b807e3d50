use std::path::Path;

use log::warn;
use pedigree::Pedigree;
use serde::Deserialize;

pub mod error;
pub use error::ReaderError;

/// One raw record of a pedigree file, as deserialized from csv.
///
/// Blank fields deserialize to `None`; the `trait` column is kept as raw text
/// here and decoded separately, so that an unexpected token can be reported
/// with the offending individual's name.
#[derive(Debug, Deserialize)]
struct PedigreeRecord {
    name  : String,
    mother: Option<String>,
    father: Option<String>,
    #[serde(rename = "trait")]
    trait_status: Option<String>,
}

impl PedigreeRecord {
    /// Decode the raw trait column: '1' and '0' are observed evidence, a blank
    /// field is an unobserved trait.
    fn trait_status(&self) -> Result<Option<bool>, ReaderError> {
        match self.trait_status.as_deref() {
            None | Some("") => Ok(None),
            Some("1")       => Ok(Some(true)),
            Some("0")       => Ok(Some(false)),
            Some(other)     => Err(ReaderError::InvalidTrait {
                name : self.name.clone(),
                value: other.to_string(),
            }),
        }
    }

    /// Decode the parent columns. Either both are present, or neither.
    fn parents(&self) -> Result<Option<[&str; 2]>, ReaderError> {
        match (self.mother.as_deref(), self.father.as_deref()) {
            (Some(mother), Some(father)) => Ok(Some([mother, father])),
            (None, None)                 => Ok(None),
            _ => Err(ReaderError::SingleParent { name: self.name.clone() }),
        }
    }
}

/// Load and validate a pedigree file.
///
/// The expected format is a comma-separated file with a
/// `name,mother,father,trait` header: 'mother' and 'father' must either both
/// be blank, or both reference the 'name' field of another record; 'trait' is
/// '1', '0', or blank.
///
/// # Errors
/// - on any io/csv-level failure;
/// - on a blank name field, a record carrying exactly one parent, an invalid
///   trait token, a duplicated name, or a parent name absent from the file.
pub fn read_pedigree(path: &Path) -> Result<Pedigree, ReaderError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut pedigree = Pedigree::new();
    for result in reader.deserialize() {
        let record: PedigreeRecord = result?;
        if record.name.trim().is_empty() {
            return Err(ReaderError::MissingName);
        }
        pedigree.add_individual(&record.name, record.parents()?, record.trait_status()?)?;
    }
    pedigree.validate()?;

    if pedigree.is_empty() {
        warn!("Pedigree file {} contains no records", path.display());
    }
    Ok(pedigree)
}
