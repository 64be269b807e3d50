//! File input/output for pedprob-rs: pedigree CSV loading, and posterior
//! report writing.

pub mod read;
pub mod write;
