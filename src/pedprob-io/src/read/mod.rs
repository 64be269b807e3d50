pub mod pedigree_reader;
pub use pedigree_reader::{read_pedigree, ReaderError};
