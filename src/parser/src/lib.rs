use std::path::PathBuf;

use clap::Parser;
use log::info;
use serde::Serialize;

pub mod error;
pub use error::ParserError;


/// Highest meaningful value for `--precision`: an f64 carries no more than 17
/// significant decimal digits.
pub const MAX_PRECISION: usize = 17;

/// Command line interface of pedprob-rs.
#[derive(Parser, Debug, Serialize)]
#[clap(name = "pedprob-rs", version, about = "Exact gene and trait posterior probabilities within a family pedigree")]
pub struct Cli {
    /// Input pedigree file (.csv)
    ///
    /// Comma-separated file carrying a 'name,mother,father,trait' header.
    /// 'mother' and 'father' must either both be blank, or both reference the
    /// 'name' field of another record. 'trait' is '1' when the individual is
    /// known to express the trait, '0' when it is known not to, and blank when
    /// unobserved.
    pub pedigree: PathBuf,

    /// Set the verbosity level (-v -vv -vvv -vvvv)
    ///
    /// Set the verbosity level of this program. With multiple levels
    ///    -v : Info  |  -vv : Debug  | -vvv : Trace
    /// By default, the program will still output Warnings. Use --quiet/-q to disable them
    #[clap(short = 'v', long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emmited and redirected to the console, even without verbose mode on.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short = 'q', long)]
    pub quiet: bool,

    /// Output file where the posterior report will be written.
    ///
    /// In the absence of '--output', the report is written to the standard output.
    #[clap(short, long, required(false))]
    pub output: Option<PathBuf>,

    /// Number of decimal places used when printing probabilities.
    #[clap(short, long, default_value("4"))]
    pub precision: usize,

    /// Number of worker threads used during assignment enumeration.
    ///
    /// Use '0' to request one worker per available core. The default of '1'
    /// keeps results bit-reproducible across runs; higher values may shuffle
    /// the order of floating point accumulation, and thus the last bits of
    /// precision.
    #[clap(short = '@', long, default_value("1"))]
    pub threads: usize,
}

impl Cli {
    /// Log the parsed command line arguments, serialized as yaml.
    ///
    /// # Errors
    /// - if yaml serialization fails.
    pub fn serialize(&self) -> Result<(), ParserError> {
        let serialized = serde_yaml::to_string(&self)?;
        info!("\n---- Command line args ----\n{serialized}---");
        Ok(())
    }

    /// Ensure the requested `--precision` can be honored by an f64.
    ///
    /// # Errors
    /// - if `self.precision` exceeds [`MAX_PRECISION`]
    pub fn check_precision(&self) -> Result<(), ParserError> {
        if self.precision > MAX_PRECISION {
            return Err(ParserError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}
