use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use inference::posterior::{PersonPosterior, Posteriors};

pub mod error;
pub use error::WriterError;

/// Posterior report writer.
/// - source: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct ReportWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>,
}

impl<'a> ReportWriter<'a> {
    /// Instantiate a new `ReportWriter`, linked to a file, or to the standard
    /// output when `path` is `None`.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<ReportWriter<'a>> {
        use WriterError::IOError;
        Ok(ReportWriter {
            source: match path {
                Some(path) => {
                    let file = File::create(path).map_err(IOError).context("While creating report file")?;
                    BufWriter::new(Box::new(file))
                }
                None => BufWriter::new(Box::new(std::io::stdout())),
            },
        })
    }

    /// Write one block per individual: the normalized gene distribution keyed
    /// 2/1/0, then the normalized trait distribution keyed True/False, every
    /// probability rendered with `precision` decimal places.
    ///
    /// # Errors
    /// - If any of the report lines fails to get written into the file.
    pub fn write_report(&mut self, posteriors: &Posteriors, precision: usize) -> Result<()> {
        for person in posteriors.iter() {
            self.write_block(person, precision)
                .map_err(WriterError::IOError)
                .with_context(|| format!("While writing the report block of '{}'", person.name))?;
        }
        self.source.flush().map_err(WriterError::IOError).context("While flushing report writer contents")?;
        Ok(())
    }

    fn write_block(&mut self, person: &PersonPosterior, precision: usize) -> std::io::Result<()> {
        writeln!(self.source, "{}:", person.name)?;
        writeln!(self.source, "  Gene:")?;
        writeln!(self.source, "    2: {:.precision$}", person.gene.two)?;
        writeln!(self.source, "    1: {:.precision$}", person.gene.one)?;
        writeln!(self.source, "    0: {:.precision$}", person.gene.zero)?;
        writeln!(self.source, "  Trait:")?;
        writeln!(self.source, "    True: {:.precision$}", person.trait_status.present)?;
        writeln!(self.source, "    False: {:.precision$}", person.trait_status.absent)?;
        Ok(())
    }
}
