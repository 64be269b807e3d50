#[macro_use]
extern crate log;

use anyhow::{Context, Result};

use inference::ProbabilityTables;
use parser::Cli;
use pedprob_io::{read::read_pedigree, write::ReportWriter};

/// Unpack the command line arguments and run the whole inference pipeline:
/// load the pedigree, enumerate and score every evidence-consistent
/// assignment, and write the per-individual posterior report.
pub fn run(cli: Cli) -> Result<()> {
    // ----------------------------- Sanity checks.
    cli.check_precision()?;

    // ----------------------------- Load the input pedigree.
    info!("Loading pedigree from {}", cli.pedigree.display());
    let pedigree = read_pedigree(&cli.pedigree)
        .with_context(|| format!("While loading pedigree file '{}'", cli.pedigree.display()))?;
    info!("Loaded {} individuals ({} founders)", pedigree.len(), pedigree.founders().count());

    // ----------------------------- Run exact inference.
    let tables = ProbabilityTables::default();
    let posteriors = inference::run(&pedigree, &tables, cli.threads)
        .context("While computing posterior probabilities")?;

    // ----------------------------- Write the posterior report.
    match &cli.output {
        Some(path) => info!("Writing posterior report to {}", path.display()),
        None       => debug!("Writing posterior report to the standard output"),
    }
    let mut writer = ReportWriter::new(cli.output.as_ref())?;
    writer.write_report(&posteriors, cli.precision)?;

    Ok(())
}
