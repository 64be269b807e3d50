use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;

use crate::{
    assignment::{for_each_gene_partition, Assignment},
    index::PedigreeIndex,
    joint::joint_probability,
    posterior::{Accumulator, Posteriors},
    tables::ProbabilityTables,
};

pub mod error;
pub use error::SolveError;

/// Hard population ceiling of the enumerator: trait membership is tracked as a
/// 64-bit mask, with one bit left as headroom for the mask count itself.
pub const MAX_INDIVIDUALS: usize = 63;

/// Template of the enumeration progress bar.
const PROGRESS_TEMPLATE: &str = "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} trait sets ({eta})";

/// Enumerate every evidence-consistent assignment, score it, and return the
/// normalized posterior distributions of every individual.
///
/// The outer loop visits all `2^N` candidate trait sets, discarding those that
/// disagree with observed evidence before any inner work; each survivor is
/// crossed with all `3^N` gene-count partitions. Total work therefore grows as
/// O(6^N) in the population size: exact enumeration is only practical for
/// small pedigrees (tens of individuals, not thousands), and staying within
/// that ceiling is the caller's responsibility. Discarded trait sets are not
/// errors: they are eliminated hypotheses, contributing zero mass.
///
/// The outer loop is sharded across the current rayon thread pool; each worker
/// accumulates into a private [`Accumulator`], and shards are merged through a
/// single reduction once scoring completes.
///
/// # Errors
/// - [`SolveError::PopulationTooLarge`] when the population exceeds
///   [`MAX_INDIVIDUALS`].
/// - [`SolveError::Posterior`] when some individual accumulates zero posterior
///   mass (unsatisfiable evidence; defensively unreachable under the default
///   tables).
pub fn solve(index: &PedigreeIndex, tables: &ProbabilityTables) -> Result<Posteriors, SolveError> {
    let n = index.len();
    if n > MAX_INDIVIDUALS {
        return Err(SolveError::PopulationTooLarge { got: n, max: MAX_INDIVIDUALS });
    }

    let trait_sets: u64 = 1 << n;
    let (required, excluded) = index.evidence_masks();
    debug!("Visiting {trait_sets} candidate trait sets (required mask: {required:#b} - excluded mask: {excluded:#b})");

    let progress = spawn_progress_bar(trait_sets);
    let accumulator = (0..trait_sets)
        .into_par_iter()
        .inspect(|_| progress.inc(1))
        .filter(|mask| mask & required == required && mask & excluded == 0)
        .map(|trait_mask| {
            let mut shard = Accumulator::new(n);
            for_each_gene_partition(n, |genotypes| {
                let assignment = Assignment::new(genotypes, trait_mask);
                let p = joint_probability(index, tables, &assignment);
                shard.add(&assignment, p);
            });
            shard
        })
        .reduce(|| Accumulator::new(n), Accumulator::merge);
    progress.finish_and_clear();

    Ok(accumulator.normalize(index)?)
}

/// Register a progress bar over the outer enumeration loop. Falls back to a
/// hidden bar when the logger (and thus its MultiProgress) was never
/// initialized, e.g. within unit tests.
fn spawn_progress_bar(trait_sets: u64) -> ProgressBar {
    let Some(multi) = logger::Logger::try_multi() else {
        return ProgressBar::hidden();
    };
    let progress = multi.add(ProgressBar::new(trait_sets));
    if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
        progress.set_style(style);
    }
    progress
}
