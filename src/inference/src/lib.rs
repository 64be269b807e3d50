//! Exact posterior inference over a family pedigree.
//!
//! The model is a fixed-topology Bayesian network: every individual carries a
//! hidden gene count ({0, 1, 2} copies) and an observed-with-gaps boolean
//! trait. Founder gene counts follow an unconditional prior; non-founder gene
//! counts depend on both parents' gene counts through per-parent transmission
//! probabilities (with a mutation term); trait expression depends on the gene
//! count alone.
//!
//! Inference is performed by brute-force enumeration of every assignment
//! consistent with the observed trait evidence, joint-probability scoring of
//! each assignment, additive accumulation of posterior mass per individual,
//! and a final normalization. Total work grows as O(6^N) in the number of
//! individuals: see [`solve`] for the practical population ceiling.

pub mod gene_count;
pub use gene_count::GeneCount;

pub mod tables;
pub use tables::ProbabilityTables;

pub mod index;
pub use index::PedigreeIndex;

pub mod assignment;
pub use assignment::Assignment;

pub mod joint;
pub use joint::joint_probability;

pub mod posterior;
pub use posterior::Posteriors;

pub mod solve;
pub use solve::solve;

use anyhow::{Context, Result};
use log::info;
use pedigree::Pedigree;

/// Run exact inference over a whole pedigree, on a dedicated thread pool.
/// # Arguments
/// - `pedigree`: the validated input population.
/// - `tables`  : the model's probability tables.
/// - `threads` : worker count for the enumeration. `0` requests one worker per
///               available core; `1` keeps the computation single-threaded and
///               bit-reproducible.
///
/// # Errors
/// - if the pedigree contains a dangling parent reference (should have been
///   caught at load time).
/// - if the population exceeds the enumerator's ceiling, or accumulates zero
///   posterior mass for some individual (see [`solve`]).
pub fn run(pedigree: &Pedigree, tables: &ProbabilityTables, threads: usize) -> Result<Posteriors> {
    let index = PedigreeIndex::new(pedigree).context("While indexing the pedigree")?;
    info!(
        "Enumerating assignments over {} individuals ({} with observed trait evidence)",
        index.len(),
        index.observed_count()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("While building the enumeration thread pool")?;

    let posteriors = pool.install(|| solve(&index, tables))?;
    Ok(posteriors)
}
