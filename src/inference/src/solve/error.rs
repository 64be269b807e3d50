use thiserror::Error;

use crate::posterior::PosteriorError;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(
        "This pedigree contains {got} individuals, which exceeds the enumerator's \
         ceiling of {max}. Exact enumeration grows as O(6^N) and is only intended \
         for small pedigrees"
    )]
    PopulationTooLarge { got: usize, max: usize },

    #[error(transparent)]
    Posterior(#[from] PosteriorError),
}
