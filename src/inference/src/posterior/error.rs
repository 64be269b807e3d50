use thiserror::Error;

#[derive(Debug, Error)]
pub enum PosteriorError {
    #[error(
        "Total accumulated mass of {name}'s {distribution} distribution is zero: \
         the observed evidence is impossible under the model"
    )]
    ZeroMass { name: String, distribution: &'static str },
}
