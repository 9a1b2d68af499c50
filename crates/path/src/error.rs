use thiserror::Error;

/// Errors reported by the path builder.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum PathError {
    #[error("The radius provided ({0}) is negative.")]
    NegativeRadius(f64),
    #[error("Failed to compute the arc center.")]
    ArcCenter,
    #[error("The current transform is not invertible.")]
    SingularTransform,
}
