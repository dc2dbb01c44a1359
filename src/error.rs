use thiserror::Error;

/// Error types for the lloyd-kmeans library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KMeansError {
    /// The point set is empty
    #[error("no points provided")]
    NoPoints,

    /// The number of clusters k is invalid (must be > 0)
    #[error("number of clusters must be positive")]
    InvalidClusterCount,

    /// Not enough data points for the requested number of clusters
    #[error("not enough points for clusters: {n_points} points, k = {k}")]
    NotEnoughPoints { n_points: usize, k: usize },

    /// Points have zero coordinates
    #[error("points must have at least one dimension")]
    InvalidDimensions,

    /// Points do not all have the same length
    #[error("points must all have the same number of dimensions: point {index} has {found}, expected {expected}")]
    InconsistentDimensions {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A coordinate is NaN or infinite
    #[error("points contain invalid numeric values (NaN or Inf) at point {index}")]
    InvalidNumericValue { index: usize },

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,

    /// Dimension mismatch between data and model
    #[error("Dimension mismatch: expected {expected} features, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
