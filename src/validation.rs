//! Precondition checks run before any clustering work.
//!
//! Checks are applied in a fixed order and the first failure wins: empty
//! input, cluster count, point count, dimensionality, consistency, and finally
//! numeric values.

use crate::error::KMeansError;
use ndarray::{Array2, ArrayView2};

/// Validate raw, possibly ragged, point rows for clustering into `k` clusters
pub fn validate_points(points: &[Vec<f64>], k: usize) -> Result<(), KMeansError> {
    check_counts(points.len(), k)?;

    let dim = points[0].len();
    if dim == 0 {
        return Err(KMeansError::InvalidDimensions);
    }

    for (index, point) in points.iter().enumerate() {
        if point.len() != dim {
            return Err(KMeansError::InconsistentDimensions {
                index,
                expected: dim,
                found: point.len(),
            });
        }
        if point.iter().any(|v| !v.is_finite()) {
            return Err(KMeansError::InvalidNumericValue { index });
        }
    }

    Ok(())
}

/// Validate a point matrix (one point per row) for clustering into `k` clusters
///
/// Rows of an array always share their length, so only the remaining checks
/// apply.
pub fn validate_array(data: &ArrayView2<f64>, k: usize) -> Result<(), KMeansError> {
    check_counts(data.nrows(), k)?;

    if data.ncols() == 0 {
        return Err(KMeansError::InvalidDimensions);
    }

    for (index, row) in data.outer_iter().enumerate() {
        if row.iter().any(|v| !v.is_finite()) {
            return Err(KMeansError::InvalidNumericValue { index });
        }
    }

    Ok(())
}

/// Validate `rows` and pack them into an `(n_points, n_features)` matrix
pub fn points_from_rows(rows: &[Vec<f64>], k: usize) -> Result<Array2<f64>, KMeansError> {
    validate_points(rows, k)?;

    let n_features = rows[0].len();
    Ok(Array2::from_shape_fn((rows.len(), n_features), |(i, j)| {
        rows[i][j]
    }))
}

fn check_counts(n_points: usize, k: usize) -> Result<(), KMeansError> {
    if n_points == 0 {
        return Err(KMeansError::NoPoints);
    }
    if k == 0 {
        return Err(KMeansError::InvalidClusterCount);
    }
    if n_points < k {
        return Err(KMeansError::NotEnoughPoints { n_points, k });
    }
    Ok(())
}
