use crate::distance::squared_distance;
use ndarray::{ArrayView1, ArrayView2};

/// Sum of squared errors of a clustering.
///
/// `SSE = sum_i ||x_i - c_{labels[i]}||^2`. Every label must index a row of
/// `centroids`.
pub fn calculate_sse(
    points: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
) -> f64 {
    points
        .outer_iter()
        .zip(labels.iter())
        .map(|(point, &label)| squared_distance(&point, &centroids.row(label)))
        .sum()
}

/// Mean squared error: SSE divided by the number of points
pub fn calculate_mse(
    points: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
) -> f64 {
    calculate_sse(points, centroids, labels) / points.nrows() as f64
}

/// Quality of a finished clustering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusteringScore {
    /// Sum of squared distances between points and their centroids
    pub sse: f64,
    /// `sse` divided by the number of points
    pub mse: f64,
}

impl ClusteringScore {
    /// Score `points` against `centroids` under the given assignment
    pub fn compute(
        points: &ArrayView2<f64>,
        centroids: &ArrayView2<f64>,
        labels: &ArrayView1<usize>,
    ) -> Self {
        let sse = calculate_sse(points, centroids, labels);
        Self {
            sse,
            mse: sse / points.nrows() as f64,
        }
    }
}
