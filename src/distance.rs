use ndarray::{Array1, ArrayView1, ArrayView2, Axis, Zip};
use rayon::prelude::*;

/// Squared Euclidean distance between two points of equal length
#[inline]
pub fn squared_distance(p: &ArrayView1<f64>, q: &ArrayView1<f64>) -> f64 {
    let mut sum = 0.0f64;
    Zip::from(p).and(q).for_each(|&a, &b| {
        let diff = a - b;
        sum += diff * diff;
    });
    sum
}

/// Euclidean distance between two points: sqrt(sum((p_i - q_i)^2))
///
/// Both points must have the same length.
#[inline]
pub fn distance(p: &ArrayView1<f64>, q: &ArrayView1<f64>) -> f64 {
    squared_distance(p, q).sqrt()
}

/// Coordinate-wise arithmetic mean of a non-empty set of points (one per row)
///
/// # Panics
///
/// Panics if `points` has no rows.
pub fn mean(points: &ArrayView2<f64>) -> Array1<f64> {
    assert!(points.nrows() > 0, "mean of an empty point set");
    let mut sum: Array1<f64> = Array1::zeros(points.ncols());
    for row in points.outer_iter() {
        sum += &row;
    }
    sum / points.nrows() as f64
}

/// Coordinate-wise minimum across a non-empty set of points
pub fn find_min(points: &ArrayView2<f64>) -> Array1<f64> {
    points.fold_axis(Axis(0), f64::INFINITY, |&acc, &x| acc.min(x))
}

/// Coordinate-wise maximum across a non-empty set of points
pub fn find_max(points: &ArrayView2<f64>) -> Array1<f64> {
    points.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| acc.max(x))
}

/// Find the centroid closest to `point`
///
/// Returns `(index, distance)`. Only a strictly smaller distance replaces the
/// current best, so on ties the lowest centroid index wins.
#[inline]
pub fn nearest_centroid(point: &ArrayView1<f64>, centroids: &ArrayView2<f64>) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;

    for (j, centroid) in centroids.outer_iter().enumerate() {
        let dist = distance(point, &centroid);
        if dist < best_dist {
            best_dist = dist;
            best_idx = j;
        }
    }

    (best_idx, best_dist)
}

/// Find the nearest centroid for every data point
///
/// Points are processed in parallel; each label only depends on its own row,
/// so the output matches [`find_nearest_centroids_serial`] exactly.
pub fn find_nearest_centroids(
    data: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
) -> Array1<usize> {
    let labels: Vec<usize> = (0..data.nrows())
        .into_par_iter()
        .map(|i| nearest_centroid(&data.row(i), centroids).0)
        .collect();

    Array1::from_vec(labels)
}

/// Find the nearest centroid for every data point (serial version)
#[allow(dead_code)]
pub fn find_nearest_centroids_serial(
    data: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
) -> Array1<usize> {
    data.outer_iter()
        .map(|row| nearest_centroid(&row, centroids).0)
        .collect()
}

/// Compute centroid shift (sum of L2 norms of centroid movements)
pub fn compute_centroid_shift(
    old_centroids: &ArrayView2<f64>,
    new_centroids: &ArrayView2<f64>,
) -> f64 {
    old_centroids
        .outer_iter()
        .zip(new_centroids.outer_iter())
        .map(|(old_c, new_c)| distance(&old_c, &new_c))
        .sum()
}
