use crate::distance::{compute_centroid_shift, find_nearest_centroids, mean};
use crate::init::CentroidInitializer;
use log::debug;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::Rng;
use std::time::Instant;

/// Result of a clustering run
#[derive(Debug, Clone)]
pub struct KMeansResult {
    /// Final centroids, shape (k, n_features)
    pub centroids: Array2<f64>,
    /// Cluster index of every input point
    pub labels: Array1<usize>,
    /// Number of assign/update cycles performed
    pub n_iterations: usize,
}

/// Run Lloyd's algorithm for exactly `iterations` assign/update cycles.
///
/// The input is trusted: `data` must have at least `k` rows, `k` must be
/// positive and every coordinate finite. Validate with
/// [`validate_array`](crate::validate_array) first; violating these
/// preconditions panics.
///
/// Clusters that end up with no members keep their previous centroid.
pub fn lloyd<I, R>(
    data: &ArrayView2<f64>,
    k: usize,
    iterations: usize,
    initializer: &I,
    rng: &mut R,
) -> KMeansResult
where
    I: CentroidInitializer,
    R: Rng + ?Sized,
{
    let mut centroids = initializer.initialize(data, k, rng);
    let mut labels: Array1<usize> = Array1::zeros(data.nrows());

    for iteration in 0..iterations {
        let iter_start = Instant::now();

        labels.assign(&find_nearest_centroids(data, &centroids.view()));

        let prev_centroids = centroids.clone();
        let empty_clusters = update_centroids(data, &labels, &mut centroids);

        if log::log_enabled!(log::Level::Debug) {
            let shift = compute_centroid_shift(&prev_centroids.view(), &centroids.view());
            debug!(
                "iteration {}/{}: shift = {:.6}, empty clusters = {}, time = {:.4}s",
                iteration + 1,
                iterations,
                shift,
                empty_clusters,
                iter_start.elapsed().as_secs_f64()
            );
        }
    }

    if iterations == 0 {
        labels.assign(&find_nearest_centroids(data, &centroids.view()));
    }

    KMeansResult {
        centroids,
        labels,
        n_iterations: iterations,
    }
}

/// Replace every non-empty cluster's centroid with the mean of its members.
///
/// Returns the number of empty clusters, whose centroids are left untouched.
fn update_centroids(
    data: &ArrayView2<f64>,
    labels: &Array1<usize>,
    centroids: &mut Array2<f64>,
) -> usize {
    let k = centroids.nrows();
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, &label) in labels.iter().enumerate() {
        members[label].push(i);
    }

    let mut empty_clusters = 0;
    for (cluster_idx, indices) in members.iter().enumerate() {
        if indices.is_empty() {
            empty_clusters += 1;
            continue;
        }
        let cluster = data.select(Axis(0), indices);
        centroids.row_mut(cluster_idx).assign(&mean(&cluster.view()));
    }

    empty_clusters
}

/// Assign each row of `data` to its nearest centroid
pub fn assign_labels(data: &ArrayView2<f64>, centroids: &ArrayView2<f64>) -> Array1<usize> {
    find_nearest_centroids(data, centroids)
}
