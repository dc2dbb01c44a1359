//! Centroid seeding strategies.

use crate::distance::squared_distance;
use ndarray::{Array2, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

/// Strategy producing the initial centroids of a clustering run.
///
/// Implementations pick `k` rows of `data` (1 <= k <= n_samples) without
/// modifying it. Randomness comes exclusively from the supplied `rng`, so a
/// seeded generator gives reproducible seeding.
pub trait CentroidInitializer {
    /// Choose the row indices of the initial centroids
    fn select_indices<R: Rng + ?Sized>(
        &self,
        data: &ArrayView2<f64>,
        k: usize,
        rng: &mut R,
    ) -> Vec<usize>;

    /// Copy the selected rows into a `(k, n_features)` centroid matrix
    fn initialize<R: Rng + ?Sized>(
        &self,
        data: &ArrayView2<f64>,
        k: usize,
        rng: &mut R,
    ) -> Array2<f64> {
        let indices = self.select_indices(data, k, rng);
        data.select(Axis(0), &indices)
    }
}

/// Uniform random seeding: a random permutation of the points, first k kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInit;

impl CentroidInitializer for RandomInit {
    fn select_indices<R: Rng + ?Sized>(
        &self,
        data: &ArrayView2<f64>,
        k: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..data.nrows()).collect();
        indices.shuffle(rng);
        indices.truncate(k);
        indices
    }
}

/// k-means++ seeding.
///
/// The first centroid is drawn uniformly. Each following one is drawn with
/// probability proportional to its squared distance to the nearest centroid
/// chosen so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct KMeansPlusPlus;

impl CentroidInitializer for KMeansPlusPlus {
    fn select_indices<R: Rng + ?Sized>(
        &self,
        data: &ArrayView2<f64>,
        k: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        let n_samples = data.nrows();
        let mut selected = Vec::with_capacity(k);
        if k == 0 || n_samples == 0 {
            return selected;
        }

        selected.push(rng.gen_range(0..n_samples));

        // Squared distance of every point to its nearest chosen centroid,
        // refreshed against the newest centroid only.
        let mut weights = vec![f64::INFINITY; n_samples];

        while selected.len() < k {
            let newest = data.row(selected[selected.len() - 1]);
            for (weight, point) in weights.iter_mut().zip(data.outer_iter()) {
                let d2 = squared_distance(&point, &newest);
                if d2 < *weight {
                    *weight = d2;
                }
            }

            let total: f64 = weights.iter().sum();
            let next = if total > 0.0 {
                sample_weighted(&weights, total, rng)
            } else {
                // Every point sits on a chosen centroid
                first_unselected(&selected, n_samples)
            };
            selected.push(next);
        }

        selected
    }
}

/// Draw a threshold uniformly from [0, total) and pick the point it lands on
/// with [`select_at_threshold`].
fn sample_weighted<R: Rng + ?Sized>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.gen::<f64>() * total;
    select_at_threshold(weights, threshold)
}

/// Walk `weights` in order and return the first index whose running sum is
/// at least `threshold`.
///
/// Zero-weight entries are skipped so an already chosen point is never picked
/// again. Should rounding keep the running sum below the threshold, the last
/// positively weighted index is returned.
fn select_at_threshold(weights: &[f64], threshold: f64) -> usize {
    let mut cumulative = 0.0;
    let mut last_positive = 0;

    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if cumulative >= threshold {
            return i;
        }
    }

    last_positive
}

fn first_unselected(selected: &[usize], n_samples: usize) -> usize {
    (0..n_samples)
        .find(|i| !selected.contains(i))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn row_in(data: &Array2<f64>, row: ndarray::ArrayView1<f64>) -> bool {
        data.outer_iter().any(|r| r == row)
    }

    fn sample_points() -> Array2<f64> {
        array![
            [3.2, 7.1],
            [8.5, 2.4],
            [1.0, 9.9],
            [6.6, 3.3],
            [0.5, 4.7]
        ]
    }

    #[test]
    fn test_random_init_draws_from_data() {
        let data = sample_points();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let centroids = RandomInit.initialize(&data.view(), 3, &mut rng);

        assert_eq!(centroids.nrows(), 3);
        assert_eq!(centroids.ncols(), 2);
        for c in centroids.outer_iter() {
            assert!(row_in(&data, c));
        }
    }

    #[test]
    fn test_random_init_distinct_indices() {
        let data = array![
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
            [10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0]
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let mut indices = RandomInit.select_indices(&data.view(), 5, &mut rng);
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_kmeanspp_draws_from_data() {
        let data = array![
            [1.1, 9.2, 3.3, 4.4, 5.5],
            [6.6, 7.7, 8.8, 0.1, 2.2],
            [3.3, 4.4, 5.5, 6.6, 7.7],
            [8.8, 9.9, 1.1, 2.2, 3.3],
            [0.4, 1.5, 2.6, 3.7, 4.8]
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let centroids = KMeansPlusPlus.initialize(&data.view(), 3, &mut rng);

        assert_eq!(centroids.nrows(), 3);
        for c in centroids.outer_iter() {
            assert!(row_in(&data, c));
        }
    }

    #[test]
    fn test_kmeanspp_k_equals_n_picks_every_point() {
        let data = sample_points();

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut indices = KMeansPlusPlus.select_indices(&data.view(), 5, &mut rng);
            indices.sort_unstable();
            assert_eq!(indices, vec![0, 1, 2, 3, 4], "seed {}", seed);
        }
    }

    #[test]
    fn test_kmeanspp_all_identical_points_terminates() {
        let data = array![[5.0, 5.0], [5.0, 5.0], [5.0, 5.0], [5.0, 5.0]];
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let mut indices = KMeansPlusPlus.select_indices(&data.view(), 4, &mut rng);
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_kmeanspp_prefers_far_points() {
        // Two tight groups far apart: the second centroid must come from the
        // other group since points in the first group have near-zero weight.
        let data = array![[0.0, 0.0], [0.0, 0.0], [100.0, 100.0], [100.0, 100.0]];

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let centroids = KMeansPlusPlus.initialize(&data.view(), 2, &mut rng);
            assert_ne!(centroids.row(0), centroids.row(1), "seed {}", seed);
        }
    }

    #[test]
    fn test_same_seed_same_selection() {
        let data = sample_points();
        let mut rng_a = ChaCha8Rng::seed_from_u64(11);
        let mut rng_b = ChaCha8Rng::seed_from_u64(11);
        let a = KMeansPlusPlus.select_indices(&data.view(), 3, &mut rng_a);
        let b = KMeansPlusPlus.select_indices(&data.view(), 3, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_weighted_skips_zero_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..100 {
            let idx = sample_weighted(&[0.0, 2.0, 0.0, 1.0, 0.0], 3.0, &mut rng);
            assert!(idx == 1 || idx == 3);
        }
    }

    #[test]
    fn test_sample_weighted_rounding_falls_back_to_last_positive() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        // A total larger than the real sum simulates rounding drift
        let idx = sample_weighted(&[0.0, 1e-300, 0.0], 1.0, &mut rng);
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_select_at_threshold_first_cumulative_reaching_threshold() {
        let weights = [1.0, 2.0, 3.0];

        // Running sums are 1, 3, 6; an exact match selects that point
        assert_eq!(select_at_threshold(&weights, 0.0), 0);
        assert_eq!(select_at_threshold(&weights, 1.0), 0);
        assert_eq!(select_at_threshold(&weights, 1.5), 1);
        assert_eq!(select_at_threshold(&weights, 3.0), 1);
        assert_eq!(select_at_threshold(&weights, 3.5), 2);
        assert_eq!(select_at_threshold(&weights, 6.0), 2);
    }

    #[test]
    fn test_select_at_threshold_zero_weights_never_chosen() {
        let weights = [0.0, 2.0, 0.0, 1.0, 0.0];

        assert_eq!(select_at_threshold(&weights, 0.0), 1);
        assert_eq!(select_at_threshold(&weights, 2.0), 1);
        assert_eq!(select_at_threshold(&weights, 2.5), 3);
        assert_eq!(select_at_threshold(&weights, 3.0), 3);
        // Past the total: last positive weight
        assert_eq!(select_at_threshold(&weights, 3.5), 3);
    }

    #[test]
    fn test_sample_weighted_fixed_draws() {
        // A zero draw selects the first positively weighted point
        let mut low = StepRng::new(0, 0);
        assert_eq!(sample_weighted(&[0.0, 2.0, 1.0], 3.0, &mut low), 1);

        // The largest draw lands just below the total, in the last point
        let mut high = StepRng::new(u64::MAX, 0);
        assert_eq!(sample_weighted(&[0.0, 2.0, 1.0], 3.0, &mut high), 2);
    }
}
