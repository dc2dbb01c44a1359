use crate::distance::{find_max, find_min};
use ndarray::{Array2, ArrayView2, Zip};

/// Min-max normalization of every feature to [0, 1].
///
/// Each coordinate becomes `(x - min) / (max - min)` using the per-feature
/// minimum and maximum of `points`. Features with no spread (`max == min`)
/// map to 0. Returns a new array; `points` is left as is.
pub fn normalize_points(points: &ArrayView2<f64>) -> Array2<f64> {
    if points.nrows() == 0 {
        return points.to_owned();
    }

    let min = find_min(points);
    let max = find_max(points);
    let mut normalized = points.to_owned();

    for mut row in normalized.outer_iter_mut() {
        Zip::from(&mut row)
            .and(&min)
            .and(&max)
            .for_each(|x, &lo, &hi| *x = scale(*x, lo, hi));
    }

    normalized
}

/// Map `x` from [lo, hi] onto [0, 1]
#[inline]
fn scale(x: f64, lo: f64, hi: f64) -> f64 {
    let spread = hi - lo;
    if spread == 0.0 {
        0.0
    } else if spread.is_finite() {
        (x - lo) / spread
    } else {
        // Range wider than f64::MAX; halving is exact and keeps both
        // differences finite
        (x / 2.0 - lo / 2.0) / (hi / 2.0 - lo / 2.0)
    }
}
