use crate::algorithm::{assign_labels, lloyd};
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::metrics::ClusteringScore;
use crate::validation::validate_array;
use log::info;
use ndarray::{Array1, Array2, ArrayView2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Lloyd's k-means clustering over ndarray point matrices.
///
/// Input rows are points, columns are features. Training validates the data,
/// seeds centroids with the configured strategy using a `ChaCha8Rng` seeded
/// from `config.seed`, and runs exactly `config.iterations` assign/update
/// cycles.
///
/// # Example
///
/// ```
/// use lloyd_kmeans::{InitMethod, KMeans, KMeansConfig};
/// use ndarray::array;
///
/// let data = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
///
/// let config = KMeansConfig::new(2)
///     .with_iterations(10)
///     .with_init(InitMethod::KMeansPlusPlus)
///     .with_seed(42);
/// let mut kmeans = KMeans::with_config(config);
///
/// let labels = kmeans.fit_predict(&data.view()).unwrap();
/// assert_eq!(labels[0], labels[1]);
/// assert_ne!(labels[0], labels[2]);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Number of features of the last fit, 0 before the first one
    d: usize,

    /// Trained centroids (None if not yet fitted)
    centroids: Option<Array2<f64>>,

    /// Assignment of the training points
    labels: Option<Array1<usize>>,

    /// Error of the last training run
    score: Option<ClusteringScore>,
}

impl KMeans {
    /// Create a new model with `k` clusters and default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn new(k: usize) -> Self {
        Self::with_config(KMeansConfig::new(k))
    }

    /// Create a new model with custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.k` is 0.
    pub fn with_config(config: KMeansConfig) -> Self {
        assert!(config.k > 0, "k must be greater than 0");

        Self {
            config,
            d: 0,
            centroids: None,
            labels: None,
            score: None,
        }
    }

    /// Train the model on `data` of shape (n_samples, n_features).
    ///
    /// # Errors
    ///
    /// Returns the validation failure if `data` is empty, has no features,
    /// contains NaN or infinite values, or has fewer rows than `k`.
    ///
    /// Every call starts from scratch and replaces the previous model, so the
    /// feature count may differ from an earlier fit.
    pub fn train(&mut self, data: &ArrayView2<f64>) -> Result<(), KMeansError> {
        validate_array(data, self.config.k)?;

        let n_features = data.ncols();

        let start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let result = lloyd(
            data,
            self.config.k,
            self.config.iterations,
            &self.config.init,
            &mut rng,
        );
        let score =
            ClusteringScore::compute(data, &result.centroids.view(), &result.labels.view());

        if self.config.verbose {
            info!(
                "k-means: {} samples, {} features, {} clusters, {:?} init, {} iterations in {:.4}s, sse = {:.6}, mse = {:.6}",
                data.nrows(),
                n_features,
                self.config.k,
                self.config.init,
                result.n_iterations,
                start.elapsed().as_secs_f64(),
                score.sse,
                score.mse
            );
        }

        self.d = n_features;
        self.centroids = Some(result.centroids);
        self.labels = Some(result.labels);
        self.score = Some(score);
        Ok(())
    }

    /// Fit the model to the data. Equivalent to [`train`](Self::train).
    pub fn fit(&mut self, data: &ArrayView2<f64>) -> Result<&mut Self, KMeansError> {
        self.train(data)?;
        Ok(self)
    }

    /// Assign each row of `data` to its nearest trained centroid.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::NotFitted`] before training and
    /// [`KMeansError::DimensionMismatch`] when the feature count differs from
    /// the training data.
    pub fn predict(&self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        let centroids = self.centroids.as_ref().ok_or(KMeansError::NotFitted)?;

        if data.ncols() != self.d {
            return Err(KMeansError::DimensionMismatch {
                expected: self.d,
                found: data.ncols(),
            });
        }

        Ok(assign_labels(data, &centroids.view()))
    }

    /// Fit the model and return the training labels.
    pub fn fit_predict(&mut self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        self.train(data)?;
        self.labels.clone().ok_or(KMeansError::NotFitted)
    }

    /// SSE and MSE of the training data against the trained centroids
    pub fn score(&self) -> Result<ClusteringScore, KMeansError> {
        self.score.ok_or(KMeansError::NotFitted)
    }

    /// Get the centroids of the fitted model.
    pub fn centroids(&self) -> Option<&Array2<f64>> {
        self.centroids.as_ref()
    }

    /// Get the labels of the training data.
    pub fn labels(&self) -> Option<&Array1<usize>> {
        self.labels.as_ref()
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of features (0 before the first fit).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
