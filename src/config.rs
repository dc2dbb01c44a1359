use crate::init::{CentroidInitializer, KMeansPlusPlus, RandomInit};
use ndarray::ArrayView2;
use rand::Rng;

/// Centroid seeding strategy selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitMethod {
    /// Uniformly random distinct data points
    Random,
    /// k-means++ distance-weighted sampling
    #[default]
    KMeansPlusPlus,
}

impl CentroidInitializer for InitMethod {
    fn select_indices<R: Rng + ?Sized>(
        &self,
        data: &ArrayView2<f64>,
        k: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        match self {
            InitMethod::Random => RandomInit.select_indices(data, k, rng),
            InitMethod::KMeansPlusPlus => KMeansPlusPlus.select_indices(data, k, rng),
        }
    }
}

impl std::str::FromStr for InitMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(InitMethod::Random),
            "kmeans++" | "kmeanspp" | "k-means++" => Ok(InitMethod::KMeansPlusPlus),
            other => Err(format!("unknown initialization method: {}", other)),
        }
    }
}

/// Configuration for the k-means model
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Number of assign/update cycles. Always run in full.
    pub iterations: usize,

    /// Random seed for centroid initialization
    pub seed: u64,

    /// Centroid seeding strategy
    pub init: InitMethod,

    /// Log a summary of every training run at info level
    pub verbose: bool,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            iterations: 25,
            seed: 0,
            init: InitMethod::default(),
            verbose: false,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the number of iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the seeding strategy
    pub fn with_init(mut self, init: InitMethod) -> Self {
        self.init = init;
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
