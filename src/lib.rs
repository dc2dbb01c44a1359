//! # lloyd-kmeans
//!
//! k-means clustering with Lloyd's algorithm over ndarray point matrices.
//!
//! ## Features
//!
//! - **Pluggable seeding**: uniform random or k-means++ through the
//!   [`CentroidInitializer`] trait
//! - **Fixed iteration budget**: every run performs exactly the configured
//!   number of assign/update cycles, empty clusters keep their centroid
//! - **Parallel assignment**: uses rayon per point, with the same labels as a
//!   serial pass (ties go to the lowest centroid index)
//! - **Utilities**: input validation, min-max normalization, SSE/MSE scoring
//!
//! ## Example
//!
//! ```rust
//! use lloyd_kmeans::{normalize_points, points_from_rows, KMeans, KMeansConfig};
//!
//! let rows = vec![
//!     vec![1.0, 200.0],
//!     vec![1.5, 180.0],
//!     vec![8.0, 20.0],
//!     vec![9.0, 40.0],
//! ];
//!
//! // Validate and pack the raw rows, then scale every feature to [0, 1]
//! let data = points_from_rows(&rows, 2).unwrap();
//! let data = normalize_points(&data.view());
//!
//! let mut kmeans = KMeans::with_config(KMeansConfig::new(2).with_seed(7));
//! let labels = kmeans.fit_predict(&data.view()).unwrap();
//! assert_eq!(labels.len(), 4);
//!
//! let score = kmeans.score().unwrap();
//! assert!(score.sse >= 0.0);
//! ```
//!
//! ## Lower-level engine
//!
//! [`lloyd`] runs the algorithm without validation, taking any initializer
//! and random source:
//!
//! ```rust
//! use lloyd_kmeans::{calculate_mse, lloyd, validate_array, RandomInit};
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let data = array![[0.0, 0.0], [0.0, 1.0], [5.0, 5.0], [5.0, 6.0]];
//! validate_array(&data.view(), 2).unwrap();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let result = lloyd(&data.view(), 2, 10, &RandomInit, &mut rng);
//! let mse = calculate_mse(&data.view(), &result.centroids.view(), &result.labels.view());
//! assert!((mse - 0.25).abs() < 1e-9);
//! ```

mod algorithm;
mod config;
mod distance;
mod error;
mod init;
mod kmeans;
mod metrics;
mod normalize;
mod validation;

pub use algorithm::{assign_labels, lloyd, KMeansResult};
pub use config::{InitMethod, KMeansConfig};
pub use distance::{distance, find_max, find_min, mean, nearest_centroid, squared_distance};
pub use error::KMeansError;
pub use init::{CentroidInitializer, KMeansPlusPlus, RandomInit};
pub use kmeans::KMeans;
pub use metrics::{calculate_mse, calculate_sse, ClusteringScore};
pub use normalize::normalize_points;
pub use validation::{points_from_rows, validate_array, validate_points};
