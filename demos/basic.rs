//! Basic example demonstrating lloyd-kmeans usage
//!
//! Run with: cargo run --example basic --release

use lloyd_kmeans::{InitMethod, KMeans, KMeansConfig};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn main() {
    println!("=== lloyd-kmeans example ===\n");

    // Generate synthetic data: 3 clusters in 2D for easy visualization
    let n_samples = 300;
    let n_features = 2;
    let n_clusters = 3;

    println!("Generating {} samples with {} features...", n_samples, n_features);

    let mut data = Array2::<f64>::zeros((n_samples, n_features));

    // Cluster centers
    let centers = [[-5.0f64, -5.0], [0.0, 5.0], [5.0, -5.0]];

    for i in 0..n_samples {
        let cluster_idx = i % 3;
        let noise = Array2::random((1, n_features), Uniform::new(-1.0f64, 1.0));
        data[[i, 0]] = centers[cluster_idx][0] + noise[[0, 0]];
        data[[i, 1]] = centers[cluster_idx][1] + noise[[0, 1]];
    }

    println!("True cluster centers:");
    for (i, center) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, center[0], center[1]);
    }
    println!();

    for init in [InitMethod::Random, InitMethod::KMeansPlusPlus] {
        let config = KMeansConfig::new(n_clusters)
            .with_iterations(20)
            .with_seed(42)
            .with_init(init);

        println!("Running k-means with k={} and {:?} seeding...", n_clusters, init);

        let mut kmeans = KMeans::with_config(config);
        let labels = kmeans.fit_predict(&data.view()).expect("Training failed");

        let centroids = kmeans.centroids().unwrap();
        for i in 0..centroids.nrows() {
            println!(
                "  Centroid {}: ({:.4}, {:.4})",
                i,
                centroids[[i, 0]],
                centroids[[i, 1]]
            );
        }

        let mut cluster_counts = vec![0usize; n_clusters];
        for &label in labels.iter() {
            cluster_counts[label] += 1;
        }
        for (i, count) in cluster_counts.iter().enumerate() {
            println!("  Cluster {}: {} samples", i, count);
        }

        let score = kmeans.score().expect("Model is fitted");
        println!("  SSE = {:.4}, MSE = {:.4}\n", score.sse, score.mse);
    }

    println!("=== Done! ===");
}
