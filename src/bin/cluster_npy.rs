//! Cluster the rows of a .npy matrix and save centroids and labels
//!
//! Usage: `cluster-npy <input.npy> <centroids.npy> <labels.npy> <k> <seed> <iterations> [random|kmeans++] [--normalize]`
//!
//! The input must be a 2-D float64 array with one point per row. Set
//! `RUST_LOG=debug` to see per-iteration progress.

use lloyd_kmeans::{normalize_points, validate_array, InitMethod, KMeans, KMeansConfig};
use log::info;
use ndarray::{Array1, Array2};
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use std::env;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 7 || args.len() > 9 {
        eprintln!(
            "Usage: {} <input.npy> <centroids.npy> <labels.npy> <k> <seed> <iterations> [random|kmeans++] [--normalize]",
            args[0]
        );
        std::process::exit(1);
    }

    let input_path = &args[1];
    let centroids_path = &args[2];
    let labels_path = &args[3];
    let k: usize = args[4].parse()?;
    let seed: u64 = args[5].parse()?;
    let iterations: usize = args[6].parse()?;

    let mut init = InitMethod::default();
    let mut normalize = false;
    for extra in &args[7..] {
        if extra == "--normalize" {
            normalize = true;
        } else {
            init = extra.parse()?;
        }
    }

    let reader = BufReader::new(File::open(input_path)?);
    let mut data: Array2<f64> = Array2::read_npy(reader)?;

    info!(
        "Loaded data: {} samples x {} features",
        data.nrows(),
        data.ncols()
    );

    // Reject bad input before normalization can mask or distort it
    validate_array(&data.view(), k)?;

    if normalize {
        data = normalize_points(&data.view());
    }

    let config = KMeansConfig::new(k)
        .with_seed(seed)
        .with_iterations(iterations)
        .with_init(init)
        .with_verbose(true);

    let mut kmeans = KMeans::with_config(config);
    kmeans.train(&data.view())?;

    let centroids = kmeans.centroids().ok_or("No centroids after training")?;
    centroids.write_npy(File::create(centroids_path)?)?;

    let labels: Array1<i64> = kmeans
        .labels()
        .ok_or("No labels after training")?
        .mapv(|l| l as i64);
    labels.write_npy(File::create(labels_path)?)?;

    let score = kmeans.score()?;
    println!("sse = {:.6}", score.sse);
    println!("mse = {:.6}", score.mse);

    info!("Saved centroids to {} and labels to {}", centroids_path, labels_path);

    Ok(())
}
