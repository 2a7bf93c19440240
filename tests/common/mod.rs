//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tempfile::TempDir;

/// The four reference scenarios: (name, x, y, expected cut points)
pub fn reference_scenarios() -> Vec<(&'static str, Vec<f64>, Vec<i32>, Vec<f64>)> {
    vec![
        (
            "single split",
            (1..=10).map(f64::from).collect(),
            vec![0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
            vec![3.5],
        ),
        (
            "recurse once left",
            vec![
                1.0, 1.0, 1.0, 1.0, 1.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 8.0, 9.0, 9.0, 9.0, 9.0,
                9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0,
            ],
            vec![
                0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            ],
            vec![2.5, 8.5],
        ),
        (
            "recurse once right",
            (0..16).map(f64::from).collect(),
            vec![0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0],
            vec![6.5],
        ),
        (
            "class change on last index",
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![0, 0, 0, 0, 1],
            vec![4.5],
        ),
    ]
}

/// Noisy three-class data: class is mostly determined by which third of
/// [0, 30) the feature falls in, with `noise` probability of a random label.
pub fn noisy_three_class(n: usize, noise: f64, seed: u64) -> (Vec<f64>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);

    for _ in 0..n {
        // Rounded to one decimal so ties occur
        let value = (rng.gen::<f64>() * 300.0).floor() / 10.0;
        let class = if rng.gen::<f64>() < noise {
            rng.gen_range(0..3)
        } else {
            (value / 10.0) as u8
        };
        x.push(value);
        y.push(class);
    }

    (x, y)
}

/// Apply the same random permutation to both arrays
pub fn shuffle_together<T: Clone>(x: &[f64], y: &[T], seed: u64) -> (Vec<f64>, Vec<T>) {
    use rand::seq::SliceRandom;

    let mut order: Vec<usize> = (0..x.len()).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));

    (
        order.iter().map(|&i| x[i]).collect(),
        order.iter().map(|&i| y[i].clone()).collect(),
    )
}

/// A dataset with known discretization characteristics:
/// - `target`: string labels "neg" / "pos"
/// - `separable`: clean class boundary between 3 and 4
/// - `constant`: a single value, no cuts possible
/// - `with_missing`: separable with two nulls
/// - `category`: a string column that is never discretized
pub fn create_test_dataframe() -> DataFrame {
    df! {
        "target" => ["neg", "neg", "neg", "pos", "pos", "pos", "pos", "pos", "pos", "pos"],
        "separable" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "constant" => [5.0f64; 10],
        "with_missing" => [Some(1i64), None, Some(3), Some(4), Some(5), Some(6), None, Some(8), Some(9), Some(10)],
        "category" => ["a", "b", "a", "b", "a", "b", "a", "b", "a", "b"],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that cut points are strictly increasing and inside (min, max) of x
pub fn assert_valid_cuts(x: &[f64], cuts: &[f64]) {
    let min = x.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    for w in cuts.windows(2) {
        assert!(w[0] < w[1], "Cut points not strictly increasing: {:?}", cuts);
    }
    for &c in cuts {
        assert!(c > min && c < max, "Cut {} outside ({}, {})", c, min, max);
    }
    assert!(cuts.len() < x.len().max(1), "Too many cuts for {} values", x.len());
}
