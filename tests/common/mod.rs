//! Shared test utilities and fixture generators

use polars::prelude::*;

/// Ten records with unit weights: splits evenly into two labels of five.
pub fn uniform_dataframe() -> DataFrame {
    df! {
        "amount" => [1.0f64, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    }
    .unwrap()
}

/// Three records where one carries almost all the weight. With two labels
/// and no slack both labels need a value sum of at least 6, which only the
/// first record can provide, so the default model is infeasible.
pub fn skewed_dataframe() -> DataFrame {
    df! {
        "amount" => [10.0f64, 1.0, 1.0],
    }
    .unwrap()
}

/// A small table with passthrough columns around the weight column.
pub fn people_dataframe() -> DataFrame {
    df! {
        "id" => ["a", "b", "c", "d", "e", "f"],
        "amount" => [2.0f64, 2.0, 2.0, 2.0, 2.0, 2.0],
        "region" => ["north", "south", "north", "south", "north", "south"],
    }
    .unwrap()
}

/// Random weights for stress fixtures.
#[allow(dead_code)]
pub fn random_dataframe(rows: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let amounts: Vec<f64> = (0..rows).map(|_| rng.gen_range(1.0..100.0)).collect();
    df! {
        "amount" => amounts,
    }
    .unwrap()
}
