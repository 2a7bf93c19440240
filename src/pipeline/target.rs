//! Target (label) column extraction
//!
//! MDLP treats the target as categorical, so any column type works: values
//! are compared by their string form.

use anyhow::{Context, Result};
use polars::prelude::*;

/// Extract the target column as categorical labels.
///
/// Null entries become `None`; rows with a missing label take no part in any
/// feature's discretization.
///
/// # Errors
/// If the column is missing, empty, or contains only nulls.
pub fn extract_labels(df: &DataFrame, target: &str) -> Result<Vec<Option<String>>> {
    let target_col = df
        .column(target)
        .with_context(|| format!("Target column '{}' not found", target))?;

    if target_col.len() == 0 {
        anyhow::bail!("Target column '{}' is empty", target);
    }

    if target_col.null_count() == target_col.len() {
        anyhow::bail!("Target column '{}' contains only null values", target);
    }

    let string_col = target_col
        .cast(&DataType::String)
        .with_context(|| format!("Target column '{}' cannot be read as labels", target))?;

    Ok(string_col
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// Distinct non-null labels, sorted
pub fn label_classes(labels: &[Option<String>]) -> Vec<String> {
    let mut classes: Vec<String> = labels.iter().flatten().cloned().collect();
    classes.sort();
    classes.dedup();
    classes
}
