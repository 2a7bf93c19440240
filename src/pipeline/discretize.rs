//! Per-feature MDLP discretization over a DataFrame
//!
//! Every numeric column (other than the target and excluded columns) is
//! discretized independently against the target labels. Features run in
//! parallel on the rayon pool.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use crate::mdlp::{bin_of, digitize, discretize, entropy, MdlpConfig, SplitDecision};
use crate::utils::{create_feature_progress, finish_with_success, finish_with_warning};

/// Suffix of the bin-index columns added by [`apply_cuts`]
pub const BIN_COLUMN_SUFFIX: &str = "_bin";

/// Configuration for discretizing a whole dataset
#[derive(Debug, Clone, Default)]
pub struct DiscretizeConfig {
    /// Partitioner configuration
    pub mdlp: MdlpConfig,
    /// Columns never treated as features
    pub exclude: Vec<String>,
    /// If set, only these columns are discretized
    pub features: Option<Vec<String>>,
}

/// Cut points and bin statistics for a single feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCuts {
    /// Name of the discretized feature
    pub feature_name: String,
    /// Strictly increasing bin boundaries
    pub cut_points: Vec<f64>,
    /// Number of bins (`cut_points.len() + 1`)
    pub n_bins: usize,
    /// Samples per bin
    pub bin_counts: Vec<usize>,
    /// Candidate cut positions considered
    pub candidate_count: usize,
    /// Rows with a label that took part
    pub sample_count: usize,
    /// Rows with a label but a null or non-finite feature value
    pub missing_count: usize,
    /// Label entropy before binning (bits)
    pub label_entropy: f64,
    /// Size-weighted label entropy within the bins (bits)
    pub binned_entropy: f64,
    /// Acceptance decisions of the partitioner
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decisions: Vec<SplitDecision>,
}

impl FeatureCuts {
    /// Entropy removed by binning, in bits
    pub fn information_gain(&self) -> f64 {
        self.label_entropy - self.binned_entropy
    }
}

/// A feature that could not be discretized
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFeature {
    pub feature_name: String,
    pub reason: String,
}

/// Result of discretizing every eligible feature of a dataset
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetDiscretization {
    /// Discretized features, sorted by name
    pub features: Vec<FeatureCuts>,
    /// Features that had no usable rows, sorted by name
    pub skipped: Vec<SkippedFeature>,
}

impl DatasetDiscretization {
    /// Features with at least one accepted cut
    pub fn features_with_cuts(&self) -> usize {
        self.features
            .iter()
            .filter(|f| !f.cut_points.is_empty())
            .count()
    }

    /// Total number of cut points across all features
    pub fn total_cuts(&self) -> usize {
        self.features.iter().map(|f| f.cut_points.len()).sum()
    }
}

/// Names of the columns that will be discretized
pub fn select_feature_columns(
    df: &DataFrame,
    target: &str,
    config: &DiscretizeConfig,
) -> Result<Vec<String>> {
    if let Some(requested) = &config.features {
        for name in requested {
            let col = df
                .column(name)
                .with_context(|| format!("Feature column '{}' not found", name))?;
            if !col.dtype().is_primitive_numeric() {
                anyhow::bail!(
                    "Feature column '{}' is not numeric (found {})",
                    name,
                    col.dtype()
                );
            }
        }
    }

    Ok(df
        .get_columns()
        .iter()
        .filter(|col| {
            let name = col.name().as_str();
            col.dtype().is_primitive_numeric()
                && name != target
                && !config.exclude.iter().any(|e| e == name)
                && config
                    .features
                    .as_ref()
                    .map_or(true, |wanted| wanted.iter().any(|w| w == name))
        })
        .map(|col| col.name().to_string())
        .collect())
}

/// Discretize all eligible numeric features of `df` against `labels`.
///
/// # Arguments
/// * `df` - The dataset
/// * `target` - Name of the target column (never discretized)
/// * `labels` - Target labels, one per row; `None` rows are ignored
/// * `config` - Feature selection and partitioner configuration
pub fn discretize_features(
    df: &DataFrame,
    target: &str,
    labels: &[Option<String>],
    config: &DiscretizeConfig,
) -> Result<DatasetDiscretization> {
    if labels.len() != df.height() {
        anyhow::bail!(
            "Label count {} does not match dataset height {}",
            labels.len(),
            df.height()
        );
    }

    let columns = select_feature_columns(df, target, config)?;
    if columns.is_empty() {
        return Ok(DatasetDiscretization::default());
    }

    let total = columns.len() as u64;
    let pb = create_feature_progress(total, "Discretizing");

    let progress_counter = AtomicU64::new(0);

    let results: Vec<(String, Result<FeatureCuts>)> = columns
        .par_iter()
        .map(|col_name| {
            let result = discretize_single_feature(df, col_name, labels, &config.mdlp);

            let count = progress_counter.fetch_add(1, Ordering::Relaxed);
            if count % 10 == 0 || count == total - 1 {
                pb.set_position(count + 1);
            }

            (col_name.clone(), result)
        })
        .collect();

    let mut output = DatasetDiscretization::default();
    for (feature_name, result) in results {
        match result {
            Ok(cuts) => output.features.push(cuts),
            Err(e) => output.skipped.push(SkippedFeature {
                feature_name,
                reason: format!("{:#}", e),
            }),
        }
    }
    output
        .features
        .sort_by(|a, b| a.feature_name.cmp(&b.feature_name));
    output
        .skipped
        .sort_by(|a, b| a.feature_name.cmp(&b.feature_name));

    let message = format!(
        "Discretized {} features ({} skipped)",
        output.features.len(),
        output.skipped.len()
    );
    if output.skipped.is_empty() {
        finish_with_success(&pb, &message);
    } else {
        finish_with_warning(&pb, &message);
    }

    Ok(output)
}

/// Largest integer magnitude below which every integer is exactly an f64
const MAX_EXACT_F64_INT: u64 = 1 << 53;

/// Whether a 64-bit integer column holds values that do not survive the cast
/// to f64 unchanged.
fn exceeds_f64_precision(col: &Column) -> Result<bool> {
    Ok(match col.dtype() {
        DataType::Int64 => col
            .i64()?
            .into_iter()
            .flatten()
            .any(|v| v.unsigned_abs() > MAX_EXACT_F64_INT),
        DataType::UInt64 => col
            .u64()?
            .into_iter()
            .flatten()
            .any(|v| v > MAX_EXACT_F64_INT),
        _ => false,
    })
}

/// Discretize one numeric column.
///
/// Rows with a missing label are ignored; rows with a label but a null or
/// non-finite feature value are counted as missing.
///
/// # Errors
/// If the column has no usable values, or is a 64-bit integer column with
/// magnitudes above 2^53: distinct integers there can collapse to the same
/// f64 and lose cut boundaries.
pub fn discretize_single_feature(
    df: &DataFrame,
    col_name: &str,
    labels: &[Option<String>],
    config: &MdlpConfig,
) -> Result<FeatureCuts> {
    let column = df.column(col_name)?;
    if exceeds_f64_precision(column)? {
        anyhow::bail!(
            "Feature '{}' has integer values beyond 2^53 that are not exact as f64",
            col_name
        );
    }

    let float_col = column.cast(&DataType::Float64)?;
    let values = float_col.f64()?;

    let mut x: Vec<f64> = Vec::new();
    let mut y: Vec<&str> = Vec::new();
    let mut missing_count = 0usize;

    for (value, label) in values.iter().zip(labels.iter()) {
        match (value, label) {
            (Some(v), Some(l)) if v.is_finite() => {
                x.push(v);
                y.push(l.as_str());
            }
            (_, Some(_)) => missing_count += 1,
            (_, None) => {}
        }
    }

    if x.is_empty() {
        anyhow::bail!("Feature '{}' has no usable (non-null, labelled) values", col_name);
    }

    let result = discretize(&x, &y, config)
        .with_context(|| format!("Failed to discretize feature '{}'", col_name))?;

    let bins = digitize(&x, &result.cut_points);
    let mut bin_labels: Vec<Vec<&str>> = vec![Vec::new(); result.n_bins()];
    for (&bin, &label) in bins.iter().zip(y.iter()) {
        bin_labels[bin].push(label);
    }

    let n = x.len() as f64;
    let label_entropy = entropy(&y)?;
    let mut binned_entropy = 0.0;
    for members in bin_labels.iter().filter(|b| !b.is_empty()) {
        binned_entropy += members.len() as f64 / n * entropy(members)?;
    }

    Ok(FeatureCuts {
        feature_name: col_name.to_string(),
        n_bins: result.n_bins(),
        bin_counts: bin_labels.iter().map(Vec::len).collect(),
        candidate_count: result.candidate_count,
        sample_count: x.len(),
        missing_count,
        label_entropy,
        binned_entropy,
        cut_points: result.cut_points,
        decisions: result.decisions,
    })
}

/// Append a `<feature>_bin` column with the bin index of every row for each
/// discretized feature. Null and non-finite feature values stay null.
///
/// # Errors
/// If a `<feature>_bin` column already exists; nothing is overwritten.
pub fn apply_cuts(df: &DataFrame, cuts: &[FeatureCuts]) -> Result<DataFrame> {
    let existing = df.get_column_names();
    for feature in cuts {
        let name = format!("{}{}", feature.feature_name, BIN_COLUMN_SUFFIX);
        if existing.iter().any(|c| c.as_str() == name) {
            anyhow::bail!(
                "Column '{}' already exists; cannot add bins for '{}'",
                name,
                feature.feature_name
            );
        }
    }

    let mut out = df.clone();

    for feature in cuts {
        let float_col = df
            .column(&feature.feature_name)
            .with_context(|| format!("Feature column '{}' not found", feature.feature_name))?
            .cast(&DataType::Float64)?;

        let bins: Vec<Option<u32>> = float_col
            .f64()?
            .iter()
            .map(|value| {
                value
                    .filter(|v| v.is_finite())
                    .map(|v| bin_of(v, &feature.cut_points) as u32)
            })
            .collect();

        let name = format!("{}{}", feature.feature_name, BIN_COLUMN_SUFFIX);
        out.with_column(Column::new(name.into(), bins))
            .with_context(|| format!("Failed to add bin column for '{}'", feature.feature_name))?;
    }

    Ok(out)
}
