//! JSON export of discretization results

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{DatasetDiscretization, FeatureCuts, SkippedFeature};

/// Metadata about the discretization run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the run (RFC 3339)
    pub timestamp: String,
    /// entropymdlp version
    pub version: String,
    /// Input file path
    pub input_file: String,
    /// Target column name
    pub target_column: String,
    /// Distinct target labels seen
    pub classes: Vec<String>,
}

/// Summary statistics of the run
#[derive(Serialize)]
pub struct ExportSummary {
    pub features_analyzed: usize,
    pub features_with_cuts: usize,
    pub features_skipped: usize,
    pub total_cut_points: usize,
    /// Mean entropy removed per feature (bits)
    pub mean_information_gain: f64,
}

/// Complete export document
#[derive(Serialize)]
pub struct CutPointsExport<'a> {
    pub metadata: ExportMetadata,
    pub summary: ExportSummary,
    pub features: &'a [FeatureCuts],
    #[serde(skip_serializing_if = "is_empty_slice")]
    pub skipped: &'a [SkippedFeature],
}

fn is_empty_slice<T>(items: &&[T]) -> bool {
    items.is_empty()
}

/// Parameters describing the run, for metadata
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub target_column: &'a str,
    pub classes: &'a [String],
    /// Keep per-feature split decisions in the output
    pub include_decisions: bool,
}

/// Build the export document for `result`
pub fn build_export<'a>(
    result: &'a DatasetDiscretization,
    features: &'a [FeatureCuts],
    params: &ExportParams,
) -> CutPointsExport<'a> {
    let mean_information_gain = if features.is_empty() {
        0.0
    } else {
        features.iter().map(|f| f.information_gain()).sum::<f64>() / features.len() as f64
    };

    CutPointsExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            target_column: params.target_column.to_string(),
            classes: params.classes.to_vec(),
        },
        summary: ExportSummary {
            features_analyzed: features.len(),
            features_with_cuts: result.features_with_cuts(),
            features_skipped: result.skipped.len(),
            total_cut_points: result.total_cuts(),
            mean_information_gain,
        },
        features,
        skipped: &result.skipped,
    }
}

/// Export cut points to a pretty-printed JSON file
///
/// # Arguments
/// * `result` - Discretization of all features
/// * `output_path` - Path to write the JSON file
/// * `params` - Run parameters for the metadata block
pub fn export_cut_points(
    result: &DatasetDiscretization,
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    // Decisions are dropped by clearing them; serde skips empty lists
    let stripped: Vec<FeatureCuts>;
    let features: &[FeatureCuts] = if params.include_decisions {
        &result.features
    } else {
        stripped = result
            .features
            .iter()
            .cloned()
            .map(|mut f| {
                f.decisions.clear();
                f
            })
            .collect();
        &stripped
    };

    let export = build_export(result, features, params);

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize cut points to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write cut points to {}", output_path.display()))?;

    Ok(())
}
