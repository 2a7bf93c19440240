//! Command-line argument definitions using clap

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::mdlp::{MdlpConfig, DEFAULT_PARALLEL_MIN_LEN};
use crate::pipeline::DiscretizeConfig;

/// mdlp - Supervised discretization of numeric features with the MDLP criterion
#[derive(Parser, Debug)]
#[command(name = "mdlp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Target column name (categorical labels; any column type)
    #[arg(short, long)]
    pub target: String,

    /// Output path for the binned dataset (CSV or Parquet, by extension).
    /// Defaults to the input directory with a '_binned' suffix
    /// (e.g., data.csv → data_binned.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output path for the JSON cut point export.
    /// Defaults to the input directory with a '_cuts.json' suffix.
    #[arg(long)]
    pub cuts_output: Option<PathBuf>,

    /// Only write the cut points, not the binned dataset
    #[arg(long, default_value = "false")]
    pub no_binned: bool,

    /// Columns to ignore (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub drop_columns: Vec<String>,

    /// Restrict discretization to these numeric columns (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub features: Vec<String>,

    /// Slice length from which recursive partitioning forks onto the thread pool.
    /// Use 0 to always run sequentially.
    #[arg(long, default_value_t = DEFAULT_PARALLEL_MIN_LEN)]
    pub parallel_min_len: usize,

    /// Print every split decision and include them in the JSON export
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Binned dataset path, or `None` when `--no-binned` is set.
    pub fn output_path(&self) -> Option<PathBuf> {
        if self.no_binned {
            return None;
        }
        Some(self.output.clone().unwrap_or_else(|| {
            let extension = self
                .input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("parquet");
            sibling_path(&self.input, &format!("_binned.{}", extension))
        }))
    }

    /// JSON export path, derived from the input if not given.
    pub fn cuts_output_path(&self) -> PathBuf {
        self.cuts_output
            .clone()
            .unwrap_or_else(|| sibling_path(&self.input, "_cuts.json"))
    }

    /// Partitioner configuration; 0 maps to sequential execution.
    pub fn mdlp_config(&self) -> MdlpConfig {
        MdlpConfig {
            parallel_min_len: if self.parallel_min_len == 0 {
                usize::MAX
            } else {
                self.parallel_min_len
            },
        }
    }

    /// Dataset-level configuration
    pub fn discretize_config(&self) -> DiscretizeConfig {
        DiscretizeConfig {
            mdlp: self.mdlp_config(),
            exclude: self.drop_columns.clone(),
            features: if self.features.is_empty() {
                None
            } else {
                Some(self.features.clone())
            },
        }
    }
}

/// `<dir>/<stem><suffix>` next to `input`
fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    parent.join(format!("{}{}", stem, suffix))
}
