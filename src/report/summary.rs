//! Discretization summary report

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{DatasetDiscretization, FeatureCuts};

/// Cut points shown per feature before eliding the rest
const MAX_CUTS_SHOWN: usize = 6;

/// Summary of one discretization run
#[derive(Debug, Default)]
pub struct DiscretizationSummary {
    pub features_analyzed: usize,
    pub features_with_cuts: usize,
    pub features_skipped: usize,
    pub total_cuts: usize,
    pub load_time: Duration,
    pub discretize_time: Duration,
    pub save_time: Duration,
}

impl DiscretizationSummary {
    pub fn new(result: &DatasetDiscretization) -> Self {
        Self {
            features_analyzed: result.features.len(),
            features_with_cuts: result.features_with_cuts(),
            features_skipped: result.skipped.len(),
            total_cuts: result.total_cuts(),
            ..Default::default()
        }
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_discretize_time(&mut self, elapsed: Duration) {
        self.discretize_time = elapsed;
    }

    pub fn set_save_time(&mut self, elapsed: Duration) {
        self.save_time = elapsed;
    }

    /// Mean number of bins over analyzed features
    pub fn mean_bins(&self) -> f64 {
        if self.features_analyzed == 0 {
            0.0
        } else {
            (self.total_cuts + self.features_analyzed) as f64 / self.features_analyzed as f64
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("DISCRETIZATION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Features Analyzed"),
            Cell::new(self.features_analyzed),
        ]);
        table.add_row(vec![
            Cell::new("✂️  Features With Cuts"),
            Cell::new(self.features_with_cuts)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("⏭️  Skipped"),
            Cell::new(self.features_skipped).fg(if self.features_skipped == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![Cell::new("📏 Total Cut Points"), Cell::new(self.total_cuts)]);
        table.add_row(vec![
            Cell::new("🧮 Mean Bins / Feature"),
            Cell::new(format!("{:.2}", self.mean_bins())),
        ]);
        table.add_row(vec![
            Cell::new("⏱  Time (load / fit / save)"),
            Cell::new(format!(
                "{:.2}s / {:.2}s / {:.2}s",
                self.load_time.as_secs_f64(),
                self.discretize_time.as_secs_f64(),
                self.save_time.as_secs_f64()
            )),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}

/// Per-feature table: cut points, bins, and entropy reduction
pub fn feature_table(features: &[FeatureCuts]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Feature").add_attribute(Attribute::Bold),
        Cell::new("Bins").add_attribute(Attribute::Bold),
        Cell::new("Cut Points").add_attribute(Attribute::Bold),
        Cell::new("Gain (bits)").add_attribute(Attribute::Bold),
        Cell::new("Missing").add_attribute(Attribute::Bold),
    ]);

    for feature in features {
        let gain = feature.information_gain();
        table.add_row(vec![
            Cell::new(&feature.feature_name),
            Cell::new(feature.n_bins).set_alignment(CellAlignment::Right),
            Cell::new(format_cut_points(&feature.cut_points)),
            Cell::new(format!("{:.4}", gain)).fg(if gain > 0.0 {
                Color::Green
            } else {
                Color::White
            }),
            Cell::new(feature.missing_count).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Print the per-feature table, indented like the summary
pub fn display_feature_table(features: &[FeatureCuts]) {
    if features.is_empty() {
        return;
    }
    println!();
    println!(
        "    {} {}",
        style("📝").cyan(),
        style("CUT POINTS").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    for line in feature_table(features).to_string().lines() {
        println!("    {}", line);
    }
}

/// Compact rendering of a cut point list, eliding the middle of long lists
pub fn format_cut_points(cuts: &[f64]) -> String {
    if cuts.is_empty() {
        return "—".to_string();
    }

    let fmt = |c: &f64| format!("{}", c);
    if cuts.len() <= MAX_CUTS_SHOWN {
        cuts.iter().map(fmt).collect::<Vec<_>>().join(", ")
    } else {
        let head: Vec<String> = cuts[..MAX_CUTS_SHOWN / 2].iter().map(fmt).collect();
        let tail: Vec<String> = cuts[cuts.len() - MAX_CUTS_SHOWN / 2..]
            .iter()
            .map(fmt)
            .collect();
        format!(
            "{}, … ({} more) …, {}",
            head.join(", "),
            cuts.len() - MAX_CUTS_SHOWN,
            tail.join(", ")
        )
    }
}
