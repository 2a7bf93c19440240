//! mdlp: supervised discretization CLI
//!
//! Loads a dataset, computes MDLP cut points for every numeric feature
//! against a target column, and writes the cut points (JSON) and optionally
//! the binned dataset.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use entropymdlp::cli::{confirm_overwrite, Cli};
use entropymdlp::pipeline::{
    apply_cuts, discretize_features, extract_labels, label_classes, load_dataset_with_progress,
    save_dataset, FeatureCuts,
};
use entropymdlp::report::{display_feature_table, export_cut_points, DiscretizationSummary, ExportParams};
use entropymdlp::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let binned_path = cli.output_path();
    let cuts_path = cli.cuts_output_path();
    let config = cli.discretize_config();

    if !cli.no_confirm {
        let mut outputs = vec![cuts_path.as_path()];
        if let Some(path) = &binned_path {
            outputs.push(path.as_path());
        }
        if !confirm_overwrite(&outputs)? {
            println!("Cancelled by user.");
            return Ok(());
        }
    }

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        &cli.input,
        &cli.target,
        binned_path.as_deref(),
        &cuts_path,
        config.mdlp.parallel_min_len,
    );

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let (df, rows, cols, memory_mb) = load_dataset_with_progress(&cli.input, cli.infer_schema_length)?;
    print_success("Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let labels = extract_labels(&df, &cli.target)?;
    let classes = label_classes(&labels);
    print_count(
        "target class(es)",
        classes.len(),
        Some(&format!("in '{}'", cli.target)),
    );
    if classes.len() < 2 {
        print_warning("Target has a single class; no feature can be split");
    }
    let load_elapsed = step_start.elapsed();
    print_step_time(load_elapsed);

    // Step 2: Discretize
    print_step_header(2, "MDLP Discretization");
    let step_start = Instant::now();
    let result = discretize_features(&df, &cli.target, &labels, &config)?;

    if result.features.is_empty() && result.skipped.is_empty() {
        print_info("No numeric features to discretize");
    } else {
        print_count(
            "feature(s) with informative cuts",
            result.features_with_cuts(),
            Some(&format!("of {}", result.features.len())),
        );
        for skipped in &result.skipped {
            print_warning(&format!("Skipped '{}': {}", skipped.feature_name, skipped.reason));
        }
    }

    if cli.verbose {
        for feature in &result.features {
            print_decisions(feature);
        }
    }

    let mut summary = DiscretizationSummary::new(&result);
    summary.set_load_time(load_elapsed);
    let discretize_elapsed = step_start.elapsed();
    summary.set_discretize_time(discretize_elapsed);
    print_step_time(discretize_elapsed);

    // Step 3: Save results
    print_step_header(3, "Save Results");
    let step_start = Instant::now();

    let spinner = create_spinner("Writing cut points...");
    let input_file = cli.input.display().to_string();
    export_cut_points(
        &result,
        &cuts_path,
        &ExportParams {
            input_file: &input_file,
            target_column: &cli.target,
            classes: &classes,
            include_decisions: cli.verbose,
        },
    )?;
    finish_with_success(&spinner, &format!("Saved cut points to {}", cuts_path.display()));

    if let Some(path) = &binned_path {
        let spinner = create_spinner("Writing binned dataset...");
        let mut binned = apply_cuts(&df, &result.features)?;
        save_dataset(&mut binned, path)?;
        finish_with_success(&spinner, &format!("Saved binned dataset to {}", path.display()));
    }

    let save_elapsed = step_start.elapsed();
    summary.set_save_time(save_elapsed);
    print_step_time(save_elapsed);

    summary.display();
    display_feature_table(&result.features);
    print_completion();

    Ok(())
}

/// Print the partitioner's decision trace for one feature
fn print_decisions(feature: &FeatureCuts) {
    println!();
    println!(
        "    {} {}",
        style("▸").cyan(),
        style(&feature.feature_name).white().bold()
    );
    if feature.decisions.is_empty() {
        println!("      {}", style("no candidate cut positions").dim());
        return;
    }
    for d in &feature.decisions {
        let verdict = if d.accepted {
            style("accept").green()
        } else {
            style("reject").red()
        };
        println!(
            "      {}[{}, {}) cut@{} candidates={} gain={:.4} threshold={:.4} {}",
            "  ".repeat(d.depth),
            d.start,
            d.end,
            d.cut_index,
            d.candidates,
            d.gain,
            d.threshold,
            verdict
        );
    }
}
