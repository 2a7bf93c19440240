//! Progress bar helpers using indicatif

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for indeterminate progress
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Create a progress bar counting features
pub fn create_feature_progress(total_features: u64, verb: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_features);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "   {} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} features ({{percent}}%) [{{eta}}]",
                verb
            ))
            .unwrap()
            .progress_chars("=>-"),
    );
    pb
}

/// Finish a progress bar with a success message
pub fn finish_with_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✅ {}", message));
}

/// Finish a progress bar with a warning message
pub fn finish_with_warning(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("⚠️  {}", message));
}
