//! Fayyad & Irani MDLP acceptance criterion
//!
//! A split is accepted when its information gain pays for the extra
//! description length of encoding the cut and the two resulting sub-models.

use std::hash::Hash;

use serde::Serialize;

use super::entropy::{distinct_count, entropy};
use super::error::{MdlpError, MdlpResult};

/// Class counts above this use `k * log2(3)` for `log2(3^k - 2)`;
/// the `- 2` is below f64 resolution from here on.
const EXACT_POW_MAX_CLASSES: usize = 34;

/// Intermediate quantities of one MDLP acceptance test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcceptanceTest {
    /// `Entropy(labels) - weighted_entropy`
    pub gain: f64,
    /// `log2(3^k - 2) - (k*E - k1*E1 - k2*E2)`
    pub delta: f64,
    /// `log2(n - 1) / n + delta / n`
    pub threshold: f64,
}

impl AcceptanceTest {
    /// Evaluate the criterion for splitting `labels` at `cut_idx`, where
    /// `weighted_entropy` is the length-weighted entropy of the two sides.
    ///
    /// # Errors
    /// `InvalidInput` unless `0 < cut_idx < labels.len()`.
    pub fn evaluate<T: Eq + Hash>(
        labels: &[T],
        cut_idx: usize,
        weighted_entropy: f64,
    ) -> MdlpResult<Self> {
        let n = labels.len();
        if cut_idx == 0 || cut_idx >= n {
            return Err(MdlpError::invalid(format!(
                "cut index {} must lie strictly inside a slice of length {}",
                cut_idx, n
            )));
        }

        let (left, right) = labels.split_at(cut_idx);

        let labels_entropy = entropy(labels)?;
        let left_entropy = entropy(left)?;
        let right_entropy = entropy(right)?;

        let k = distinct_count(labels);
        let k1 = distinct_count(left) as f64;
        let k2 = distinct_count(right) as f64;

        let delta = log2_three_pow_minus_two(k)
            - (k as f64 * labels_entropy - k1 * left_entropy - k2 * right_entropy);

        let n = n as f64;
        let threshold = (n - 1.0).log2() / n + delta / n;

        Ok(Self {
            gain: labels_entropy - weighted_entropy,
            delta,
            threshold,
        })
    }

    /// Whether the gain clears the description-length threshold.
    pub fn accepted(&self) -> bool {
        self.gain >= self.threshold
    }
}

/// Should `labels` be partitioned at `cut_idx`?
pub fn should_partition<T: Eq + Hash>(
    labels: &[T],
    cut_idx: usize,
    weighted_entropy: f64,
) -> MdlpResult<bool> {
    Ok(AcceptanceTest::evaluate(labels, cut_idx, weighted_entropy)?.accepted())
}

/// `log2(3^k - 2)`; zero for a single class.
fn log2_three_pow_minus_two(k: usize) -> f64 {
    if k <= EXACT_POW_MAX_CLASSES {
        (3f64.powi(k as i32) - 2.0).log2()
    } else {
        k as f64 * 3f64.log2()
    }
}
