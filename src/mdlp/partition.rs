//! Recursive MDLP partitioning
//!
//! Each call searches the best cut of its slice, stops if that cut fails the
//! acceptance test, and otherwise recurses into the left and right halves.
//! Halves never overlap, so large slices fork into `rayon::join`.
//!
//! Candidates stay in the coordinates of the full label array; a sub-problem
//! is identified by the offset of its slice, so nothing is re-indexed.

use std::hash::Hash;

use serde::Serialize;

use super::criterion::AcceptanceTest;
use super::error::{MdlpError, MdlpResult};
use super::search::find_cut_index_from;
use super::MdlpConfig;

/// The outcome of evaluating the best cut of one sub-problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitDecision {
    /// First index of the sub-problem's slice
    pub start: usize,
    /// One past the last index of the slice
    pub end: usize,
    /// Recursion depth, 0 for the whole array
    pub depth: usize,
    /// Number of candidates the sub-problem received
    pub candidates: usize,
    /// Best cut index, in full-array coordinates
    pub cut_index: usize,
    pub weighted_entropy: f64,
    pub gain: f64,
    pub threshold: f64,
    pub accepted: bool,
}

/// Accepted cuts plus the decisions that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Partition {
    /// Strictly increasing accepted cut indices
    pub cut_indices: Vec<usize>,
    /// Decisions in pre-order: parent, left subtree, right subtree
    pub decisions: Vec<SplitDecision>,
}

/// Partition `labels` using the given candidate positions.
///
/// `candidates` must be strictly increasing and lie strictly inside
/// `labels`. The returned cut indices are a subset of `candidates`.
pub fn partition<T: Eq + Hash + Sync>(
    labels: &[T],
    candidates: &[usize],
    config: &MdlpConfig,
) -> MdlpResult<Partition> {
    let n = labels.len();
    if let Some(&bad) = candidates.iter().find(|&&c| c == 0 || c >= n) {
        return Err(MdlpError::invalid(format!(
            "candidate {} lies outside the open range (0, {})",
            bad, n
        )));
    }
    if candidates.windows(2).any(|w| w[0] >= w[1]) {
        return Err(MdlpError::invalid("candidates must be strictly increasing"));
    }

    partition_range(labels, candidates, 0, 0, config)
}

fn partition_range<T: Eq + Hash + Sync>(
    labels: &[T],
    candidates: &[usize],
    base: usize,
    depth: usize,
    config: &MdlpConfig,
) -> MdlpResult<Partition> {
    if candidates.is_empty() {
        return Ok(Partition::default());
    }

    let Some(best) = find_cut_index_from(labels, candidates, base)? else {
        return Ok(Partition::default());
    };

    let cut_index = candidates[best.candidate];
    let local = cut_index - base;
    let test = AcceptanceTest::evaluate(labels, local, best.weighted_entropy)?;

    let decision = SplitDecision {
        start: base,
        end: base + labels.len(),
        depth,
        candidates: candidates.len(),
        cut_index,
        weighted_entropy: best.weighted_entropy,
        gain: test.gain,
        threshold: test.threshold,
        accepted: test.accepted(),
    };

    // The best cut failing means no cut in this range is taken
    if !decision.accepted {
        return Ok(Partition {
            cut_indices: Vec::new(),
            decisions: vec![decision],
        });
    }

    let (left_labels, right_labels) = labels.split_at(local);
    let left_candidates = &candidates[..best.candidate];
    let right_candidates = &candidates[best.candidate + 1..];

    let recurse_left = || partition_range(left_labels, left_candidates, base, depth + 1, config);
    let recurse_right =
        || partition_range(right_labels, right_candidates, cut_index, depth + 1, config);

    let (left, right) = if labels.len() >= config.parallel_min_len {
        rayon::join(recurse_left, recurse_right)
    } else {
        (recurse_left(), recurse_right())
    };
    let (left, right) = (left?, right?);

    let mut cut_indices = left.cut_indices;
    cut_indices.push(cut_index);
    cut_indices.extend(right.cut_indices);

    let mut decisions = Vec::with_capacity(1 + left.decisions.len() + right.decisions.len());
    decisions.push(decision);
    decisions.extend(left.decisions);
    decisions.extend(right.decisions);

    Ok(Partition {
        cut_indices,
        decisions,
    })
}
