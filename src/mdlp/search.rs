//! Best binary cut search over candidate positions

use std::hash::Hash;

use super::entropy::entropy;
use super::error::{MdlpError, MdlpResult};

/// The winning candidate of a cut search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestCut {
    /// Index into the candidate list (not into the labels)
    pub candidate: usize,
    /// Length-weighted entropy of the two sides at that candidate
    pub weighted_entropy: f64,
}

/// Find the candidate position minimizing the length-weighted entropy of
/// `labels[..pos]` and `labels[pos..]`.
///
/// Ties go to the earliest candidate. Returns `Ok(None)` for an empty
/// candidate list.
///
/// # Errors
/// `InvalidInput` if a candidate does not lie strictly inside `labels`.
pub fn find_cut_index<T: Eq + Hash>(
    labels: &[T],
    candidates: &[usize],
) -> MdlpResult<Option<BestCut>> {
    find_cut_index_from(labels, candidates, 0)
}

/// Same as [`find_cut_index`] for a slice that starts at `base` in a larger
/// array, with `candidates` expressed in that array's coordinates.
pub(crate) fn find_cut_index_from<T: Eq + Hash>(
    labels: &[T],
    candidates: &[usize],
    base: usize,
) -> MdlpResult<Option<BestCut>> {
    let n = labels.len();
    let mut best: Option<BestCut> = None;
    let mut best_entropy = f64::INFINITY;

    for (candidate, &position) in candidates.iter().enumerate() {
        let pos = position.checked_sub(base).filter(|&p| p > 0 && p < n).ok_or_else(|| {
            MdlpError::invalid(format!(
                "candidate {} lies outside the open range ({}, {})",
                position,
                base,
                base + n
            ))
        })?;

        let weight = pos as f64 / n as f64;
        let left = weight * entropy(&labels[..pos])?;
        let right = (1.0 - weight) * entropy(&labels[pos..])?;
        let score = left + right;

        if score < best_entropy {
            best_entropy = score;
            best = Some(BestCut {
                candidate,
                weighted_entropy: score,
            });
        }
    }

    Ok(best)
}
