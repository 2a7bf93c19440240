//! Entry point: sort, derive candidates, partition, and map cuts to values

use std::cmp::Ordering;
use std::hash::Hash;

use serde::Serialize;

use super::error::{MdlpError, MdlpResult};
use super::partition::{partition, SplitDecision};
use super::MdlpConfig;

/// Full result of discretizing one feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discretization {
    /// Strictly increasing bin boundaries
    pub cut_points: Vec<f64>,
    /// Accepted cut indices into the sorted feature
    pub cut_indices: Vec<usize>,
    /// Number of candidate positions considered
    pub candidate_count: usize,
    /// Acceptance decisions, in recursion pre-order
    pub decisions: Vec<SplitDecision>,
}

impl Discretization {
    /// Number of bins the cut points define.
    pub fn n_bins(&self) -> usize {
        self.cut_points.len() + 1
    }
}

/// Compute MDLP cut points for feature `x` against labels `y` with default
/// configuration.
///
/// # Example
/// ```
/// use entropymdlp::mdlp::cut_points;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let y = [0, 0, 0, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(cut_points(&x, &y).unwrap(), vec![3.5]);
/// ```
pub fn cut_points<T: Eq + Hash + Sync>(x: &[f64], y: &[T]) -> MdlpResult<Vec<f64>> {
    discretize(x, y, &MdlpConfig::default()).map(|d| d.cut_points)
}

/// Discretize feature `x` against labels `y`.
///
/// # Errors
/// `InvalidInput` for empty input, mismatched lengths, or a non-finite
/// feature value. Nothing is computed in those cases.
pub fn discretize<T: Eq + Hash + Sync>(
    x: &[f64],
    y: &[T],
    config: &MdlpConfig,
) -> MdlpResult<Discretization> {
    validate(x, y)?;

    // Stable ascending order by feature value
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&a, &b| x[a].partial_cmp(&x[b]).unwrap_or(Ordering::Equal));

    let xo: Vec<f64> = order.iter().map(|&i| x[i]).collect();
    let yo: Vec<&T> = order.iter().map(|&i| &y[i]).collect();

    let candidates = candidate_positions(&xo, &yo);
    let result = partition(&yo, &candidates, config)?;

    let cut_points = result
        .cut_indices
        .iter()
        .map(|&i| midpoint(xo[i - 1], xo[i]))
        .collect();

    Ok(Discretization {
        cut_points,
        cut_indices: result.cut_indices,
        candidate_count: candidates.len(),
        decisions: result.decisions,
    })
}

/// Positions `i` in sorted data where both the feature value and the label
/// change between `i - 1` and `i`.
pub fn candidate_positions<T: PartialEq>(xo: &[f64], yo: &[T]) -> Vec<usize> {
    (1..xo.len().min(yo.len()))
        .filter(|&i| xo[i] != xo[i - 1] && yo[i] != yo[i - 1])
        .collect()
}

/// Halfway between two finite values; the sum may overflow for neighbours
/// near `f64::MAX`, in which case the halves are added instead.
fn midpoint(a: f64, b: f64) -> f64 {
    let mid = (a + b) / 2.0;
    if mid.is_finite() {
        mid
    } else {
        a / 2.0 + b / 2.0
    }
}

/// Bin index of a single value: the count of cut points strictly below it.
pub fn bin_of(value: f64, cuts: &[f64]) -> usize {
    cuts.partition_point(|&c| c < value)
}

/// Assign each value to a bin: bin `k` holds values in
/// `(cuts[k - 1], cuts[k]]`, i.e. the count of cut points strictly below it.
pub fn digitize(x: &[f64], cuts: &[f64]) -> Vec<usize> {
    x.iter().map(|&v| bin_of(v, cuts)).collect()
}

fn validate<T>(x: &[f64], y: &[T]) -> MdlpResult<()> {
    if x.is_empty() {
        return Err(MdlpError::invalid("feature array is empty"));
    }
    if x.len() != y.len() {
        return Err(MdlpError::invalid(format!(
            "feature and label arrays differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if let Some(i) = x.iter().position(|v| !v.is_finite()) {
        return Err(MdlpError::invalid(format!(
            "feature value at index {} is not finite ({})",
            i, x[i]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_single_split() {
        let x: Vec<f64> = (1..=10).map(f64::from).collect();
        let y = [0, 0, 0, 1, 1, 1, 1, 1, 1, 1];
        let cuts = cut_points(&x, &y).unwrap();
        assert_eq!(cuts, vec![3.5]);
        assert_eq!(digitize(&x, &cuts), vec![0, 0, 0, 1, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_recurse_once_left() {
        let x = [
            1.0, 1.0, 1.0, 1.0, 1.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0,
            9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0,
        ];
        let y = [
            0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        let cuts = cut_points(&x, &y).unwrap();
        assert_eq!(cuts, vec![2.5, 8.5]);
        assert_eq!(
            digitize(&x, &cuts),
            vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2]
        );
    }

    #[test]
    fn test_recurse_once_right() {
        let y = [0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0];
        let x = range(y.len());
        let cuts = cut_points(&x, &y).unwrap();
        assert_eq!(cuts, vec![6.5]);
        assert_eq!(
            digitize(&x, &cuts),
            vec![0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1]
        );
    }

    #[test]
    fn test_class_change_on_last_index() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [0, 0, 0, 0, 1];
        let cuts = cut_points(&x, &y).unwrap();
        assert_eq!(cuts, vec![4.5]);
        assert_eq!(digitize(&x, &cuts), vec![0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_single_sample_has_no_cuts() {
        let result = discretize(&[42.0], &["a"], &MdlpConfig::default()).unwrap();
        assert!(result.cut_points.is_empty());
        assert_eq!(result.candidate_count, 0);
        assert_eq!(result.n_bins(), 1);
    }

    #[test]
    fn test_constant_feature_has_no_candidates() {
        let result = discretize(&[3.0; 6], &[0, 1, 0, 1, 0, 1], &MdlpConfig::default()).unwrap();
        assert_eq!(result.candidate_count, 0);
        assert!(result.cut_points.is_empty());
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let x = [10.0, 1.0, 9.0, 2.0, 8.0, 3.0, 7.0, 4.0, 6.0, 5.0];
        let y = ["hi", "lo", "hi", "lo", "hi", "lo", "hi", "lo", "hi", "lo"];
        assert_eq!(cut_points(&x, &y).unwrap(), vec![5.5]);
    }

    #[test]
    fn test_candidate_positions_need_both_changes() {
        let xo = [1.0, 1.0, 2.0, 3.0, 4.0];
        let yo = [0, 1, 1, 0, 0];
        // 1: x repeats, 2: label repeats, 3: both change, 4: label repeats
        assert_eq!(candidate_positions(&xo, &yo), vec![3]);
    }

    #[test]
    fn test_digitize_right_closed_bins() {
        let cuts = [1.5, 3.5];
        assert_eq!(digitize(&[1.0, 1.5, 2.0, 3.5, 4.0], &cuts), vec![0, 0, 1, 1, 2]);
        assert_eq!(digitize(&[1.0, 2.0], &[]), vec![0, 0]);
    }

    #[test]
    fn test_invalid_inputs() {
        let empty: [i32; 0] = [];
        assert!(matches!(cut_points(&[], &empty), Err(MdlpError::InvalidInput(_))));
        assert!(matches!(cut_points(&[1.0, 2.0], &[0]), Err(MdlpError::InvalidInput(_))));
        assert!(matches!(
            cut_points(&[1.0, f64::NAN], &[0, 1]),
            Err(MdlpError::InvalidInput(_))
        ));
        assert!(matches!(
            cut_points(&[f64::NEG_INFINITY, 1.0], &[0, 1]),
            Err(MdlpError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_cut_between_huge_neighbours_stays_finite() {
        let x = [1.0e308, 1.7e308];
        let cuts = cut_points(&x, &[0, 1]).unwrap();
        assert_eq!(cuts.len(), 1);
        assert!(cuts[0].is_finite(), "cut overflowed: {}", cuts[0]);
        assert!(cuts[0] > x[0] && cuts[0] < x[1]);
        assert_eq!(digitize(&x, &cuts), vec![0, 1]);

        let x = [-1.7e308, -1.0e308];
        let cuts = cut_points(&x, &[0, 1]).unwrap();
        assert!(cuts[0] > x[0] && cuts[0] < x[1]);
    }

    #[test]
    fn test_bin_of_matches_digitize() {
        let cuts = [1.5, 3.5];
        for v in [0.0, 1.5, 2.0, 3.5, 9.0] {
            assert_eq!(bin_of(v, &cuts), digitize(&[v], &cuts)[0]);
        }
        assert_eq!(bin_of(3.5, &cuts), 1);
        assert_eq!(bin_of(3.6, &cuts), 2);
    }

    #[test]
    fn test_string_labels() {
        let x = range(12);
        let y: Vec<String> = (0..12)
            .map(|i| if i < 6 { "low".to_string() } else { "high".to_string() })
            .collect();
        assert_eq!(cut_points(&x, &y).unwrap(), vec![5.5]);
    }
}
