//! Shannon entropy of categorical label arrays

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::error::{MdlpError, MdlpResult};

/// Shannon entropy, in bits, of a categorical array.
///
/// Computed as `log2(m) - sum(count(c) * log2(count(c))) / m` over the distinct
/// values `c` of `labels`. Counts are summed in ascending order so the result
/// does not depend on hash iteration order.
///
/// # Errors
/// `InvalidInput` if `labels` is empty; entropy is undefined there.
///
/// # Example
/// ```
/// use entropymdlp::mdlp::entropy;
///
/// assert_eq!(entropy(&[1]).unwrap(), 0.0);
/// assert!((entropy(&["a", "b"]).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn entropy<T: Eq + Hash>(labels: &[T]) -> MdlpResult<f64> {
    if labels.is_empty() {
        return Err(MdlpError::invalid("entropy of an empty label array is undefined"));
    }

    let mut counts: HashMap<&T, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    // A single class is full certainty; skip the log arithmetic so the result is exactly 0
    if counts.len() == 1 {
        return Ok(0.0);
    }

    let mut counts: Vec<usize> = counts.into_values().collect();
    counts.sort_unstable();

    let m = labels.len() as f64;
    let weighted_log_sum: f64 = counts
        .iter()
        .map(|&c| {
            let c = c as f64;
            c * c.log2()
        })
        .sum();

    Ok(m.log2() - weighted_log_sum / m)
}

/// Number of distinct labels in `labels`.
pub fn distinct_count<T: Eq + Hash>(labels: &[T]) -> usize {
    labels.iter().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_single_element_is_zero() {
        assert_eq!(entropy(&[1]).unwrap(), 0.0);
    }

    #[test]
    fn test_entropy_single_class_is_exactly_zero() {
        // log2(3) - 3 * log2(3) / 3 does not round to zero on its own
        assert_eq!(entropy(&[7, 7, 7]).unwrap(), 0.0);
        assert_eq!(entropy(&["x"; 101]).unwrap(), 0.0);
    }

    #[test]
    fn test_entropy_empty_is_invalid() {
        let empty: [i32; 0] = [];
        let err = entropy(&empty).unwrap_err();
        assert!(matches!(err, MdlpError::InvalidInput(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_entropy_balanced_binary_is_one_bit() {
        let h = entropy(&[0, 1, 0, 1]).unwrap();
        assert!((h - 1.0).abs() < 1e-12, "Expected 1 bit, got {}", h);
    }

    #[test]
    fn test_entropy_uniform_four_classes_is_two_bits() {
        let h = entropy(&['a', 'b', 'c', 'd', 'a', 'b', 'c', 'd']).unwrap();
        assert!((h - 2.0).abs() < 1e-12, "Expected 2 bits, got {}", h);
    }

    #[test]
    fn test_entropy_matches_probability_form() {
        let labels = [0, 0, 0, 1, 1, 2];
        let h = entropy(&labels).unwrap();

        let expected: f64 = [3.0f64, 2.0, 1.0]
            .iter()
            .map(|c| {
                let p = c / 6.0;
                -p * p.log2()
            })
            .sum();
        assert!((h - expected).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_ignores_label_order() {
        let a = entropy(&[2, 0, 1, 1, 0, 0]).unwrap();
        let b = entropy(&[0, 0, 0, 1, 1, 2]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_entropy_is_non_negative() {
        let samples: [&[u8]; 4] = [&[1], &[1, 2], &[1, 1, 1, 2], &[5, 4, 3, 2, 1]];
        for labels in samples {
            assert!(entropy(labels).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_distinct_count() {
        assert_eq!(distinct_count(&[1, 1, 1]), 1);
        assert_eq!(distinct_count(&["a", "b", "a", "c"]), 3);
        let empty: [u8; 0] = [];
        assert_eq!(distinct_count(&empty), 0);
    }
}
