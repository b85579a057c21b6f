//! Weighted Levenshtein distance.
//!
//! The dynamic-programming table is never materialised: a single buffer of
//! `2 * (|s2| + 1)` cells is allocated per call and split into the previous
//! and the current row, whose roles are swapped after each row of `s1`.

use crate::{Cost, EditWeights};
use unicode_segmentation::UnicodeSegmentation;

/// Minimum total cost of turning `s1` into `s2`.
///
/// Deleting an element of `s1` costs `weights.deletion`, inserting an element
/// of `s2` costs `weights.insertion` and replacing one element with a
/// different one costs `weights.substitution`. Equal elements are matched for
/// free. With asymmetric weights the argument order matters.
///
/// ```
/// use fuzzy_gacha::{EditWeights, weighted_levenshtein};
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(weighted_levenshtein(&a, &b, &EditWeights::UNIT), 3);
/// ```
pub fn weighted_levenshtein<T: PartialEq>(s1: &[T], s2: &[T], weights: &EditWeights) -> Cost {
    let width = s2.len() + 1;
    let mut rows = vec![0; 2 * width];
    let (mut prev, mut cur) = rows.split_at_mut(width);

    for (j, cell) in prev.iter_mut().enumerate() {
        *cell = j * weights.insertion;
    }

    for (i, a) in s1.iter().enumerate() {
        cur[0] = (i + 1) * weights.deletion;
        for (j, b) in s2.iter().enumerate() {
            cur[j + 1] = if a == b {
                prev[j]
            } else {
                (weights.deletion + prev[j + 1])
                    .min(weights.insertion + cur[j])
                    .min(weights.substitution + prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    // after the final swap the last computed row is `prev`
    prev[s2.len()]
}

/// Weighted edit distance between two strings, measured in grapheme clusters.
///
/// ```
/// use fuzzy_gacha::{EditWeights, edit_distance};
///
/// assert_eq!(edit_distance("kitten", "sitting", &EditWeights::default()), 3);
/// assert_eq!(edit_distance("", "abc", &EditWeights::new(9, 1, 10)), 3);
/// ```
pub fn edit_distance(s1: &str, s2: &str, weights: &EditWeights) -> Cost {
    let a: Vec<&str> = s1.graphemes(true).collect();
    let b: Vec<&str> = s2.graphemes(true).collect();
    weighted_levenshtein(&a, &b, weights)
}

/// Share of `reference` that `typed` reproduces, as used by typing tests:
/// `1 - distance / len(reference)` with unit weights.
///
/// Returns `None` for an empty reference. The value drops below zero when
/// `typed` needs more edits than `reference` has graphemes.
pub fn typing_accuracy(reference: &str, typed: &str) -> Option<f64> {
    let len = reference.graphemes(true).count();
    if len == 0 {
        return None;
    }
    let distance = edit_distance(reference, typed, &EditWeights::UNIT);
    Some(1.0 - distance as f64 / len as f64)
}
