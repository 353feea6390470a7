//! Levenshtein (edit) distance implementation
//!
//! Insertions, deletions and substitutions only. A swapped pair of letters
//! costs two edits here, so this metric scores typos more harshly than
//! [`DamerauLevenshtein`](super::DamerauLevenshtein).

use super::{substitution_cost, EditDistance};
use smallvec::SmallVec;

/// Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(min(m,n)) using single-row DP optimization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Levenshtein distance, case-sensitive.
///
/// # Example
/// ```
/// use fuzzy_comparer::algorithms::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("ab", "ba"), 2);
/// ```
#[inline]
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    // Rows run along the shorter string to keep them small
    let (outer, inner) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    let n = inner.len();

    if n == 0 {
        return outer.len();
    }

    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for (i, &oc) in outer.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &ic) in inner.iter().enumerate() {
            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + substitution_cost(oc, ic)); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::FuzzyStringComparer;

    #[test]
    fn test_basic() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("sitting", "kitten"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_no_transposition_discount() {
        assert_eq!(levenshtein_distance("honda", "ohnda"), 2);
        assert_eq!(levenshtein_distance("Done", "doen"), 3);
    }

    #[test]
    fn test_unicode() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("查看门票", "成为门票"), 2);
    }

    #[test]
    fn test_similarity_through_comparer() {
        let lev = Levenshtein::new();
        assert_eq!(lev.similarity_opt(None, Some("")), 1.0);
        assert_eq!(FuzzyStringComparer::similarity(&lev, "HONDA", "honda"), 1.0);
        assert!((FuzzyStringComparer::similarity(&lev, "honda", "ohnda") - 0.6).abs() < 1e-9);
    }
}
