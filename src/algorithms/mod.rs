//! String comparison algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface so callers can swap metrics without code changes.

pub mod damerau;
pub mod levenshtein;
pub mod metric;
pub mod normalize;

pub use damerau::*;
pub use levenshtein::*;
pub use metric::{Metric, UnknownMetricError};

use normalize::{fold_pair, or_empty};

/// A string similarity comparer.
///
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
/// Implementations must never panic and must treat absent input as empty.
pub trait FuzzyStringComparer: Send + Sync {
    fn similarity(&self, src: &str, modified: &str) -> f64;

    /// Same as [`similarity`](Self::similarity), with absent strings treated as empty.
    fn similarity_opt(&self, src: Option<&str>, modified: Option<&str>) -> f64 {
        self.similarity(or_empty(src), or_empty(modified))
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Trait for edit distance algorithms that return integer distances.
///
/// `distance` compares characters exactly. The provided `similarity` folds
/// case first, so case differences alone never lower the score.
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    fn name(&self) -> &'static str;

    fn distance_opt(&self, a: Option<&str>, b: Option<&str>) -> usize {
        self.distance(or_empty(a), or_empty(b))
    }

    /// Distance between the case-folded forms of `a` and `b`.
    fn folded_distance(&self, a: &str, b: &str) -> usize {
        let (a, b) = fold_pair(a, b);
        if a == b {
            return 0;
        }
        self.distance(&a, &b)
    }

    /// Case-insensitive similarity score (0.0 to 1.0)
    fn similarity(&self, src: &str, modified: &str) -> f64 {
        let (src, modified) = fold_pair(src, modified);
        if src == modified {
            return 1.0;
        }

        let dist = self.distance(&src, &modified);
        normalized_similarity(dist, src.chars().count(), modified.chars().count())
    }
}

/// Blanket implementation: any EditDistance is also a FuzzyStringComparer
impl<T: EditDistance> FuzzyStringComparer for T {
    fn similarity(&self, src: &str, modified: &str) -> f64 {
        EditDistance::similarity(self, src, modified)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

/// Substitution cost of the character pair: 0 on exact match, 1 otherwise.
#[inline(always)]
pub(crate) fn substitution_cost(a: char, b: char) -> usize {
    usize::from(a != b)
}

/// Turn an edit distance into a score relative to the longer input.
///
/// Two empty inputs are identical and score 1.0.
#[inline]
#[must_use]
pub fn normalized_similarity(distance: usize, len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        1.0
    } else {
        1.0 - (distance as f64 / max_len as f64)
    }
}
