//! fuzzy-comparer - case-insensitive string similarity
//!
//! Scores how close two strings are from their restricted Damerau-Levenshtein
//! edit distance, for ranking or filtering near-matches where an exact match
//! fails (fuzzy search, typo tolerance).
//!
//! # Features
//! - Restricted Damerau-Levenshtein distance (adjacent transpositions cost 1)
//! - Similarity score in `[0, 1]` relative to the longer input
//! - Case-insensitive scoring with locale-independent folding
//! - Absent input treated as empty; no operation can fail
//! - Swappable metrics behind the [`FuzzyStringComparer`] trait
//! - Full DP table for diagnostics ([`DistanceMatrix`])
//!
//! # Example
//! ```
//! use fuzzy_comparer::{DamerauLevenshtein, FuzzyStringComparer};
//!
//! let comparer = DamerauLevenshtein::new();
//! assert_eq!(comparer.similarity("I'm Done", "i'm done"), 1.0);
//! assert_eq!(comparer.similarity_opt(None, None), 1.0);
//! assert!((comparer.similarity("honda", "ohnda") - 0.8).abs() < 1e-9);
//! ```

pub mod algorithms;
pub mod matrix;

pub use algorithms::{
    build_matrix, damerau_levenshtein_distance, damerau_levenshtein_similarity, folded_distance,
    levenshtein_distance, normalized_similarity, DamerauLevenshtein, EditDistance,
    FuzzyStringComparer, Levenshtein, Metric, UnknownMetricError,
};
pub use matrix::DistanceMatrix;

/// Case-insensitive Damerau-Levenshtein similarity, absent input treated as empty.
#[inline]
#[must_use]
pub fn similarity(src: Option<&str>, modified: Option<&str>) -> f64 {
    DamerauLevenshtein.similarity_opt(src, modified)
}

/// Case-sensitive Damerau-Levenshtein distance, absent input treated as empty.
#[inline]
#[must_use]
pub fn distance(original: Option<&str>, modified: Option<&str>) -> usize {
    DamerauLevenshtein.distance_opt(original, modified)
}
