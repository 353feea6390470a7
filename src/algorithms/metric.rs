//! Metric selection
//!
//! Names the available comparers so a caller can choose one from
//! configuration or a command line instead of code.

use super::{DamerauLevenshtein, EditDistance, FuzzyStringComparer, Levenshtein};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a metric name is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown metric: '{0}' (expected one of: damerau_levenshtein, levenshtein)")]
pub struct UnknownMetricError(pub String);

/// Edit distance metric
///
/// - **DamerauLevenshtein**: insertions, deletions, substitutions and adjacent
///   transpositions. Better models keyboard typing errors.
/// - **Levenshtein**: insertions, deletions and substitutions only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    DamerauLevenshtein,
    Levenshtein,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::DamerauLevenshtein, Metric::Levenshtein];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Metric::DamerauLevenshtein => "damerau_levenshtein",
            Metric::Levenshtein => "levenshtein",
        }
    }

    /// Boxed comparer implementing this metric
    #[must_use]
    pub fn comparer(self) -> Box<dyn FuzzyStringComparer> {
        tracing::debug!(metric = self.name(), "selected comparer");
        match self {
            Metric::DamerauLevenshtein => Box::new(DamerauLevenshtein),
            Metric::Levenshtein => Box::new(Levenshtein),
        }
    }

    /// Case-sensitive edit distance under this metric
    #[must_use]
    pub fn distance(self, a: &str, b: &str) -> usize {
        match self {
            Metric::DamerauLevenshtein => DamerauLevenshtein.distance(a, b),
            Metric::Levenshtein => Levenshtein.distance(a, b),
        }
    }

    /// Edit distance after case folding
    #[must_use]
    pub fn folded_distance(self, a: &str, b: &str) -> usize {
        match self {
            Metric::DamerauLevenshtein => DamerauLevenshtein.folded_distance(a, b),
            Metric::Levenshtein => Levenshtein.folded_distance(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = UnknownMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "damerau_levenshtein" | "damerau" | "dl" | "osa" => Ok(Metric::DamerauLevenshtein),
            "levenshtein" | "lev" => Ok(Metric::Levenshtein),
            _ => Err(UnknownMetricError(s.to_string())),
        }
    }
}
