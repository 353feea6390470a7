//! Diagnostic view of the edit distance table
//!
//! A [`DistanceMatrix`] keeps every intermediate cell of the dynamic
//! programming table along with the characters of both inputs, so it can be
//! printed for debugging or serialized for inspection by other tools.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Edit distance table of a source string against a target string.
///
/// Has `source.len() + 1` rows and `target.len() + 1` columns. Cell `(i, j)`
/// is the distance between the first `i` source characters and the first `j`
/// target characters; the bottom-right cell is the full distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    source: Vec<char>,
    target: Vec<char>,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Wrap a row-major table. `cells` must hold `(source.len() + 1) * (target.len() + 1)` values.
    pub(crate) fn from_parts(source: Vec<char>, target: Vec<char>, cells: Vec<usize>) -> Self {
        debug_assert_eq!(cells.len(), (source.len() + 1) * (target.len() + 1));
        Self {
            source,
            target,
            cells,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.source.len() + 1
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.target.len() + 1
    }

    #[must_use]
    pub fn source(&self) -> &[char] {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &[char] {
        &self.target
    }

    /// Cell `(i, j)`, or `None` when out of bounds
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows() && j < self.cols() {
            Some(self.cells[i * self.cols() + j])
        } else {
            None
        }
    }

    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[usize]> {
        let cols = self.cols();
        self.cells.get(i * cols..(i + 1) * cols)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks_exact(self.cols())
    }

    /// The edit distance: the bottom-right cell.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }
}

/// Tab-separated table with the target across the top and the source down
/// the side, followed by the distance.
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t")?;
        for c in &self.target {
            write!(f, "\t{c}")?;
        }
        writeln!(f)?;

        for (i, row) in self.iter_rows().enumerate() {
            if let Some(c) = i.checked_sub(1).map(|k| self.source[k]) {
                write!(f, "{c}")?;
            }
            for cell in row {
                write!(f, "\t{cell}")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        write!(f, "{}", self.distance())
    }
}

impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let source: String = self.source.iter().collect();
        let target: String = self.target.iter().collect();
        let cells: Vec<&[usize]> = self.iter_rows().collect();

        let mut state = serializer.serialize_struct("DistanceMatrix", 4)?;
        state.serialize_field("source", &source)?;
        state.serialize_field("target", &target)?;
        state.serialize_field("cells", &cells)?;
        state.serialize_field("distance", &self.distance())?;
        state.end()
    }
}
