//! Input normalization applied before comparison
//!
//! Absent input is treated as the empty string, and case folding uses the
//! Unicode simple lowercase mapping, which does not depend on the process
//! locale and never changes the number of characters.

use std::borrow::Cow;

/// Treat an absent string as empty.
#[inline]
#[must_use]
pub fn or_empty(s: Option<&str>) -> &str {
    s.unwrap_or_default()
}

/// Simple lowercase mapping of one character.
///
/// The full mapping expands a few characters (`'İ'` becomes `"i\u{307}"`);
/// its first character is the one-to-one mapping.
#[inline]
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lowercase `s` character by character with locale-independent rules.
///
/// The result has exactly as many characters as the input, and no
/// context-dependent forms are produced (`'Σ'` always folds to `'σ'`).
/// Borrows the input when no character has a lowercase mapping, so
/// already-folded text does not allocate.
#[must_use]
pub fn fold_case(s: &str) -> Cow<'_, str> {
    if s.chars().all(|c| fold_char(c) == c) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().map(fold_char).collect())
    }
}

/// Fold both strings
#[must_use]
pub fn fold_pair<'a, 'b>(a: &'a str, b: &'b str) -> (Cow<'a, str>, Cow<'b, str>) {
    (fold_case(a), fold_case(b))
}

/// Equality after case folding.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    fold_case(a) == fold_case(b)
}
