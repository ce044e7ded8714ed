//! Locale-aware string ordering for the text columns.
//!
//! Strings are compared on their NFD decomposition with combining marks
//! dropped first, so accented letters sort next to their base letter. Only
//! strings equal at that level are ordered by their marks.
//!
//! This is not a full locale collation. Characters other than letters keep
//! their code point order: digits and most ASCII punctuation sort before
//! letters, while `{`, `|`, `}` and `~` sort after them. A browser's root
//! collation would put all punctuation first.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings with accent-insensitive primary ordering.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .cmp(b.nfd().filter(|c| !is_combining_mark(*c)));

    primary.then_with(|| a.nfd().cmp(b.nfd()))
}

/// Lowercase both sides, then [`locale_compare`].
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    locale_compare(&a.to_lowercase(), &b.to_lowercase())
}
