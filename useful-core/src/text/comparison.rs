//! Comparison modes for text operations

use serde::{Deserialize, Serialize};

/// How characters are compared during search and equality checks
///
/// Both modes are ordinal: characters are compared by code point, never by
/// locale rules. `CaseInsensitive` folds each character through its simple
/// uppercase mapping before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Comparison {
    /// Exact code point comparison
    CaseSensitive,
    /// Code point comparison after simple case folding
    #[default]
    CaseInsensitive,
}

impl Comparison {
    /// Returns true for [`Comparison::CaseSensitive`]
    pub fn is_case_sensitive(self) -> bool {
        matches!(self, Comparison::CaseSensitive)
    }

    /// Compare two characters under this mode
    pub fn chars_equal(self, left: char, right: char) -> bool {
        match self {
            Comparison::CaseSensitive => left == right,
            Comparison::CaseInsensitive => left == right || fold(left) == fold(right),
        }
    }

    /// Compare two strings under this mode
    pub fn strs_equal(self, left: &str, right: &str) -> bool {
        match self {
            Comparison::CaseSensitive => left == right,
            Comparison::CaseInsensitive => {
                let mut left = left.chars();
                let mut right = right.chars();
                loop {
                    match (left.next(), right.next()) {
                        (None, None) => return true,
                        (Some(l), Some(r)) if self.chars_equal(l, r) => continue,
                        _ => return false,
                    }
                }
            }
        }
    }
}

/// Simple uppercase mapping; characters whose uppercase form expands to
/// several characters (e.g. `ß`) are left as they are.
fn fold(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_uppercase();
    }

    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}
