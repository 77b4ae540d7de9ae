//! Text locator: substring search and extraction around a needle
//!
//! Every operation is available three ways:
//! - free functions in [`locate`] taking an explicit [`Comparison`]
//! - methods on a [`TextLocator`], which carries the comparison mode
//! - the [`TextExt`] extension trait on `str`, using the default
//!   case-insensitive comparison
//!
//! ```rust
//! use useful_core::text::{Comparison, TextExt, TextLocator};
//!
//! let value = "some string value to find from";
//! assert_eq!(value.substring_after_value("STRING"), " value to find from");
//!
//! let exact = TextLocator::new(Comparison::CaseSensitive);
//! assert_eq!(exact.after(value, "STRING"), value);
//! ```

pub mod classify;
pub mod comparison;
pub mod join;
pub mod locate;
pub mod search;

pub use classify::{
    chars_equal, is_all_alpha, is_all_alpha_or_numbers, is_all_numbers, is_base64,
    safe_ends_with, safe_starts_with,
};
pub use comparison::Comparison;
pub use join::join;
pub use locate::{
    contains_value, equals_ignore_case, has_value, safe_trim, substring_after_last_value,
    substring_after_value, substring_before_last_value, substring_before_value,
    substring_or_empty,
};
pub use search::{find_first, find_last, Needle};

/// Locator bound to one comparison mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextLocator {
    comparison: Comparison,
}

impl TextLocator {
    /// Create a locator with the given comparison mode
    pub const fn new(comparison: Comparison) -> Self {
        Self { comparison }
    }

    /// Locator that matches case exactly
    pub const fn case_sensitive() -> Self {
        Self::new(Comparison::CaseSensitive)
    }

    /// Get the comparison mode
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// See [`contains_value`]
    pub fn contains<'a>(&self, source: impl Into<Option<&'a str>>, needle: impl Needle) -> bool {
        contains_value(source, needle, self.comparison)
    }

    /// See [`substring_after_value`]
    pub fn after<'a>(&self, source: impl Into<Option<&'a str>>, needle: impl Needle) -> &'a str {
        substring_after_value(source, needle, self.comparison)
    }

    /// See [`substring_after_last_value`]
    pub fn after_last<'a>(
        &self,
        source: impl Into<Option<&'a str>>,
        needle: impl Needle,
    ) -> &'a str {
        substring_after_last_value(source, needle, self.comparison)
    }

    /// See [`substring_before_value`]
    pub fn before<'a>(&self, source: impl Into<Option<&'a str>>, needle: impl Needle) -> &'a str {
        substring_before_value(source, needle, self.comparison)
    }

    /// See [`substring_before_last_value`]
    pub fn before_last<'a>(
        &self,
        source: impl Into<Option<&'a str>>,
        needle: impl Needle,
    ) -> &'a str {
        substring_before_last_value(source, needle, self.comparison)
    }

    /// See [`safe_starts_with`]
    pub fn starts_with<'a>(&self, source: impl Into<Option<&'a str>>, find: &str) -> bool {
        safe_starts_with(source, find, self.comparison)
    }

    /// See [`safe_ends_with`]
    pub fn ends_with<'a>(&self, source: impl Into<Option<&'a str>>, find: &str) -> bool {
        safe_ends_with(source, find, self.comparison)
    }
}

/// Locator operations as methods on `str`, ignoring case
pub trait TextExt {
    /// See [`contains_value`]
    fn contains_value(&self, needle: impl Needle) -> bool;

    /// See [`substring_or_empty`]
    fn substring_or_empty(&self, start: isize, length: isize) -> &str;

    /// See [`substring_after_value`]
    fn substring_after_value(&self, needle: impl Needle) -> &str;

    /// See [`substring_after_last_value`]
    fn substring_after_last_value(&self, needle: impl Needle) -> &str;

    /// See [`substring_before_value`]
    fn substring_before_value(&self, needle: impl Needle) -> &str;

    /// See [`substring_before_last_value`]
    fn substring_before_last_value(&self, needle: impl Needle) -> &str;

    /// See [`equals_ignore_case`]
    fn equals_ignore_case(&self, other: &str) -> bool;
}

impl TextExt for str {
    fn contains_value(&self, needle: impl Needle) -> bool {
        contains_value(self, needle, Comparison::default())
    }

    fn substring_or_empty(&self, start: isize, length: isize) -> &str {
        substring_or_empty(self, start, length)
    }

    fn substring_after_value(&self, needle: impl Needle) -> &str {
        substring_after_value(self, needle, Comparison::default())
    }

    fn substring_after_last_value(&self, needle: impl Needle) -> &str {
        substring_after_last_value(self, needle, Comparison::default())
    }

    fn substring_before_value(&self, needle: impl Needle) -> &str {
        substring_before_value(self, needle, Comparison::default())
    }

    fn substring_before_last_value(&self, needle: impl Needle) -> &str {
        substring_before_last_value(self, needle, Comparison::default())
    }

    fn equals_ignore_case(&self, other: &str) -> bool {
        equals_ignore_case(self, other)
    }
}
