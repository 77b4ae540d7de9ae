//! Helpers for optional values

use std::fmt::Display;

/// Extra queries on `Option<T>`
///
/// Fallbacks for missing values are already covered by `unwrap_or` and
/// `unwrap_or_default`.
pub trait OptionExt<T> {
    /// Display form of the value, or `""` when missing
    fn to_string_or_empty(&self) -> String
    where
        T: Display;

    /// True when a value is present and equals `other`
    fn is_equal(&self, other: &T) -> bool
    where
        T: PartialEq;

    /// True when missing or equal to `T::default()`
    fn is_none_or_default(&self) -> bool
    where
        T: Default + PartialEq;
}

impl<T> OptionExt<T> for Option<T> {
    fn to_string_or_empty(&self) -> String
    where
        T: Display,
    {
        self.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    fn is_equal(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_ref() == Some(other)
    }

    fn is_none_or_default(&self) -> bool
    where
        T: Default + PartialEq,
    {
        self.as_ref().map_or(true, |value| *value == T::default())
    }
}
