//! Joining displayable items

use super::search::Needle;
use std::fmt::Display;

/// Join the display form of `items` with a char or string separator
pub fn join<I>(items: I, separator: impl Needle) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    separator.with_str(|separator| {
        items
            .into_iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    })
}
