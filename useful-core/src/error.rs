//! Error types for the helper operations
//!
//! Only precondition violations are reported as errors. Operations that
//! degrade gracefully (most text and paging helpers) never construct these.

use thiserror::Error;

/// Errors raised by helpers with hard preconditions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A numeric argument is outside its accepted range
    #[error("argument '{name}' out of range: {value}")]
    OutOfRange {
        /// The argument name
        name: &'static str,
        /// The rejected value, rendered for display
        value: String,
    },

    /// An argument is missing or unusable
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// The argument name
        name: &'static str,
        /// Why the argument was rejected
        reason: String,
    },

    /// A named property does not exist on a structured value
    #[error("property '{name}' not found")]
    PropertyNotFound {
        /// The requested property name
        name: String,
    },

    /// A named property exists but holds a value of another shape
    #[error("property '{name}' has an unexpected type: {reason}")]
    PropertyType {
        /// The requested property name
        name: String,
        /// The conversion failure
        reason: String,
    },

    /// A value could not be copied through its serialized form
    #[error("value cannot be cloned: {0}")]
    NotCloneable(String),
}

impl Error {
    pub(crate) fn out_of_range(name: &'static str, value: impl ToString) -> Self {
        Error::OutOfRange {
            name,
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for helper operations
pub type Result<T> = std::result::Result<T, Error>;
