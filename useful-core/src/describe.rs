//! Human-readable descriptions of enum-like values
//!
//! Types declared with [`flags!`](crate::flags!) get an implementation from
//! the `=> "text"` suffix on their constants. Plain enums implement
//! [`Described`] by hand.

/// A value with an optional display description
pub trait Described {
    /// The description, or `""` when none was given
    fn description(&self) -> &'static str;
}

impl<T: Described> Described for Option<T> {
    fn description(&self) -> &'static str {
        self.as_ref().map_or("", Described::description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Status {
        Active,
        Suspended,
        Unknown,
    }

    impl Described for Status {
        fn description(&self) -> &'static str {
            match self {
                Status::Active => "Account is active",
                Status::Suspended => "Account is suspended",
                Status::Unknown => "",
            }
        }
    }

    #[test]
    fn test_hand_written_descriptions() {
        assert_eq!(Status::Active.description(), "Account is active");
        assert_eq!(Status::Suspended.description(), "Account is suspended");
        assert_eq!(Status::Unknown.description(), "");
    }

    #[test]
    fn test_missing_value_has_no_description() {
        assert_eq!(None::<Status>.description(), "");
        assert_eq!(Some(Status::Active).description(), "Account is active");
    }
}
