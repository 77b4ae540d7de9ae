//! Bit-flag queries and updates
//!
//! Any type exposing its bits through [`Flags`] gets the [`FlagsExt`]
//! operations. The [`flags!`](crate::flags!) macro declares such a type with
//! named constants:
//!
//! ```rust
//! use useful_core::flags;
//! use useful_core::flags::FlagsExt;
//! use useful_core::Described;
//!
//! flags! {
//!     pub struct Access: u8 {
//!         const READ = 0b001 => "Read";
//!         const WRITE = 0b010 => "Write";
//!         const EXECUTE = 0b100;
//!     }
//! }
//!
//! let access = Access::READ.set(&[Access::WRITE]);
//! assert!(access.has_all_of(&[Access::READ, Access::WRITE]));
//! assert!(!access.has_flag(Access::EXECUTE));
//! assert_eq!(Access::WRITE.description(), "Write");
//! ```

/// A value backed by a bit set
pub trait Flags: Copy {
    /// The raw bits
    fn bits(self) -> u64;

    /// Rebuild a value from raw bits, keeping unknown bits
    fn from_bits(bits: u64) -> Self;
}

/// Set operations over [`Flags`]
pub trait FlagsExt: Flags {
    /// Are all bits of `entry` set? An empty entry is always contained.
    fn has_flag(self, entry: Self) -> bool {
        self.bits() & entry.bits() == entry.bits()
    }

    /// Is any one of `entries` fully set? False for an empty list.
    fn has_any_of(self, entries: &[Self]) -> bool {
        entries.iter().any(|entry| self.has_flag(*entry))
    }

    /// Are all of `entries` set? False for an empty list.
    fn has_all_of(self, entries: &[Self]) -> bool {
        !entries.is_empty() && entries.iter().all(|entry| self.has_flag(*entry))
    }

    /// Value with every entry's bits added
    fn set(self, entries: &[Self]) -> Self {
        let bits = entries
            .iter()
            .fold(self.bits(), |bits, entry| bits | entry.bits());
        Self::from_bits(bits)
    }

    /// Value with every entry's bits removed
    fn unset(self, entries: &[Self]) -> Self {
        let bits = entries
            .iter()
            .fold(self.bits(), |bits, entry| bits & !entry.bits());
        Self::from_bits(bits)
    }
}

impl<F: Flags> FlagsExt for F {}

macro_rules! impl_flags_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Flags for $ty {
                fn bits(self) -> u64 {
                    self as u64
                }

                fn from_bits(bits: u64) -> Self {
                    bits as $ty
                }
            }
        )*
    };
}

impl_flags_for_unsigned!(u8, u16, u32, u64);

/// Declare a flag newtype with named constants implementing [`Flags`]
///
/// A constant may carry a description after `=>`; the generated
/// [`Described`](crate::describe::Described) impl returns it for a value
/// equal to that constant and `""` for anything else.
#[macro_export]
macro_rules! flags {
    (@description $description:literal) => {
        $description
    };
    (@description) => {
        ""
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $repr:ty {
            $(
                $(#[$flag_meta:meta])*
                const $flag:ident = $value:expr $(=> $description:literal)?;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name($repr);

        impl $name {
            $(
                $(#[$flag_meta])*
                pub const $flag: Self = Self($value);
            )*

            /// Value with no bits set
            pub const fn empty() -> Self {
                Self(0)
            }
        }

        impl $crate::flags::Flags for $name {
            fn bits(self) -> u64 {
                self.0 as u64
            }

            fn from_bits(bits: u64) -> Self {
                Self(bits as $repr)
            }
        }

        impl $crate::describe::Described for $name {
            fn description(&self) -> &'static str {
                $(
                    if *self == Self::$flag {
                        return $crate::flags!(@description $($description)?);
                    }
                )*
                ""
            }
        }
    };
}
