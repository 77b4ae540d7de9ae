//! Null-tolerant helpers for strings, sequences and small value types
//!
//! The helpers never panic on missing or out-of-range input. Operations
//! that can sensibly degrade return an empty or default value instead;
//! only a few with hard preconditions (a partition size of zero, an
//! unrepresentable date window) report an [`Error`].
//!
//! Missing input is modelled with `Option`: text functions accept anything
//! convertible into `Option<&str>`, so both `"abc"` and `None` can be passed.
//!
//! # Modules
//!
//! - [`text`]: substring search and extraction, trimming, classification
//! - [`sequence`]: lazy partitioning, paging and collection helpers
//! - [`option`]: extra queries on `Option<T>`
//! - [`flags`]: bit-flag set operations
//! - [`describe`]: display descriptions for enum-like values
//! - [`object`]: property access and deep copies through `serde`
//! - [`clock`] and [`time`]: injectable time sources and date comparisons
//!
//! # Example
//!
//! ```rust
//! use useful_core::sequence::partition;
//! use useful_core::text::{substring_before_value, Comparison};
//!
//! let key = substring_before_value("user:42", ":", Comparison::default());
//! assert_eq!(key, "user");
//!
//! let batches: Vec<Vec<i32>> = partition(1..=5, 2).unwrap().collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

pub mod clock;
pub mod describe;
pub mod error;
pub mod flags;
pub mod object;
pub mod option;
pub mod sequence;
pub mod text;
pub mod time;

pub use clock::{Clock, ManualClock, SystemClock};
pub use describe::Described;
pub use error::{Error, Result};
pub use flags::{Flags, FlagsExt};
pub use option::OptionExt;
pub use text::{Comparison, TextExt, TextLocator};
