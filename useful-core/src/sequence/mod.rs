//! Sequence partitioner and collection helpers
//!
//! - [`partition`]: consecutive fixed-size batches (lazy)
//! - [`page`]: a contiguous sub-range selected by start and length
//! - [`list`]: appending several sources onto one list
//! - [`membership`]: emptiness and membership checks
//! - [`lookup`]: keyed and indexed access with fallbacks
//!
//! Sources are never mutated, except by the explicit in-place helpers in
//! [`list`], which take the destination by `&mut`.

pub mod list;
pub mod lookup;
pub mod membership;
pub mod page;
pub mod partition;

pub use list::{add_many, combine, combined, ListExt};
pub use lookup::{element_map_or, element_or, value_or, value_or_default, MapLookup};
pub use membership::{contains_item, is_none_or_empty, is_value_in_list};
pub use page::{page, page_slice, Page};
pub use partition::{
    partition, partition_default, partition_slice, Partitions, DEFAULT_PARTITION_SIZE,
};
