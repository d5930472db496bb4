//! Shared value types.

pub mod pagination;
pub mod sort;

pub use pagination::{PageRequest, PageResponse};
pub use sort::SortOrder;
