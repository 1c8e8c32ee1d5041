//! contract-rows-util - Utility functions for contract-rows
//!
//! Generic helpers shared by the contract-rows workspace: deep JSON
//! cloning and equality, sequence helpers, insertion sort, and an
//! insertion-ordered map with case-insensitive key lookup.

pub mod case_insensitive_map;
pub mod json_clone;
pub mod json_equal;
pub mod last;
pub mod sort;

// Re-exports for convenience
pub use case_insensitive_map::CaseInsensitiveMap;
pub use json_clone::clone;
pub use json_equal::deep_equal;
pub use last::last;
pub use sort::{insertion_sort, insertion_sort_by, insertion_sort_by_key};
