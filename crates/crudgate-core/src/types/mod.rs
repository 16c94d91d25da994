//! Core type definitions used across the crudgate workspace.

pub mod filter;
pub mod options;
pub mod sorting;

pub use filter::{FilterField, FilterOp, FilterValue};
pub use options::QueryOptions;
pub use sorting::{SortDirection, SortField};
