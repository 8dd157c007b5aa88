//! Domain types for the StoreSearch catalog client
//!
//! Value types shared between the search crate and any presentation layer:
//! the normalized result entity, the category filter, and the search-state
//! sum type. No I/O lives here.

pub mod types;

pub use types::{sort_results, Category, SearchResult, SearchState};
