//! Core domain types

mod category;
mod result;
mod state;

pub use category::Category;
pub use result::{sort_results, SearchResult};
pub use state::SearchState;
