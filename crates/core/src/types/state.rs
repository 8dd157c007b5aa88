//! Search lifecycle state

use crate::types::SearchResult;
use serde::{Deserialize, Serialize};

/// Lifecycle of one logical search.
///
/// Exactly one variant holds at any time; the owning session replaces the
/// value wholesale on every transition. `Results` is non-empty and sorted
/// ascending by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SearchState {
    #[default]
    NotSearchedYet,
    Loading,
    NoResults,
    Results(Vec<SearchResult>),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// True once any search has been issued and not reverted
    pub fn has_searched(&self) -> bool {
        !matches!(self, SearchState::NotSearchedYet)
    }

    /// The result list; empty outside `Results`
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchState::Results(list) => list,
            _ => &[],
        }
    }
}
