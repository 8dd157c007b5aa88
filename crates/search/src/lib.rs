//! Catalog search client for the iTunes Search API
//!
//! Three cooperating pieces: [`build_query`] constructs the request URL,
//! [`SearchSession`] owns one logical search at a time and its observable
//! [`SearchState`], and [`decode_results`] normalizes the heterogeneous
//! payload shapes into [`SearchResult`] values.

mod client;
mod decode;
mod error;
mod query;
mod session;

pub use client::{Client, ClientConfig};
pub use decode::decode_results;
pub use error::{ClientError, ClientResult};
pub use query::{build_query, build_query_at, SEARCH_ENDPOINT};
pub use session::SearchSession;

// Re-export the domain types consumers need alongside the session
pub use storesearch_core::{sort_results, Category, SearchResult, SearchState};
