//! Search session state machine
//!
//! A `SearchSession` owns the single `SearchState` for one logical search at
//! a time. Issuing a new search supersedes the outstanding one: the old
//! request task is aborted, and if its completion still arrives it is
//! discarded by generation check. Every transition happens under the state
//! lock paired with the per-search generation, so readers always snapshot a
//! consistent value and a stale completion can never overwrite a newer
//! search's state.

use crate::client::Client;
use crate::decode::decode_results;
use crate::error::ClientResult;
use crate::query::{build_query_at, SEARCH_ENDPOINT};
use log::{debug, warn};
use reqwest::Url;
use std::sync::Arc;
use storesearch_core::{sort_results, Category, SearchResult, SearchState};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

struct Guarded {
    state: SearchState,
    generation: u64,
}

/// Manages one in-flight catalog search and its observable state.
///
/// Explicitly constructed and owned; inject it into whatever consumes it.
pub struct SearchSession {
    client: Client,
    endpoint: Url,
    guarded: Arc<Mutex<Guarded>>,
    current: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl SearchSession {
    /// Creates a session against the production endpoint
    pub fn new(client: Client) -> Self {
        let endpoint = Url::parse(SEARCH_ENDPOINT).expect("endpoint literal is a valid URL");
        Self::with_endpoint(client, endpoint)
    }

    /// Creates a session against an alternate endpoint
    pub fn with_endpoint(client: Client, endpoint: Url) -> Self {
        Self {
            client,
            endpoint,
            guarded: Arc::new(Mutex::new(Guarded {
                state: SearchState::NotSearchedYet,
                generation: 0,
            })),
            current: std::sync::Mutex::new(None),
        }
    }

    /// Snapshot of the current search state
    pub async fn state(&self) -> SearchState {
        self.guarded.lock().await.state.clone()
    }

    /// Issues a search, superseding any search still in flight.
    ///
    /// Empty `text` is a no-op: no request, no state change, no callback.
    /// Otherwise the state moves to `Loading` before this method returns,
    /// and `on_complete` fires exactly once with the success flag — unless
    /// this search is itself superseded, in which case it fires not at all.
    pub async fn search<F>(&self, text: &str, category: Category, on_complete: F)
    where
        F: FnOnce(bool) + Send + 'static,
    {
        if text.is_empty() {
            return;
        }

        let generation = {
            let mut guarded = self.guarded.lock().await;
            guarded.generation += 1;
            guarded.state = SearchState::Loading;
            guarded.generation
        };

        self.abort_current();

        let url = build_query_at(&self.endpoint, text, category);
        debug!("searching {:?} (generation {})", text, generation);

        let client = self.client.clone();
        let guarded = Arc::clone(&self.guarded);
        let handle = tokio::spawn(async move {
            let outcome = fetch(&client, url).await;

            let mut guarded = guarded.lock().await;
            if guarded.generation != generation {
                // A newer search owns the state now
                debug!("dropping stale completion for generation {}", generation);
                return;
            }
            let success = match outcome {
                Ok(results) if results.is_empty() => {
                    guarded.state = SearchState::NoResults;
                    true
                }
                Ok(results) => {
                    guarded.state = SearchState::Results(results);
                    true
                }
                Err(err) => {
                    warn!("search failed: {}", err);
                    guarded.state = SearchState::NotSearchedYet;
                    false
                }
            };
            drop(guarded);
            on_complete(success);
        });

        if let Ok(mut current) = self.current.lock() {
            *current = Some(handle);
        }
    }

    fn abort_current(&self) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(handle) = current.take() {
                debug!("superseding in-flight search");
                handle.abort();
            }
        }
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        // No dangling completion may touch the state after teardown
        self.abort_current();
    }
}

async fn fetch(client: &Client, url: Url) -> ClientResult<Vec<SearchResult>> {
    let response = client.get(url).await?;
    let body = response.bytes().await?;
    let mut results = decode_results(&body)?;
    sort_results(&mut results);
    Ok(results)
}
