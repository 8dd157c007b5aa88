//! Decoding of heterogeneous catalog payloads
//!
//! The catalog returns a `results` array whose elements come in four shapes,
//! discriminated by `wrapperType` (track, audiobook, software) or, for
//! ebooks, by `kind`. Each shape maps through its own serde entry struct;
//! elements that match no shape or are missing required fields are skipped,
//! never failing the batch.

use crate::error::ClientResult;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use storesearch_core::SearchResult;

#[derive(Debug, Deserialize)]
struct Payload {
    results: Vec<Value>,
}

/// Track and software entries share one field mapping
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackEntry {
    track_name: String,
    artist_name: String,
    #[serde(default)]
    artwork_url60: String,
    #[serde(default)]
    artwork_url100: String,
    track_view_url: String,
    #[serde(default)]
    kind: String,
    currency: String,
    #[serde(default)]
    track_price: f64,
    #[serde(default)]
    primary_genre_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AudiobookEntry {
    collection_name: String,
    artist_name: String,
    #[serde(default)]
    artwork_url60: String,
    #[serde(default)]
    artwork_url100: String,
    collection_view_url: String,
    currency: String,
    #[serde(default)]
    collection_price: f64,
    #[serde(default)]
    primary_genre_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EbookEntry {
    track_name: String,
    artist_name: String,
    #[serde(default)]
    artwork_url60: String,
    #[serde(default)]
    artwork_url100: String,
    track_view_url: String,
    #[serde(default)]
    kind: String,
    currency: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    genres: Vec<String>,
}

impl From<TrackEntry> for SearchResult {
    fn from(entry: TrackEntry) -> Self {
        SearchResult {
            name: entry.track_name,
            artist_name: entry.artist_name,
            artwork_small_url: entry.artwork_url60,
            artwork_large_url: entry.artwork_url100,
            store_url: entry.track_view_url,
            kind: entry.kind,
            currency: entry.currency,
            price: entry.track_price.max(0.0),
            genre: entry.primary_genre_name,
        }
    }
}

impl From<AudiobookEntry> for SearchResult {
    fn from(entry: AudiobookEntry) -> Self {
        SearchResult {
            name: entry.collection_name,
            artist_name: entry.artist_name,
            artwork_small_url: entry.artwork_url60,
            artwork_large_url: entry.artwork_url100,
            store_url: entry.collection_view_url,
            // Audiobook entries carry no kind field of their own
            kind: "audiobook".to_string(),
            currency: entry.currency,
            price: entry.collection_price.max(0.0),
            genre: entry.primary_genre_name,
        }
    }
}

impl From<EbookEntry> for SearchResult {
    fn from(entry: EbookEntry) -> Self {
        SearchResult {
            name: entry.track_name,
            artist_name: entry.artist_name,
            artwork_small_url: entry.artwork_url60,
            artwork_large_url: entry.artwork_url100,
            store_url: entry.track_view_url,
            kind: entry.kind,
            currency: entry.currency,
            price: entry.price.max(0.0),
            genre: entry.genres.join(", "),
        }
    }
}

/// Decodes a raw catalog payload into normalized results.
///
/// Fails only when the payload itself is malformed or the top-level
/// `results` array is missing; individual elements are skipped with a log
/// when they match no known shape or lack a required field. The output is
/// in payload order, unsorted.
pub fn decode_results(payload: &[u8]) -> ClientResult<Vec<SearchResult>> {
    let payload: Payload = serde_json::from_slice(payload)?;
    let mut results = Vec::with_capacity(payload.results.len());
    for entry in &payload.results {
        if let Some(result) = decode_entry(entry) {
            results.push(result);
        }
    }
    Ok(results)
}

fn decode_entry(entry: &Value) -> Option<SearchResult> {
    let decoded = match entry.get("wrapperType").and_then(Value::as_str) {
        Some("track") | Some("software") => {
            serde_json::from_value::<TrackEntry>(entry.clone()).map(SearchResult::from)
        }
        Some("audiobook") => {
            serde_json::from_value::<AudiobookEntry>(entry.clone()).map(SearchResult::from)
        }
        None if entry.get("kind").and_then(Value::as_str) == Some("ebook") => {
            serde_json::from_value::<EbookEntry>(entry.clone()).map(SearchResult::from)
        }
        shape => {
            debug!("skipping result with unrecognized shape {:?}", shape);
            return None;
        }
    };

    match decoded {
        Ok(result) => Some(result),
        Err(err) => {
            warn!("skipping result missing required fields: {}", err);
            None
        }
    }
}
