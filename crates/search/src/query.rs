//! Catalog search URL construction

use reqwest::Url;
use storesearch_core::Category;

/// Production search endpoint
pub const SEARCH_ENDPOINT: &str = "https://itunes.apple.com/search";

/// Fixed result-count limit baked into every query
const RESULT_LIMIT: &str = "200";

/// Builds the catalog search URL for a term and category filter.
///
/// The query serializer owns the percent-encoding of the term, which is
/// total for Rust strings. The `entity` parameter is always present, with
/// an empty token for `Category::All`.
pub fn build_query(search_text: &str, category: Category) -> Url {
    let endpoint = Url::parse(SEARCH_ENDPOINT).expect("endpoint literal is a valid URL");
    build_query_at(&endpoint, search_text, category)
}

/// Same as [`build_query`] against an alternate endpoint
pub fn build_query_at(endpoint: &Url, search_text: &str, category: Category) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("term", search_text)
        .append_pair("limit", RESULT_LIMIT)
        .append_pair("entity", category.entity_name());
    url
}
