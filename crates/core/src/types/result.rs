//! Normalized catalog search result

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A single catalog entry, normalized across the heterogeneous source shapes
/// (track, audiobook, software, ebook).
///
/// Instances are produced once by the decoder and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub artist_name: String,
    pub artwork_small_url: String,
    pub artwork_large_url: String,
    pub store_url: String,
    /// Raw catalog kind (e.g. "song", "feature-movie"); may be empty
    pub kind: String,
    pub currency: String,
    /// Non-negative; 0 means free
    pub price: f64,
    /// Single genre name, or a comma-joined list for ebooks
    pub genre: String,
}

impl SearchResult {
    /// Human-readable label for the raw catalog kind
    pub fn kind_for_display(&self) -> &str {
        match self.kind.as_str() {
            "album" => "Album",
            "audiobook" => "Audio Book",
            "book" => "Book",
            "ebook" => "E-book",
            "feature-movie" => "Movie",
            "music-video" => "Music Video",
            "podcast" => "Podcast",
            "software" => "App",
            "song" => "Song",
            "tv-episode" => "TV Episode",
            "" => "Unknown",
            other => other,
        }
    }

    /// Compares two results by name, ignoring case and diacritics.
    ///
    /// Meant for `sort_by`. Not an `Ord` impl: equality is defined on the
    /// (name, artist) pair and would disagree with a name-only ordering.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        collation_key(&self.name).cmp(&collation_key(&other.name))
    }
}

/// Two results are the same entry when name and artist both match,
/// regardless of price, genre, or URLs.
impl PartialEq for SearchResult {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.artist_name == other.artist_name
    }
}

impl Eq for SearchResult {}

/// Sorts results ascending by natural name order. Stable.
pub fn sort_results(results: &mut [SearchResult]) {
    results.sort_by(|a, b| a.cmp_by_name(b));
}

/// Collation key: NFD-decompose, drop combining marks, lowercase
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, artist: &str) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            artist_name: artist.to_string(),
            artwork_small_url: String::new(),
            artwork_large_url: String::new(),
            store_url: String::new(),
            kind: String::new(),
            currency: "USD".to_string(),
            price: 0.0,
            genre: String::new(),
        }
    }

    #[test]
    fn test_equality_on_name_and_artist_only() {
        let mut a = result("Hey Jude", "The Beatles");
        let mut b = result("Hey Jude", "The Beatles");
        a.price = 1.29;
        b.price = 0.99;
        a.genre = "Rock".to_string();
        b.store_url = "https://example.com".to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_inequality_on_different_artist() {
        let a = result("Hey Jude", "The Beatles");
        let b = result("Hey Jude", "Some Cover Band");
        assert_ne!(a, b);
    }

    #[test]
    fn test_diacritics_ignored_in_ordering() {
        let abba = result("Äbba", "x");
        let zebra = result("Zebra", "y");
        assert_eq!(abba.cmp_by_name(&zebra), Ordering::Less);
        // Raw byte order would put "Äbba" after "Zebra"
        assert!("Äbba" > "Zebra");
    }

    #[test]
    fn test_case_ignored_in_ordering() {
        let lower = result("apple", "x");
        let upper = result("Banana", "y");
        assert_eq!(lower.cmp_by_name(&upper), Ordering::Less);
    }

    #[test]
    fn test_sort_results_ascending() {
        let mut results = vec![
            result("Zebra", "a"),
            result("Äbba", "b"),
            result("mango", "c"),
        ];
        sort_results(&mut results);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Äbba", "mango", "Zebra"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut results = vec![
            result("Same", "first"),
            result("same", "second"),
            result("SAME", "third"),
        ];
        sort_results(&mut results);
        let artists: Vec<&str> = results.iter().map(|r| r.artist_name.as_str()).collect();
        assert_eq!(artists, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_kind_display_table() {
        let cases = [
            ("album", "Album"),
            ("audiobook", "Audio Book"),
            ("book", "Book"),
            ("ebook", "E-book"),
            ("feature-movie", "Movie"),
            ("music-video", "Music Video"),
            ("podcast", "Podcast"),
            ("software", "App"),
            ("song", "Song"),
            ("tv-episode", "TV Episode"),
        ];
        for (raw, label) in cases {
            let mut r = result("x", "y");
            r.kind = raw.to_string();
            assert_eq!(r.kind_for_display(), label);
        }
    }

    #[test]
    fn test_unrecognized_kind_passes_through() {
        let mut r = result("x", "y");
        r.kind = "coached-audio".to_string();
        assert_eq!(r.kind_for_display(), "coached-audio");
    }

    #[test]
    fn test_absent_kind_displays_unknown() {
        let r = result("x", "y");
        assert_eq!(r.kind_for_display(), "Unknown");
    }
}
