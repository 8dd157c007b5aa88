//! Catalog category filter

use serde::{Deserialize, Serialize};

/// Media category a search is restricted to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Music,
    Software,
    Ebook,
}

impl Category {
    /// The API entity token for this category; empty for `All`
    pub fn entity_name(self) -> &'static str {
        match self {
            Category::All => "",
            Category::Music => "musicTrack",
            Category::Software => "software",
            Category::Ebook => "ebook",
        }
    }

    /// Maps a zero-based filter position to a category
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Category::All),
            1 => Some(Category::Music),
            2 => Some(Category::Software),
            3 => Some(Category::Ebook),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_tokens() {
        assert_eq!(Category::All.entity_name(), "");
        assert_eq!(Category::Music.entity_name(), "musicTrack");
        assert_eq!(Category::Software.entity_name(), "software");
        assert_eq!(Category::Ebook.entity_name(), "ebook");
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Category::from_index(0), Some(Category::All));
        assert_eq!(Category::from_index(1), Some(Category::Music));
        assert_eq!(Category::from_index(2), Some(Category::Software));
        assert_eq!(Category::from_index(3), Some(Category::Ebook));
        assert_eq!(Category::from_index(4), None);
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(Category::default(), Category::All);
    }
}
