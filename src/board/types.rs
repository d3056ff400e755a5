//! Board model for chanboard.

use serde::{Deserialize, Serialize};

/// Board entity: a named category identified by its slug.
///
/// Boards are values. Changing one means building a new `Board` with the
/// same slug and handing it to the repository's `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slug: String,
    name: String,
    description: String,
}

impl Board {
    /// Create a board from its three fields.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Unique, URL-safe identifier.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new() {
        let board = Board::new("tech", "Technology", "Tech board");

        assert_eq!(board.slug(), "tech");
        assert_eq!(board.name(), "Technology");
        assert_eq!(board.description(), "Tech board");
    }

    #[test]
    fn test_board_accepts_owned_strings() {
        let slug = String::from("b");
        let board = Board::new(slug, String::from("Random"), "");

        assert_eq!(board.slug(), "b");
        assert_eq!(board.description(), "");
    }

    #[test]
    fn test_board_equality() {
        let a = Board::new("tech", "Technology", "Tech board");
        let b = Board::new("tech", "Technology", "Tech board");
        let c = Board::new("tech", "Tech Updated", "Tech board");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_board_serialize() {
        let board = Board::new("news", "News", "News board");
        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(json["slug"], "news");
        assert_eq!(json["name"], "News");
        assert_eq!(json["description"], "News board");
    }
}
