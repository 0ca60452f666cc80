use serde::{Deserialize, Serialize};

/// A review links one game to one author through plain id values.
///
/// Nothing keeps `game_id` or `author_id` pointing at a live record:
/// deleting a game leaves its reviews in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub rating: i32,
    pub content: String,
    pub game_id: String,
    pub author_id: String,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        rating: i32,
        content: impl Into<String>,
        game_id: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            rating,
            content: content.into(),
            game_id: game_id.into(),
            author_id: author_id.into(),
        }
    }
}
