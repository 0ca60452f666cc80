use super::{Author, Game, Review};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial store contents, either built in or read from a YAML file.
///
/// ```yaml
/// games:
///   - { id: "1", title: "Halo", platform: [Xbox] }
/// authors:
///   - { id: "1", name: "Jane Doe", verified: true }
/// reviews:
///   - { id: "1", rating: 8, content: "Solid", gameId: "1", authorId: "1" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub games: Vec<Game>,

    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl SeedData {
    pub fn builtin() -> Self {
        let platform = |p: &str| vec![p.to_string()];
        Self {
            games: vec![
                Game::new("1", "Call of Duty: Modern Warfare").with_platform(platform("PS4")),
                Game::new("2", "The Legend of Zelda: Breath of the Wild")
                    .with_platform(platform("Nintendo Switch")),
                Game::new("3", "Super Mario Odyssey")
                    .with_platform(platform("Nintendo Switch, PS4, Xbox")),
                Game::new("4", "Red Dead Redemption 2").with_platform(platform("PS4, Xbox, PC")),
            ],
            authors: vec![
                Author::new("1", "John Doe", true),
                Author::new("2", "Sara Smith", false),
                Author::new("3", "Jane Doe", true),
                Author::new("4", "Tom Brown", false),
            ],
            reviews: vec![
                Review::new("1", 9, "Great game!", "2", "1"),
                Review::new("2", 8, "Awesome game!", "1", "2"),
                Review::new("3", 7, "Good game!", "3", "3"),
                Review::new("4", 6, "Not bad!", "4", "2"),
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed: SeedData = serde_yaml::from_str(&content)?;
        Ok(seed)
    }

    /// Describe every review whose game or author id matches no record.
    pub fn dangling_references(&self) -> Vec<String> {
        let mut dangling = Vec::new();
        for review in &self.reviews {
            if !self.games.iter().any(|g| g.id == review.game_id) {
                dangling.push(format!(
                    "review {} references missing game {}",
                    review.id, review.game_id
                ));
            }
            if !self.authors.iter().any(|a| a.id == review.author_id) {
                dangling.push(format!(
                    "review {} references missing author {}",
                    review.id, review.author_id
                ));
            }
        }
        dangling
    }
}
