use crate::{
    error::{GameReviewsError, Result},
    model::{Author, Game, GameEdit, Review, SeedData},
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const DEFAULT_ID_LENGTH: usize = 4;

/// How many fresh ids `add_game` draws before giving up.
const MAX_ID_ATTEMPTS: usize = 64;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// In-memory store for games, authors and reviews.
///
/// Games are held as a shared snapshot. Readers clone the `Arc` and keep a
/// consistent view for as long as they like; every mutation runs under the
/// write lock and swaps in a new collection (copy-on-write), so concurrent
/// writers are serialized and never lose each other's updates.
///
/// Authors and reviews are fixed at construction.
pub struct GameStore {
    games: RwLock<Arc<Vec<Game>>>,
    authors: Vec<Author>,
    reviews: Vec<Review>,
    id_length: usize,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(SeedData::builtin())
    }
}

impl GameStore {
    pub fn new(seed: SeedData) -> Self {
        for problem in seed.dangling_references() {
            tracing::warn!("Seed data: {}", problem);
        }
        tracing::debug!(
            games = seed.games.len(),
            authors = seed.authors.len(),
            reviews = seed.reviews.len(),
            "Seeding store"
        );

        Self {
            games: RwLock::new(Arc::new(seed.games)),
            authors: seed.authors,
            reviews: seed.reviews,
            id_length: DEFAULT_ID_LENGTH,
        }
    }

    pub fn with_id_length(mut self, id_length: usize) -> Self {
        self.id_length = id_length.max(1);
        self
    }

    // The collection is plain data with no cross-field invariants, so a
    // writer that panicked cannot leave it half-updated.
    fn read_games(&self) -> RwLockReadGuard<'_, Arc<Vec<Game>>> {
        self.games.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_games(&self) -> RwLockWriteGuard<'_, Arc<Vec<Game>>> {
        self.games.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All games in insertion order, as of now.
    pub fn games(&self) -> Arc<Vec<Game>> {
        Arc::clone(&*self.read_games())
    }

    pub fn game(&self, id: &str) -> Option<Game> {
        self.read_games().iter().find(|g| g.id == id).cloned()
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn review(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    /// Reviews whose `game_id` is `game_id`, in store order.
    pub fn reviews_for_game(&self, game_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.game_id == game_id)
            .collect()
    }

    /// Reviews whose `author_id` is `author_id`, in store order.
    pub fn reviews_by_author(&self, author_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.author_id == author_id)
            .collect()
    }

    /// The reviewed game, or `None` once that game has been deleted.
    pub fn game_for_review(&self, review: &Review) -> Option<Game> {
        self.game(&review.game_id)
    }

    pub fn author_for_review(&self, review: &Review) -> Option<&Author> {
        self.author(&review.author_id)
    }

    /// Append a new game under a freshly drawn numeric id.
    pub fn add_game(&self, title: String, platform: Vec<String>) -> Result<Game> {
        let mut games = self.write_games();
        let id = self.generate_id(&games)?;
        let game = Game::new(id, title).with_platform(platform);

        tracing::info!(id = %game.id, title = %game.title, "Adding game");
        Arc::make_mut(&mut games).push(game.clone());
        Ok(game)
    }

    /// Remove every game with `id` and return the resulting collection.
    ///
    /// Deleting an unknown id leaves the collection as it was.
    pub fn delete_game(&self, id: &str) -> Arc<Vec<Game>> {
        let mut games = self.write_games();
        if games.iter().any(|g| g.id == id) {
            tracing::info!(id = %id, "Deleting game");
            Arc::make_mut(&mut games).retain(|g| g.id != id);
        } else {
            tracing::debug!(id = %id, "Delete skipped, no such game");
        }
        Arc::clone(&*games)
    }

    /// Merge `edit` into every game with `id` and return the first updated record.
    pub fn update_game(&self, id: &str, edit: &GameEdit) -> Option<Game> {
        let mut games = self.write_games();
        if !games.iter().any(|g| g.id == id) {
            return None;
        }

        if edit.is_empty() {
            tracing::debug!(id = %id, "Update carries no fields");
        } else {
            tracing::info!(id = %id, "Updating game");
        }
        let mut updated = None;
        for game in Arc::make_mut(&mut games).iter_mut().filter(|g| g.id == id) {
            game.apply(edit);
            if updated.is_none() {
                updated = Some(game.clone());
            }
        }
        updated
    }

    /// Draw a number below `10^id_length`, written without leading zeros.
    fn generate_id(&self, games: &[Game]) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let digits = nanoid::format(nanoid::rngs::default, &DIGITS, self.id_length);
            let candidate = match digits.trim_start_matches('0') {
                "" => "0".to_string(),
                trimmed => trimmed.to_string(),
            };
            if !games.iter().any(|g| g.id == candidate) {
                return Ok(candidate);
            }
            tracing::debug!(id = %candidate, "Generated game ID already taken, retrying");
        }
        Err(GameReviewsError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}
