//! Data models for games and reviews.
//!
//! This module defines the core records:
//!
//! - [`Game`]: A game, the only mutable entity
//! - [`GameEdit`]: A partial set of game fields, merged into a [`Game`]
//! - [`Author`]: A person who writes reviews
//! - [`Review`]: A rating of one game by one author
//! - [`SeedData`]: The initial contents of the store

mod author;
mod game;
mod review;
mod seed;

pub use author::Author;
pub use game::{Game, GameEdit};
pub use review::Review;
pub use seed::SeedData;
