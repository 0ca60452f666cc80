//! In-memory storage for games, authors and reviews.
//!
//! Nothing is persisted: a [`GameStore`] starts from [`SeedData`] and all
//! changes are lost when the process exits.
//!
//! ## Components
//!
//! - [`GameStore`]: lookups, relation scans and game mutations
//!
//! [`SeedData`]: crate::model::SeedData

mod store;

pub use store::{DEFAULT_ID_LENGTH, GameStore};
