mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::GameReviewsConfig;
use crate::graphql::{GameReviewsSchema, build_schema};
use crate::storage::GameStore;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GameReviewsConfig,
    pub store: Arc<GameStore>,
}

impl CommandContext {
    pub fn new(config: GameReviewsConfig) -> Result<Self> {
        let store = config
            .build_store()
            .context("Failed to load seed data")?;
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    pub fn schema(&self) -> GameReviewsSchema {
        build_schema(Arc::clone(&self.store))
    }
}
