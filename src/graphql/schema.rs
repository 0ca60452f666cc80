use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema, extensions::Tracing};

use crate::model::GameEdit;
use crate::storage::GameStore;

use super::types::*;

pub type GameReviewsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<GameStore>) -> GameReviewsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .extension(Tracing)
        .finish()
}

/// A list typed `[T]` in the schema: both the list and its items may be null.
type NullableList<T> = Option<Vec<Option<T>>>;

fn nullable_list<T>(items: impl Iterator<Item = T>) -> NullableList<T> {
    Some(items.map(Some).collect())
}

pub(crate) fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a GameStore> {
    let store = ctx.data::<Arc<GameStore>>()?;
    Ok(store.as_ref())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List all reviews
    async fn reviews(&self, ctx: &Context<'_>) -> async_graphql::Result<NullableList<Review>> {
        let store = get_store(ctx)?;
        Ok(nullable_list(store.reviews().iter().map(Review::from)))
    }

    /// Get a single review by ID
    async fn review(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Review>> {
        let store = get_store(ctx)?;
        Ok(store.review(&id).map(Review::from))
    }

    /// List all games in insertion order
    async fn games(&self, ctx: &Context<'_>) -> async_graphql::Result<NullableList<Game>> {
        let store = get_store(ctx)?;
        Ok(nullable_list(store.games().iter().map(Game::from)))
    }

    /// Get a single game by ID
    async fn game(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Game>> {
        let store = get_store(ctx)?;
        Ok(store.game(&id).map(Game::from))
    }

    /// List all authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<NullableList<Author>> {
        let store = get_store(ctx)?;
        Ok(nullable_list(store.authors().iter().map(Author::from)))
    }

    /// Get a single author by ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Author>> {
        let store = get_store(ctx)?;
        Ok(store.author(&id).map(Author::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a game; returns null when no input is given
    async fn add_game(
        &self,
        ctx: &Context<'_>,
        game: Option<AddGameInput>,
    ) -> async_graphql::Result<Option<Game>> {
        let Some(input) = game else {
            return Ok(None);
        };
        let store = get_store(ctx)?;
        let game = store.add_game(input.title, input.platform)?;
        Ok(Some(game.into()))
    }

    /// Delete a game and return the remaining games
    async fn delete_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<NullableList<Game>> {
        let store = get_store(ctx)?;
        let games = store.delete_game(&id);
        Ok(nullable_list(games.iter().map(Game::from)))
    }

    /// Merge the given fields into a game; null if the game does not exist
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: Option<EditGameInput>,
    ) -> async_graphql::Result<Option<Game>> {
        let store = get_store(ctx)?;
        let edit: GameEdit = edits.map(GameEdit::from).unwrap_or_default();
        Ok(store.update_game(&id, &edit).map(Game::from))
    }
}
