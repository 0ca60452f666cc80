//! GraphQL schema, resolvers and HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server on port 4000
//! game-reviews serve
//!
//! # Execute a query from CLI
//! game-reviews query '{ game(id: "2") { title reviews { rating content } } }'
//!
//! # Execute a mutation from CLI
//! game-reviews mutate 'addGame(game: { title: "X", platform: ["PS5"] }) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `games`, `game`, `reviews`, `review`, `authors`, `author`
//! - **Mutations**: `addGame`, `deleteGame`, `updateGame`
//! - **Relations**: `Game.reviews`, `Author.reviews`, `Review.game`, `Review.author`

mod schema;
mod server;
mod types;

pub use schema::{GameReviewsSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{bind, router, serve};
pub use types::*;
