//! # game-reviews - A GraphQL API for games and their reviews
//!
//! Serves three related in-memory entities over GraphQL: games, reviews
//! and the authors who wrote them. Games can be added, edited and deleted;
//! authors and reviews are fixed by the seed data. Nothing is persisted.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://0.0.0.0:4000/ with GraphiQL
//! game-reviews serve
//!
//! # Query without a server
//! game-reviews query '{ games { title reviews { rating } } }'
//!
//! # Use your own data
//! game-reviews --seed data.yml serve --port 8080
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Game, Review, Author) and seed data
//! - [`storage`]: The in-memory store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.game-reviews.yml` files and their discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `GameReviewsError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server around it.
pub mod graphql;

/// Data models for games, reviews and authors.
pub mod model;

/// In-memory storage layer.
pub mod storage;

/// Logging setup: compact stderr output plus an optional rolling JSON file.
pub mod logging;
