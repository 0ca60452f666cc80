use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game-reviews")]
#[command(
    author,
    version,
    about = "A GraphQL API for games, their reviews and review authors"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .game-reviews.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// YAML seed file to load instead of the built-in data (overrides config)
    #[arg(long, global = true, env = "GAME_REVIEWS_SEED")]
    pub seed: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file, rotated daily
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (default from config, else 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default from config, else 4000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not serve the GraphiQL page on GET requests
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query against a freshly seeded store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
