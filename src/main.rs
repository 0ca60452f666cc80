use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use game_reviews::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use game_reviews::cli::{Cli, Commands};
use game_reviews::config::GameReviewsConfig;
use game_reviews::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref());

    let cwd = std::env::current_dir()?;
    let mut config = load_config(cli.config.as_deref(), &cwd)?;
    if let Some(seed) = cli.seed {
        // Relative to where the command runs, not to the config file.
        config.store.seed = Some(cwd.join(seed));
    }

    let ctx = CommandContext::new(config)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => handle_serve(ctx, host, port, no_graphiql),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}

fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<GameReviewsConfig> {
    match explicit {
        Some(path) => GameReviewsConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => GameReviewsConfig::discover(cwd).context("Failed to load configuration"),
    }
}
