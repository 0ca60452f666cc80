use anyhow::{Context, Result};
use colored::Colorize;

use crate::graphql::{bind, serve};

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_graphiql: bool,
) -> Result<()> {
    let settings = &mut ctx.config.server;
    if let Some(host) = host {
        settings.host = host;
    }
    if let Some(port) = port {
        settings.port = port;
    }
    if no_graphiql {
        settings.graphiql = false;
    }

    let settings = ctx.config.server.clone();
    let schema = ctx.schema();

    tokio::runtime::Runtime::new()?.block_on(async {
        let listener = bind(&settings)
            .await
            .with_context(|| format!("Failed to bind {}:{}", settings.host, settings.port))?;
        let addr = listener.local_addr()?;

        println!("{} http://{}/", "Server ready at".green(), addr);
        if settings.graphiql {
            println!("GraphiQL: http://{}/", addr);
        }

        serve(listener, schema, settings.graphiql)
            .await
            .context("GraphQL server stopped")?;
        Ok::<(), anyhow::Error>(())
    })
}
