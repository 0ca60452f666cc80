use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::post,
};
use tokio::net::TcpListener;

use super::GameReviewsSchema;
use crate::config::ServerSettings;
use crate::error::Result;

/// Build the HTTP router: `POST /` executes queries, `GET /` serves GraphiQL.
pub fn router(schema: GameReviewsSchema, graphiql: bool) -> Router {
    let mut route = post(graphql_handler);
    if graphiql {
        route = route.get(graphiql_page);
    }
    Router::new().route("/", route).with_state(schema)
}

/// Bind the listen address from `settings`.
pub async fn bind(settings: &ServerSettings) -> Result<TcpListener> {
    let addr = settings.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    Ok(listener)
}

/// Serve `schema` on an already bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, schema: GameReviewsSchema, graphiql: bool) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, graphiql, "GraphQL server listening");

    axum::serve(listener, router(schema, graphiql)).await?;
    Ok(())
}

async fn graphiql_page() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

async fn graphql_handler(
    State(schema): State<GameReviewsSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
