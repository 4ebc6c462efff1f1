use axum::{
    http::{HeaderValue, Method},
    middleware,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Extension, Router,
};
use hyper::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::auth;
use crate::config::Settings;
use crate::graphql::{create_schema, GraphQLSchema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};

/// Liveness endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Readiness endpoint
async fn ready() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ready" }))
}

/// GraphQL handler (supports GET and POST)
async fn graphql_handler(
    Extension(schema): Extension<GraphQLSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL IDE endpoint
async fn graphiql() -> impl IntoResponse {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint("/graphql")
            .finish(),
    )
}

/// Build the CORS layer for the configured origins, if any. Credentials are
/// allowed, so origins, methods and headers must all stay non-wildcard.
fn cors_layer(settings: &Settings) -> Option<CorsLayer> {
    if settings.allowed_origins.is_empty() {
        return None;
    }
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring unparsable CORS origin: {}", origin);
                None
            }
        })
        .collect();
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(AllowHeaders::mirror_request()),
    )
}

/// Create the HTTP server with all routes, including GraphQL.
/// The API-key check guards /graphql only; probes stay open.
pub fn create_server(settings: Arc<Settings>) -> Router {
    let schema = create_schema();

    let auth_settings = settings.clone();
    let graphql_routes = Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_handler))
        .route_layer(middleware::from_fn(move |req, next| {
            auth::require_api_key(auth_settings.clone(), req, next)
        }));

    let mut app = Router::new()
        .merge(graphql_routes)
        .route("/graphiql", get(graphiql))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .layer(Extension(schema));

    if let Some(cors) = cors_layer(&settings) {
        app = app.layer(cors);
    }

    app
}

/// Start the HTTP server
pub async fn start_server(settings: Arc<Settings>, port: u16) -> anyhow::Result<()> {
    let app = create_server(settings);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on {}", addr);
    Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
