use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::warn;

use crate::config::Settings;

/// Header carrying the client API key
pub const API_KEY_HEADER: &str = "X-Cargo-Api-Key";

/// Rejects requests that do not carry the configured API key.
/// When no key is configured the check is skipped entirely (dev mode).
pub async fn require_api_key(
    settings: Arc<Settings>,
    request: Request<Body>,
    next: Next<Body>,
) -> Response {
    if let Some(expected) = settings.api_key.as_deref() {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());
        if provided != Some(expected) {
            warn!("rejected GraphQL request with missing or invalid API key");
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "detail": "Invalid API key" })),
            )
                .into_response();
        }
    }
    next.run(request).await
}
