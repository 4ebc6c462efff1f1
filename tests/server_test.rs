use axum::body::Body;
use axum::http::{Request, StatusCode};
use cargo_gql::auth::API_KEY_HEADER;
use cargo_gql::config::Settings;
use cargo_gql::server::create_server;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn settings(api_key: Option<&str>) -> Arc<Settings> {
    Arc::new(Settings {
        api_key: api_key.map(str::to_string),
        allowed_origins: Vec::new(),
        log_level: "info".to_string(),
    })
}

fn graphql_request(api_key: Option<&str>) -> Request<Body> {
    let body = json!({ "query": "{ health }" }).to_string();
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header(API_KEY_HEADER, key);
    }
    builder.body(Body::from(body)).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_ok() {
    let app = create_server(settings(None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn ready_ok() {
    let app = create_server(settings(None));

    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ready" }));
}

#[tokio::test]
async fn graphql_open_without_configured_key() {
    let app = create_server(settings(None));

    let response = app.oneshot(graphql_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["health"], "ok");
}

#[tokio::test]
async fn graphql_accepts_matching_key() {
    let app = create_server(settings(Some("secret")));

    let response = app.oneshot(graphql_request(Some("secret"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["health"], "ok");
}

#[tokio::test]
async fn graphql_rejects_missing_key() {
    let app = create_server(settings(Some("secret")));

    let response = app.oneshot(graphql_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "detail": "Invalid API key" })
    );
}

#[tokio::test]
async fn graphql_rejects_wrong_key() {
    let app = create_server(settings(Some("secret")));

    let response = app.oneshot(graphql_request(Some("nope"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn probes_stay_open_when_key_is_configured() {
    let app = create_server(settings(Some("secret")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn normalize_mutation_over_http() {
    let app = create_server(settings(None));

    let query = "mutation($src: String!, $p: JSON!) { \
        normalize(source: $src, payload: $p) { \
        itemTypes { name unitWeightKg } items { itemTypeName quantity } } }";
    let body = json!({
        "query": query,
        "variables": {
            "src": "http-test",
            "p": {
                "types": [{"id": "S", "w": 1, "v": 0.02}],
                "items": [{"type": "S", "q": 3}],
            },
        },
    })
    .to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let out = body_json(response).await;
    assert!(out.get("errors").is_none(), "unexpected errors: {out}");
    assert_eq!(out["data"]["normalize"]["itemTypes"][0]["name"], "S");
    assert_eq!(
        out["data"]["normalize"]["itemTypes"][0]["unitWeightKg"],
        1.0
    );
    assert_eq!(out["data"]["normalize"]["items"][0]["quantity"], 3);
}
