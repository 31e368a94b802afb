//! In-process HTTP tests against the fully composed router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::server::{data::store::Store, router::router, static_files::StaticAssets};
use test_utils::{builder::TestBuilder, context::TestContext, fixture::static_build};


/// Builds the app over an in-memory store, with static assets when requested.
///
/// The store starts without tables; the router's schema bootstrap creates them.
async fn app(with_static_assets: bool) -> (TestContext, Router) {
    let mut builder = TestBuilder::new();
    if with_static_assets {
        builder = builder.with_static_assets();
    }
    let test = builder.build().await.unwrap();

    let assets = match test.static_root() {
        Some(root) => StaticAssets::probe(root).await,
        None => StaticAssets::Disabled,
    };
    let store = Store::new(test.db.clone().unwrap());
    let app = router(store, &assets).await;

    (test, app)
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn not_found_body() -> serde_json::Value {
    serde_json::json!({ "error": "not found" })
}
