#![allow(dead_code)]

//! Shared setup for integration tests: an in-memory SQLite database with the
//! full schema applied, plus small HTTP helpers for router tests.

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use catalog::domain::page::LimitCfg;
use catalog::infra::storage::migrations::Migrator;
use catalog::module::{build_state, AppState};

pub async fn test_state() -> AppState {
    // A single connection keeps every query on the same in-memory database.
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    build_state(db, LimitCfg::default())
}

pub async fn test_app() -> Router {
    catalog::api::rest::router(test_state().await)
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(json.to_string())).expect("request")
        }
        None => builder.body(Body::empty()).expect("request"),
    };
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}
