mod common;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use catalog::model::{Actor, Genre, Movie};
use catalog::store::{CatalogStore, StoreError, StoreResult};
use common::{app_with_store, read_json, read_text, sample_app};
use std::sync::Arc;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

/// Store whose every operation fails with a structured backend error.
struct FailingStore;

#[async_trait]
impl CatalogStore for FailingStore {
    async fn list_genres(&self) -> StoreResult<Vec<Genre>> {
        Err(backend_error())
    }

    async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        Err(backend_error())
    }

    async fn get_movie(&self, _movie_id: &str) -> StoreResult<Movie> {
        Err(backend_error())
    }

    async fn query_movies(&self, _query: &str, _top_rated: bool) -> StoreResult<Vec<Movie>> {
        Err(backend_error())
    }

    async fn list_actors(&self) -> StoreResult<Vec<Actor>> {
        Err(backend_error())
    }

    async fn get_actor(&self, _actor_id: &str) -> StoreResult<Actor> {
        Err(backend_error())
    }

    async fn query_actors(&self, _query: &str) -> StoreResult<Vec<Actor>> {
        Err(backend_error())
    }

    fn backend_name(&self) -> &'static str {
        "fail"
    }
}

fn backend_error() -> StoreError {
    StoreError::Backend {
        status: 503,
        correlation_id: "corr-http".to_string(),
        message: "store unavailable".to_string(),
    }
}

#[tokio::test]
async fn plain_text_health_is_exactly_one_literal() {
    let app = sample_app();

    let response = app.clone().oneshot(get("/healthz")).await.expect("healthz");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_text(response).await;
    assert_eq!(body, "Healthy");
}

#[tokio::test]
async fn json_report_has_six_probes_three_metadata_and_no_nulls() {
    let app = sample_app();

    let response = app
        .clone()
        .oneshot(get("/healthz/json"))
        .await
        .expect("healthz json");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["status"], "Healthy");
    assert_eq!(payload["description"], "Catalog Store Health Check");

    let data = payload["data"].as_object().expect("data object");
    assert_eq!(data.len(), 9);
    assert_eq!(data["store_key"], "abcde...");
    assert_eq!(data["instance"], "test-instance");
    assert_eq!(data["version"], "0.1.0");
    for name in [
        "list_genres",
        "get_movie",
        "get_actor",
        "search_movies",
        "search_actors",
        "top_rated_movies",
    ] {
        assert_eq!(data[name]["status"], "Healthy", "probe {name}");
        assert!(data[name]["total_milliseconds"].as_f64().unwrap() >= 0.0);
    }
    assert!(!payload.to_string().contains("null"));
}

#[tokio::test]
async fn representation_is_case_insensitive_and_unknown_is_404() {
    let app = sample_app();

    for path in ["/healthz/json", "/healthz/Json", "/healthz/JSON"] {
        let response = app.clone().oneshot(get(path)).await.expect("healthz json");
        assert_eq!(response.status(), StatusCode::OK, "path {path}");
        let payload = read_json(response).await;
        assert_eq!(payload["status"], "Healthy");
        assert!(payload.get("data").is_some());
    }

    let response = app
        .clone()
        .oneshot(get("/healthz/xml"))
        .await
        .expect("healthz xml");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json(response).await;
    assert_eq!(payload["code"], "not_found");
}

#[tokio::test]
async fn ietf_report_uses_health_json_shape() {
    let app = sample_app();

    let response = app
        .clone()
        .oneshot(get("/healthz/ietf"))
        .await
        .expect("healthz ietf");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["status"], "pass");
    assert_eq!(payload["releaseId"], "0.1.0");
    assert_eq!(payload["serviceId"], "test-instance");
    let checks = payload["checks"].as_object().expect("checks");
    assert_eq!(checks.len(), 6);
    let genre_check = &checks["list_genres:responseTime"][0];
    assert_eq!(genre_check["status"], "pass");
    assert_eq!(genre_check["observedUnit"], "ms");
    assert!(!payload.to_string().contains("null"));
}

#[tokio::test]
async fn failing_store_reports_unhealthy_in_every_representation() {
    let app = app_with_store(Arc::new(FailingStore));

    let response = app.clone().oneshot(get("/healthz")).await.expect("healthz");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_text(response).await;
    assert_eq!(body, "Unhealthy");

    let response = app
        .clone()
        .oneshot(get("/healthz/json"))
        .await
        .expect("healthz json");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["status"], "Unhealthy");
    assert_eq!(payload["data"]["store_error"]["status_code"], 503);
    assert_eq!(payload["data"]["store_error"]["correlation_id"], "corr-http");
    assert_eq!(payload["exception"], "store unavailable");

    let response = app
        .clone()
        .oneshot(get("/healthz/ietf"))
        .await
        .expect("healthz ietf");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["status"], "fail");
    assert_eq!(payload["output"], "store unavailable");
}
