//! Catalog HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! This module centralizes route composition to keep `main` small and testable.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::health::CatalogHealthCheck;
use crate::observability;
use crate::store::CatalogStore;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub health: Arc<CatalogHealthCheck>,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    Router::new()
        .route("/healthz", axum::routing::get(api::health::healthz))
        .route("/healthz/:kind", axum::routing::get(api::health::healthz_as))
        .route("/api/genres", axum::routing::get(api::genres::list_genres))
        .route("/api/movies", axum::routing::get(api::movies::list_movies))
        .route(
            "/api/movies/search",
            axum::routing::get(api::movies::search_movies),
        )
        .route(
            "/api/movies/:movie_id",
            axum::routing::get(api::movies::get_movie),
        )
        .route("/api/actors", axum::routing::get(api::actors::list_actors))
        .route(
            "/api/actors/search",
            axum::routing::get(api::actors::search_actors),
        )
        .route(
            "/api/actors/:actor_id",
            axum::routing::get(api::actors::get_actor),
        )
        .route(
            "/v1/openapi.json",
            axum::routing::get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .layer(trace_layer)
        .with_state(state)
}
