//! Actor API handlers.
use crate::api::error::{ApiError, api_internal, api_not_found, api_validation_error};
use crate::api::types::{ActorListResponse, ActorSearchParams};
use crate::app::AppState;
use crate::model::Actor;
use crate::store::StoreError;
use axum::Json;
use axum::extract::{Path, Query, State};

#[utoipa::path(
    get,
    path = "/api/actors",
    tag = "actors",
    responses(
        (status = 200, description = "List actors", body = ActorListResponse)
    )
)]
pub(crate) async fn list_actors(
    State(state): State<AppState>,
) -> Result<Json<ActorListResponse>, ApiError> {
    let items = state
        .store
        .list_actors()
        .await
        .map_err(|err| api_internal("failed to list actors", &err))?;
    Ok(Json(ActorListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/api/actors/{actor_id}",
    tag = "actors",
    params(
        ("actor_id" = String, Path, description = "Actor identifier")
    ),
    responses(
        (status = 200, description = "Fetch actor", body = Actor),
        (status = 404, description = "Actor not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_actor(
    Path(actor_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Actor>, ApiError> {
    match state.store.get_actor(&actor_id).await {
        Ok(actor) => Ok(Json(actor)),
        Err(StoreError::NotFound(_)) => Err(api_not_found("actor not found")),
        Err(err) => Err(api_internal("failed to fetch actor", &err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/actors/search",
    tag = "actors",
    params(ActorSearchParams),
    responses(
        (status = 200, description = "Search actors", body = ActorListResponse),
        (status = 400, description = "Missing or empty query", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn search_actors(
    Query(params): Query<ActorSearchParams>,
    State(state): State<AppState>,
) -> Result<Json<ActorListResponse>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(api_validation_error("query parameter q must not be empty"));
    }
    let items = state
        .store
        .query_actors(query.trim())
        .await
        .map_err(|err| api_internal("failed to search actors", &err))?;
    Ok(Json(ActorListResponse { items }))
}
