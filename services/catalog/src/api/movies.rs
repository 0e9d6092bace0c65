//! Movie API handlers.
//!
//! # Purpose
//! Implements the read-only movie endpoints: listing, point lookup, and
//! title/top-rated search.
use crate::api::error::{ApiError, api_internal, api_not_found, api_validation_error};
use crate::api::types::{MovieListResponse, MovieSearchParams};
use crate::app::AppState;
use crate::model::Movie;
use crate::store::StoreError;
use axum::Json;
use axum::extract::{Path, Query, State};

#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    responses(
        (status = 200, description = "List movies", body = MovieListResponse)
    )
)]
pub(crate) async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let items = state
        .store
        .list_movies()
        .await
        .map_err(|err| api_internal("failed to list movies", &err))?;
    Ok(Json(MovieListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/api/movies/{movie_id}",
    tag = "movies",
    params(
        ("movie_id" = String, Path, description = "Movie identifier")
    ),
    responses(
        (status = 200, description = "Fetch movie", body = Movie),
        (status = 404, description = "Movie not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_movie(
    Path(movie_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Movie>, ApiError> {
    match state.store.get_movie(&movie_id).await {
        Ok(movie) => Ok(Json(movie)),
        Err(StoreError::NotFound(_)) => Err(api_not_found("movie not found")),
        Err(err) => Err(api_internal("failed to fetch movie", &err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/movies/search",
    tag = "movies",
    params(MovieSearchParams),
    responses(
        (status = 200, description = "Search movies", body = MovieListResponse),
        (status = 400, description = "Missing or empty query", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn search_movies(
    Query(params): Query<MovieSearchParams>,
    State(state): State<AppState>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let query = params.q.unwrap_or_default();
    // Top-rated search works without a query; substring search requires one.
    if query.trim().is_empty() && !params.toprated {
        return Err(api_validation_error("query parameter q must not be empty"));
    }
    let items = state
        .store
        .query_movies(query.trim(), params.toprated)
        .await
        .map_err(|err| api_internal("failed to search movies", &err))?;
    Ok(Json(MovieListResponse { items }))
}
