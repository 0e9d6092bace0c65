//! Genre API handlers.
use crate::api::error::{ApiError, api_internal};
use crate::api::types::GenreListResponse;
use crate::app::AppState;
use axum::Json;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/api/genres",
    tag = "genres",
    responses(
        (status = 200, description = "List genres", body = GenreListResponse)
    )
)]
pub(crate) async fn list_genres(
    State(state): State<AppState>,
) -> Result<Json<GenreListResponse>, ApiError> {
    let items = state
        .store
        .list_genres()
        .await
        .map_err(|err| api_internal("failed to list genres", &err))?;
    Ok(Json(GenreListResponse { items }))
}
