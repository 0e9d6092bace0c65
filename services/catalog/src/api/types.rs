//! HTTP API request/response types.
//!
//! # Purpose
//! Defines shared payload shapes for the catalog REST API and OpenAPI schema
//! generation.
use crate::model::{Actor, Genre, Movie};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct GenreListResponse {
    pub items: Vec<Genre>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MovieListResponse {
    pub items: Vec<Movie>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ActorListResponse {
    pub items: Vec<Actor>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MovieSearchParams {
    /// Title substring to match.
    pub q: Option<String>,
    /// Return the highest-rated movies instead of matching on `q`.
    #[serde(default)]
    pub toprated: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ActorSearchParams {
    /// Name substring to match.
    pub q: Option<String>,
}
