//! OpenAPI schema aggregation for the catalog API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document served
//! at `/v1/openapi.json`.
use crate::api::{
    actors, genres, health, movies,
    types::{ActorListResponse, ErrorResponse, GenreListResponse, MovieListResponse},
};
use crate::health::probe::ProbeResult;
use crate::health::report::{HealthReport, HealthStatus};
use crate::model::{Actor, Genre, Movie};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "catalog-api",
        version = "v1",
        description = "Movie catalog HTTP API with a composite store health check"
    ),
    paths(
        health::healthz,
        health::healthz_as,
        genres::list_genres,
        movies::list_movies,
        movies::get_movie,
        movies::search_movies,
        actors::list_actors,
        actors::get_actor,
        actors::search_actors
    ),
    components(schemas(
        ErrorResponse,
        Genre,
        GenreListResponse,
        Movie,
        MovieListResponse,
        Actor,
        ActorListResponse,
        HealthStatus,
        HealthReport,
        ProbeResult
    )),
    tags(
        (name = "health", description = "Composite store health check"),
        (name = "genres", description = "Genre metadata"),
        (name = "movies", description = "Movie metadata and search"),
        (name = "actors", description = "Actor metadata and search")
    )
)]
pub struct ApiDoc;
