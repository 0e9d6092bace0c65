use crate::model::{Actor, Genre, Movie};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    /// Structured failure surfaced by the backing document store. Carries the
    /// store's own status code and a correlation id for support lookups.
    #[error("store error (status {status}, correlation {correlation_id}): {message}")]
    Backend {
        status: u16,
        correlation_id: String,
        message: String,
    },
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read surface of the catalog document store.
///
/// The durable client (connection pooling, retry policy, cancellation) is an
/// external collaborator; implementations only promise that dropped futures
/// abandon in-flight calls.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_genres(&self) -> StoreResult<Vec<Genre>>;

    async fn list_movies(&self) -> StoreResult<Vec<Movie>>;
    async fn get_movie(&self, movie_id: &str) -> StoreResult<Movie>;
    /// Title substring search; `top_rated` orders by rating and caps the
    /// result set instead of requiring a query match.
    async fn query_movies(&self, query: &str, top_rated: bool) -> StoreResult<Vec<Movie>>;

    async fn list_actors(&self) -> StoreResult<Vec<Actor>>;
    async fn get_actor(&self, actor_id: &str) -> StoreResult<Actor>;
    async fn query_actors(&self, query: &str) -> StoreResult<Vec<Actor>>;

    fn backend_name(&self) -> &'static str;
}
