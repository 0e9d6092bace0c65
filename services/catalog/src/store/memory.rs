//! In-memory implementation of the catalog store.
//!
//! # Purpose
//! This store implements the `CatalogStore` trait entirely in memory using
//! `HashMap`s guarded by `tokio::sync::RwLock`. It exists for:
//! - local development and tests (no external dependencies)
//! - deployments where the catalog is small and durability is not required
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: reads take read locks and can proceed
//!   concurrently; the catalog is read-mostly so writes only happen at seed
//!   time.
//!
//! # Performance characteristics
//! Queries scan the full map. Acceptable for the fixture-sized catalogs this
//! backend is meant for; a durable backend would push filtering into the
//! database.
use super::{CatalogStore, StoreError, StoreResult};
use crate::model::{Actor, Genre, Movie};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory catalog store.
///
/// All maps are wrapped in `Arc<RwLock<...>>` so the store can be cloned and
/// shared across async request handlers.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    genres: Arc<RwLock<Vec<Genre>>>,
    /// Movies keyed by `id`.
    movies: Arc<RwLock<HashMap<String, Movie>>>,
    /// Actors keyed by `id`.
    actors: Arc<RwLock<HashMap<String, Actor>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a small fixture catalog.
    ///
    /// The fixture includes the sentinel documents the health check probes
    /// (`movie-1`, `actor-1`), so a default deployment reports `Healthy`.
    pub fn with_sample_data() -> Self {
        let genres = vec![
            genre("genre-1", "Drama"),
            genre("genre-2", "Science Fiction"),
            genre("genre-3", "Thriller"),
            genre("genre-4", "Documentary"),
            genre("genre-5", "Comedy"),
        ];
        let movies = [
            movie("movie-1", "The Glass Harbor", 2019, 8.1, &["Drama"]),
            movie(
                "movie-2",
                "City of Static",
                2021,
                7.4,
                &["Science Fiction", "Thriller"],
            ),
            movie("movie-3", "Midnight Cartography", 2017, 6.9, &["Thriller"]),
            movie("movie-4", "Paper Lanterns", 2015, 7.8, &["Drama"]),
            movie(
                "movie-5",
                "The Last Projectionist",
                2022,
                8.6,
                &["Documentary"],
            ),
        ];
        let actors = [
            actor("actor-1", "Mara Ellison", 1984, &["movie-1", "movie-2"]),
            actor("actor-2", "Theo Brandt", 1976, &["movie-2", "movie-3"]),
            actor(
                "actor-3",
                "June Okafor",
                1991,
                &["movie-1", "movie-4", "movie-5"],
            ),
        ];

        Self {
            genres: Arc::new(RwLock::new(genres)),
            movies: Arc::new(RwLock::new(
                movies.into_iter().map(|m| (m.id.clone(), m)).collect(),
            )),
            actors: Arc::new(RwLock::new(
                actors.into_iter().map(|a| (a.id.clone(), a)).collect(),
            )),
        }
    }
}

fn genre(id: &str, name: &str) -> Genre {
    Genre {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn movie(id: &str, title: &str, year: u16, rating: f64, genres: &[&str]) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        year,
        rating,
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

fn actor(id: &str, name: &str, born_year: u16, movie_ids: &[&str]) -> Actor {
    Actor {
        id: id.to_string(),
        name: name.to_string(),
        born_year,
        movie_ids: movie_ids.iter().map(|m| m.to_string()).collect(),
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn list_genres(&self) -> StoreResult<Vec<Genre>> {
        Ok(self.genres.read().await.clone())
    }

    async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        let movies = self.movies.read().await;
        let mut items: Vec<Movie> = movies.values().cloned().collect();
        // Stable ordering for clients and tests.
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(items)
    }

    async fn get_movie(&self, movie_id: &str) -> StoreResult<Movie> {
        self.movies
            .read()
            .await
            .get(movie_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("movie not found: {movie_id}")))
    }

    async fn query_movies(&self, query: &str, top_rated: bool) -> StoreResult<Vec<Movie>> {
        let movies = self.movies.read().await;
        let mut items: Vec<Movie> = if top_rated {
            movies.values().cloned().collect()
        } else {
            let needle = query.to_lowercase();
            movies
                .values()
                .filter(|m| m.title.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };
        if top_rated {
            items.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            items.truncate(10);
        } else {
            items.sort_by(|a, b| a.title.cmp(&b.title));
        }
        Ok(items)
    }

    async fn list_actors(&self) -> StoreResult<Vec<Actor>> {
        let actors = self.actors.read().await;
        let mut items: Vec<Actor> = actors.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn get_actor(&self, actor_id: &str) -> StoreResult<Actor> {
        self.actors
            .read()
            .await
            .get(actor_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("actor not found: {actor_id}")))
    }

    async fn query_actors(&self, query: &str) -> StoreResult<Vec<Actor>> {
        let actors = self.actors.read().await;
        let needle = query.to_lowercase();
        let mut items: Vec<Actor> = actors
            .values()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
