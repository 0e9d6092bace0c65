//! Movie document definition.
//!
//! # Purpose
//! Defines the movie record served by the catalog API and stored by the
//! backing store.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: u16,
    /// Aggregate review score on a 0.0-10.0 scale.
    pub rating: f64,
    pub genres: Vec<String>,
}
