//! Actor document definition.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub born_year: u16,
    /// Ids of movies this actor appears in.
    pub movie_ids: Vec<String>,
}
