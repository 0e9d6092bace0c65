//! Genre document definition.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct Genre {
    pub id: String,
    pub name: String,
}
