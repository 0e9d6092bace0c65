//! Catalog data model module.
//!
//! # Purpose
//! Re-exports the movie/actor/genre document records shared by the store and
//! the HTTP API.
mod actor;
mod genre;
mod movie;

pub use actor::Actor;
pub use genre::Genre;
pub use movie::Movie;
