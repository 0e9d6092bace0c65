//! Catalog HTTP API module.
//!
//! # Purpose
//! Exposes the route handler modules and shared payload/error types.
pub mod actors;
pub mod error;
pub mod genres;
pub mod health;
pub mod movies;
pub mod openapi;
pub mod types;
