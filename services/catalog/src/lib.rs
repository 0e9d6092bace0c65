//! Catalog service library crate.
//!
//! # Purpose
//! Exposes the catalog API surface, health-check core, configuration, and
//! storage implementations for use by the binary and tests.
//!
//! # Notes
//! Module boundaries mirror the HTTP API and the health-check pipeline.
pub mod api;
pub mod app;
pub mod config;
pub mod health;
pub mod model;
pub mod observability;
pub mod store;
