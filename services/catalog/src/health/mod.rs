//! Composite health check for the catalog store.
//!
//! # Purpose
//! Runs a fixed battery of timed probes against representative store
//! operations, classifies each by an elapsed-time threshold, folds the
//! per-probe statuses into one overall status, and renders the result as
//! plain text, a native JSON report, or an IETF health+json document.
pub mod aggregator;
pub mod ietf;
pub mod probe;
pub mod report;

pub use aggregator::{CatalogHealthCheck, HealthCheckConfig};
pub use probe::ProbeResult;
pub use report::{HealthReport, HealthStatus, ReportData, ReportEntry};
