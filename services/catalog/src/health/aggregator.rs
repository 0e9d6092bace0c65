//! Health aggregator: the fixed probe battery and failure capture.
//!
//! # Purpose and responsibility
//! Runs six representative store operations sequentially through the probe
//! runner, seeds the report with environment metadata, folds per-probe
//! statuses, and converts any probe-invocation failure into report data with
//! the overall status forced to `Unhealthy`.
//!
//! # Key invariants and assumptions
//! - Probe degradation is a normal in-band outcome, never an error.
//! - No store or fold failure escapes this layer; callers always receive a
//!   well-formed report.
//! - Environment metadata is passed in as read-only configuration, never read
//!   from ambient global state here.
use crate::health::probe::{ProbeResult, run_probe};
use crate::health::report::{
    ErrorDetail, HEALTH_CHECK_DESCRIPTION, HealthReport, HealthStatus, ReportData, ReportEntry,
    StatusFold,
};
use crate::store::{CatalogStore, StoreError, StoreResult};
use std::sync::Arc;
use std::time::Duration;

/// Sentinel inputs for lookup/search probes; present in the sample fixture.
pub const SENTINEL_MOVIE_ID: &str = "movie-1";
pub const SENTINEL_ACTOR_ID: &str = "actor-1";
pub const SENTINEL_MOVIE_QUERY: &str = "city";
pub const SENTINEL_ACTOR_QUERY: &str = "mara";

/// Listing is expected cheaper than point lookups and search, hence the
/// asymmetric thresholds.
const LIST_THRESHOLD: Duration = Duration::from_millis(200);
const LOOKUP_THRESHOLD: Duration = Duration::from_millis(100);

/// Environment metadata surfaced in every report.
#[derive(Debug, Clone)]
pub struct HealthCheckConfig {
    /// Store access key; only a redacted fragment ever leaves this process.
    pub store_key: String,
    /// Deployment/instance identifier, "unknown" when the environment does
    /// not provide one.
    pub instance_id: String,
    /// Running software version.
    pub version: String,
}

/// First characters of the key, remainder elided. Empty keys produce no
/// metadata entry at all.
fn redact_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }
    let visible: String = key.chars().take(5).collect();
    Some(format!("{visible}..."))
}

pub struct CatalogHealthCheck {
    store: Arc<dyn CatalogStore>,
    config: HealthCheckConfig,
}

impl CatalogHealthCheck {
    pub fn new(store: Arc<dyn CatalogStore>, config: HealthCheckConfig) -> Self {
        Self { store, config }
    }

    /// Run the full battery and produce the aggregate report.
    ///
    /// Never fails: store errors are captured into the report and force the
    /// overall status to `Unhealthy`.
    pub async fn check(&self) -> HealthReport {
        let mut data = ReportData::new();
        if let Some(fragment) = redact_key(&self.config.store_key) {
            data.insert("store_key", ReportEntry::Text(fragment));
        }
        data.insert(
            "instance",
            ReportEntry::Text(self.config.instance_id.clone()),
        );
        data.insert("version", ReportEntry::Text(self.config.version.clone()));

        let mut fold = StatusFold::new();
        match self.run_probes(&mut data, &mut fold).await {
            Ok(()) => HealthReport {
                status: fold.status(),
                description: HEALTH_CHECK_DESCRIPTION.to_string(),
                data,
                exception: None,
            },
            Err(err) => {
                tracing::error!(error = %err, "catalog health check failed");
                let message = record_failure(&mut data, &err);
                HealthReport {
                    status: HealthStatus::Unhealthy,
                    description: HEALTH_CHECK_DESCRIPTION.to_string(),
                    data,
                    exception: Some(message),
                }
            }
        }
    }

    async fn run_probes(&self, data: &mut ReportData, fold: &mut StatusFold) -> StoreResult<()> {
        let result = run_probe("list genres", LIST_THRESHOLD, || self.store.list_genres()).await?;
        record_probe(data, fold, "list_genres", result);

        let result = run_probe("get movie", LOOKUP_THRESHOLD, || {
            self.store.get_movie(SENTINEL_MOVIE_ID)
        })
        .await?;
        record_probe(data, fold, "get_movie", result);

        let result = run_probe("get actor", LOOKUP_THRESHOLD, || {
            self.store.get_actor(SENTINEL_ACTOR_ID)
        })
        .await?;
        record_probe(data, fold, "get_actor", result);

        let result = run_probe("search movies", LOOKUP_THRESHOLD, || {
            self.store.query_movies(SENTINEL_MOVIE_QUERY, false)
        })
        .await?;
        record_probe(data, fold, "search_movies", result);

        let result = run_probe("search actors", LOOKUP_THRESHOLD, || {
            self.store.query_actors(SENTINEL_ACTOR_QUERY)
        })
        .await?;
        record_probe(data, fold, "search_actors", result);

        let result = run_probe("top rated movies", LOOKUP_THRESHOLD, || {
            self.store.query_movies("", true)
        })
        .await?;
        record_probe(data, fold, "top_rated_movies", result);

        Ok(())
    }
}

fn record_probe(data: &mut ReportData, fold: &mut StatusFold, name: &str, result: ProbeResult) {
    fold.observe(result.status);
    data.insert(name, ReportEntry::Probe(result));
}

/// Record the failure under a category-specific key and return the message
/// surfaced in the report's `exception` field.
fn record_failure(data: &mut ReportData, err: &StoreError) -> String {
    match err {
        StoreError::Backend {
            status,
            correlation_id,
            message,
        } => {
            data.insert(
                "store_error",
                ReportEntry::Error(ErrorDetail {
                    error: message.clone(),
                    status_code: Some(*status),
                    correlation_id: Some(correlation_id.clone()),
                }),
            );
            message.clone()
        }
        StoreError::Unexpected(source) => {
            // Unwrap wrapped/multi-error chains to the root cause.
            let root = source.root_cause().to_string();
            data.insert(
                "error",
                ReportEntry::Error(ErrorDetail {
                    error: root.clone(),
                    status_code: None,
                    correlation_id: None,
                }),
            );
            root
        }
        other => {
            let message = other.to_string();
            data.insert(
                "error",
                ReportEntry::Error(ErrorDetail {
                    error: message.clone(),
                    status_code: None,
                    correlation_id: None,
                }),
            );
            message
        }
    }
}
