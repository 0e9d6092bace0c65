//! Timed probe execution against a single store operation.
//!
//! # Purpose and responsibility
//! Invokes one store call, measures elapsed wall-clock time on a monotonic
//! timer, and classifies the outcome against a per-probe threshold. Errors
//! from the store call propagate uncaught to the aggregator; this layer never
//! produces `Unhealthy`.
use crate::health::report::HealthStatus;
use crate::store::StoreResult;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::{Duration, Instant};
use utoipa::ToSchema;

/// Message attached to every over-threshold probe.
pub const EXCEEDED_DURATION_MESSAGE: &str = "Request exceeded expected duration";

/// Outcome of one timed store operation. Immutable once returned.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProbeResult {
    /// Logical operation probed, for diagnostic display only.
    pub uri: String,
    pub status: HealthStatus,
    pub total_milliseconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Classify a completed call by its elapsed time.
///
/// Strictly over threshold yields `Degraded`; at or under yields `Healthy`.
pub fn classify(uri: &str, elapsed: Duration, threshold: Duration) -> ProbeResult {
    let degraded = elapsed > threshold;
    ProbeResult {
        uri: uri.to_string(),
        status: if degraded {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        },
        total_milliseconds: elapsed.as_secs_f64() * 1000.0,
        message: degraded.then(|| EXCEEDED_DURATION_MESSAGE.to_string()),
    }
}

/// Run one probe: invoke `call`, time it, classify the result.
///
/// # Errors
/// - Propagates the store error unchanged; the aggregator owns failure
///   handling and status forcing.
pub async fn run_probe<T, F, Fut>(
    uri: &str,
    threshold: Duration,
    call: F,
) -> StoreResult<ProbeResult>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = StoreResult<T>>,
{
    let started = Instant::now();
    call().await?;
    Ok(classify(uri, started.elapsed(), threshold))
}
