//! Health API handlers.
//!
//! # Purpose and responsibility
//! Maps `/healthz` requests onto the health aggregator and renders the
//! aggregate report in the requested representation.
//!
//! # Key invariants and assumptions
//! - The aggregator never fails; probe and store failures arrive as report
//!   data with status forced to `Unhealthy`. Only a fault in this wrapper
//!   itself maps to a 500 with the fixed generic body.
//! - The plain-text body is exactly one of the three status literals.
use crate::api::error::{ApiError, api_internal_message, api_not_found};
use crate::app::AppState;
use crate::health::ietf::to_ietf;
use crate::health::report::HealthReport;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Overall status as plain text: Healthy, Degraded or Unhealthy", body = String),
        (status = 500, description = "Health handler fault", body = crate::api::types::ErrorResponse)
    )
)]
/// Return the overall health status as plain text.
///
/// # What it does
/// Runs the full probe battery and responds with just the folded status name.
///
/// # Errors
/// - Store failures surface as an `Unhealthy` body, not as an HTTP error.
pub(crate) async fn healthz(State(state): State<AppState>) -> String {
    let report = state.health.check().await;
    report.status.to_string()
}

#[utoipa::path(
    get,
    path = "/healthz/{kind}",
    tag = "health",
    params(
        ("kind" = String, Path, description = "Report representation: json or ietf (case-insensitive)")
    ),
    responses(
        (status = 200, description = "Structured health report", body = HealthReport),
        (status = 404, description = "Unknown representation", body = crate::api::types::ErrorResponse)
    )
)]
/// Return the health report in a structured representation.
///
/// # What it does
/// Dispatches on the case-insensitive `kind` sub-path: `json` serializes the
/// native report, `ietf` the health+json transform, anything else is 404.
///
/// # Errors
/// - Returns 404 for unrecognized representations.
/// - Returns 500 with the generic body if rendering itself faults.
pub(crate) async fn healthz_as(
    Path(kind): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    match kind.to_ascii_lowercase().as_str() {
        "json" => {
            let report = state.health.check().await;
            Ok(render_json(&report)?)
        }
        "ietf" => {
            let report = state.health.check().await;
            let document = to_ietf(&report);
            Ok(Json(document).into_response())
        }
        _ => Err(api_not_found("unknown health representation")),
    }
}

fn render_json(report: &HealthReport) -> Result<Response, ApiError> {
    // Serialize eagerly so a rendering fault maps to the fixed generic body
    // instead of a half-written response.
    let value = serde_json::to_value(report)
        .map_err(|_| api_internal_message("health check failed"))?;
    Ok(Json(value).into_response())
}
