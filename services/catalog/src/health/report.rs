//! Health statuses, the status fold, and the aggregate report.
//!
//! # Purpose and responsibility
//! Defines the three-valued health status, the precedence fold that combines
//! per-probe statuses into one overall status, and the report shape the
//! renderers serialize.
//!
//! # Key invariants and assumptions
//! - The overall status is never more severe than the worst probe status, and
//!   equals that worst status when the aggregate run itself did not fault.
//! - JSON serialization never emits null-valued fields; absent values are
//!   omitted entirely.
use crate::health::probe::ProbeResult;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;

/// Fixed label identifying the check in reports.
pub const HEALTH_CHECK_DESCRIPTION: &str = "Catalog Store Health Check";

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Degraded => "Degraded",
            HealthStatus::Unhealthy => "Unhealthy",
        };
        f.write_str(name)
    }
}

/// Precedence fold over a sequence of probe statuses.
///
/// Not a plain max over an ordered enum: `Unhealthy` is sticky, a later
/// `Degraded` re-asserts over `Degraded`/`Healthy` but can never revert
/// `Unhealthy`, and a `Healthy` observation never changes the result.
#[derive(Debug, Clone, Copy)]
pub struct StatusFold {
    seen_unhealthy: bool,
    current: HealthStatus,
}

impl StatusFold {
    pub fn new() -> Self {
        Self {
            seen_unhealthy: false,
            current: HealthStatus::Healthy,
        }
    }

    pub fn observe(&mut self, status: HealthStatus) {
        if !self.seen_unhealthy && status != HealthStatus::Healthy {
            self.current = status;
        }
        if status == HealthStatus::Unhealthy {
            self.seen_unhealthy = true;
        }
    }

    pub fn status(&self) -> HealthStatus {
        self.current
    }
}

impl Default for StatusFold {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured failure detail recorded when the aggregate run faults.
///
/// Distinguishable from a [`ProbeResult`] entry by shape: it has an `error`
/// field and no `uri`.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct ErrorDetail {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
#[serde(untagged)]
pub enum ReportEntry {
    Probe(ProbeResult),
    Error(ErrorDetail),
    Text(String),
}

/// Insertion-ordered probe-name → entry mapping.
///
/// Serialized as a JSON object in insertion order so reports read in probe
/// execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportData {
    entries: Vec<(String, ReportEntry)>,
}

impl ReportData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: ReportEntry) {
        self.entries.push((key.into(), entry));
    }

    pub fn get(&self, key: &str) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }
}

impl Serialize for ReportData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

/// Aggregate health-check outcome for one request.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub description: String,
    #[schema(value_type = Object)]
    pub data: ReportData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}
