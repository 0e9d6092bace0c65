//! IETF health+json rendering of the aggregate report.
//!
//! # Purpose
//! Pure transform of a [`HealthReport`] into the community health-check
//! document shape (draft-inadarei-api-health-check) for generic consumers:
//! `pass`/`warn`/`fail` statuses, a `checks` map of timed observations, and
//! top-level service identity fields.
use crate::health::report::{HealthReport, HealthStatus, ReportEntry};
use serde::Serialize;
use serde::ser::SerializeMap;
use serde::Serializer;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IetfStatus {
    Pass,
    Warn,
    Fail,
}

impl From<HealthStatus> for IetfStatus {
    fn from(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Healthy => IetfStatus::Pass,
            HealthStatus::Degraded => IetfStatus::Warn,
            HealthStatus::Unhealthy => IetfStatus::Fail,
        }
    }
}

#[derive(Debug, Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IetfCheck {
    pub component_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_unit: Option<String>,
    pub status: IetfStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Checks keyed by probe name, in probe execution order.
#[derive(Debug, Clone, Default)]
pub struct IetfChecks(Vec<(String, Vec<IetfCheck>)>);

impl IetfChecks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[IetfCheck]> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, checks)| checks.as_slice())
    }
}

impl Serialize for IetfChecks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, checks) in &self.0 {
            map.serialize_entry(key, checks)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IetfHealthReport {
    pub status: IetfStatus,
    /// Public schema version, not the service version.
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "IetfChecks::is_empty")]
    #[schema(value_type = Object)]
    pub checks: IetfChecks,
}

/// Transform the native report into the IETF document.
///
/// Metadata entries map onto identity fields (`instance` → `serviceId`,
/// `version` → `releaseId`, anything else → `notes`); probe entries become
/// response-time checks; captured errors become failing checks.
pub fn to_ietf(report: &HealthReport) -> IetfHealthReport {
    let mut release_id = None;
    let mut service_id = None;
    let mut notes = Vec::new();
    let mut checks = Vec::new();

    for (name, entry) in report.data.iter() {
        match entry {
            ReportEntry::Text(value) => match name {
                "version" => release_id = Some(value.clone()),
                "instance" => service_id = Some(value.clone()),
                _ => notes.push(format!("{name}: {value}")),
            },
            ReportEntry::Probe(result) => {
                checks.push((
                    format!("{name}:responseTime"),
                    vec![IetfCheck {
                        component_type: "datastore".to_string(),
                        observed_value: Some(result.total_milliseconds),
                        observed_unit: Some("ms".to_string()),
                        status: result.status.into(),
                        output: result.message.clone(),
                    }],
                ));
            }
            ReportEntry::Error(detail) => {
                let output = match detail.status_code {
                    Some(code) => format!("{} (status {code})", detail.error),
                    None => detail.error.clone(),
                };
                checks.push((
                    name.to_string(),
                    vec![IetfCheck {
                        component_type: "datastore".to_string(),
                        observed_value: None,
                        observed_unit: None,
                        status: IetfStatus::Fail,
                        output: Some(output),
                    }],
                ));
            }
        }
    }

    IetfHealthReport {
        status: report.status.into(),
        version: "1".to_string(),
        release_id,
        service_id,
        description: report.description.clone(),
        notes,
        output: report.exception.clone(),
        checks: IetfChecks(checks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::probe::ProbeResult;
    use crate::health::report::{ErrorDetail, HEALTH_CHECK_DESCRIPTION, ReportData};

    fn sample_report() -> HealthReport {
        let mut data = ReportData::new();
        data.insert("store_key", ReportEntry::Text("abcde...".to_string()));
        data.insert("instance", ReportEntry::Text("inst-7".to_string()));
        data.insert("version", ReportEntry::Text("0.1.0".to_string()));
        data.insert(
            "list_genres",
            ReportEntry::Probe(ProbeResult {
                uri: "list genres".to_string(),
                status: HealthStatus::Healthy,
                total_milliseconds: 12.5,
                message: None,
            }),
        );
        HealthReport {
            status: HealthStatus::Healthy,
            description: HEALTH_CHECK_DESCRIPTION.to_string(),
            data,
            exception: None,
        }
    }

    #[test]
    fn statuses_map_to_pass_warn_fail() {
        assert_eq!(IetfStatus::from(HealthStatus::Healthy), IetfStatus::Pass);
        assert_eq!(IetfStatus::from(HealthStatus::Degraded), IetfStatus::Warn);
        assert_eq!(IetfStatus::from(HealthStatus::Unhealthy), IetfStatus::Fail);
    }

    #[test]
    fn metadata_maps_to_identity_fields() {
        let doc = to_ietf(&sample_report());
        assert_eq!(doc.status, IetfStatus::Pass);
        assert_eq!(doc.release_id.as_deref(), Some("0.1.0"));
        assert_eq!(doc.service_id.as_deref(), Some("inst-7"));
        assert_eq!(doc.notes, vec!["store_key: abcde...".to_string()]);
        let checks = doc.checks.get("list_genres:responseTime").expect("check");
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].observed_value, Some(12.5));
        assert_eq!(checks[0].observed_unit.as_deref(), Some("ms"));
    }

    #[test]
    fn error_entries_become_failing_checks() {
        let mut report = sample_report();
        report.status = HealthStatus::Unhealthy;
        report.exception = Some("document missing".to_string());
        report.data.insert(
            "store_error",
            ReportEntry::Error(ErrorDetail {
                error: "document missing".to_string(),
                status_code: Some(404),
                correlation_id: Some("corr-1".to_string()),
            }),
        );
        let doc = to_ietf(&report);
        assert_eq!(doc.status, IetfStatus::Fail);
        assert_eq!(doc.output.as_deref(), Some("document missing"));
        let checks = doc.checks.get("store_error").expect("error check");
        assert_eq!(checks[0].status, IetfStatus::Fail);
        assert_eq!(
            checks[0].output.as_deref(),
            Some("document missing (status 404)")
        );
    }

    #[test]
    fn rendering_never_emits_nulls() {
        let doc = to_ietf(&sample_report());
        let value = serde_json::to_value(&doc).expect("serialize");
        assert!(!value.to_string().contains("null"));
        assert!(value.get("output").is_none());
    }

    #[test]
    fn serialized_field_names_are_camel_case() {
        let doc = to_ietf(&sample_report());
        let value = serde_json::to_value(&doc).expect("serialize");
        assert!(value.get("releaseId").is_some());
        assert!(value.get("serviceId").is_some());
        assert_eq!(value["status"], "pass");
    }
}
