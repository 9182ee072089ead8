//! Job report model
//!
//! Reports are written by workers against a job and never change afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use wf_core::traits::{Entity, Id, Identifiable};

use crate::patch::hours;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Submitted,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobReport {
    pub id: Id,
    pub job_id: Id,
    pub worker_id: Id,
    pub description: String,
    /// Hours, written as a JSON number. Submission also accepts a decimal string.
    pub time_spent: Option<f64>,
    /// Opaque photo references (URLs or data URIs)
    pub photos: Vec<String>,
    pub status: ReportStatus,
    pub submitted_at: DateTime<Utc>,
}

impl Identifiable for JobReport {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for JobReport {
    const TYPE_NAME: &'static str = "JobReport";
}

/// Payload for submitting a report. The worker is taken from the session.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewJobReport {
    pub job_id: Id,

    #[validate(length(min = 1, message = "can't be blank"))]
    pub description: String,

    #[validate(range(min = 0.0))]
    #[serde(default, deserialize_with = "hours")]
    pub time_spent: Option<f64>,

    #[serde(default)]
    pub photos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_requires_description() {
        let report: NewJobReport =
            serde_json::from_str(r#"{"jobId":3,"description":"","timeSpent":1.5}"#).unwrap();
        assert!(report.validate().is_err());
        assert!(report.photos.is_empty());
    }

    #[test]
    fn test_negative_time_spent_is_rejected() {
        let report: NewJobReport =
            serde_json::from_str(r#"{"jobId":3,"description":"done","timeSpent":-1}"#).unwrap();
        assert!(report.validate().is_err());
    }

    #[test]
    fn test_time_spent_as_decimal_string() {
        let report: NewJobReport =
            serde_json::from_str(r#"{"jobId":3,"description":"done","timeSpent":"1.75"}"#)
                .unwrap();
        assert_eq!(report.time_spent, Some(1.75));
        assert!(report.validate().is_ok());
    }
}
