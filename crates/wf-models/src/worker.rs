//! Worker model
//!
//! A worker is the field-staff profile attached to exactly one user.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};
use wf_core::traits::{Entity, Id, Identifiable};

use crate::location::GeoPoint;
use crate::trade::Trade;

/// Availability of a worker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    #[default]
    Available,
    Working,
    Offline,
}

impl WorkerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerStatus::Available => "available",
            WorkerStatus::Working => "working",
            WorkerStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worker profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: Id,
    pub user_id: Id,
    pub specialty: Trade,
    pub status: WorkerStatus,
    pub location: Option<GeoPoint>,
    pub completed_jobs: i32,
    /// Decimal string with two places, e.g. "4.85"
    pub rating: String,
    pub is_active: bool,
}

impl Worker {
    /// Counted in dashboard "available workers"
    pub fn is_available(&self) -> bool {
        self.status == WorkerStatus::Available
    }
}

impl Identifiable for Worker {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Worker {
    const TYPE_NAME: &'static str = "Worker";
}

fn default_rating() -> String {
    "0.00".to_string()
}

fn default_true() -> bool {
    true
}

/// Ratings are decimals in `0..=5`
fn validate_rating(rating: &str) -> Result<(), ValidationError> {
    match rating.trim().parse::<f64>() {
        Ok(value) if (0.0..=5.0).contains(&value) => Ok(()),
        _ => Err(ValidationError::new("rating")),
    }
}

/// Payload for creating a worker profile
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewWorker {
    pub user_id: Id,
    pub specialty: Trade,

    #[serde(default)]
    pub status: WorkerStatus,

    #[validate]
    #[serde(default)]
    pub location: Option<GeoPoint>,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub completed_jobs: i32,

    #[validate(custom = "validate_rating")]
    #[serde(default = "default_rating")]
    pub rating: String,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Partial update of a worker profile. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPatch {
    pub specialty: Option<Trade>,
    pub status: Option<WorkerStatus>,

    #[validate]
    pub location: Option<GeoPoint>,

    #[validate(range(min = 0))]
    pub completed_jobs: Option<i32>,

    #[validate(custom = "validate_rating")]
    pub rating: Option<String>,

    pub is_active: Option<bool>,
}

impl WorkerPatch {
    pub fn apply(self, worker: &mut Worker) {
        if let Some(specialty) = self.specialty {
            worker.specialty = specialty;
        }
        if let Some(status) = self.status {
            worker.status = status;
        }
        if let Some(location) = self.location {
            worker.location = Some(location);
        }
        if let Some(completed_jobs) = self.completed_jobs {
            worker.completed_jobs = completed_jobs;
        }
        if let Some(rating) = self.rating {
            worker.rating = rating;
        }
        if let Some(is_active) = self.is_active {
            worker.is_active = is_active;
        }
    }
}
