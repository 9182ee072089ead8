//! Activity log model
//!
//! Activities are append-only records of domain events. The description is
//! rendered at write time so the feed never has to re-resolve names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use wf_core::traits::{Entity, Id, Identifiable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    JobCreated,
    JobAssigned,
    JobStarted,
    JobCompleted,
    ReportSubmitted,
    WorkerClockedIn,
    WorkerClockedOut,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::JobCreated => "job_created",
            ActivityType::JobAssigned => "job_assigned",
            ActivityType::JobStarted => "job_started",
            ActivityType::JobCompleted => "job_completed",
            ActivityType::ReportSubmitted => "report_submitted",
            ActivityType::WorkerClockedIn => "worker_clocked_in",
            ActivityType::WorkerClockedOut => "worker_clocked_out",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an activity is about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ActivitySubject {
    Job(Id),
    Worker(Id),
    #[default]
    None,
}

impl ActivitySubject {
    /// Flat id of the subject, as the UI's `entityId` field expects
    pub fn entity_id(&self) -> Option<Id> {
        match self {
            ActivitySubject::Job(id) | ActivitySubject::Worker(id) => Some(*id),
            ActivitySubject::None => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Id,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub description: String,
    /// The actor
    pub user_id: Id,
    pub subject: ActivitySubject,
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for Activity {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Activity {
    const TYPE_NAME: &'static str = "Activity";
}

/// Activity to be appended. Built by the services, never deserialized from clients.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub activity_type: ActivityType,
    pub description: String,
    pub user_id: Id,
    pub subject: ActivitySubject,
    pub metadata: Map<String, Value>,
}

impl NewActivity {
    pub fn new(activity_type: ActivityType, user_id: Id, description: impl Into<String>) -> Self {
        Self {
            activity_type,
            description: description.into(),
            user_id,
            subject: ActivitySubject::None,
            metadata: Map::new(),
        }
    }

    pub fn about(mut self, subject: ActivitySubject) -> Self {
        self.subject = subject;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
