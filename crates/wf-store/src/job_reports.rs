//! Job report table operations

use chrono::{DateTime, Utc};
use wf_core::traits::Id;
use wf_models::{JobReport, NewJobReport, ReportStatus};

use crate::store::Tables;

impl Tables {
    /// Reports always start out `submitted`
    pub fn create_job_report(
        &mut self,
        worker_id: Id,
        new: NewJobReport,
        now: DateTime<Utc>,
    ) -> JobReport {
        let report = JobReport {
            id: self.next_id(),
            job_id: new.job_id,
            worker_id,
            description: new.description,
            time_spent: new.time_spent,
            photos: new.photos,
            status: ReportStatus::Submitted,
            submitted_at: now,
        };
        self.job_reports.insert(report)
    }

    pub fn job_report(&self, id: Id) -> Option<&JobReport> {
        self.job_reports.get(id)
    }

    pub fn job_reports(&self) -> Vec<JobReport> {
        self.job_reports.all()
    }

    pub fn reports_by_job(&self, job_id: Id) -> Vec<JobReport> {
        self.job_reports.filter(|r| r.job_id == job_id)
    }

    pub fn reports_by_worker(&self, worker_id: Id) -> Vec<JobReport> {
        self.job_reports.filter(|r| r.worker_id == worker_id)
    }
}
