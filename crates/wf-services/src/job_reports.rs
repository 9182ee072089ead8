//! Job report services

use serde::Deserialize;
use wf_contracts::job_reports::CreateJobReportContract;
use wf_contracts::Contract;
use wf_core::{Id, WfError, WfResult};
use wf_models::{ActivitySubject, ActivityType, JobReport, NewActivity, NewJobReport, Role};

use crate::base::{blank_as_none, own_worker, Callable, ServiceContext};

/// Service for a worker submitting a report on a job
pub struct SubmitJobReportService<'a> {
    ctx: ServiceContext<'a>,
}

impl<'a> SubmitJobReportService<'a> {
    pub fn new(ctx: ServiceContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Callable<NewJobReport> for SubmitJobReportService<'_> {
    type Output = JobReport;

    fn call(self, params: NewJobReport) -> WfResult<JobReport> {
        self.ctx.require_role(&[Role::Worker])?;
        let actor = self.ctx.user;
        let now = self.ctx.now;

        let report = self.ctx.store.write(|tables| {
            let worker = own_worker(tables, actor.id)?;
            if tables.job(params.job_id).is_none() {
                return Err(WfError::not_found("Job", params.job_id));
            }
            CreateJobReportContract
                .validate(&params)
                .map_err(WfError::Validation)?;

            let report = tables.create_job_report(worker.id, params, now);
            tables.create_activity(
                NewActivity::new(
                    ActivityType::ReportSubmitted,
                    actor.id,
                    format!("{} submitted job report", actor.name),
                )
                .about(ActivitySubject::Job(report.job_id))
                .with_metadata("reportId", report.id),
                now,
            );
            Ok(report)
        })?;

        tracing::info!(
            report_id = report.id,
            job_id = report.job_id,
            worker_id = report.worker_id,
            photos = report.photos.len(),
            "job report submitted"
        );
        Ok(report)
    }
}

/// Query-string filters for the report list. Both filters must match.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobReportFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub job_id: Option<Id>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub worker_id: Option<Id>,
}

pub fn list_job_reports(ctx: ServiceContext<'_>, filter: &JobReportFilter) -> Vec<JobReport> {
    let reports = ctx.store.read(|tables| match filter.job_id {
        Some(job_id) => tables.reports_by_job(job_id),
        None => tables.job_reports(),
    });
    reports
        .into_iter()
        .filter(|report| filter.worker_id.map_or(true, |id| report.worker_id == id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::testing::*;

    fn report(job_id: Id, description: &str) -> NewJobReport {
        NewJobReport {
            job_id,
            description: description.to_string(),
            time_spent: Some(1.5),
            photos: vec!["data:image/jpeg;base64,/9j/4AAQ".into()],
        }
    }

    fn johns_job(store: &wf_store::MemoryStore) -> Id {
        store.read(|t| t.jobs_by_status(wf_models::JobStatus::Assigned)[0].id)
    }

    #[test]
    fn test_submit_ties_report_to_callers_worker() {
        let store = seeded_store();
        let john = acting(&store, "john.doe");
        let job_id = johns_job(&store);

        let report = SubmitJobReportService::new(ServiceContext::new(&store, &john))
            .call(report(job_id, "Replaced the trap and resealed"))
            .unwrap();

        let john_worker = store.read(|t| t.worker_by_user_id(john.id).unwrap().id);
        assert_eq!(report.worker_id, john_worker);
        assert_eq!(report.status, wf_models::ReportStatus::Submitted);

        let latest = store.read(|t| t.recent_activities(1)).remove(0);
        assert_eq!(latest.activity_type, ActivityType::ReportSubmitted);
        assert_eq!(latest.description, "John Doe submitted job report");
        assert_eq!(latest.subject, ActivitySubject::Job(job_id));
        assert_eq!(latest.metadata["reportId"], report.id);
    }

    #[test]
    fn test_unknown_job_is_not_found() {
        let store = seeded_store();
        let john = acting(&store, "john.doe");

        let err = SubmitJobReportService::new(ServiceContext::new(&store, &john))
            .call(report(999, "Done"))
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert!(store.read(|t| t.job_reports()).is_empty());
    }

    #[test]
    fn test_blank_description_and_role() {
        let store = seeded_store();
        let john = acting(&store, "john.doe");
        let hr = acting(&store, "hr.manager");
        let job_id = johns_job(&store);

        let err = SubmitJobReportService::new(ServiceContext::new(&store, &john))
            .call(report(job_id, "   "))
            .unwrap_err();
        assert!(matches!(err, WfError::Validation(ref e) if e.has_error("description")));

        let err = SubmitJobReportService::new(ServiceContext::new(&store, &hr))
            .call(report(job_id, "Done"))
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_list_filters_combine() {
        let store = seeded_store();
        let john = acting(&store, "john.doe");
        let mike = acting(&store, "mike.smith");
        let job_id = johns_job(&store);

        SubmitJobReportService::new(ServiceContext::new(&store, &john))
            .call(report(job_id, "First visit"))
            .unwrap();
        let mikes = SubmitJobReportService::new(ServiceContext::new(&store, &mike))
            .call(report(job_id, "Second opinion"))
            .unwrap();

        let ctx = ServiceContext::new(&store, &john);
        let by_job = JobReportFilter {
            job_id: Some(job_id),
            worker_id: None,
        };
        assert_eq!(list_job_reports(ctx, &by_job).len(), 2);

        let by_both = JobReportFilter {
            job_id: Some(job_id),
            worker_id: Some(mikes.worker_id),
        };
        let found = list_job_reports(ctx, &by_both);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "Second opinion");
    }
}
