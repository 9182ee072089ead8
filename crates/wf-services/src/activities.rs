//! Activity feed queries

use wf_models::Activity;

use crate::base::ServiceContext;

/// Newest-first feed. `None` returns the whole log.
pub fn recent_activities(ctx: ServiceContext<'_>, limit: Option<usize>) -> Vec<Activity> {
    ctx.store.read(|tables| match limit {
        Some(limit) => tables.recent_activities(limit),
        None => tables.all_activities(),
    })
}
