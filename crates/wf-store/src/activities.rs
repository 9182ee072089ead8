//! Activity log operations
//!
//! The log is append-only: there is no update or delete.

use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use wf_models::{Activity, NewActivity};

use crate::store::Tables;

impl Tables {
    pub fn create_activity(&mut self, new: NewActivity, now: DateTime<Utc>) -> Activity {
        let activity = Activity {
            id: self.next_id(),
            activity_type: new.activity_type,
            description: new.description,
            user_id: new.user_id,
            subject: new.subject,
            metadata: new.metadata,
            created_at: now,
        };
        tracing::debug!(
            activity_id = activity.id,
            kind = %activity.activity_type,
            "activity appended"
        );
        self.activities.insert(activity)
    }

    /// Every activity, newest first. Equal timestamps put the higher id first.
    pub fn all_activities(&self) -> Vec<Activity> {
        let mut activities = self.activities.all();
        activities.sort_by_key(|a| Reverse((a.created_at, a.id)));
        activities
    }

    /// The newest `limit` activities
    pub fn recent_activities(&self, limit: usize) -> Vec<Activity> {
        let mut activities = self.all_activities();
        activities.truncate(limit);
        activities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use wf_models::{ActivitySubject, ActivityType};

    fn note(text: &str) -> NewActivity {
        NewActivity::new(ActivityType::JobCreated, 1, text).about(ActivitySubject::Job(5))
    }

    #[test]
    fn test_recent_activities_newest_first() {
        let mut tables = Tables::default();
        let now = Utc::now();
        tables.create_activity(note("old"), now - Duration::hours(2));
        tables.create_activity(note("new"), now);
        tables.create_activity(note("mid"), now - Duration::hours(1));

        let recent: Vec<String> = tables
            .recent_activities(2)
            .into_iter()
            .map(|a| a.description)
            .collect();
        assert_eq!(recent, vec!["new", "mid"]);
        assert_eq!(tables.all_activities().len(), 3);
    }

    #[test]
    fn test_ties_break_on_higher_id() {
        let mut tables = Tables::default();
        let now = Utc::now();
        let first = tables.create_activity(note("first"), now);
        let second = tables.create_activity(note("second"), now);

        let ids: Vec<_> = tables.all_activities().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_limit_larger_than_log() {
        let mut tables = Tables::default();
        tables.create_activity(note("only"), Utc::now());
        assert_eq!(tables.recent_activities(50).len(), 1);
        assert!(tables.recent_activities(0).is_empty());
    }
}
