use serde::Serialize;
use wf_core::Id;
use wf_models::{Activity, User};
use wf_store::Tables;

/// Feed entry with the acting `user` and the flat `entityId` the UI links by
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRepresentation {
    #[serde(flatten)]
    pub activity: Activity,
    pub entity_id: Option<Id>,
    pub user: Option<User>,
}

impl ActivityRepresentation {
    pub fn represent(tables: &Tables, activity: Activity) -> Self {
        Self {
            entity_id: activity.subject.entity_id(),
            user: tables.user(activity.user_id).cloned(),
            activity,
        }
    }

    pub fn collection(tables: &Tables, activities: Vec<Activity>) -> Vec<Self> {
        activities
            .into_iter()
            .map(|activity| Self::represent(tables, activity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wf_store::MemoryStore;

    #[test]
    fn test_entity_id_and_user() {
        let store = MemoryStore::seeded(Utc::now(), |p| Ok(p.to_string())).unwrap();
        let json = store.read(|t| {
            let latest = t.recent_activities(1).remove(0);
            serde_json::to_value(ActivityRepresentation::represent(t, latest)).unwrap()
        });

        assert_eq!(json["type"], "job_assigned");
        assert_eq!(json["entityId"], json["subject"]["id"]);
        assert_eq!(json["subject"]["kind"], "job");
        assert_eq!(json["user"]["name"], "HR Manager");
    }
}
