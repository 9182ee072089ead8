use serde::Serialize;
use wf_models::{User, Worker};
use wf_store::Tables;

/// Worker with its `user`
#[derive(Debug, Clone, Serialize)]
pub struct WorkerRepresentation {
    #[serde(flatten)]
    pub worker: Worker,
    pub user: Option<User>,
}

impl WorkerRepresentation {
    pub fn represent(tables: &Tables, worker: Worker) -> Self {
        let user = tables.user(worker.user_id).cloned();
        Self { worker, user }
    }

    pub fn collection(tables: &Tables, workers: Vec<Worker>) -> Vec<Self> {
        workers
            .into_iter()
            .map(|worker| Self::represent(tables, worker))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wf_store::MemoryStore;

    #[test]
    fn test_user_is_inlined_without_password() {
        let store = MemoryStore::seeded(Utc::now(), |p| Ok(format!("hash:{p}"))).unwrap();
        let json = store.read(|t| {
            let worker = t.workers().remove(0);
            serde_json::to_value(WorkerRepresentation::represent(t, worker)).unwrap()
        });

        assert_eq!(json["specialty"], "plumbing");
        assert_eq!(json["user"]["name"], "John Doe");
        assert!(json["user"].get("passwordHash").is_none());
        assert!(json["user"].get("password").is_none());
    }
}
