//! Time tracking model

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use wf_core::traits::{Entity, Id, Identifiable};

use crate::location::GeoPoint;

/// One clock-in/clock-out shift. `clock_out_time == None` means the worker
/// is currently on the clock; a worker has at most one such record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTracking {
    pub id: Id,
    pub worker_id: Id,
    pub clock_in_time: DateTime<Utc>,
    pub clock_out_time: Option<DateTime<Utc>>,
    pub job_id: Option<Id>,
    pub location: Option<GeoPoint>,
    pub date: DateTime<Utc>,
}

impl TimeTracking {
    pub fn is_open(&self) -> bool {
        self.clock_out_time.is_none()
    }

    /// Calendar day the shift belongs to (UTC)
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Length of a closed shift
    pub fn duration(&self) -> Option<Duration> {
        self.clock_out_time.map(|out| out - self.clock_in_time)
    }
}

impl Identifiable for TimeTracking {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for TimeTracking {
    const TYPE_NAME: &'static str = "TimeTracking";
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_open_and_closed_shift() {
        let start = Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap();
        let mut record = TimeTracking {
            id: 1,
            worker_id: 2,
            clock_in_time: start,
            clock_out_time: None,
            job_id: None,
            location: None,
            date: start,
        };
        assert!(record.is_open());
        assert_eq!(record.duration(), None);

        record.clock_out_time = Some(start + Duration::hours(8));
        assert!(!record.is_open());
        assert_eq!(record.duration(), Some(Duration::hours(8)));
        assert_eq!(record.day(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("clockOutTime").is_some());
        assert!(json["jobId"].is_null());
    }
}
