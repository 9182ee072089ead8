//! Time tracking operations

use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Reverse;
use wf_core::traits::Id;
use wf_models::{GeoPoint, TimeTracking};

use crate::store::Tables;

impl Tables {
    /// Open a shift. Callers must first make sure none is open.
    pub fn open_time_tracking(
        &mut self,
        worker_id: Id,
        job_id: Option<Id>,
        location: Option<GeoPoint>,
        now: DateTime<Utc>,
    ) -> TimeTracking {
        let record = TimeTracking {
            id: self.next_id(),
            worker_id,
            clock_in_time: now,
            clock_out_time: None,
            job_id,
            location,
            date: now,
        };
        self.time_tracking.insert(record)
    }

    /// Close a shift, replacing the location when one is given
    pub fn close_time_tracking(
        &mut self,
        id: Id,
        location: Option<GeoPoint>,
        now: DateTime<Utc>,
    ) -> Option<TimeTracking> {
        self.time_tracking.update(id, |record| {
            record.clock_out_time = Some(now);
            if location.is_some() {
                record.location = location;
            }
        })
    }

    /// A worker's shifts, newest first, optionally limited to one UTC day
    pub fn time_tracking_by_worker(&self, worker_id: Id, day: Option<NaiveDate>) -> Vec<TimeTracking> {
        let mut records = self
            .time_tracking
            .filter(|r| r.worker_id == worker_id && day.map_or(true, |d| r.day() == d));
        records.sort_by_key(|r| Reverse((r.date, r.id)));
        records
    }

    /// The worker's open shift, if any
    pub fn current_time_tracking(&self, worker_id: Id) -> Option<TimeTracking> {
        self.time_tracking
            .values()
            .filter(|r| r.worker_id == worker_id && r.is_open())
            .max_by_key(|r| (r.date, r.id))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_open_then_close() {
        let mut tables = Tables::default();
        let start = Utc::now();
        let open = tables.open_time_tracking(3, Some(8), Some(GeoPoint::new(1.0, 2.0)), start);

        assert_eq!(tables.current_time_tracking(3).map(|r| r.id), Some(open.id));

        let closed = tables
            .close_time_tracking(open.id, None, start + Duration::hours(1))
            .unwrap();
        assert_eq!(closed.clock_out_time, Some(start + Duration::hours(1)));
        assert_eq!(closed.location, Some(GeoPoint::new(1.0, 2.0)));
        assert!(tables.current_time_tracking(3).is_none());
    }

    #[test]
    fn test_history_filtered_by_day_newest_first() {
        let mut tables = Tables::default();
        let monday = Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap();
        let tuesday = monday + Duration::days(1);

        let a = tables.open_time_tracking(1, None, None, monday);
        tables.close_time_tracking(a.id, None, monday + Duration::hours(4));
        let b = tables.open_time_tracking(1, None, None, tuesday);
        tables.open_time_tracking(2, None, None, tuesday);

        let all: Vec<Id> = tables
            .time_tracking_by_worker(1, None)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(all, vec![b.id, a.id]);

        let monday_only = tables.time_tracking_by_worker(1, Some(monday.date_naive()));
        assert_eq!(monday_only.len(), 1);
        assert_eq!(monday_only[0].id, a.id);
    }

    #[test]
    fn test_close_unknown_record() {
        let mut tables = Tables::default();
        assert!(tables.close_time_tracking(42, None, Utc::now()).is_none());
    }
}
