//! Job status transitions

use wf_core::{WfError, WfResult};
use wf_models::JobStatus;

use JobStatus::*;

/// Every legal (from, to) pair. Writing the current status again is not
/// listed; it is always accepted as a no-op.
pub const ALLOWED_TRANSITIONS: [(JobStatus, JobStatus); 7] = [
    (Pending, Assigned),
    (Pending, Cancelled),
    (Assigned, InProgress),
    (Assigned, Pending),
    (Assigned, Cancelled),
    (InProgress, Completed),
    (InProgress, Cancelled),
];

pub fn transition_allowed(from: JobStatus, to: JobStatus) -> bool {
    from == to || ALLOWED_TRANSITIONS.contains(&(from, to))
}

pub fn check_transition(from: JobStatus, to: JobStatus) -> WfResult<()> {
    if transition_allowed(from, to) {
        Ok(())
    } else {
        tracing::warn!(%from, %to, "rejected job status transition");
        Err(WfError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_is_allowed() {
        assert!(transition_allowed(Pending, Assigned));
        assert!(transition_allowed(Assigned, InProgress));
        assert!(transition_allowed(InProgress, Completed));
    }

    #[test]
    fn test_same_status_is_a_no_op() {
        for status in JobStatus::ALL {
            assert!(transition_allowed(status, status));
        }
    }

    #[test]
    fn test_terminal_states_are_final() {
        for to in JobStatus::ALL {
            if to != Completed {
                assert!(!transition_allowed(Completed, to));
            }
            if to != Cancelled {
                assert!(!transition_allowed(Cancelled, to));
            }
        }
    }

    #[test]
    fn test_skipping_steps_is_rejected() {
        assert!(!transition_allowed(Pending, InProgress));
        assert!(!transition_allowed(Pending, Completed));
        assert!(!transition_allowed(Assigned, Completed));
        assert!(!transition_allowed(InProgress, Pending));

        let err = check_transition(Completed, Pending).unwrap_err();
        assert_eq!(err.to_string(), "Invalid status transition from completed to pending");
        assert_eq!(err.status_code(), 400);
    }
}
