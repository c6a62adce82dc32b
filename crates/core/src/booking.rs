//! Booking status vocabulary and transition rules.
//!
//! Statuses are stored as plain strings, matching the wire format the
//! mobile client already speaks. The historical service accepted any
//! status string on a transition; that permissive behaviour is the
//! default, and the validation helpers here are only consulted when the
//! store runs in strict mode.

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ACCEPTED: &str = "accepted";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Every status the booking state machine knows about.
pub const ALL_STATUSES: [&str; 5] = [
    STATUS_PENDING,
    STATUS_ACCEPTED,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// Whether a booking in this status can never transition again.
pub fn is_terminal(status: &str) -> bool {
    status == STATUS_COMPLETED || status == STATUS_CANCELLED
}

/// Reject status strings outside the known vocabulary.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if ALL_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown booking status: {status}"
        )))
    }
}

/// Reject transitions the lifecycle does not allow.
///
/// The forward path is `pending -> accepted -> in_progress -> completed`;
/// `cancelled` is reachable from any non-terminal status. Terminal
/// statuses cannot be left, which also covers re-entering `completed`
/// (permissive mode would silently re-stamp `completed_at` there).
pub fn validate_transition(from: &str, to: &str) -> Result<(), CoreError> {
    validate_status(to)?;
    if is_terminal(from) {
        return Err(CoreError::Conflict(format!(
            "Booking is already {from} and cannot transition to {to}"
        )));
    }
    let allowed = match from {
        STATUS_PENDING => to == STATUS_ACCEPTED || to == STATUS_CANCELLED,
        STATUS_ACCEPTED => to == STATUS_IN_PROGRESS || to == STATUS_CANCELLED,
        STATUS_IN_PROGRESS => to == STATUS_COMPLETED || to == STATUS_CANCELLED,
        // Unknown current status (legacy data written permissively):
        // allow any known target rather than wedging the booking.
        _ => true,
    };
    if allowed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Booking cannot transition from {from} to {to}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn terminal_statuses_are_completed_and_cancelled() {
        assert!(is_terminal(STATUS_COMPLETED));
        assert!(is_terminal(STATUS_CANCELLED));
        assert!(!is_terminal(STATUS_PENDING));
        assert!(!is_terminal(STATUS_ACCEPTED));
        assert!(!is_terminal(STATUS_IN_PROGRESS));
    }

    #[test]
    fn validate_status_rejects_unknown_strings() {
        assert_matches!(validate_status("paused"), Err(CoreError::Validation(_)));
        for status in ALL_STATUSES {
            assert!(validate_status(status).is_ok());
        }
    }

    #[test]
    fn forward_path_transitions_are_allowed() {
        assert!(validate_transition(STATUS_PENDING, STATUS_ACCEPTED).is_ok());
        assert!(validate_transition(STATUS_ACCEPTED, STATUS_IN_PROGRESS).is_ok());
        assert!(validate_transition(STATUS_IN_PROGRESS, STATUS_COMPLETED).is_ok());
    }

    #[test]
    fn cancel_is_allowed_from_any_non_terminal_status() {
        assert!(validate_transition(STATUS_PENDING, STATUS_CANCELLED).is_ok());
        assert!(validate_transition(STATUS_ACCEPTED, STATUS_CANCELLED).is_ok());
        assert!(validate_transition(STATUS_IN_PROGRESS, STATUS_CANCELLED).is_ok());
    }

    #[test]
    fn terminal_statuses_cannot_be_left() {
        assert_matches!(
            validate_transition(STATUS_COMPLETED, STATUS_PENDING),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            validate_transition(STATUS_COMPLETED, STATUS_COMPLETED),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            validate_transition(STATUS_CANCELLED, STATUS_ACCEPTED),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn skipping_lifecycle_stages_is_rejected() {
        assert_matches!(
            validate_transition(STATUS_PENDING, STATUS_COMPLETED),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_transition(STATUS_ACCEPTED, STATUS_COMPLETED),
            Err(CoreError::Validation(_))
        );
    }
}
