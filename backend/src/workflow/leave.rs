//! Leave decisions. Only a Pending request can be decided, and each decision
//! fixes the status the employee moves to.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TransitionError;
use crate::models::{EmployeeStatus, LeaveStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LeaveDecision {
    Approve,
    Reject,
}

impl LeaveDecision {
    /// Value of `action` the leave script expects.
    pub fn action_label(self) -> &'static str {
        match self {
            LeaveDecision::Approve => "Approve",
            LeaveDecision::Reject => "Reject",
        }
    }

    /// Maps the target status the queue page posts onto a decision.
    pub fn from_target_status(raw: &str) -> Option<Self> {
        match LeaveStatus::parse(raw)? {
            LeaveStatus::Approved => Some(LeaveDecision::Approve),
            LeaveStatus::Rejected => Some(LeaveDecision::Reject),
            LeaveStatus::Pending => None,
        }
    }
}

/// What a decision writes to the two records it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecisionEffect {
    pub leave_status: LeaveStatus,
    pub employee_status: EmployeeStatus,
}

/// Leave requests only move out of `Pending`; there is no way back.
pub fn decide(
    current: Option<LeaveStatus>,
    decision: LeaveDecision,
) -> Result<DecisionEffect, TransitionError> {
    match (current, decision) {
        (Some(LeaveStatus::Pending), LeaveDecision::Approve) => Ok(DecisionEffect {
            leave_status: LeaveStatus::Approved,
            employee_status: EmployeeStatus::OnLeave,
        }),
        (Some(LeaveStatus::Pending), LeaveDecision::Reject) => Ok(DecisionEffect {
            leave_status: LeaveStatus::Rejected,
            employee_status: EmployeeStatus::Active,
        }),
        (Some(from), decision) => Err(TransitionError::NotAllowed {
            from: from.label().to_string(),
            action: match decision {
                LeaveDecision::Approve => "approve",
                LeaveDecision::Reject => "reject",
            },
        }),
        (None, _) => Err(TransitionError::UnknownStatus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_requests_can_be_decided() {
        let approved = decide(Some(LeaveStatus::Pending), LeaveDecision::Approve).unwrap();
        assert_eq!(approved.leave_status, LeaveStatus::Approved);
        assert_eq!(approved.employee_status, EmployeeStatus::OnLeave);

        let rejected = decide(Some(LeaveStatus::Pending), LeaveDecision::Reject).unwrap();
        assert_eq!(rejected.leave_status, LeaveStatus::Rejected);
        assert_eq!(rejected.employee_status, EmployeeStatus::Active);
    }

    #[test]
    fn decided_requests_are_final() {
        for from in [LeaveStatus::Approved, LeaveStatus::Rejected] {
            for decision in [LeaveDecision::Approve, LeaveDecision::Reject] {
                assert!(matches!(
                    decide(Some(from), decision),
                    Err(TransitionError::NotAllowed { .. })
                ));
            }
        }
        assert_eq!(
            decide(None, LeaveDecision::Approve),
            Err(TransitionError::UnknownStatus)
        );
    }

    #[test]
    fn target_status_maps_to_decision() {
        assert_eq!(LeaveDecision::from_target_status("Approved"), Some(LeaveDecision::Approve));
        assert_eq!(LeaveDecision::from_target_status("rejected"), Some(LeaveDecision::Reject));
        assert_eq!(LeaveDecision::from_target_status("Pending"), None);
        assert_eq!(LeaveDecision::from_target_status("On Leave"), None);
    }
}
