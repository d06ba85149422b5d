//! Status transitions for recruitment applications and leave requests.
//!
//! Both machines are pure: they decide whether a transition is legal and
//! what the resulting status is. Persisting the result is the repositories'
//! job.

pub mod leave;
pub mod recruitment;

use thiserror::Error;

pub use leave::{decide as decide_leave, DecisionEffect, LeaveDecision};
pub use recruitment::{available_actions, next_status, ActionKind, RecruitmentAction};

pub const MAX_MESSAGE_LENGTH: usize = 500;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {action} a record that is {from}")]
    NotAllowed { from: String, action: &'static str },
    #[error("record has no recognised status")]
    UnknownStatus,
    #[error("invalid transition input: {}", .0.join(", "))]
    InvalidInput(Vec<String>),
}

pub(crate) fn require_message(message: &str, errors: &mut Vec<String>) {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        errors.push("message: required".to_string());
    } else if trimmed.chars().count() > MAX_MESSAGE_LENGTH {
        errors.push(format!(
            "message: must be between 1 and {} characters",
            MAX_MESSAGE_LENGTH
        ));
    }
}
