use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require_message, TransitionError};
use crate::models::RecruitmentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    RequestMeeting,
    Approve,
    Reject,
    SetPending,
}

impl ActionKind {
    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::RequestMeeting => "request a meeting for",
            ActionKind::Approve => "approve",
            ActionKind::Reject => "reject",
            ActionKind::SetPending => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecruitmentAction {
    RequestMeeting {
        date: NaiveDate,
        time: NaiveTime,
        message: String,
    },
    Approve {
        salary: f64,
        message: String,
    },
    Reject {
        message: String,
    },
    SetPending,
}

impl RecruitmentAction {
    pub fn request_meeting(date: &str, time: &str, message: &str) -> Result<Self, TransitionError> {
        let mut errors = Vec::new();
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| errors.push("date: expected YYYY-MM-DD".to_string()))
            .ok();
        let time = parse_time(time)
            .ok_or_else(|| errors.push("time: expected HH:MM".to_string()))
            .ok();
        require_message(message, &mut errors);
        match (date, time) {
            (Some(date), Some(time)) if errors.is_empty() => Ok(RecruitmentAction::RequestMeeting {
                date,
                time,
                message: message.trim().to_string(),
            }),
            _ => Err(TransitionError::InvalidInput(errors)),
        }
    }

    pub fn approve(salary: f64, message: &str) -> Result<Self, TransitionError> {
        let mut errors = Vec::new();
        if !salary.is_finite() || salary <= 0.0 {
            errors.push("salary: must be a positive number".to_string());
        }
        require_message(message, &mut errors);
        if !errors.is_empty() {
            return Err(TransitionError::InvalidInput(errors));
        }
        Ok(RecruitmentAction::Approve {
            salary,
            message: message.trim().to_string(),
        })
    }

    pub fn reject(message: &str) -> Result<Self, TransitionError> {
        let mut errors = Vec::new();
        require_message(message, &mut errors);
        if !errors.is_empty() {
            return Err(TransitionError::InvalidInput(errors));
        }
        Ok(RecruitmentAction::Reject {
            message: message.trim().to_string(),
        })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            RecruitmentAction::RequestMeeting { .. } => ActionKind::RequestMeeting,
            RecruitmentAction::Approve { .. } => ActionKind::Approve,
            RecruitmentAction::Reject { .. } => ActionKind::Reject,
            RecruitmentAction::SetPending => ActionKind::SetPending,
        }
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Actions the review page offers for a record in `status`.
pub fn available_actions(status: Option<RecruitmentStatus>) -> &'static [ActionKind] {
    match status {
        Some(RecruitmentStatus::Pending) => &[ActionKind::RequestMeeting, ActionKind::Reject],
        Some(RecruitmentStatus::InProgress) => &[ActionKind::Approve, ActionKind::Reject],
        Some(RecruitmentStatus::Approved) | Some(RecruitmentStatus::Rejected) => {
            &[ActionKind::SetPending]
        }
        None => &[],
    }
}

pub fn next_status(
    current: Option<RecruitmentStatus>,
    action: &RecruitmentAction,
) -> Result<RecruitmentStatus, TransitionError> {
    use RecruitmentStatus::*;

    let current = current.ok_or(TransitionError::UnknownStatus)?;
    match (current, action.kind()) {
        (Pending, ActionKind::RequestMeeting) => Ok(InProgress),
        (Pending, ActionKind::Reject) | (InProgress, ActionKind::Reject) => Ok(Rejected),
        (InProgress, ActionKind::Approve) => Ok(Approved),
        (Rejected, ActionKind::SetPending) | (Approved, ActionKind::SetPending) => Ok(Pending),
        (from, kind) => Err(TransitionError::NotAllowed {
            from: from.label().to_string(),
            action: kind.verb(),
        }),
    }
}
