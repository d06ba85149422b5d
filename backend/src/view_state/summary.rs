//! Dashboard counters for the three list pages.

use chrono::Datelike;
use chrono_tz::Tz;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{Employee, EmployeeStatus, LeaveRequest, LeaveStatus, RecruitmentApplication, RecruitmentStatus},
    utils::time::parse_sheet_date,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentSummary {
    pub total: usize,
    pub new_this_year: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub total: usize,
    pub on_leave: usize,
    pub active: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn recruitments(rows: &[RecruitmentApplication], year: i32, tz: &Tz) -> RecruitmentSummary {
    RecruitmentSummary {
        total: rows.len(),
        new_this_year: rows
            .iter()
            .filter_map(|row| parse_sheet_date(&row.timestamp, tz))
            .filter(|date| date.year() == year)
            .count(),
        pending: rows
            .iter()
            .filter(|row| row.status == Some(RecruitmentStatus::Pending))
            .count(),
    }
}

pub fn employees(rows: &[Employee]) -> EmployeeSummary {
    let count = |status| rows.iter().filter(|row| row.status == Some(status)).count();
    EmployeeSummary {
        total: rows.len(),
        on_leave: count(EmployeeStatus::OnLeave),
        active: count(EmployeeStatus::Active),
    }
}

pub fn leave_requests(rows: &[LeaveRequest]) -> LeaveSummary {
    let count = |status| rows.iter().filter(|row| row.status == Some(status)).count();
    LeaveSummary {
        total: rows.len(),
        pending: count(LeaveStatus::Pending),
        approved: count(LeaveStatus::Approved),
        rejected: count(LeaveStatus::Rejected),
    }
}
