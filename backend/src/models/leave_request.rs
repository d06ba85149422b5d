use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use utoipa::ToSchema;

use super::sheet::{de_cell, DecodeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(LeaveStatus::Pending),
            "approved" => Some(LeaveStatus::Approved),
            "rejected" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub timestamp: String,
    pub email_address: String,
    pub full_name: String,
    #[serde(rename = "employeeID")]
    pub employee_id: String,
    pub days_total: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: Option<LeaveStatus>,
}

impl LeaveRequest {
    pub fn status_label(&self) -> &'static str {
        self.status.map(LeaveStatus::label).unwrap_or("")
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, Some(LeaveStatus::Pending))
    }

    pub fn belongs_to(&self, employee_id: &str) -> bool {
        self.employee_id.trim() == employee_id.trim()
    }

    /// An employee can have several rows; the submission timestamp tells
    /// them apart.
    pub fn request_key(&self) -> String {
        format!("{}@{}", self.employee_id.trim(), self.timestamp.trim())
    }

    pub fn is_same_request(&self, other: &LeaveRequest) -> bool {
        self.belongs_to(&other.employee_id) && self.timestamp.trim() == other.timestamp.trim()
    }

    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let row: LeaveSheetRow = serde_json::from_value(value).map_err(|e| DecodeError::Malformed {
            record: "leave request",
            message: e.to_string(),
        })?;
        Self::try_from(row)
    }
}

/// Header-keyed row of the `Take Leave` sheet. The trailing space in
/// `Employee ID ` is how the form created the column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveSheetRow {
    #[serde(rename = "Timestamp", default, deserialize_with = "de_cell")]
    pub timestamp: String,
    #[serde(rename = "Email address", default, deserialize_with = "de_cell")]
    pub email_address: String,
    #[serde(rename = "Full Name", default, deserialize_with = "de_cell")]
    pub full_name: String,
    #[serde(rename = "Employee ID ", default, deserialize_with = "de_cell")]
    pub employee_id: String,
    #[serde(rename = "How many days in total?", default, deserialize_with = "de_cell")]
    pub days_total: String,
    #[serde(rename = "Leave Start Date", default, deserialize_with = "de_cell")]
    pub start_date: String,
    #[serde(rename = "Leave End Date", default, deserialize_with = "de_cell")]
    pub end_date: String,
    #[serde(rename = "Reason", default, deserialize_with = "de_cell")]
    pub reason: String,
    #[serde(rename = "Status", default, deserialize_with = "de_cell")]
    pub status: String,
}

impl TryFrom<LeaveSheetRow> for LeaveRequest {
    type Error = DecodeError;

    fn try_from(row: LeaveSheetRow) -> Result<Self, Self::Error> {
        let employee_id = row.employee_id.trim().to_string();
        if employee_id.is_empty() {
            return Err(DecodeError::MissingId {
                record: "leave request",
            });
        }
        Ok(LeaveRequest {
            timestamp: row.timestamp,
            email_address: row.email_address,
            full_name: row.full_name,
            employee_id,
            days_total: row.days_total,
            start_date: row.start_date,
            end_date: row.end_date,
            reason: row.reason,
            status: LeaveStatus::parse(&row.status),
        })
    }
}

impl From<&LeaveRequest> for LeaveSheetRow {
    fn from(request: &LeaveRequest) -> Self {
        LeaveSheetRow {
            timestamp: request.timestamp.clone(),
            email_address: request.email_address.clone(),
            full_name: request.full_name.clone(),
            employee_id: request.employee_id.clone(),
            days_total: request.days_total.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            reason: request.reason.clone(),
            status: request.status_label().to_string(),
        }
    }
}
