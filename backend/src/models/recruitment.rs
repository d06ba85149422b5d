use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use utoipa::ToSchema;

use super::sheet::{de_cell, DecodeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RecruitmentStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Approved,
    Rejected,
}

impl RecruitmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            RecruitmentStatus::Pending => "Pending",
            RecruitmentStatus::InProgress => "In Progress",
            RecruitmentStatus::Approved => "Approved",
            RecruitmentStatus::Rejected => "Rejected",
        }
    }

    /// The sheet has held both `In Progress` and `in progress`; accept either.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(RecruitmentStatus::Pending),
            "in progress" | "in_progress" => Some(RecruitmentStatus::InProgress),
            "approved" => Some(RecruitmentStatus::Approved),
            "rejected" => Some(RecruitmentStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for RecruitmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentApplication {
    pub id: String,
    pub timestamp: String,
    pub email_address: String,
    pub full_name: String,
    pub position_applied_for: String,
    pub department_applied_for: String,
    pub phone_number: String,
    pub previous_work_experience: String,
    pub skills: String,
    pub cv_link: String,
    pub status: Option<RecruitmentStatus>,
    pub meeting_date: String,
    pub meeting_time: String,
    pub message: String,
    pub salary: String,
}

impl RecruitmentApplication {
    pub fn status_label(&self) -> &'static str {
        self.status.map(RecruitmentStatus::label).unwrap_or("")
    }

    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let row: RecruitmentSheetRow =
            serde_json::from_value(value).map_err(|e| DecodeError::Malformed {
                record: "recruitment",
                message: e.to_string(),
            })?;
        Self::try_from(row)
    }
}

/// Header-keyed row exactly as the `Resume` sheet exposes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentSheetRow {
    #[serde(rename = "ID", default, deserialize_with = "de_cell")]
    pub id: String,
    #[serde(rename = "Timestamp", default, deserialize_with = "de_cell")]
    pub timestamp: String,
    #[serde(rename = "Email address", default, deserialize_with = "de_cell")]
    pub email_address: String,
    #[serde(rename = "Please enter your full name. ", default, deserialize_with = "de_cell")]
    pub full_name: String,
    #[serde(rename = "Position Applied For:  ", default, deserialize_with = "de_cell")]
    pub position_applied_for: String,
    #[serde(rename = "Department applied for", default, deserialize_with = "de_cell")]
    pub department_applied_for: String,
    #[serde(rename = "Write your phone number", default, deserialize_with = "de_cell")]
    pub phone_number: String,
    #[serde(rename = "Previous Work Experience", default, deserialize_with = "de_cell")]
    pub previous_work_experience: String,
    #[serde(rename = "Skills you have", default, deserialize_with = "de_cell")]
    pub skills: String,
    #[serde(rename = "Attach your CV", default, deserialize_with = "de_cell")]
    pub cv_link: String,
    #[serde(rename = "Status", default, deserialize_with = "de_cell")]
    pub status: String,
    #[serde(rename = "Meeting Date", default, deserialize_with = "de_cell")]
    pub meeting_date: String,
    #[serde(rename = "Meeting Time", default, deserialize_with = "de_cell")]
    pub meeting_time: String,
    #[serde(rename = "Message", default, deserialize_with = "de_cell")]
    pub message: String,
    #[serde(rename = "Salary", default, deserialize_with = "de_cell")]
    pub salary: String,
}

impl TryFrom<RecruitmentSheetRow> for RecruitmentApplication {
    type Error = DecodeError;

    fn try_from(row: RecruitmentSheetRow) -> Result<Self, Self::Error> {
        let id = row.id.trim().to_string();
        if id.is_empty() {
            return Err(DecodeError::MissingId {
                record: "recruitment",
            });
        }
        Ok(RecruitmentApplication {
            id,
            timestamp: row.timestamp,
            email_address: row.email_address,
            full_name: row.full_name,
            position_applied_for: row.position_applied_for,
            department_applied_for: row.department_applied_for,
            phone_number: row.phone_number,
            previous_work_experience: row.previous_work_experience,
            skills: row.skills,
            cv_link: row.cv_link,
            status: RecruitmentStatus::parse(&row.status),
            meeting_date: row.meeting_date,
            meeting_time: row.meeting_time,
            message: row.message,
            salary: row.salary,
        })
    }
}

impl From<&RecruitmentApplication> for RecruitmentSheetRow {
    fn from(app: &RecruitmentApplication) -> Self {
        RecruitmentSheetRow {
            id: app.id.clone(),
            timestamp: app.timestamp.clone(),
            email_address: app.email_address.clone(),
            full_name: app.full_name.clone(),
            position_applied_for: app.position_applied_for.clone(),
            department_applied_for: app.department_applied_for.clone(),
            phone_number: app.phone_number.clone(),
            previous_work_experience: app.previous_work_experience.clone(),
            skills: app.skills.clone(),
            cv_link: app.cv_link.clone(),
            status: app.status_label().to_string(),
            meeting_date: app.meeting_date.clone(),
            meeting_time: app.meeting_time.clone(),
            message: app.message.clone(),
            salary: app.salary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_sheet_headers() {
        let value = json!({
            "ID": 12,
            "Timestamp": "2024-05-02T03:04:05.000Z",
            "Email address": "alice@example.com",
            "Please enter your full name. ": "Alice Smith",
            "Position Applied For:  ": "Designer",
            "Department applied for": "Marketing",
            "Write your phone number": 628123,
            "Previous Work Experience": "3 years",
            "Skills you have": "Figma",
            "Attach your CV": "https://drive.example.com/cv",
            "Status": "in progress"
        });
        let app = RecruitmentApplication::from_value(value).expect("decode");
        assert_eq!(app.id, "12");
        assert_eq!(app.full_name, "Alice Smith");
        assert_eq!(app.phone_number, "628123");
        assert_eq!(app.status, Some(RecruitmentStatus::InProgress));
        assert_eq!(app.meeting_date, "");
    }

    #[test]
    fn sheet_row_round_trip_keeps_canonical_status_label() {
        let value = json!({"ID": "3", "Status": "in progress"});
        let app = RecruitmentApplication::from_value(value).expect("decode");
        let row = RecruitmentSheetRow::from(&app);
        let encoded = serde_json::to_value(&row).expect("encode");
        assert_eq!(encoded["Status"], "In Progress");
        assert_eq!(encoded["ID"], "3");
    }

    #[test]
    fn rows_without_id_are_rejected() {
        let err = RecruitmentApplication::from_value(json!({"Status": "Pending"})).unwrap_err();
        assert_eq!(err, DecodeError::MissingId { record: "recruitment" });
    }
}
