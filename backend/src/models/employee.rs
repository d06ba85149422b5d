use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use validator::Validate;

use super::sheet::{cell_to_string, DecodeError};
use crate::validation::rules::validate_status_label;

/// Column order of the employee sheet. Preserved exactly on the wire.
pub const EMPLOYEE_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "position",
    "department",
    "email",
    "phone",
    "hireDate",
    "status",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EmployeeStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl EmployeeStatus {
    pub fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the vocabulary.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Some(EmployeeStatus::Active),
            "on leave" => Some(EmployeeStatus::OnLeave),
            _ => None,
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown employee status `{}`", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub hire_date: String,
    /// `None` when the sheet holds a value outside the known vocabulary.
    pub status: Option<EmployeeStatus>,
}

impl Employee {
    pub fn from_row(row: &Value) -> Result<Self, DecodeError> {
        let cells = row.as_array().ok_or_else(|| DecodeError::Malformed {
            record: "employee",
            message: "row is not an array".into(),
        })?;
        if cells.len() < EMPLOYEE_COLUMNS.len() {
            return Err(DecodeError::ShortRow {
                record: "employee",
                expected: EMPLOYEE_COLUMNS.len(),
                found: cells.len(),
            });
        }
        let text = |idx: usize| cell_to_string(&cells[idx]);
        let id = text(0).trim().to_string();
        if id.is_empty() {
            return Err(DecodeError::MissingId { record: "employee" });
        }
        Ok(Employee {
            id,
            name: text(1),
            position: text(2),
            department: text(3),
            email: text(4),
            phone: text(5),
            hire_date: text(6),
            status: EmployeeStatus::parse(&text(7)),
        })
    }

    /// Positional form consumed by the directory pages.
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::String(self.id.clone()),
            Value::String(self.name.clone()),
            Value::String(self.position.clone()),
            Value::String(self.department.clone()),
            Value::String(self.email.clone()),
            Value::String(self.phone.clone()),
            Value::String(self.hire_date.clone()),
            Value::String(self.status_label().to_string()),
        ]
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map(EmployeeStatus::label).unwrap_or("")
    }
}

/// Body of a profile save.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub position: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub department: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hire_date: String,
    #[validate(custom(function = "validate_status_label"))]
    pub status: String,
}

impl UpdateEmployee {
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name.trim().to_string(),
            position: self.position.trim().to_string(),
            department: self.department.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            hire_date: self.hire_date,
            status: EmployeeStatus::parse(&self.status),
        }
    }
}
