//! Status-tab and per-column substring filtering for list pages.

use std::collections::BTreeMap;

use crate::models::{Employee, LeaveRequest, RecruitmentApplication};

/// A record that can be shown in a filtered table.
pub trait Filterable {
    /// Column keys the table knows about, in display order.
    const COLUMNS: &'static [&'static str];
    /// Columns that never take part in substring filtering.
    const SKIPPED_COLUMNS: &'static [&'static str] = &[];

    fn status_label(&self) -> &str;
    fn column(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusTab {
    #[default]
    All,
    Status(String),
}

impl StatusTab {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            StatusTab::All
        } else {
            StatusTab::Status(raw.to_string())
        }
    }

    pub fn admits(&self, status: &str) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Status(tab) => status.to_lowercase() == tab.to_lowercase(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StatusTab::All => "All",
            StatusTab::Status(tab) => tab,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilters(BTreeMap<String, String>);

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the needle for `column`; an empty value clears it.
    pub fn set(&mut self, column: impl Into<String>, needle: impl Into<String>) {
        let column = column.into();
        let needle = needle.into();
        if needle.is_empty() {
            self.0.remove(&column);
        } else {
            self.0.insert(column, needle);
        }
    }

    pub fn with(mut self, column: impl Into<String>, needle: impl Into<String>) -> Self {
        self.set(column, needle);
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColumnFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = ColumnFilters::new();
        for (column, needle) in iter {
            filters.set(column, needle);
        }
        filters
    }
}

pub fn passes_columns<R: Filterable>(row: &R, filters: &ColumnFilters) -> bool {
    filters.iter().all(|(column, needle)| {
        if needle.is_empty() || R::SKIPPED_COLUMNS.contains(&column) {
            return true;
        }
        match row.column(column) {
            Some(value) => value.to_lowercase().contains(&needle.to_lowercase()),
            None => false,
        }
    })
}

/// Rows that pass both the status tab and every column filter, in input order.
pub fn filter_rows<R: Filterable + Clone>(
    rows: &[R],
    tab: &StatusTab,
    filters: &ColumnFilters,
) -> Vec<R> {
    rows.iter()
        .filter(|row| tab.admits(row.status_label()) && passes_columns(*row, filters))
        .cloned()
        .collect()
}

impl Filterable for Employee {
    const COLUMNS: &'static [&'static str] = &crate::models::employee::EMPLOYEE_COLUMNS;

    fn status_label(&self) -> &str {
        Employee::status_label(self)
    }

    fn column(&self, name: &str) -> Option<&str> {
        Some(match name {
            "id" => self.id.as_str(),
            "name" => self.name.as_str(),
            "position" => self.position.as_str(),
            "department" => self.department.as_str(),
            "email" => self.email.as_str(),
            "phone" => self.phone.as_str(),
            "hireDate" => self.hire_date.as_str(),
            "status" => Employee::status_label(self),
            _ => return None,
        })
    }
}

impl Filterable for RecruitmentApplication {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "timestamp",
        "emailAddress",
        "fullName",
        "positionAppliedFor",
        "departmentAppliedFor",
        "phoneNumber",
        "previousWorkExperience",
        "skills",
        "cvLink",
        "status",
    ];
    const SKIPPED_COLUMNS: &'static [&'static str] = &["cvLink"];

    fn status_label(&self) -> &str {
        RecruitmentApplication::status_label(self)
    }

    fn column(&self, name: &str) -> Option<&str> {
        Some(match name {
            "id" => self.id.as_str(),
            "timestamp" => self.timestamp.as_str(),
            "emailAddress" => self.email_address.as_str(),
            "fullName" => self.full_name.as_str(),
            "positionAppliedFor" => self.position_applied_for.as_str(),
            "departmentAppliedFor" => self.department_applied_for.as_str(),
            "phoneNumber" => self.phone_number.as_str(),
            "previousWorkExperience" => self.previous_work_experience.as_str(),
            "skills" => self.skills.as_str(),
            "cvLink" => self.cv_link.as_str(),
            "status" => RecruitmentApplication::status_label(self),
            _ => return None,
        })
    }
}

impl Filterable for LeaveRequest {
    const COLUMNS: &'static [&'static str] = &[
        "timestamp",
        "emailAddress",
        "fullName",
        "employeeID",
        "daysTotal",
        "startDate",
        "endDate",
        "reason",
        "status",
    ];

    fn status_label(&self) -> &str {
        LeaveRequest::status_label(self)
    }

    fn column(&self, name: &str) -> Option<&str> {
        Some(match name {
            "timestamp" => self.timestamp.as_str(),
            "emailAddress" => self.email_address.as_str(),
            "fullName" => self.full_name.as_str(),
            "employeeID" => self.employee_id.as_str(),
            "daysTotal" => self.days_total.as_str(),
            "startDate" => self.start_date.as_str(),
            "endDate" => self.end_date.as_str(),
            "reason" => self.reason.as_str(),
            "status" => LeaveRequest::status_label(self),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecruitmentStatus, RecruitmentStatus::*};

    fn applicant(id: &str, name: &str, status: Option<RecruitmentStatus>) -> RecruitmentApplication {
        RecruitmentApplication {
            id: id.to_string(),
            timestamp: "2024-05-01T00:00:00.000Z".to_string(),
            email_address: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            full_name: name.to_string(),
            position_applied_for: "Engineer".to_string(),
            department_applied_for: "IT".to_string(),
            phone_number: "0800".to_string(),
            previous_work_experience: String::new(),
            skills: "Rust".to_string(),
            cv_link: "https://cv.example.com/alice".to_string(),
            status,
            meeting_date: String::new(),
            meeting_time: String::new(),
            message: String::new(),
            salary: String::new(),
        }
    }

    fn sample() -> Vec<RecruitmentApplication> {
        vec![
            applicant("1", "Alice Smith", Some(Pending)),
            applicant("2", "Bob Stone", Some(Pending)),
            applicant("3", "Alicia Keys", Some(InProgress)),
            applicant("4", "Carl Alison", Some(InProgress)),
            applicant("5", "Malice Doe", Some(Rejected)),
        ]
    }

    #[test]
    fn pending_tab_with_name_filter_selects_matching_subset() {
        let filters = ColumnFilters::new().with("fullName", "alice");
        let result = filter_rows(&sample(), &StatusTab::parse("Pending"), &filters);
        let ids: Vec<_> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn tab_comparison_ignores_case() {
        let result = filter_rows(&sample(), &StatusTab::parse("in progress"), &ColumnFilters::new());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.status == Some(InProgress)));
    }

    #[test]
    fn approved_tab_returns_only_approved_rows() {
        let mut rows = sample();
        rows.push(applicant("6", "Dana Approved", Some(Approved)));
        rows.push(applicant("7", "Eli Moss", Some(Approved)));
        rows.push(applicant("8", "Fay Approvedson", Some(Pending)));
        let result = filter_rows(&rows, &StatusTab::parse("Approved"), &ColumnFilters::new());
        let ids: Vec<_> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "7"]);
        assert!(result.iter().all(|r| r.status == Some(Approved)));
    }

    #[test]
    fn empty_filters_return_input_unchanged() {
        let rows = sample();
        let filters: ColumnFilters = [("fullName", ""), ("skills", "")].into_iter().collect();
        assert!(filters.is_empty());
        assert_eq!(filter_rows(&rows, &StatusTab::All, &filters), rows);
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = sample();
        let tab = StatusTab::parse("Pending");
        let filters = ColumnFilters::new().with("skills", "RUST");
        let once = filter_rows(&rows, &tab, &filters);
        let twice = filter_rows(&once, &tab, &filters);
        assert_eq!(once, twice);
        assert_eq!(filter_rows(&rows, &tab, &filters), once);
    }

    #[test]
    fn skipped_columns_never_constrain() {
        let filters = ColumnFilters::new().with("cvLink", "no-such-link");
        assert_eq!(filter_rows(&sample(), &StatusTab::All, &filters).len(), 5);
    }

    #[test]
    fn unknown_columns_never_match() {
        let filters = ColumnFilters::new().with("salaryBand", "x");
        assert!(filter_rows(&sample(), &StatusTab::All, &filters).is_empty());
    }

    #[test]
    fn rows_without_status_only_show_under_all() {
        let rows = vec![applicant("9", "Zed", None)];
        assert_eq!(filter_rows(&rows, &StatusTab::All, &ColumnFilters::new()).len(), 1);
        assert!(filter_rows(&rows, &StatusTab::parse("Pending"), &ColumnFilters::new()).is_empty());
    }
}
