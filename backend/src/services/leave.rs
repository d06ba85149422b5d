//! Leave decisions: the compound update of a leave row and its employee.

use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::notification::Notifier;
use crate::{
    error::StoreError,
    models::{EmployeeStatus, LeaveRequest, LeaveStatus},
    repositories::{EmployeeRepositoryTrait, LeaveRequestRepositoryTrait, Script},
    workflow::{decide_leave, LeaveDecision},
};

pub const LEAVE_STEP: &str = "leave status";
pub const EMPLOYEE_STEP: &str = "employee status";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveOutcome {
    #[serde(rename = "employeeID")]
    pub employee_id: String,
    pub leave_status: LeaveStatus,
    pub employee_status: EmployeeStatus,
    pub notified: bool,
}

#[derive(Clone)]
pub struct LeaveService {
    leave_requests: Arc<dyn LeaveRequestRepositoryTrait>,
    employees: Arc<dyn EmployeeRepositoryTrait>,
    notifier: Arc<dyn Notifier>,
}

impl LeaveService {
    pub fn new(
        leave_requests: Arc<dyn LeaveRequestRepositoryTrait>,
        employees: Arc<dyn EmployeeRepositoryTrait>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            leave_requests,
            employees,
            notifier,
        }
    }

    /// Finds the request a decision applies to: the first pending request of
    /// the employee.
    async fn pending_request(&self, employee_id: &str) -> Result<LeaveRequest, StoreError> {
        let mine: Vec<LeaveRequest> = self
            .leave_requests
            .list()
            .await?
            .into_iter()
            .filter(|request| request.belongs_to(employee_id))
            .collect();
        if let Some(pending) = mine.iter().find(|request| request.is_pending()) {
            return Ok(pending.clone());
        }
        match mine.first() {
            Some(decided) => Err(StoreError::InvalidTransition(format!(
                "leave request for employee {} is {}, not Pending",
                employee_id,
                match decided.status_label() {
                    "" => "without a status",
                    label => label,
                }
            ))),
            None => Err(StoreError::NotFound(format!(
                "No leave request found for employee {}",
                employee_id
            ))),
        }
    }

    /// Decides the employee's pending request. Both writes are confirmed by
    /// reading the rows back; the outcome reports what the sheet now holds.
    pub async fn decide(
        &self,
        employee_id: &str,
        decision: LeaveDecision,
    ) -> Result<LeaveOutcome, StoreError> {
        let employee_id = employee_id.trim();
        if employee_id.is_empty() {
            return Err(StoreError::Validation(vec!["employeeID: required".to_string()]));
        }

        let request = self.pending_request(employee_id).await?;
        let effect = decide_leave(request.status, decision)?;

        self.leave_requests.set_status(&request, decision).await?;
        let leave_status = self.confirm_leave_status(&request, effect.leave_status).await?;

        let employee_status = match self
            .set_employee_status(employee_id, effect.employee_status)
            .await
        {
            Ok(status) => status,
            Err(err) => {
                tracing::error!(
                    employee_id,
                    error = %err,
                    "leave row updated but employee status was not"
                );
                return Err(StoreError::PartialFailure {
                    completed: LEAVE_STEP,
                    failed: EMPLOYEE_STEP,
                    message: err.to_string(),
                });
            }
        };

        let notified = match self.notifier.leave_decided(&request, decision).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(employee_id, error = %err, "failed to send leave decision email");
                false
            }
        };

        tracing::info!(
            employee_id,
            request = %request.request_key(),
            leave_status = leave_status.label(),
            employee_status = employee_status.label(),
            "leave request decided"
        );
        Ok(LeaveOutcome {
            employee_id: employee_id.to_string(),
            leave_status,
            employee_status,
            notified,
        })
    }

    async fn confirm_leave_status(
        &self,
        request: &LeaveRequest,
        expected: LeaveStatus,
    ) -> Result<LeaveStatus, StoreError> {
        let script = Script::LeaveAction.name();
        let current = self
            .leave_requests
            .list()
            .await?
            .into_iter()
            .find(|row| row.is_same_request(request))
            .ok_or_else(|| {
                StoreError::upstream(script, "leave request is missing after the write")
            })?;
        match current.status {
            Some(status) if status == expected => Ok(status),
            _ => Err(StoreError::upstream(
                script,
                format!(
                    "write acknowledged but the request is still {}",
                    match current.status_label() {
                        "" => "without a status",
                        label => label,
                    }
                ),
            )),
        }
    }

    async fn set_employee_status(
        &self,
        employee_id: &str,
        status: EmployeeStatus,
    ) -> Result<EmployeeStatus, StoreError> {
        self.employees.set_status(employee_id, status).await?;
        let employee = self.employees.find_by_id(employee_id).await?;
        match employee.status {
            Some(current) if current == status => Ok(current),
            _ => Err(StoreError::upstream(
                Script::EmployeeUpdate.name(),
                format!(
                    "write acknowledged but the employee is {}",
                    match employee.status_label() {
                        "" => "without a status",
                        label => label,
                    }
                ),
            )),
        }
    }
}
