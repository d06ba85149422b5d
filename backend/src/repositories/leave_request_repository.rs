//! Leave requests backed by the `Take Leave` sheet.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{
    decode_rows,
    script_client::{expect_ack, Script, ScriptClient},
};
use crate::{error::StoreError, models::LeaveRequest, workflow::LeaveDecision};

/// Repository trait for leave requests.
///
/// Use `MockLeaveRequestRepositoryTrait` in unit tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveRequestRepositoryTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<LeaveRequest>, StoreError>;

    /// Writes the decision onto `request`'s own row, matched by employee id
    /// and submission timestamp.
    async fn set_status(
        &self,
        request: &LeaveRequest,
        decision: LeaveDecision,
    ) -> Result<(), StoreError>;
}

pub fn leave_action_body(request: &LeaveRequest, decision: LeaveDecision) -> Value {
    json!({
        "action": decision.action_label(),
        "employeeID": request.employee_id.trim(),
        "timestamp": request.timestamp.trim(),
    })
}

#[derive(Clone)]
pub struct LeaveRequestRepository {
    client: ScriptClient,
}

impl LeaveRequestRepository {
    pub fn new(client: ScriptClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LeaveRequestRepositoryTrait for LeaveRequestRepository {
    async fn list(&self) -> Result<Vec<LeaveRequest>, StoreError> {
        let value = self.client.get(Script::LeaveRequests, &[]).await?;
        decode_rows(
            Script::LeaveRequests,
            value,
            "leave request",
            LeaveRequest::from_value,
        )
    }

    async fn set_status(
        &self,
        request: &LeaveRequest,
        decision: LeaveDecision,
    ) -> Result<(), StoreError> {
        let body = leave_action_body(request, decision);
        let ack = self.client.post(Script::LeaveAction, &body).await?;
        expect_ack(Script::LeaveAction, &ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_body_names_the_row() {
        let request = LeaveRequest::from_value(json!({
            "Timestamp": "2024-06-10T02:00:00.000Z",
            "Employee ID ": 7,
            "Status": "Pending"
        }))
        .expect("decode");
        assert_eq!(
            leave_action_body(&request, LeaveDecision::Reject),
            json!({
                "action": "Reject",
                "employeeID": "7",
                "timestamp": "2024-06-10T02:00:00.000Z"
            })
        );
    }
}
