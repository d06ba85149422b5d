//! Recruitment applications backed by the `Resume` sheet.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{
    decode_rows,
    script_client::{expect_ack, Script, ScriptClient},
};
use crate::{
    error::StoreError,
    models::{RecruitmentApplication, RecruitmentStatus},
    workflow::{next_status, RecruitmentAction},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecruitmentRepositoryTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<RecruitmentApplication>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<RecruitmentApplication, StoreError>;

    /// Re-reads the application, checks the transition against its current
    /// status and persists the action. Returns the new status.
    async fn apply(
        &self,
        id: &str,
        action: &RecruitmentAction,
    ) -> Result<RecruitmentStatus, StoreError>;
}

#[derive(Clone)]
pub struct RecruitmentRepository {
    client: ScriptClient,
}

impl RecruitmentRepository {
    pub fn new(client: ScriptClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecruitmentRepositoryTrait for RecruitmentRepository {
    async fn list(&self) -> Result<Vec<RecruitmentApplication>, StoreError> {
        let value = self.client.get(Script::Recruitments, &[]).await?;
        decode_rows(
            Script::Recruitments,
            value,
            "recruitment",
            RecruitmentApplication::from_value,
        )
    }

    async fn find_by_id(&self, id: &str) -> Result<RecruitmentApplication, StoreError> {
        let id = id.trim();
        self.list()
            .await?
            .into_iter()
            .find(|app| app.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Recruitment {} not found", id)))
    }

    async fn apply(
        &self,
        id: &str,
        action: &RecruitmentAction,
    ) -> Result<RecruitmentStatus, StoreError> {
        let current = self.find_by_id(id).await?;
        let target = next_status(current.status, action)?;
        let body = action_body(&current.id, target, action);
        let ack = self.client.post(Script::RecruitmentAction, &body).await?;
        expect_ack(Script::RecruitmentAction, &ack)?;
        tracing::info!(
            recruitment_id = %current.id,
            from = current.status_label(),
            to = target.label(),
            "recruitment transitioned"
        );
        Ok(target)
    }
}

/// Request body understood by the recruitment action script.
pub fn action_body(id: &str, target: RecruitmentStatus, action: &RecruitmentAction) -> Value {
    match action {
        RecruitmentAction::RequestMeeting {
            date,
            time,
            message,
        } => json!({
            "action": "requestMeeting",
            "id": id,
            "status": target.label(),
            "recruitment": {
                "id": id,
                "date": date.format("%Y-%m-%d").to_string(),
                "time": time.format("%H:%M").to_string(),
                "message": message,
            },
        }),
        RecruitmentAction::Approve { salary, message } => json!({
            "action": "approve",
            "id": id,
            "status": target.label(),
            "salary": salary,
            "message": message,
        }),
        RecruitmentAction::Reject { message } => json!({
            "action": "reject",
            "id": id,
            "status": target.label(),
            "message": message,
        }),
        RecruitmentAction::SetPending => json!({
            "action": "updateStatus",
            "id": id,
            "status": target.label(),
        }),
    }
}
