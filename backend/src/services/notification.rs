use async_trait::async_trait;

use crate::{models::LeaveRequest, utils::email::EmailService, workflow::LeaveDecision};

/// Tells an applicant how their leave request was decided.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn leave_decided(
        &self,
        request: &LeaveRequest,
        decision: LeaveDecision,
    ) -> anyhow::Result<()>;
}

#[async_trait]
impl Notifier for EmailService {
    async fn leave_decided(
        &self,
        request: &LeaveRequest,
        decision: LeaveDecision,
    ) -> anyhow::Result<()> {
        let service = self.clone();
        let request = request.clone();
        tokio::task::spawn_blocking(move || service.send_leave_decision(&request, decision))
            .await??;
        Ok(())
    }
}
