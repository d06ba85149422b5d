use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{
        CredentialRepository, CredentialRepositoryTrait, EmployeeRepository,
        EmployeeRepositoryTrait, LeaveRequestRepository, LeaveRequestRepositoryTrait,
        RecruitmentRepository, RecruitmentRepositoryTrait, ScriptClient,
    },
    services::{LeaveService, Notifier},
    utils::email::EmailService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub employees: Arc<dyn EmployeeRepositoryTrait>,
    pub recruitments: Arc<dyn RecruitmentRepositoryTrait>,
    pub leave_requests: Arc<dyn LeaveRequestRepositoryTrait>,
    pub credentials: Arc<dyn CredentialRepositoryTrait>,
    pub leave: LeaveService,
}

impl AppState {
    /// Wires the script-backed repositories and the SMTP notifier.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = ScriptClient::new(config.scripts.clone(), config.upstream_timeout)?;
        let notifier: Arc<dyn Notifier> =
            Arc::new(EmailService::new(&config.smtp, config.time_zone)?);
        Ok(Self::new(
            config,
            Arc::new(EmployeeRepository::new(client.clone())),
            Arc::new(RecruitmentRepository::new(client.clone())),
            Arc::new(LeaveRequestRepository::new(client.clone())),
            Arc::new(CredentialRepository::new(client)),
            notifier,
        ))
    }

    pub fn new(
        config: Config,
        employees: Arc<dyn EmployeeRepositoryTrait>,
        recruitments: Arc<dyn RecruitmentRepositoryTrait>,
        leave_requests: Arc<dyn LeaveRequestRepositoryTrait>,
        credentials: Arc<dyn CredentialRepositoryTrait>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let leave = LeaveService::new(leave_requests.clone(), employees.clone(), notifier);
        Self {
            config: Arc::new(config),
            employees,
            recruitments,
            leave_requests,
            credentials,
            leave,
        }
    }
}
