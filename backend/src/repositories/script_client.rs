//! HTTP client for the spreadsheet script endpoints.
//!
//! Every repository goes through [`ScriptClient`], so transport failures are
//! classified in one place: anything that never produced a response is a
//! `Network` error, anything that produced an unusable response is an
//! `Upstream` error.

use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::{sync::Arc, time::Duration, time::Instant};
use url::Url;

use crate::{config::ScriptEndpoints, error::StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Employees,
    EmployeeUpdate,
    Recruitments,
    RecruitmentAction,
    LeaveRequests,
    LeaveAction,
    Login,
}

impl Script {
    pub fn name(self) -> &'static str {
        match self {
            Script::Employees => "employees",
            Script::EmployeeUpdate => "employee update",
            Script::Recruitments => "recruitments",
            Script::RecruitmentAction => "recruitment action",
            Script::LeaveRequests => "leave requests",
            Script::LeaveAction => "leave action",
            Script::Login => "login",
        }
    }
}

#[derive(Clone)]
pub struct ScriptClient {
    http: Client,
    endpoints: Arc<ScriptEndpoints>,
}

impl ScriptClient {
    pub fn new(endpoints: ScriptEndpoints, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hrdesk-backend/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoints: Arc::new(endpoints),
        })
    }

    fn url(&self, script: Script) -> &Url {
        let endpoints = &self.endpoints;
        match script {
            Script::Employees => &endpoints.employees,
            Script::EmployeeUpdate => &endpoints.employee_update,
            Script::Recruitments => &endpoints.recruitments,
            Script::RecruitmentAction => &endpoints.recruitment_action,
            Script::LeaveRequests => &endpoints.leave_requests,
            Script::LeaveAction => &endpoints.leave_action,
            Script::Login => &endpoints.login,
        }
    }

    /// Reads a script. A JSON object carrying an `error` key is a failure even
    /// when the status is 2xx, since Apps Script cannot set status codes.
    pub async fn get(&self, script: Script, query: &[(&str, &str)]) -> Result<Value, StoreError> {
        let started = Instant::now();
        let result = self.http.get(self.url(script).clone()).query(query).send().await;
        let value = finish(script, started, result).await?;
        if let Some(message) = value.get("error").map(crate::models::sheet::cell_to_string) {
            tracing::warn!(script = script.name(), error = %message, "script reported an error");
            return Err(script_error(script, message));
        }
        Ok(value)
    }

    pub async fn post<B>(&self, script: Script, body: &B) -> Result<Value, StoreError>
    where
        B: Serialize + ?Sized,
    {
        let started = Instant::now();
        let result = self.http.post(self.url(script).clone()).json(body).send().await;
        finish(script, started, result).await
    }
}

async fn finish(
    script: Script,
    started: Instant,
    result: reqwest::Result<Response>,
) -> Result<Value, StoreError> {
    let response = result.map_err(|err| {
        tracing::error!(
            script = script.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            error = %err,
            "script request failed"
        );
        StoreError::Network {
            script: script.name(),
            message: if err.is_timeout() {
                "request timed out".to_string()
            } else {
                err.to_string()
            },
        }
    })?;

    let status = response.status();
    tracing::debug!(
        script = script.name(),
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "script responded"
    );
    if !status.is_success() {
        tracing::warn!(script = script.name(), status = status.as_u16(), "script returned non-success status");
        return Err(StoreError::upstream(
            script.name(),
            format!("unexpected status {}", status.as_u16()),
        ));
    }

    let text = response.text().await.map_err(|err| StoreError::Network {
        script: script.name(),
        message: err.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|err| {
        tracing::warn!(script = script.name(), error = %err, "script returned invalid JSON");
        StoreError::upstream(script.name(), format!("invalid JSON response: {}", err))
    })
}

fn script_error(script: Script, message: String) -> StoreError {
    if message.to_ascii_lowercase().contains("not found") {
        StoreError::NotFound(message)
    } else {
        StoreError::upstream(script.name(), message)
    }
}

/// Checks a write acknowledgement: `{"success": true}` or `{"status": "success"}`.
pub fn expect_ack(script: Script, value: &Value) -> Result<(), StoreError> {
    let succeeded = value.get("success").and_then(Value::as_bool) == Some(true)
        || value.get("status").and_then(Value::as_str) == Some("success");
    if succeeded {
        return Ok(());
    }
    let message = value
        .get("error")
        .or_else(|| value.get("message"))
        .map(crate::models::sheet::cell_to_string)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "script did not acknowledge the write".to_string());
    tracing::warn!(script = script.name(), error = %message, "write was not acknowledged");
    Err(script_error(script, message))
}
