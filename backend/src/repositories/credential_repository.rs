use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::script_client::{Script, ScriptClient};
use crate::error::StoreError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepositoryTrait: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct CredentialRepository {
    client: ScriptClient,
}

impl CredentialRepository {
    pub fn new(client: ScriptClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[async_trait]
impl CredentialRepositoryTrait for CredentialRepository {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let response = self
            .client
            .post(Script::Login, &LoginBody { username, password })
            .await?;
        Ok(response.get("valid").and_then(Value::as_bool).unwrap_or(false))
    }
}
