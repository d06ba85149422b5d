use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(length(min = 1, max = 200))]
    pub password: String,
}

/// Checks credentials against the login sheet. There is no session; the
/// caller only learns whether the pair is valid.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;
    let valid = state
        .credentials
        .verify(payload.username.trim(), &payload.password)
        .await?;
    if !valid {
        tracing::info!(username = %payload.username.trim(), "login rejected");
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }
    Ok(Json(json!({ "success": true })))
}
