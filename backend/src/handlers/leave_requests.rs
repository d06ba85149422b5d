use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use utoipa::ToSchema;

use super::common::{ListQuery, ListResponse};
use crate::{
    error::AppError,
    filters::StatusTab,
    models::{LeaveRequest, LeaveSheetRow},
    services::LeaveOutcome,
    state::AppState,
    view_state::summary::{self, LeaveSummary},
    workflow::LeaveDecision,
};

/// Body the leave queue posts: the employee and the status to move to.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LeaveDecisionPayload {
    #[serde(rename = "employeeID")]
    pub employee_id: String,
    pub status: String,
}

/// `GET /takeleave`: rows keyed by the sheet headers.
pub async fn list_leave_rows(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaveSheetRow>>, AppError> {
    let rows = state.leave_requests.list().await?;
    Ok(Json(rows.iter().map(LeaveSheetRow::from).collect()))
}

/// `POST /approveTakeLeave`.
pub async fn approve_take_leave(
    State(state): State<AppState>,
    Json(payload): Json<LeaveDecisionPayload>,
) -> Result<Json<Value>, AppError> {
    let decision = LeaveDecision::from_target_status(&payload.status).ok_or_else(|| {
        AppError::Validation(vec![
            "status: must be Approved or Rejected".to_string(),
        ])
    })?;
    let outcome = state.leave.decide(&payload.employee_id, decision).await?;
    Ok(Json(json!({
        "status": "success",
        "newStatus": outcome.employee_status.label(),
    })))
}

pub async fn list_leave_requests(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<LeaveRequest, LeaveSummary>>, AppError> {
    // The queue opens on the requests still waiting for a decision.
    let query = ListQuery::parse::<LeaveRequest>(
        &params,
        StatusTab::parse("Pending"),
        state.config.page_size,
    )?;
    let rows = state.leave_requests.list().await?;
    let page = query.apply(&rows);
    Ok(Json(ListResponse::new(&query, page, summary::leave_requests(&rows))))
}

pub async fn approve_leave_request(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<LeaveOutcome>, AppError> {
    Ok(Json(state.leave.decide(&employee_id, LeaveDecision::Approve).await?))
}

pub async fn reject_leave_request(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<LeaveOutcome>, AppError> {
    Ok(Json(state.leave.decide(&employee_id, LeaveDecision::Reject).await?))
}
