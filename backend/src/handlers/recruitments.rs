use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use utoipa::ToSchema;

use super::common::{current_year, ListQuery, ListResponse};
use crate::{
    error::{AppError, StoreError},
    filters::StatusTab,
    models::{sheet::cell_to_string, RecruitmentApplication, RecruitmentSheetRow, RecruitmentStatus},
    state::AppState,
    view_state::summary::{self, RecruitmentSummary},
    workflow::{available_actions, ActionKind, RecruitmentAction, TransitionError},
};

/// Fields a transition may carry; which ones are required depends on the action.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionFields {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Number or numeric string, as the sheet stores it.
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub salary: Option<Value>,
}

impl TransitionFields {
    pub fn into_action(self, kind: ActionKind) -> Result<RecruitmentAction, TransitionError> {
        let message = self.message.unwrap_or_default();
        match kind {
            ActionKind::RequestMeeting => RecruitmentAction::request_meeting(
                self.date.as_deref().unwrap_or_default(),
                self.time.as_deref().unwrap_or_default(),
                &message,
            ),
            ActionKind::Approve => {
                let salary = self
                    .salary
                    .as_ref()
                    .map(cell_to_string)
                    .and_then(|raw| raw.trim().replace(',', "").parse::<f64>().ok())
                    .unwrap_or(0.0);
                RecruitmentAction::approve(salary, &message)
            }
            ActionKind::Reject => RecruitmentAction::reject(&message),
            ActionKind::SetPending => Ok(RecruitmentAction::SetPending),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionPayload {
    pub action: ActionKind,
    #[serde(flatten)]
    pub fields: TransitionFields,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResponse {
    pub id: String,
    /// Status read back from the sheet after the write.
    pub status: Option<RecruitmentStatus>,
    pub actions: Vec<ActionKind>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailableActions {
    pub id: String,
    pub status: Option<RecruitmentStatus>,
    pub actions: Vec<ActionKind>,
}

/// Body of `PUT /handleRequestMeeting`: the record with its target status.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRecruitmentUpdate {
    pub id: String,
    pub status: String,
    #[serde(flatten)]
    pub fields: TransitionFields,
}

/// `GET /recruitments`: rows keyed by the sheet headers.
pub async fn list_recruitment_rows(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecruitmentSheetRow>>, AppError> {
    let rows = state.recruitments.list().await?;
    Ok(Json(rows.iter().map(RecruitmentSheetRow::from).collect()))
}

/// `PUT /handleRequestMeeting`: maps a target status onto the matching action.
pub async fn handle_request_meeting(
    State(state): State<AppState>,
    Json(payload): Json<LegacyRecruitmentUpdate>,
) -> Result<Json<Value>, AppError> {
    let target = RecruitmentStatus::parse(&payload.status).ok_or_else(|| {
        AppError::Validation(vec![format!("status: unknown value {}", payload.status.trim())])
    })?;
    let kind = match target {
        RecruitmentStatus::InProgress => ActionKind::RequestMeeting,
        RecruitmentStatus::Approved => ActionKind::Approve,
        RecruitmentStatus::Rejected => ActionKind::Reject,
        RecruitmentStatus::Pending => ActionKind::SetPending,
    };
    let current = transition(&state, &payload.id, kind, payload.fields).await?;
    Ok(Json(json!({ "success": true, "status": current.status_label() })))
}

pub async fn list_recruitments(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<RecruitmentApplication, RecruitmentSummary>>, AppError> {
    let query = ListQuery::parse::<RecruitmentApplication>(
        &params,
        StatusTab::All,
        state.config.page_size,
    )?;
    let rows = state.recruitments.list().await?;
    let page = query.apply(&rows);
    let summary = summary::recruitments(&rows, current_year(&state), &state.config.time_zone);
    Ok(Json(ListResponse::new(&query, page, summary)))
}

pub async fn get_recruitment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecruitmentApplication>, AppError> {
    Ok(Json(state.recruitments.find_by_id(&id).await?))
}

pub async fn recruitment_actions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AvailableActions>, AppError> {
    let app = state.recruitments.find_by_id(&id).await?;
    Ok(Json(AvailableActions {
        actions: available_actions(app.status).to_vec(),
        id: app.id,
        status: app.status,
    }))
}

pub async fn transition_recruitment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TransitionPayload>,
) -> Result<Json<TransitionResponse>, AppError> {
    let current = transition(&state, &id, payload.action, payload.fields).await?;
    Ok(Json(TransitionResponse {
        actions: available_actions(current.status).to_vec(),
        id: current.id,
        status: current.status,
    }))
}

/// Applies the action, then reads the record back so the caller sees what
/// the sheet holds rather than what was asked for.
async fn transition(
    state: &AppState,
    id: &str,
    kind: ActionKind,
    fields: TransitionFields,
) -> Result<RecruitmentApplication, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("Recruitment id is required".to_string()));
    }
    let action = fields.into_action(kind).map_err(StoreError::from)?;
    let target = state.recruitments.apply(id, &action).await?;
    let current = state.recruitments.find_by_id(id).await?;
    if current.status != Some(target) {
        tracing::warn!(
            recruitment_id = id,
            expected = target.label(),
            actual = current.status_label(),
            "recruitment status differs from the acknowledged write"
        );
    }
    Ok(current)
}
