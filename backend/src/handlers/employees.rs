use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use validator::Validate;

use super::common::{ListQuery, ListResponse};
use crate::{
    error::AppError,
    filters::StatusTab,
    models::{Employee, UpdateEmployee},
    state::AppState,
    validation::rules::validate_email_domain,
    view_state::summary::{self, EmployeeSummary},
};

#[derive(Debug, Deserialize)]
pub struct EmployeeIdQuery {
    pub id: Option<String>,
}

/// `GET /employees[?id=]`: positional rows, or the single row for `id`.
pub async fn list_employee_rows(
    State(state): State<AppState>,
    Query(query): Query<EmployeeIdQuery>,
) -> Result<Json<Value>, AppError> {
    match query.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => {
            let employee = state.employees.find_by_id(id).await?;
            Ok(Json(json!(employee.to_row())))
        }
        None => {
            let rows: Vec<Vec<Value>> = state
                .employees
                .list()
                .await?
                .iter()
                .map(Employee::to_row)
                .collect();
            Ok(Json(json!(rows)))
        }
    }
}

/// `PUT /employees?id=`: profile save in the shape the profile page posts.
pub async fn update_employee_legacy(
    State(state): State<AppState>,
    Query(query): Query<EmployeeIdQuery>,
    Json(payload): Json<UpdateEmployee>,
) -> Result<Json<Value>, AppError> {
    let id = query
        .id
        .or_else(|| payload.id.clone())
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Employee id is required".to_string()))?;
    save_employee(&state, id, payload).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Employee, EmployeeSummary>>, AppError> {
    let query = ListQuery::parse::<Employee>(&params, StatusTab::All, state.config.page_size)?;
    let rows = state.employees.list().await?;
    let page = query.apply(&rows);
    Ok(Json(ListResponse::new(&query, page, summary::employees(&rows))))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    Ok(Json(state.employees.find_by_id(&id).await?))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEmployee>,
) -> Result<Json<Employee>, AppError> {
    let id = id.trim().to_string();
    save_employee(&state, id.clone(), payload).await?;
    // Re-read so the caller sees what the sheet now holds.
    Ok(Json(state.employees.find_by_id(&id).await?))
}

async fn save_employee(
    state: &AppState,
    id: String,
    payload: UpdateEmployee,
) -> Result<(), AppError> {
    if let Some(body_id) = payload.id.as_deref().map(str::trim) {
        if !body_id.is_empty() && body_id != id {
            return Err(AppError::BadRequest(
                "Employee id in body does not match the request".to_string(),
            ));
        }
    }
    let mut errors = match payload.validate() {
        Ok(()) => Vec::new(),
        Err(errs) => crate::validation::messages(&errs),
    };
    if validate_email_domain(&payload.email, &state.config.allowed_email_domain).is_err() {
        errors.push(format!(
            "email: must be an @{} address",
            state.config.allowed_email_domain
        ));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // The row must exist before it is overwritten.
    state.employees.find_by_id(&id).await?;
    let employee = payload.into_employee(id);
    state.employees.update(&employee).await?;
    Ok(())
}
