//! In-process stand-in for the spreadsheet scripts that keeps its rows, so a
//! write is visible to the next read.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use super::{
    EMPLOYEES_PATH, EMPLOYEE_UPDATE_PATH, LEAVE_ACTION_PATH, LEAVE_REQUESTS_PATH,
    RECRUITMENTS_PATH, RECRUITMENT_ACTION_PATH,
};

#[derive(Debug, Default)]
pub struct Sheets {
    /// Positional rows, status in column 8.
    pub employees: Vec<Value>,
    pub recruitments: Vec<Value>,
    pub leave_requests: Vec<Value>,
    /// Every write body, tagged with the path it was posted to.
    pub writes: Vec<(&'static str, Value)>,
}

pub type SharedSheets = Arc<Mutex<Sheets>>;

fn text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn field(body: &Value, key: &str) -> String {
    body.get(key).map(text).unwrap_or_default()
}

async fn list_employees(
    State(sheets): State<SharedSheets>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let sheets = sheets.lock().unwrap();
    match params.get("id") {
        Some(id) => Json(
            sheets
                .employees
                .iter()
                .find(|row| text(&row[0]) == *id)
                .cloned()
                .unwrap_or_else(|| json!({"error": "Employee not found"})),
        ),
        None => Json(Value::Array(sheets.employees.clone())),
    }
}

async fn update_employee(State(sheets): State<SharedSheets>, Json(body): Json<Value>) -> Json<Value> {
    let mut sheets = sheets.lock().unwrap();
    sheets.writes.push((EMPLOYEE_UPDATE_PATH, body.clone()));
    let id = field(&body, "id");
    let Some(row) = sheets.employees.iter_mut().find(|row| text(&row[0]) == id) else {
        return Json(json!({"error": "Employee not found"}));
    };
    match field(&body, "action").as_str() {
        "updateStatus" => row[7] = json!(field(&body, "status")),
        _ => {
            for (column, key) in [
                "id", "name", "position", "department", "email", "phone", "hireDate", "status",
            ]
            .iter()
            .enumerate()
            {
                row[column] = json!(field(&body, key));
            }
        }
    }
    Json(json!({"success": true}))
}

async fn list_recruitments(State(sheets): State<SharedSheets>) -> Json<Value> {
    Json(Value::Array(sheets.lock().unwrap().recruitments.clone()))
}

async fn recruitment_action(
    State(sheets): State<SharedSheets>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut sheets = sheets.lock().unwrap();
    sheets.writes.push((RECRUITMENT_ACTION_PATH, body.clone()));
    let id = field(&body, "id");
    let Some(row) = sheets.recruitments.iter_mut().find(|row| text(&row["ID"]) == id) else {
        return Json(json!({"error": format!("Recruitment {id} not found")}));
    };
    row["Status"] = json!(field(&body, "status"));
    if let Some(meeting) = body.get("recruitment") {
        row["Meeting Date"] = json!(field(meeting, "date"));
        row["Meeting Time"] = json!(field(meeting, "time"));
        row["Message"] = json!(field(meeting, "message"));
    }
    if body.get("message").is_some() {
        row["Message"] = json!(field(&body, "message"));
    }
    if let Some(salary) = body.get("salary") {
        row["Salary"] = salary.clone();
    }
    Json(json!({"success": true}))
}

async fn list_leave_requests(State(sheets): State<SharedSheets>) -> Json<Value> {
    Json(Value::Array(sheets.lock().unwrap().leave_requests.clone()))
}

async fn leave_action(State(sheets): State<SharedSheets>, Json(body): Json<Value>) -> Json<Value> {
    let mut sheets = sheets.lock().unwrap();
    sheets.writes.push((LEAVE_ACTION_PATH, body.clone()));
    let employee_id = field(&body, "employeeID");
    let timestamp = field(&body, "timestamp");
    let status = match field(&body, "action").as_str() {
        "Approve" => "Approved",
        _ => "Rejected",
    };
    match sheets.leave_requests.iter_mut().find(|row| {
        text(&row["Employee ID "]) == employee_id && text(&row["Timestamp"]) == timestamp
    }) {
        Some(row) => {
            row["Status"] = json!(status);
            Json(json!({"status": "success"}))
        }
        None => Json(json!({"status": "error", "message": "Leave request not found"})),
    }
}

/// Serves `sheets` on an ephemeral port and returns its base url.
pub async fn serve(sheets: SharedSheets) -> String {
    let router = Router::new()
        .route(EMPLOYEES_PATH, get(list_employees))
        .route(EMPLOYEE_UPDATE_PATH, post(update_employee))
        .route(RECRUITMENTS_PATH, get(list_recruitments))
        .route(RECRUITMENT_ACTION_PATH, post(recruitment_action))
        .route(LEAVE_REQUESTS_PATH, get(list_leave_requests))
        .route(LEAVE_ACTION_PATH, post(leave_action))
        .with_state(sheets);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake sheets");
    let addr = listener.local_addr().expect("fake sheets addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fake sheets");
    });
    format!("http://{addr}")
}
