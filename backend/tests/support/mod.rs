#![allow(dead_code)]
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use hrdesk_backend::{config::Config, routes::app_router, state::AppState};
use httpmock::MockServer;
use serde_json::{json, Value};
use std::collections::HashMap;
use tower::ServiceExt;

pub mod sheets;

pub const EMPLOYEES_PATH: &str = "/sheets/employees";
pub const EMPLOYEE_UPDATE_PATH: &str = "/sheets/employee-update";
pub const RECRUITMENTS_PATH: &str = "/sheets/recruitments";
pub const RECRUITMENT_ACTION_PATH: &str = "/sheets/recruitment-action";
pub const LEAVE_REQUESTS_PATH: &str = "/sheets/leave-requests";
pub const LEAVE_ACTION_PATH: &str = "/sheets/leave-action";
pub const LOGIN_PATH: &str = "/sheets/login";

/// Configuration pointing every script at `server`, with e-mail disabled.
pub fn test_config(server: &MockServer) -> Config {
    test_config_with(server, &[])
}

pub fn test_config_with(server: &MockServer, overrides: &[(&str, &str)]) -> Config {
    config_for(&server.base_url(), overrides)
}

/// Configuration pointing every script at paths under `base_url`.
pub fn config_for(base_url: &str, overrides: &[(&str, &str)]) -> Config {
    let mut env: HashMap<String, String> = [
        ("EMPLOYEES_SCRIPT_URL", EMPLOYEES_PATH),
        ("EMPLOYEE_UPDATE_SCRIPT_URL", EMPLOYEE_UPDATE_PATH),
        ("RECRUITMENTS_SCRIPT_URL", RECRUITMENTS_PATH),
        ("RECRUITMENT_ACTION_SCRIPT_URL", RECRUITMENT_ACTION_PATH),
        ("LEAVE_REQUESTS_SCRIPT_URL", LEAVE_REQUESTS_PATH),
        ("LEAVE_ACTION_SCRIPT_URL", LEAVE_ACTION_PATH),
        ("LOGIN_SCRIPT_URL", LOGIN_PATH),
    ]
    .into_iter()
    .map(|(key, path)| (key.to_string(), format!("{base_url}{path}")))
    .collect();
    env.insert("UPSTREAM_TIMEOUT_SECS".into(), "5".into());
    env.insert("APP_TIMEZONE".into(), "UTC".into());
    env.insert("SMTP_SKIP_SEND".into(), "true".into());
    for (key, value) in overrides {
        env.insert(key.to_string(), value.to_string());
    }
    Config::from_lookup(|key| env.get(key).cloned()).expect("test config")
}

pub fn app(server: &MockServer) -> Router {
    app_with(test_config(server))
}

/// App backed by the stateful fake scripts holding `sheets`.
pub async fn app_over(sheets: &sheets::SharedSheets) -> Router {
    let base_url = sheets::serve(sheets.clone()).await;
    app_with(config_for(&base_url, &[]))
}

pub fn app_with(config: Config) -> Router {
    app_router(AppState::from_config(config).expect("app state"))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("call app");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

pub fn employee_row(id: &str, name: &str, status: &str) -> Value {
    json!([
        id,
        name,
        "Engineer",
        "IT",
        format!("{}@gmail.com", name.to_lowercase().replace(' ', ".")),
        "0812000000",
        "2021-02-01T00:00:00.000Z",
        status
    ])
}

pub fn recruitment_row(id: u32, name: &str, status: &str) -> Value {
    json!({
        "ID": id,
        "Timestamp": "2024-03-01T09:00:00.000Z",
        "Email address": format!("{}@gmail.com", name.to_lowercase().replace(' ', ".")),
        "Please enter your full name. ": name,
        "Position Applied For:  ": "Backend Engineer",
        "Department applied for": "IT",
        "Write your phone number": 812000000,
        "Previous Work Experience": "3 years",
        "Skills you have": "Rust",
        "Attach your CV": "https://drive.example.com/cv",
        "Status": status,
        "Meeting Date": "",
        "Meeting Time": "",
        "Message": "",
        "Salary": ""
    })
}

pub fn leave_row(employee_id: &str, name: &str, status: &str) -> Value {
    leave_row_at(employee_id, name, status, "2024-04-20T08:00:00.000Z")
}

pub fn leave_row_at(employee_id: &str, name: &str, status: &str, timestamp: &str) -> Value {
    json!({
        "Timestamp": timestamp,
        "Email address": format!("{}@gmail.com", name.to_lowercase().replace(' ', ".")),
        "Full Name": name,
        "Employee ID ": employee_id,
        "How many days in total?": 2,
        "Leave Start Date": "2024-05-01T00:00:00.000Z",
        "Leave End Date": "2024-05-02T00:00:00.000Z",
        "Reason": "Family",
        "Status": status
    })
}
