use axum::http::{Method, StatusCode};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::{Arc, Mutex};

mod support;

use support::{
    app, app_over, get, json_request, recruitment_row, send,
    sheets::{SharedSheets, Sheets},
    RECRUITMENTS_PATH, RECRUITMENT_ACTION_PATH,
};

fn five_applicants() -> serde_json::Value {
    json!([
        recruitment_row(1, "Alice Moreno", "Pending"),
        recruitment_row(2, "Bob Stone", "Pending"),
        recruitment_row(3, "Malice Ward", "in progress"),
        recruitment_row(4, "Alicia Keys", "In Progress"),
        recruitment_row(5, "Alice Chen", "Rejected"),
    ])
}

fn live_sheets() -> SharedSheets {
    let rows = five_applicants().as_array().cloned().unwrap_or_default();
    Arc::new(Mutex::new(Sheets {
        recruitments: rows,
        ..Sheets::default()
    }))
}

async fn sheet_with(server: &MockServer, rows: serde_json::Value) {
    server
        .mock_async(move |when, then| {
            when.method(GET).path(RECRUITMENTS_PATH);
            then.status(200).json_body(rows);
        })
        .await;
}

#[tokio::test]
async fn pending_tab_with_name_filter_returns_matching_pending_rows() {
    let server = MockServer::start_async().await;
    sheet_with(&server, five_applicants()).await;

    let (status, body) = send(
        app(&server),
        get("/api/recruitments?tab=Pending&fullName=ALICE"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["items"]
        .as_array()
        .expect("items")
        .iter()
        .filter_map(|item| item["fullName"].as_str())
        .collect();
    // Malice Ward and Alice Chen match the name but are not pending.
    assert_eq!(names, vec!["Alice Moreno"]);
    assert_eq!(body["summary"]["total"], 5);
    assert_eq!(body["summary"]["pending"], 2);
}

#[tokio::test]
async fn cv_link_filter_is_ignored() {
    let server = MockServer::start_async().await;
    sheet_with(&server, five_applicants()).await;

    let (status, body) = send(app(&server), get("/api/recruitments?cvLink=nothing-matches")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
}

#[tokio::test]
async fn legacy_list_keeps_sheet_headers() {
    let server = MockServer::start_async().await;
    sheet_with(&server, five_applicants()).await;

    let (status, body) = send(app(&server), get("/recruitments")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[2]["Please enter your full name. "], "Malice Ward");
    assert_eq!(body[2]["Status"], "In Progress");
    assert_eq!(body[0]["Write your phone number"], "812000000");
}

#[tokio::test]
async fn actions_follow_current_status() {
    let server = MockServer::start_async().await;
    sheet_with(&server, five_applicants()).await;

    let (_, pending) = send(app(&server), get("/api/recruitments/1/actions")).await;
    assert_eq!(pending["actions"], json!(["request_meeting", "reject"]));
    let (_, rejected) = send(app(&server), get("/api/recruitments/5/actions")).await;
    assert_eq!(rejected["actions"], json!(["set_pending"]));
    let (status, _) = send(app(&server), get("/api/recruitments/77/actions")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn request_meeting_moves_pending_to_in_progress() {
    let sheets = live_sheets();

    let (status, body) = send(
        app_over(&sheets).await,
        json_request(
            Method::POST,
            "/api/recruitments/1/transitions",
            json!({
                "action": "request_meeting",
                "date": "2024-08-01",
                "time": "10:30",
                "message": "Please come to the office"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "In Progress");
    assert_eq!(body["actions"], json!(["approve", "reject"]));

    let sheets = sheets.lock().unwrap();
    let (path, write) = &sheets.writes[0];
    assert_eq!(*path, RECRUITMENT_ACTION_PATH);
    assert_eq!(write["action"], "requestMeeting");
    assert_eq!(write["status"], "In Progress");
    assert_eq!(
        write["recruitment"],
        json!({
            "id": "1",
            "date": "2024-08-01",
            "time": "10:30",
            "message": "Please come to the office"
        })
    );
    assert_eq!(sheets.recruitments[0]["Meeting Time"], "10:30");
}

#[tokio::test]
async fn response_reports_status_read_back_after_write() {
    let server = MockServer::start_async().await;
    sheet_with(&server, five_applicants()).await;
    let write = server
        .mock_async(|when, then| {
            when.method(POST).path(RECRUITMENT_ACTION_PATH);
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    // The script acknowledges, but the sheet still holds Pending.
    let (status, body) = send(
        app(&server),
        json_request(
            Method::POST,
            "/api/recruitments/2/transitions",
            json!({"action": "reject", "message": "Not a fit"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["actions"], json!(["request_meeting", "reject"]));
    write.assert_async().await;
}

#[tokio::test]
async fn in_progress_cannot_jump_back_to_pending() {
    let server = MockServer::start_async().await;
    sheet_with(&server, five_applicants()).await;
    let write = server
        .mock_async(|when, then| {
            when.method(POST).path(RECRUITMENT_ACTION_PATH);
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    let (status, body) = send(
        app(&server),
        json_request(
            Method::POST,
            "/api/recruitments/3/transitions",
            json!({"action": "set_pending"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_TRANSITION");
    assert_eq!(write.hits_async().await, 0);
}

#[tokio::test]
async fn rejected_can_return_to_pending() {
    let sheets = live_sheets();

    let (status, body) = send(
        app_over(&sheets).await,
        json_request(
            Method::POST,
            "/api/recruitments/5/transitions",
            json!({"action": "set_pending"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "Pending");

    let sheets = sheets.lock().unwrap();
    assert_eq!(
        sheets.writes[0].1,
        json!({"action": "updateStatus", "id": "5", "status": "Pending"})
    );
    assert_eq!(sheets.recruitments[4]["Status"], "Pending");
}

#[tokio::test]
async fn approve_requires_salary_and_message() {
    let server = MockServer::start_async().await;
    let (status, body) = send(
        app(&server),
        json_request(
            Method::POST,
            "/api/recruitments/4/transitions",
            json!({"action": "approve", "salary": -5, "message": " "}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["errors"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn legacy_handle_request_meeting_maps_target_status() {
    let sheets = live_sheets();

    let (status, body) = send(
        app_over(&sheets).await,
        json_request(
            Method::PUT,
            "/handleRequestMeeting",
            json!({
                "id": "4",
                "fullName": "Alicia Keys",
                "emailAddress": "alicia.keys@gmail.com",
                "status": "Rejected",
                "message": "Position filled"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body, json!({"success": true, "status": "Rejected"}));

    let sheets = sheets.lock().unwrap();
    assert_eq!(sheets.writes[0].1["action"], "reject");
    assert_eq!(sheets.writes[0].1["message"], "Position filled");
    assert_eq!(sheets.recruitments[3]["Message"], "Position filled");
}

#[tokio::test]
async fn script_refusal_is_reported_as_upstream_error() {
    let server = MockServer::start_async().await;
    sheet_with(&server, five_applicants()).await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(RECRUITMENT_ACTION_PATH);
            then.status(200).json_body(json!({"success": false, "error": "Sheet is locked"}));
        })
        .await;

    let (status, body) = send(
        app(&server),
        json_request(
            Method::POST,
            "/api/recruitments/2/transitions",
            json!({"action": "reject", "message": "Not a fit"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}
