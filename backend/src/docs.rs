#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    handlers::{
        auth::LoginRequest,
        leave_requests::LeaveDecisionPayload,
        recruitments::{AvailableActions, TransitionFields, TransitionPayload, TransitionResponse},
    },
    models::{
        Employee, EmployeeStatus, LeaveRequest, LeaveStatus, RecruitmentApplication,
        RecruitmentStatus, UpdateEmployee,
    },
    services::LeaveOutcome,
    view_state::{
        summary::{EmployeeSummary, LeaveSummary, RecruitmentSummary},
        ClockState,
    },
    workflow::{ActionKind, LeaveDecision},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        login_doc,
        list_employees_doc,
        get_employee_doc,
        update_employee_doc,
        list_recruitments_doc,
        recruitment_actions_doc,
        transition_recruitment_doc,
        list_leave_requests_doc,
        approve_leave_doc,
        reject_leave_doc,
        clock_doc
    ),
    components(
        schemas(
            LoginRequest,
            Employee,
            EmployeeStatus,
            UpdateEmployee,
            EmployeeSummary,
            RecruitmentApplication,
            RecruitmentStatus,
            RecruitmentSummary,
            ActionKind,
            AvailableActions,
            TransitionFields,
            TransitionPayload,
            TransitionResponse,
            LeaveRequest,
            LeaveStatus,
            LeaveSummary,
            LeaveDecision,
            LeaveDecisionPayload,
            LeaveOutcome,
            ClockState
        )
    ),
    tags(
        (name = "Auth", description = "Credential check against the login sheet"),
        (name = "Employees", description = "Employee directory and profiles"),
        (name = "Recruitments", description = "Applicant tracking and review workflow"),
        (name = "Leave", description = "Leave request queue and decisions"),
        (name = "System", description = "Header clock")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials are valid"),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "Auth"
)]
fn login_doc() {}

#[utoipa::path(
    get,
    path = "/api/employees",
    params(
        ("tab" = Option<String>, Query, description = "Status tab, `All` by default"),
        ("page" = Option<usize>, Query, description = "1-based page"),
        ("per_page" = Option<usize>, Query, description = "Rows per page")
    ),
    responses(
        (status = 200, description = "Filtered page of employees with counters"),
        (status = 400, description = "Unknown filter column or bad paging")
    ),
    tag = "Employees"
)]
fn list_employees_doc() {}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee", body = Employee),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employees"
)]
fn get_employee_doc() {}

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee id")),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee as re-read after the save", body = Employee),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employees"
)]
fn update_employee_doc() {}

#[utoipa::path(
    get,
    path = "/api/recruitments",
    params(
        ("tab" = Option<String>, Query, description = "Status tab, `All` by default"),
        ("page" = Option<usize>, Query, description = "1-based page"),
        ("per_page" = Option<usize>, Query, description = "Rows per page")
    ),
    responses((status = 200, description = "Filtered page of applications with counters")),
    tag = "Recruitments"
)]
fn list_recruitments_doc() {}

#[utoipa::path(
    get,
    path = "/api/recruitments/{id}/actions",
    params(("id" = String, Path, description = "Applicant id")),
    responses((status = 200, description = "Actions offered for the current status", body = AvailableActions)),
    tag = "Recruitments"
)]
fn recruitment_actions_doc() {}

#[utoipa::path(
    post,
    path = "/api/recruitments/{id}/transitions",
    params(("id" = String, Path, description = "Applicant id")),
    request_body = TransitionPayload,
    responses(
        (status = 200, description = "New status", body = TransitionResponse),
        (status = 400, description = "Invalid transition input"),
        (status = 409, description = "Transition not allowed from the current status")
    ),
    tag = "Recruitments"
)]
fn transition_recruitment_doc() {}

#[utoipa::path(
    get,
    path = "/api/leave-requests",
    params(
        ("tab" = Option<String>, Query, description = "Status tab, `Pending` by default"),
        ("page" = Option<usize>, Query, description = "1-based page"),
        ("per_page" = Option<usize>, Query, description = "Rows per page")
    ),
    responses((status = 200, description = "Filtered page of leave requests with counters")),
    tag = "Leave"
)]
fn list_leave_requests_doc() {}

#[utoipa::path(
    post,
    path = "/api/leave-requests/{employee_id}/approve",
    params(("employee_id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Both records updated", body = LeaveOutcome),
        (status = 409, description = "Request is not pending"),
        (status = 502, description = "Leave row updated but employee row was not")
    ),
    tag = "Leave"
)]
fn approve_leave_doc() {}

#[utoipa::path(
    post,
    path = "/api/leave-requests/{employee_id}/reject",
    params(("employee_id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Both records updated", body = LeaveOutcome),
        (status = 409, description = "Request is not pending")
    ),
    tag = "Leave"
)]
fn reject_leave_doc() {}

#[utoipa::path(
    get,
    path = "/api/clock",
    responses((status = 200, description = "Current time label", body = ClockState)),
    tag = "System"
)]
fn clock_doc() {}
