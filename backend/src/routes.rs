use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{docs::ApiDoc, handlers, middleware, state::AppState};

pub fn app_router(state: AppState) -> Router {
    // Paths and shapes the existing pages already call.
    let page_routes = Router::new()
        .route(
            "/employees",
            get(handlers::employees::list_employee_rows)
                .put(handlers::employees::update_employee_legacy),
        )
        .route(
            "/recruitments",
            get(handlers::recruitments::list_recruitment_rows),
        )
        .route(
            "/handleRequestMeeting",
            put(handlers::recruitments::handle_request_meeting),
        )
        .route("/takeleave", get(handlers::leave_requests::list_leave_rows))
        .route(
            "/approveTakeLeave",
            post(handlers::leave_requests::approve_take_leave),
        )
        .route("/login", post(handlers::auth::login));

    let api_routes = Router::new()
        .route("/api/employees", get(handlers::employees::list_employees))
        .route(
            "/api/employees/{id}",
            get(handlers::employees::get_employee).put(handlers::employees::update_employee),
        )
        .route(
            "/api/recruitments",
            get(handlers::recruitments::list_recruitments),
        )
        .route(
            "/api/recruitments/{id}",
            get(handlers::recruitments::get_recruitment),
        )
        .route(
            "/api/recruitments/{id}/actions",
            get(handlers::recruitments::recruitment_actions),
        )
        .route(
            "/api/recruitments/{id}/transitions",
            post(handlers::recruitments::transition_recruitment),
        )
        .route(
            "/api/leave-requests",
            get(handlers::leave_requests::list_leave_requests),
        )
        .route(
            "/api/leave-requests/{employee_id}/approve",
            post(handlers::leave_requests::approve_leave_request),
        )
        .route(
            "/api/leave-requests/{employee_id}/reject",
            post(handlers::leave_requests::reject_leave_request),
        )
        .route("/api/clock", get(handlers::clock::get_clock))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(axum_middleware::from_fn(middleware::log_error_responses))
        .layer(axum_middleware::from_fn(middleware::request_id))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
