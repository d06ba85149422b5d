pub mod auth;
pub mod clock;
pub mod common;
pub mod employees;
pub mod leave_requests;
pub mod recruitments;
