//! HR desk backend: employee directory, recruitment review and leave
//! approval over spreadsheet script endpoints.

pub mod config;
pub mod docs;
pub mod error;
pub mod filters;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod validation;
pub mod view_state;
pub mod workflow;
