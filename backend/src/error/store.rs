//! Failure taxonomy of the spreadsheet adapter.

use thiserror::Error;

use crate::{models::sheet::DecodeError, workflow::TransitionError};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The request never completed: connect failure, reset or timeout.
    #[error("{script} script unreachable: {message}")]
    Network {
        script: &'static str,
        message: String,
    },
    /// The script answered, but with a non-2xx status or a body we cannot use.
    #[error("{script} script error: {message}")]
    Upstream {
        script: &'static str,
        message: String,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("{0}")]
    InvalidTransition(String),
    /// A two-record update stopped half way.
    #[error("{completed} was updated but {failed} was not: {message}")]
    PartialFailure {
        completed: &'static str,
        failed: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn upstream(script: &'static str, message: impl Into<String>) -> Self {
        StoreError::Upstream {
            script,
            message: message.into(),
        }
    }

    pub fn decode(script: &'static str, err: DecodeError) -> Self {
        StoreError::upstream(script, err.to_string())
    }
}

impl From<TransitionError> for StoreError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::InvalidInput(messages) => StoreError::Validation(messages),
            other => StoreError::InvalidTransition(other.to_string()),
        }
    }
}
