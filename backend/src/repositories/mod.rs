//! Adapters over the spreadsheet script endpoints.

pub mod credential_repository;
pub mod employee_repository;
pub mod leave_request_repository;
pub mod recruitment_repository;
pub mod script_client;

use serde_json::Value;

use crate::{
    error::StoreError,
    models::sheet::{expect_rows, DecodeError},
};

pub use credential_repository::{CredentialRepository, CredentialRepositoryTrait};
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryTrait};
pub use leave_request_repository::{LeaveRequestRepository, LeaveRequestRepositoryTrait};
pub use recruitment_repository::{RecruitmentRepository, RecruitmentRepositoryTrait};
pub use script_client::{Script, ScriptClient};

/// Decodes a list payload row by row. Rows that do not decode (blank lines,
/// half-filled form rows) are skipped and logged; a payload that is not a
/// list at all fails the whole read.
pub(crate) fn decode_rows<T, F>(
    script: Script,
    value: Value,
    record: &'static str,
    decode: F,
) -> Result<Vec<T>, StoreError>
where
    F: Fn(Value) -> Result<T, DecodeError>,
{
    let rows = expect_rows(value, record).map_err(|err| StoreError::decode(script.name(), err))?;
    let mut decoded = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match decode(row) {
            Ok(item) => decoded.push(item),
            Err(err) => {
                tracing::warn!(script = script.name(), row = index, error = %err, "skipping undecodable row");
            }
        }
    }
    Ok(decoded)
}
