//! Employee directory backed by the `Sheet2` script.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{
    decode_rows,
    script_client::{expect_ack, Script, ScriptClient},
};
use crate::{
    error::StoreError,
    models::{Employee, EmployeeStatus},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepositoryTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Employee, StoreError>;

    /// Overwrites every column of the row whose id matches `employee.id`.
    async fn update(&self, employee: &Employee) -> Result<(), StoreError>;

    /// Writes the status cell only; the other columns keep their sheet values.
    async fn set_status(&self, id: &str, status: EmployeeStatus) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct EmployeeRepository {
    client: ScriptClient,
}

impl EmployeeRepository {
    pub fn new(client: ScriptClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for EmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let value = self.client.get(Script::Employees, &[]).await?;
        decode_rows(Script::Employees, value, "employee", |row| Employee::from_row(&row))
    }

    async fn find_by_id(&self, id: &str) -> Result<Employee, StoreError> {
        let id = id.trim();
        let value = self.client.get(Script::Employees, &[("id", id)]).await?;
        // The script answers `?id=` with either the bare row or the full list.
        let value = match value {
            Value::Array(cells) if !cells.is_empty() && !cells[0].is_array() => {
                Value::Array(vec![Value::Array(cells)])
            }
            other => other,
        };
        decode_rows(Script::Employees, value, "employee", |row| Employee::from_row(&row))?
            .into_iter()
            .find(|employee| employee.id == id)
            .ok_or_else(|| StoreError::NotFound("Employee not found".to_string()))
    }

    async fn update(&self, employee: &Employee) -> Result<(), StoreError> {
        let body = json!({
            "action": "update",
            "id": employee.id,
            "name": employee.name,
            "position": employee.position,
            "department": employee.department,
            "email": employee.email,
            "phone": employee.phone,
            "hireDate": employee.hire_date,
            "status": employee.status_label(),
        });
        let ack = self.client.post(Script::EmployeeUpdate, &body).await?;
        expect_ack(Script::EmployeeUpdate, &ack)?;
        tracing::info!(employee_id = %employee.id, status = employee.status_label(), "employee updated");
        Ok(())
    }

    async fn set_status(&self, id: &str, status: EmployeeStatus) -> Result<(), StoreError> {
        let id = id.trim();
        let body = json!({
            "action": "updateStatus",
            "id": id,
            "status": status.label(),
        });
        let ack = self.client.post(Script::EmployeeUpdate, &body).await?;
        expect_ack(Script::EmployeeUpdate, &ack)?;
        tracing::info!(employee_id = id, status = status.label(), "employee status updated");
        Ok(())
    }
}
