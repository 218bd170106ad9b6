use crate::api::{ApiClient, ApiError, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<i64, ApiError> {
        self.client.delete_employee(id).await.map(|_| id)
    }

    /// Flips the active flag; when the backend echoes nothing the local copy is patched.
    pub async fn set_active(&self, employee: Employee, activo: bool) -> Result<Employee, ApiError> {
        let updated = self.client.set_employee_active(employee.id, activo).await?;
        Ok(updated.unwrap_or(Employee { activo, ..employee }))
    }

    pub async fn import_csv(&self, filename: String, bytes: Vec<u8>) -> Result<String, ApiError> {
        self.client.upload_employees_csv(&filename, bytes).await
    }
}
