use super::utils::EMPLOYEE_UPDATED_MESSAGE;
use crate::api::{ApiClient, ApiError, EmployeePayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeFormRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeeFormRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeFormRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create(&self, payload: &EmployeePayload) -> Result<String, ApiError> {
        self.client.create_employee(payload).await
    }

    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<String, ApiError> {
        self.client.update_employee(id, payload).await?;
        Ok(EMPLOYEE_UPDATED_MESSAGE.to_string())
    }
}
