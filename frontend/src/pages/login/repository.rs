use super::utils::{
    parse_kiosk_id, CONNECTION_FAILED_MESSAGE, EMPLOYEE_DISABLED_MESSAGE,
    EMPLOYEE_NOT_FOUND_MESSAGE, KIOSK_CHECK_FAILED_MESSAGE,
};
use crate::api::{AdminLoginRequest, AdminSession, ApiClient};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login_admin(&self, request: AdminLoginRequest) -> Result<AdminSession, String> {
        self.client.login(&request).await.map_err(|err| {
            if err.is_transport() {
                CONNECTION_FAILED_MESSAGE.to_string()
            } else {
                err.error
            }
        })
    }

    /// Resolves a typed kiosk id to an employee allowed to clock in.
    pub async fn verify_kiosk_employee(&self, raw_id: &str) -> Result<i64, String> {
        let id = parse_kiosk_id(raw_id)?;
        match self.client.get_employee(id).await {
            Ok(Some(employee)) if employee.activo => Ok(employee.id),
            Ok(Some(_)) => Err(EMPLOYEE_DISABLED_MESSAGE.to_string()),
            Ok(None) => Err(EMPLOYEE_NOT_FOUND_MESSAGE.to_string()),
            Err(err) => {
                log::error!("kiosk lookup for {id} failed: {err}");
                Err(KIOSK_CHECK_FAILED_MESSAGE.to_string())
            }
        }
    }
}
