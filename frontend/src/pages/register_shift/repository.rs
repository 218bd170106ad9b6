use super::utils::{
    newest_first, INACTIVE_MESSAGE, LOAD_FAILED_MESSAGE, NOT_FOUND_MESSAGE,
    REGISTER_FAILED_MESSAGE,
};
use crate::{
    api::{ApiClient, ApiError, CreateShiftRecord, Employee, ShiftKind, ShiftRecord},
    utils::download::{BrowserDownloadSink, DownloadSink},
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// An employee allowed to clock in, with their records newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCard {
    pub employee: Employee,
    pub recent: Vec<ShiftRecord>,
}

fn server_text(err: &ApiError, fallback: &str) -> String {
    let message = err.error.trim();
    if err.is_transport() || message.is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

#[derive(Clone)]
pub struct RegisterShiftRepository {
    client: Rc<ApiClient>,
    sink: Rc<dyn DownloadSink>,
}

impl RegisterShiftRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self {
            client,
            sink: Rc::new(BrowserDownloadSink),
        }
    }

    pub fn with_sink(mut self, sink: Rc<dyn DownloadSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Inactive employees are refused before their records are fetched.
    pub async fn load_card(&self, employee_id: i64) -> Result<EmployeeCard, String> {
        let employee = match self.client.get_employee(employee_id).await {
            Ok(Some(employee)) => employee,
            Ok(None) => return Err(NOT_FOUND_MESSAGE.to_string()),
            Err(err) => {
                log::error!("employee lookup {employee_id} failed: {err}");
                return Err(server_text(&err, LOAD_FAILED_MESSAGE));
            }
        };
        if !employee.activo {
            return Err(INACTIVE_MESSAGE.to_string());
        }
        let mut recent = self
            .client
            .shift_records_for_employee(employee_id)
            .await
            .map_err(|err| server_text(&err, LOAD_FAILED_MESSAGE))?;
        newest_first(&mut recent);
        Ok(EmployeeCard { employee, recent })
    }

    pub async fn register(
        &self,
        employee_id: i64,
        tipo: ShiftKind,
        fecha_hora: String,
    ) -> Result<(), String> {
        let record = CreateShiftRecord {
            employee_id,
            tipo,
            fecha_hora,
        };
        self.client
            .create_shift_record(&record)
            .await
            .map(|_| ())
            .map_err(|err| {
                log::warn!("registering {} for {employee_id} failed: {err}", tipo.as_str());
                server_text(&err, REGISTER_FAILED_MESSAGE)
            })
    }

    pub async fn export_history(&self, employee_id: i64) -> Result<String, ApiError> {
        self.client
            .export_employee_history_pdf(self.sink.as_ref(), employee_id)
            .await
    }
}
