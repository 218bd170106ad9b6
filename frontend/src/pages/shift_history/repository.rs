use crate::{
    api::{ApiClient, ApiError, Employee, ShiftRecord},
    utils::download::{BrowserDownloadSink, DownloadSink},
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeHistory {
    pub employee: Option<Employee>,
    pub records: Vec<ShiftRecord>,
}

impl EmployeeHistory {
    pub fn title(&self) -> String {
        let name = self
            .employee
            .as_ref()
            .map(Employee::full_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Empleado".to_string());
        format!("Historial de Turnos de {name}")
    }
}

/// Oldest first; unparseable timestamps go to the front.
pub fn oldest_first(records: &mut [ShiftRecord]) {
    records.sort_by_key(ShiftRecord::timestamp);
}

#[derive(Clone)]
pub struct ShiftHistoryRepository {
    client: Rc<ApiClient>,
    sink: Rc<dyn DownloadSink>,
}

impl ShiftHistoryRepository {
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

    pub async fn load(&self, employee_id: i64) -> Result<EmployeeHistory, ApiError> {
        let employee = self.client.get_employee(employee_id).await?;
        let mut records = self.client.shift_records_for_employee(employee_id).await?;
        oldest_first(&mut records);
        Ok(EmployeeHistory { employee, records })
    }

    pub async fn export_pdf(&self, employee_id: i64) -> Result<String, ApiError> {
        self.client
            .export_employee_history_pdf(self.sink.as_ref(), employee_id)
            .await
    }
}
