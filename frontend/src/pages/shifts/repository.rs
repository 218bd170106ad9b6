use crate::{
    api::{ApiClient, ApiError, ShiftRange, ShiftRecord},
    utils::download::{BrowserDownloadSink, DownloadSink},
};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftExport {
    All,
    Range { from: String, to: String },
    Employee(i64),
}

#[derive(Clone)]
pub struct ShiftsRepository {
    client: Rc<ApiClient>,
    sink: Rc<dyn DownloadSink>,
}

impl Default for ShiftsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftsRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

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

    pub async fn fetch_records(&self) -> Result<Vec<ShiftRecord>, ApiError> {
        self.client.list_shift_records().await
    }

    /// Returns the saved file name.
    pub async fn export(&self, export: &ShiftExport) -> Result<String, ApiError> {
        let sink = self.sink.as_ref();
        match export {
            ShiftExport::All => self.client.export_shifts_pdf(sink).await,
            ShiftExport::Range { from, to } => {
                let range = ShiftRange::from_inputs(from, to)?;
                self.client.export_shifts_pdf_range(sink, &range).await
            }
            ShiftExport::Employee(id) => self.client.export_employee_history_pdf(sink, *id).await,
        }
    }
}
