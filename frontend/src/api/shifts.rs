use super::{
    client::ApiClient,
    types::{ApiError, CreateShiftRecord, ShiftRecord},
};
use reqwest::Method;

impl ApiClient {
    pub async fn list_shift_records(&self) -> Result<Vec<ShiftRecord>, ApiError> {
        let request = self.request(Method::GET, "/registros").await;
        let body = self
            .execute(request, "Error al obtener registros de turno")
            .await?;
        Ok(body.decode_list())
    }

    pub async fn create_shift_record(
        &self,
        record: &CreateShiftRecord,
    ) -> Result<Option<ShiftRecord>, ApiError> {
        let request = self
            .request(Method::POST, "/registros")
            .await
            .json(record);
        let body = self.execute(request, "Error al crear registro").await?;
        Ok(body.decode())
    }

    /// `204` yields an empty list.
    pub async fn shift_records_for_employee(
        &self,
        employee_id: i64,
    ) -> Result<Vec<ShiftRecord>, ApiError> {
        let request = self
            .request(Method::GET, &format!("/registros/empleado/{employee_id}"))
            .await;
        let body = self
            .execute(request, "Error al obtener registros de turno del empleado")
            .await?;
        Ok(body.decode_list())
    }
}
