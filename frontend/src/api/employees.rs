use super::{
    client::{with_timeout, ApiClient},
    types::{ApiError, Employee, EmployeePayload},
};
use reqwest::{
    multipart::{Form, Part},
    Method, StatusCode,
};

pub const EMPLOYEE_SAVED_MESSAGE: &str = "Empleado guardado con éxito";
pub const EMPLOYEES_IMPORTED_MESSAGE: &str = "Empleados importados exitosamente.";

/// Markers the backend uses when a delete violates a foreign key on shift records.
const HAS_RECORDS_MARKERS: [&str; 2] = ["restricc", "asociad"];

pub(crate) fn classify_delete_error(error: ApiError, status: Option<StatusCode>) -> ApiError {
    let lowered = error.error.to_lowercase();
    let conflict = status == Some(StatusCode::CONFLICT)
        || HAS_RECORDS_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker));
    if conflict {
        ApiError {
            code: ApiError::EMPLOYEE_HAS_RECORDS.to_string(),
            ..error
        }
    } else {
        error
    }
}

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let request = self.request(Method::GET, "/empleados/todos").await;
        let body = self.execute(request, "Error al obtener empleados").await?;
        Ok(body.decode_list())
    }

    /// `204` and `404` both mean the employee does not exist.
    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>, ApiError> {
        let request = self
            .request(Method::GET, &format!("/empleados/{id}"))
            .await;
        match self.execute(request, "Empleado no encontrado").await {
            Ok(body) => Ok(body.decode()),
            Err(err) if err.is(ApiError::NOT_FOUND) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Returns the server message, or a default confirmation when the reply has no body.
    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<String, ApiError> {
        let request = self
            .request(Method::POST, "/empleados/registrar")
            .await
            .json(payload);
        let body = self.execute(request, "Error al guardar empleado").await?;
        Ok(body
            .message()
            .unwrap_or_else(|| EMPLOYEE_SAVED_MESSAGE.to_string()))
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<Option<Employee>, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/empleados/{id}"))
            .await
            .json(payload);
        let body = self
            .execute(request, "Error al actualizar empleado")
            .await?;
        Ok(body.decode())
    }

    /// Deletion blocked by associated shift records comes back as `EMPLOYEE_HAS_RECORDS`.
    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .request(Method::DELETE, &format!("/empleados/{id}"))
            .await;
        let limit = self.timeouts().await.request;
        with_timeout(limit, async move {
            let response = super::client::send(request, limit).await?;
            let status = response.status();
            if status.is_success() {
                return Ok(());
            }
            let error = super::client::failure(response, "Error al eliminar empleado").await;
            Err(classify_delete_error(error, Some(status)))
        })
        .await
    }

    pub async fn set_employee_active(
        &self,
        id: i64,
        activo: bool,
    ) -> Result<Option<Employee>, ApiError> {
        let request = self
            .request(Method::PATCH, &format!("/empleados/{id}/estado"))
            .await
            .query(&[("activo", activo)]);
        let body = self
            .execute(request, "Error al actualizar estado del empleado")
            .await?;
        Ok(body.decode())
    }

    /// Posts the CSV bytes as multipart field `file`.
    pub async fn upload_employees_csv(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("text/csv")
            .map_err(|e| ApiError::unknown(format!("Archivo inválido: {e}")))?;
        let form = Form::new().part("file", part);
        let request = self
            .request(Method::POST, "/empleados/upload-csv")
            .await
            .multipart(form);
        let body = self
            .execute(request, "Error al subir el archivo CSV.")
            .await?;
        Ok(body
            .message()
            .unwrap_or_else(|| EMPLOYEES_IMPORTED_MESSAGE.to_string()))
    }
}
