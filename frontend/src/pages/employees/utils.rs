use crate::api::{ApiError, Employee};

pub const PAGE_SIZE: usize = 10;
pub const TOAST_MILLIS: u64 = 2_400;

pub const DELETED_MESSAGE: &str = "Empleado eliminado con éxito";
pub const DELETE_FALLBACK_MESSAGE: &str = "No se pudo eliminar el empleado.";
pub const IMPORT_MISSING_FILE_MESSAGE: &str = "Por favor, selecciona un archivo CSV.";
pub const IMPORT_WRONG_EXTENSION_MESSAGE: &str = "El archivo debe tener extensión .csv.";
pub const IMPORT_FALLBACK_MESSAGE: &str = "Error al importar empleados.";

/// Kinds that only make sense for an action on a single employee row.
const ROW_ERROR_MESSAGES: &[(&str, &str)] = &[
    (
        ApiError::EMPLOYEE_HAS_RECORDS,
        "No se puede eliminar: el empleado tiene registros asociados.",
    ),
    (ApiError::NOT_FOUND, "El empleado ya no existe."),
];

const TRANSPORT_ERROR_MESSAGES: &[(&str, &str)] = &[
    (ApiError::TIMEOUT, "La solicitud excedió el tiempo de espera."),
    (ApiError::REQUEST_FAILED, "No se pudo conectar con el servidor."),
];

/// Kinds not found in any table show the server text, or `fallback` when it is blank.
fn lookup_message(tables: &[&[(&str, &str)]], error: &ApiError, fallback: &str) -> String {
    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|(code, _)| error.is(code))
        .map(|(_, message)| message.to_string())
        .or_else(|| Some(error.error.trim().to_string()).filter(|msg| !msg.is_empty()))
        .unwrap_or_else(|| fallback.to_string())
}

/// Delete and active-flag toggle on a row.
pub fn action_error_message(error: &ApiError, fallback: &str) -> String {
    lookup_message(&[ROW_ERROR_MESSAGES, TRANSPORT_ERROR_MESSAGES], error, fallback)
}

pub fn import_error_message(error: &ApiError) -> String {
    lookup_message(&[TRANSPORT_ERROR_MESSAGES], error, IMPORT_FALLBACK_MESSAGE)
}

/// Case-insensitive substring match over every column the table shows.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|employee| {
            searchable_fields(employee)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

fn searchable_fields(employee: &Employee) -> Vec<String> {
    vec![
        employee.id.to_string(),
        employee.identificacion.clone(),
        employee.nombre.clone(),
        employee.apellido.clone(),
        employee.cargo.clone(),
        employee.departamento.clone(),
        employee
            .fecha_ingreso
            .map(|d| d.to_string())
            .unwrap_or_default(),
        employee
            .fecha_salida
            .map(|d| d.to_string())
            .unwrap_or_default(),
    ]
}

pub fn validate_csv_file_name(name: Option<&str>) -> Result<String, String> {
    let name = name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| IMPORT_MISSING_FILE_MESSAGE.to_string())?;
    if name.to_ascii_lowercase().ends_with(".csv") {
        Ok(name.to_string())
    } else {
        Err(IMPORT_WRONG_EXTENSION_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}
