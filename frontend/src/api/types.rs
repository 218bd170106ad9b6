use chrono::{DateTime, NaiveDate, NaiveDateTime};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Other(raw) => raw.as_str(),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        if raw == "ADMIN" {
            Role::Admin
        } else {
            Role::Other(raw)
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Role::from(raw))
    }
}

/// Identity returned by `GET /users/login`; persisted while an administrator is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    #[serde(rename = "correo")]
    pub identity_email: String,
    #[serde(rename = "rol")]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub correo: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KioskSession {
    pub employee_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub identificacion: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
    #[serde(default)]
    pub cargo: String,
    #[serde(default)]
    pub departamento: String,
    #[serde(default)]
    pub fecha_ingreso: Option<NaiveDate>,
    #[serde(default)]
    pub fecha_salida: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub activo: bool,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido).trim().to_string()
    }
}

fn default_active() -> bool {
    true
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Null) | None => Ok(String::new()),
        Some(other) => Ok(other.to_string()),
    }
}

/// Body for `POST /empleados/registrar` and `PUT /empleados/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub identificacion: String,
    pub nombre: String,
    pub apellido: String,
    pub cargo: String,
    pub departamento: String,
    pub fecha_ingreso: Option<NaiveDate>,
    pub fecha_salida: Option<NaiveDate>,
    pub activo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    #[serde(rename = "ENTRADA", alias = "entrada")]
    Entrada,
    #[serde(rename = "SALIDA", alias = "salida")]
    Salida,
}

impl ShiftKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftKind::Entrada => "ENTRADA",
            ShiftKind::Salida => "SALIDA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShiftKind::Entrada => "entrada",
            ShiftKind::Salida => "salida",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ShiftKind::Entrada => ShiftKind::Salida,
            ShiftKind::Salida => ShiftKind::Entrada,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: i64,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
}

/// A single clock-in / clock-out event ("registro").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub id: i64,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub employee: Option<EmployeeRef>,
    /// `None` when the backend sent no type or one outside ENTRADA/SALIDA.
    #[serde(default, deserialize_with = "lenient_kind")]
    pub tipo: Option<ShiftKind>,
    #[serde(default)]
    pub fecha_hora: String,
}

fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ShiftKind>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

impl ShiftRecord {
    /// Wire name of the type, empty when unknown. Used for search and sorting.
    pub fn kind_key(&self) -> &'static str {
        self.tipo.as_ref().map(ShiftKind::as_str).unwrap_or_default()
    }

    pub fn kind_display(&self) -> &'static str {
        self.tipo.as_ref().map(ShiftKind::as_str).unwrap_or("—")
    }

    pub fn owner_id(&self) -> Option<i64> {
        self.employee
            .as_ref()
            .map(|employee| employee.id)
            .or(self.employee_id)
    }

    pub fn owner_name(&self) -> String {
        self.employee
            .as_ref()
            .map(|employee| {
                format!(
                    "{} {}",
                    employee.nombre.as_deref().unwrap_or_default(),
                    employee.apellido.as_deref().unwrap_or_default()
                )
                .trim()
                .to_string()
            })
            .unwrap_or_default()
    }

    /// Parses `fecha_hora` as a local timestamp; zoned values are shifted to their local wall time.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_local_timestamp(&self.fecha_hora)
    }
}

pub fn parse_local_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|zoned| zoned.naive_local())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftRecord {
    pub employee_id: i64,
    pub tipo: ShiftKind,
    pub fecha_hora: String,
}

/// Bytes of a generated report ready to hand to a [`crate::utils::download::DownloadSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub const VALIDATION_ERROR: &'static str = "VALIDATION_ERROR";
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";
    pub const TIMEOUT: &'static str = "TIMEOUT";
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const UNAUTHORIZED: &'static str = "UNAUTHORIZED";
    pub const EMPLOYEE_HAS_RECORDS: &'static str = "EMPLOYEE_HAS_RECORDS";
    pub const SERVER_ERROR: &'static str = "SERVER_ERROR";
    pub const UNKNOWN: &'static str = "UNKNOWN";

    pub fn new(code: &str, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(Self::VALIDATION_ERROR, msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new(Self::UNKNOWN, msg)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new(Self::REQUEST_FAILED, msg)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(Self::TIMEOUT, msg)
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    /// Transport-level failures (no response, or no response in time).
    pub fn is_transport(&self) -> bool {
        self.is(Self::REQUEST_FAILED) || self.is(Self::TIMEOUT)
    }
}
