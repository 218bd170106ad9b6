pub const INVALID_ID_MESSAGE: &str = "Ingresa un ID válido.";
pub const EMPLOYEE_NOT_FOUND_MESSAGE: &str = "Empleado no encontrado.";
pub const EMPLOYEE_DISABLED_MESSAGE: &str = "Este empleado no tiene acceso a la plataforma.";
pub const KIOSK_CHECK_FAILED_MESSAGE: &str = "Error al verificar acceso del empleado.";
pub const CONNECTION_FAILED_MESSAGE: &str = "Error de conexión con el servidor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginTab {
    #[default]
    Admin,
    Employee,
}

/// Submit stays disabled until both fields carry something.
pub fn credentials_ready(correo: &str, contrasena: &str) -> bool {
    !correo.trim().is_empty() && !contrasena.is_empty()
}

pub fn parse_kiosk_id(raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| INVALID_ID_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_fields() {
        assert!(!credentials_ready("  ", "x"));
        assert!(!credentials_ready("a@b.co", ""));
        assert!(credentials_ready("a@b.co", " "));
    }

    #[test]
    fn kiosk_id_must_be_positive_integer() {
        assert_eq!(parse_kiosk_id(" 7 "), Ok(7));
        for raw in ["", "0", "-2", "7a", "3.5"] {
            assert_eq!(parse_kiosk_id(raw), Err(INVALID_ID_MESSAGE.to_string()));
        }
    }
}
