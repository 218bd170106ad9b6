use crate::api::{ShiftKind, ShiftRecord};

pub const RECENT_PAGE_SIZE: usize = 8;

pub const INVALID_ID_MESSAGE: &str = "Ingresa un ID válido.";
pub const NOT_FOUND_MESSAGE: &str = "Empleado no encontrado.";
pub const INACTIVE_MESSAGE: &str = "Este empleado no tiene acceso habilitado.";
pub const LOAD_FAILED_MESSAGE: &str = "Error al consultar información.";
pub const REGISTER_FAILED_MESSAGE: &str = "No se pudo registrar el turno.";

pub fn parse_employee_id(raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| INVALID_ID_MESSAGE.to_string())
}

pub fn newest_first(records: &mut [ShiftRecord]) {
    records.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
}

pub fn registered_message(kind: ShiftKind) -> String {
    format!("Se registró la {} correctamente.", kind.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::shift_record;

    #[test]
    fn employee_id_must_be_positive_integer() {
        assert_eq!(parse_employee_id(" 27 "), Ok(27));
        assert_eq!(parse_employee_id("0"), Err(INVALID_ID_MESSAGE.into()));
        assert_eq!(parse_employee_id("-3"), Err(INVALID_ID_MESSAGE.into()));
        assert_eq!(parse_employee_id("abc"), Err(INVALID_ID_MESSAGE.into()));
    }

    #[test]
    fn recent_records_newest_first() {
        let mut records = vec![
            shift_record(1, 4, ShiftKind::Entrada, "2024-05-01T08:00:00"),
            shift_record(2, 4, ShiftKind::Salida, "2024-05-01T17:00:00"),
            shift_record(3, 4, ShiftKind::Entrada, "2024-05-02T08:00:00"),
        ];
        newest_first(&mut records);
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn confirmation_names_the_kind() {
        assert_eq!(
            registered_message(ShiftKind::Salida),
            "Se registró la salida correctamente."
        );
    }
}
