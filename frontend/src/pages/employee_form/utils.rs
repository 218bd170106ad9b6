use crate::{
    api::{Employee, EmployeePayload},
    state::session_store::EmployeeDraft,
    utils::time::{date_input_value, parse_date_input},
};
use std::collections::BTreeMap;

pub const EMPLOYEE_UPDATED_MESSAGE: &str = "Empleado actualizado con éxito";
pub const MIN_IDENTIFICATION_DIGITS: usize = 6;

const ACCENTED_LETTERS: &str = "ÁÉÍÓÚÜÑáéíóúüñ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Nombre,
    Apellido,
    Identificacion,
    Cargo,
    Departamento,
    FechaIngreso,
    FechaSalida,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Nombre,
        FormField::Apellido,
        FormField::Identificacion,
        FormField::Cargo,
        FormField::Departamento,
        FormField::FechaIngreso,
        FormField::FechaSalida,
    ];

    fn is_lettered(&self) -> bool {
        matches!(
            self,
            FormField::Nombre | FormField::Apellido | FormField::Cargo | FormField::Departamento
        )
    }
}

pub type FieldErrors = BTreeMap<FormField, &'static str>;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' ' || ACCENTED_LETTERS.contains(c)
}

/// Drops anything that is not a letter (accents included) or a space.
pub fn sanitize_letters(raw: &str) -> String {
    raw.chars().filter(|c| is_name_char(*c)).collect()
}

pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

pub fn field_value(draft: &EmployeeDraft, field: FormField) -> &str {
    match field {
        FormField::Nombre => &draft.nombre,
        FormField::Apellido => &draft.apellido,
        FormField::Identificacion => &draft.identificacion,
        FormField::Cargo => &draft.cargo,
        FormField::Departamento => &draft.departamento,
        FormField::FechaIngreso => &draft.fecha_ingreso,
        FormField::FechaSalida => &draft.fecha_salida,
    }
}

/// Writes a typed value into the draft, sanitising name-like and numeric fields on the way in.
pub fn set_field(draft: &mut EmployeeDraft, field: FormField, raw: &str) {
    let value = if field.is_lettered() {
        sanitize_letters(raw)
    } else if field == FormField::Identificacion {
        sanitize_digits(raw)
    } else {
        raw.trim().to_string()
    };
    let slot = match field {
        FormField::Nombre => &mut draft.nombre,
        FormField::Apellido => &mut draft.apellido,
        FormField::Identificacion => &mut draft.identificacion,
        FormField::Cargo => &mut draft.cargo,
        FormField::Departamento => &mut draft.departamento,
        FormField::FechaIngreso => &mut draft.fecha_ingreso,
        FormField::FechaSalida => &mut draft.fecha_salida,
    };
    *slot = value;
}

fn required_message(field: FormField) -> &'static str {
    match field {
        FormField::Nombre => "El nombre es obligatorio.",
        FormField::Apellido => "El apellido es obligatorio.",
        FormField::Identificacion => "La identificación es obligatoria.",
        FormField::Cargo => "El cargo es obligatorio.",
        FormField::Departamento => "El departamento es obligatorio.",
        FormField::FechaIngreso | FormField::FechaSalida => "La fecha es obligatoria.",
    }
}

/// Validates the whole draft. An empty map means the draft can be submitted.
pub fn validate_draft(draft: &EmployeeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in [
        FormField::Nombre,
        FormField::Apellido,
        FormField::Cargo,
        FormField::Departamento,
    ] {
        let value = field_value(draft, field).trim();
        if value.is_empty() {
            errors.insert(field, required_message(field));
        } else if !value.chars().all(is_name_char) {
            errors.insert(field, "Solo letras y espacios.");
        }
    }

    let identificacion = draft.identificacion.trim();
    if identificacion.is_empty() {
        errors.insert(
            FormField::Identificacion,
            required_message(FormField::Identificacion),
        );
    } else if !identificacion.chars().all(|c| c.is_ascii_digit()) {
        errors.insert(FormField::Identificacion, "Solo números.");
    } else if identificacion.len() < MIN_IDENTIFICATION_DIGITS {
        errors.insert(FormField::Identificacion, "Mínimo 6 dígitos.");
    }

    let ingreso = parse_optional_date(&draft.fecha_ingreso);
    let salida = parse_optional_date(&draft.fecha_salida);
    if ingreso.is_err() {
        errors.insert(FormField::FechaIngreso, "Fecha inválida.");
    }
    match (ingreso, salida) {
        (_, Err(())) => {
            errors.insert(FormField::FechaSalida, "Fecha inválida.");
        }
        (Ok(Some(start)), Ok(Some(end))) if end < start => {
            errors.insert(
                FormField::FechaSalida,
                "No puede ser anterior a la de ingreso.",
            );
        }
        _ => {}
    }

    errors
}

fn parse_optional_date(raw: &str) -> Result<Option<chrono::NaiveDate>, ()> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date_input(raw).map(Some).ok_or(())
}

/// Builds the request body; call only after [`validate_draft`] came back empty.
pub fn payload_from_draft(draft: &EmployeeDraft, id: Option<i64>) -> EmployeePayload {
    EmployeePayload {
        id,
        identificacion: draft.identificacion.trim().to_string(),
        nombre: draft.nombre.trim().to_string(),
        apellido: draft.apellido.trim().to_string(),
        cargo: draft.cargo.trim().to_string(),
        departamento: draft.departamento.trim().to_string(),
        fecha_ingreso: parse_date_input(&draft.fecha_ingreso),
        fecha_salida: parse_date_input(&draft.fecha_salida),
        activo: draft.activo,
    }
}

pub fn draft_from_employee(employee: &Employee) -> EmployeeDraft {
    EmployeeDraft {
        identificacion: employee.identificacion.clone(),
        nombre: employee.nombre.clone(),
        apellido: employee.apellido.clone(),
        cargo: employee.cargo.clone(),
        departamento: employee.departamento.clone(),
        fecha_ingreso: date_input_value(employee.fecha_ingreso),
        fecha_salida: date_input_value(employee.fecha_salida),
        activo: employee.activo,
    }
}
