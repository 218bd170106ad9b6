#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AdminSession, Employee, EmployeeRef, Role, ShiftKind, ShiftRecord};
    use crate::state::{
        session::{provide_session, SessionContext},
        session_store::SessionStore,
    };
    use crate::utils::storage::MemoryStorage;

    pub fn admin_session(role: Role) -> AdminSession {
        AdminSession {
            identity_email: "admin@room911.co".into(),
            role,
        }
    }

    pub fn employee(id: i64, activo: bool) -> Employee {
        Employee {
            id,
            identificacion: format!("{:07}", 1_000_000 + id),
            nombre: "Laura".into(),
            apellido: "Gómez".into(),
            cargo: "Analista".into(),
            departamento: "Finanzas".into(),
            fecha_ingreso: chrono::NaiveDate::from_ymd_opt(2023, 2, 1),
            fecha_salida: None,
            activo,
        }
    }

    pub fn shift_record(id: i64, employee_id: i64, tipo: ShiftKind, fecha_hora: &str) -> ShiftRecord {
        ShiftRecord {
            id,
            employee_id: None,
            employee: Some(EmployeeRef {
                id: employee_id,
                nombre: Some("Laura".into()),
                apellido: Some("Gómez".into()),
            }),
            tipo: Some(tipo),
            fecha_hora: fecha_hora.into(),
        }
    }

    /// Provides a session backed by a fresh in-memory store; must run inside a reactive runtime.
    pub fn provide_memory_session() -> (SessionContext, MemoryStorage) {
        let storage = MemoryStorage::new();
        let session = provide_session(SessionStore::memory(storage.clone()));
        (session, storage)
    }
}
