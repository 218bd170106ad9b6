use crate::{
    api::{AdminSession, KioskSession},
    utils::storage::{BrowserStorage, KeyValueStore, MemoryStorage, StorageError},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::rc::Rc;

pub const USER_KEY: &str = "user";
pub const KIOSK_MODE_KEY: &str = "kioskMode";
pub const KIOSK_EMPLOYEE_ID_KEY: &str = "kioskEmployeeId";
pub const VIEW_KEY: &str = "view";
pub const LAST_ADMIN_VIEW_KEY: &str = "lastAdminView";
pub const NEW_EMPLOYEE_DRAFT_KEY: &str = "newEmployeeDraft";

/// Raw field values of the employee form, kept as typed text so a half-filled form survives reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    pub identificacion: String,
    pub nombre: String,
    pub apellido: String,
    pub cargo: String,
    pub departamento: String,
    pub fecha_ingreso: String,
    pub fecha_salida: String,
    pub activo: bool,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            identificacion: String::new(),
            nombre: String::new(),
            apellido: String::new(),
            cargo: String::new(),
            departamento: String::new(),
            fecha_ingreso: String::new(),
            fecha_salida: String::new(),
            activo: true,
        }
    }
}

impl EmployeeDraft {
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Typed accessors over a [`KeyValueStore`]. Nothing here fails toward the caller:
/// unreadable or malformed entries read as absent and write failures are logged.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Browser `localStorage` when reachable, otherwise a process-local map.
    pub fn browser() -> Self {
        if BrowserStorage::is_available() {
            Self::new(BrowserStorage)
        } else {
            log::warn!("localStorage unavailable; session state will not survive a reload");
            Self::new(MemoryStorage::new())
        }
    }

    pub fn memory(storage: MemoryStorage) -> Self {
        Self::new(storage)
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        self.backend.get(key).filter(|value| !value.is_empty())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring malformed `{key}` entry: {err}");
                None
            }
        }
    }

    fn write_raw(&self, key: &str, value: &str) {
        if let Err(err) = self.backend.set(key, value) {
            log::warn!("session store write failed: {err}");
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.write_raw(key, &raw),
            Err(err) => {
                let err = StorageError::Serialize {
                    key: key.to_string(),
                    message: err.to_string(),
                };
                log::warn!("session store write failed: {err}");
            }
        }
    }

    fn clear(&self, key: &str) {
        if let Err(err) = self.backend.remove(key) {
            log::warn!("session store clear failed: {err}");
        }
    }

    pub fn admin_session(&self) -> Option<AdminSession> {
        self.read_json(USER_KEY)
    }

    pub fn save_admin_session(&self, session: &AdminSession) {
        self.write_json(USER_KEY, session);
    }

    pub fn clear_admin_session(&self) {
        self.clear(USER_KEY);
    }

    /// A kiosk flag without a positive employee id reads as no session.
    pub fn kiosk_session(&self) -> Option<KioskSession> {
        if self.read_raw(KIOSK_MODE_KEY).as_deref() != Some("true") {
            return None;
        }
        let employee_id = self
            .read_raw(KIOSK_EMPLOYEE_ID_KEY)?
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)?;
        Some(KioskSession { employee_id })
    }

    pub fn save_kiosk_session(&self, session: KioskSession) {
        if session.employee_id <= 0 {
            log::warn!(
                "refusing to persist kiosk session for id {}",
                session.employee_id
            );
            return;
        }
        self.write_raw(KIOSK_MODE_KEY, "true");
        self.write_raw(KIOSK_EMPLOYEE_ID_KEY, &session.employee_id.to_string());
    }

    pub fn clear_kiosk_session(&self) {
        self.clear(KIOSK_MODE_KEY);
        self.clear(KIOSK_EMPLOYEE_ID_KEY);
    }

    pub fn current_view(&self) -> Option<String> {
        self.read_raw(VIEW_KEY)
    }

    pub fn save_current_view(&self, view: &str) {
        self.write_raw(VIEW_KEY, view);
        self.write_raw(LAST_ADMIN_VIEW_KEY, view);
    }

    pub fn clear_current_view(&self) {
        self.clear(VIEW_KEY);
    }

    pub fn last_admin_view(&self) -> Option<String> {
        self.read_raw(LAST_ADMIN_VIEW_KEY)
    }

    pub fn new_employee_draft(&self) -> Option<EmployeeDraft> {
        self.read_json(NEW_EMPLOYEE_DRAFT_KEY)
    }

    pub fn save_new_employee_draft(&self, draft: &EmployeeDraft) {
        self.write_json(NEW_EMPLOYEE_DRAFT_KEY, draft);
    }

    pub fn clear_new_employee_draft(&self) {
        self.clear(NEW_EMPLOYEE_DRAFT_KEY);
    }
}
