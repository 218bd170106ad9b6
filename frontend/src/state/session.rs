use super::session_store::{EmployeeDraft, SessionStore};
use crate::api::{AdminSession, Employee, KioskSession};
use leptos::*;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Anonymous,
    Admin,
    Kiosk,
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Persona::Anonymous => "anonymous",
            Persona::Admin => "admin",
            Persona::Kiosk => "kiosk",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("`{event}` is not allowed while the session is {persona}")]
    InvalidTransition { event: &'static str, persona: Persona },
    #[error("kiosk employee id must be positive, got {0}")]
    InvalidEmployeeId(i64),
}

/// Persisted discriminant of [`AdminView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewName {
    List,
    New,
    Edit,
    RegisterShift,
    ShiftList,
    EmployeeShiftHistory,
    Reports,
}

impl ViewName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::List => "list",
            ViewName::New => "new",
            ViewName::Edit => "edit",
            ViewName::RegisterShift => "registerShift",
            ViewName::ShiftList => "shiftList",
            ViewName::EmployeeShiftHistory => "employeeShiftHistory",
            ViewName::Reports => "reports",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "list" => Some(ViewName::List),
            "new" => Some(ViewName::New),
            "edit" => Some(ViewName::Edit),
            "registerShift" => Some(ViewName::RegisterShift),
            "shiftList" => Some(ViewName::ShiftList),
            "employeeShiftHistory" => Some(ViewName::EmployeeShiftHistory),
            "reports" => Some(ViewName::Reports),
            _ => None,
        }
    }
}

/// Admin sub-view. Variants that need data carry it, so no view renders without its target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdminView {
    #[default]
    List,
    New,
    Edit(Employee),
    RegisterShift {
        employee_id: Option<i64>,
    },
    ShiftList,
    EmployeeShiftHistory(i64),
    Reports,
}

impl AdminView {
    pub fn name(&self) -> ViewName {
        match self {
            AdminView::List => ViewName::List,
            AdminView::New => ViewName::New,
            AdminView::Edit(_) => ViewName::Edit,
            AdminView::RegisterShift { .. } => ViewName::RegisterShift,
            AdminView::ShiftList => ViewName::ShiftList,
            AdminView::EmployeeShiftHistory(_) => ViewName::EmployeeShiftHistory,
            AdminView::Reports => ViewName::Reports,
        }
    }

    /// Rebuilds a view from its persisted name. `current` keeps an in-memory payload alive
    /// when the name still matches; otherwise payload-bearing views fall back to the list.
    pub fn restore(name: ViewName, current: Option<&AdminView>) -> AdminView {
        if let Some(current) = current.filter(|view| view.name() == name) {
            return current.clone();
        }
        match name {
            ViewName::List | ViewName::Edit | ViewName::EmployeeShiftHistory => AdminView::List,
            ViewName::New => AdminView::New,
            ViewName::RegisterShift => AdminView::RegisterShift { employee_id: None },
            ViewName::ShiftList => AdminView::ShiftList,
            ViewName::Reports => AdminView::Reports,
        }
    }
}

/// Output of the rendering policy, first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Kiosk { employee_id: i64 },
    AccessDenied(AdminSession),
    Admin(AdminView),
}

/// In-memory mirror of the session store plus the ephemeral admin view.
#[derive(Clone)]
pub struct SessionController {
    store: SessionStore,
    admin: Option<AdminSession>,
    kiosk: Option<KioskSession>,
    view: AdminView,
    list_refresh: u32,
}

impl SessionController {
    pub fn hydrate(store: SessionStore) -> Self {
        let mut controller = Self {
            store,
            admin: None,
            kiosk: None,
            view: AdminView::List,
            list_refresh: 0,
        };
        controller.read_store();
        log::debug!("session hydrated as {}", controller.persona());
        controller
    }

    fn read_store(&mut self) {
        self.admin = self.store.admin_session();
        self.kiosk = self.store.kiosk_session();
        let name = self
            .store
            .current_view()
            .or_else(|| self.store.last_admin_view())
            .and_then(|raw| ViewName::parse(&raw))
            .unwrap_or(ViewName::List);
        self.view = AdminView::restore(name, Some(&self.view));
    }

    pub fn persona(&self) -> Persona {
        if self.admin.is_some() {
            Persona::Admin
        } else if self.kiosk.is_some() {
            Persona::Kiosk
        } else {
            Persona::Anonymous
        }
    }

    pub fn admin_session(&self) -> Option<&AdminSession> {
        self.admin.as_ref()
    }

    pub fn kiosk_session(&self) -> Option<KioskSession> {
        self.kiosk
    }

    pub fn view(&self) -> &AdminView {
        &self.view
    }

    pub fn list_refresh(&self) -> u32 {
        self.list_refresh
    }

    pub fn screen(&self) -> Screen {
        match (&self.admin, self.kiosk) {
            (Some(admin), _) if !admin.role.is_admin() => Screen::AccessDenied(admin.clone()),
            (Some(_), _) => Screen::Admin(self.view.clone()),
            (None, Some(kiosk)) => Screen::Kiosk {
                employee_id: kiosk.employee_id,
            },
            (None, None) => Screen::Login,
        }
    }

    fn require(
        &self,
        event: &'static str,
        allowed: &[Persona],
    ) -> Result<(), SessionError> {
        let persona = self.persona();
        if allowed.contains(&persona) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition { event, persona })
        }
    }

    fn set_view(&mut self, view: AdminView) {
        self.store.save_current_view(view.name().as_str());
        self.view = view;
    }

    pub fn admin_logged_in(&mut self, session: AdminSession) -> Result<(), SessionError> {
        self.require("admin login", &[Persona::Anonymous, Persona::Kiosk])?;
        log::info!(
            "admin session started for {} ({})",
            session.identity_email,
            session.role.as_str()
        );
        self.store.save_admin_session(&session);
        self.store.clear_kiosk_session();
        self.admin = Some(session);
        self.kiosk = None;
        self.set_view(AdminView::List);
        Ok(())
    }

    pub fn kiosk_logged_in(&mut self, employee_id: i64) -> Result<(), SessionError> {
        self.require("kiosk login", &[Persona::Anonymous])?;
        if employee_id <= 0 {
            return Err(SessionError::InvalidEmployeeId(employee_id));
        }
        log::info!("kiosk session started for employee {employee_id}");
        let session = KioskSession { employee_id };
        self.store.save_kiosk_session(session);
        self.kiosk = Some(session);
        self.set_view(AdminView::RegisterShift {
            employee_id: Some(employee_id),
        });
        Ok(())
    }

    pub fn admin_logout(&mut self) -> Result<(), SessionError> {
        self.require("admin logout", &[Persona::Admin])?;
        log::info!("admin session closed");
        self.store.clear_admin_session();
        self.store.clear_current_view();
        self.store.clear_kiosk_session();
        self.admin = None;
        self.kiosk = None;
        self.view = AdminView::List;
        Ok(())
    }

    pub fn kiosk_exit(&mut self) -> Result<(), SessionError> {
        self.require("kiosk exit", &[Persona::Kiosk])?;
        log::info!("kiosk session closed");
        self.store.clear_kiosk_session();
        self.store.clear_current_view();
        self.kiosk = None;
        self.view = AdminView::List;
        Ok(())
    }

    pub fn navigate(&mut self, view: AdminView) -> Result<(), SessionError> {
        self.require("navigate", &[Persona::Admin])?;
        if matches!(view, AdminView::RegisterShift { .. }) {
            self.store.clear_kiosk_session();
            self.kiosk = None;
        }
        log::debug!("admin view -> {}", view.name().as_str());
        self.set_view(view);
        Ok(())
    }

    /// Called after a successful create or update from the employee form.
    pub fn employee_saved(&mut self) -> Result<(), SessionError> {
        self.require("employee saved", &[Persona::Admin])?;
        if !matches!(self.view, AdminView::New | AdminView::Edit(_)) {
            return Err(SessionError::InvalidTransition {
                event: "employee saved",
                persona: Persona::Admin,
            });
        }
        if self.view == AdminView::New {
            self.store.clear_new_employee_draft();
        }
        self.set_view(AdminView::List);
        self.request_list_refresh();
        Ok(())
    }

    pub fn request_list_refresh(&mut self) {
        self.list_refresh = self.list_refresh.wrapping_add(1);
    }

    /// Re-reads the store wholesale; used when another tab changed it.
    pub fn resync(&mut self) {
        let before = self.persona();
        self.read_store();
        let after = self.persona();
        if before != after {
            log::info!("session changed in another tab: {before} -> {after}");
        }
    }

    pub fn draft(&self) -> Option<EmployeeDraft> {
        self.store.new_employee_draft()
    }

    pub fn save_draft(&self, draft: &EmployeeDraft) {
        self.store.save_new_employee_draft(draft);
    }

    pub fn clear_draft(&self) {
        self.store.clear_new_employee_draft();
    }
}

/// Reactive handle shared through context; every leaf view talks to the session through this.
#[derive(Clone, Copy)]
pub struct SessionContext {
    controller: RwSignal<SessionController>,
}

impl SessionContext {
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller: create_rw_signal(controller),
        }
    }

    pub fn screen(&self) -> Memo<Screen> {
        let controller = self.controller;
        create_memo(move |_| controller.with(|c| c.screen()))
    }

    pub fn persona(&self) -> Persona {
        self.controller.with(|c| c.persona())
    }

    pub fn admin_session(&self) -> Option<AdminSession> {
        self.controller.with(|c| c.admin_session().cloned())
    }

    pub fn list_refresh(&self) -> Signal<u32> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.list_refresh()))
    }

    fn apply(
        &self,
        f: impl FnOnce(&mut SessionController) -> Result<(), SessionError>,
    ) -> Result<(), SessionError> {
        let mut result = Ok(());
        self.controller.update(|controller| result = f(controller));
        if let Err(err) = &result {
            log::warn!("session transition rejected: {err}");
        }
        result
    }

    pub fn admin_logged_in(&self, session: AdminSession) -> Result<(), SessionError> {
        self.apply(|c| c.admin_logged_in(session))
    }

    pub fn kiosk_logged_in(&self, employee_id: i64) -> Result<(), SessionError> {
        self.apply(|c| c.kiosk_logged_in(employee_id))
    }

    pub fn admin_logout(&self) -> Result<(), SessionError> {
        self.apply(|c| c.admin_logout())
    }

    pub fn kiosk_exit(&self) -> Result<(), SessionError> {
        self.apply(|c| c.kiosk_exit())
    }

    pub fn navigate(&self, view: AdminView) -> Result<(), SessionError> {
        self.apply(|c| c.navigate(view))
    }

    pub fn employee_saved(&self) -> Result<(), SessionError> {
        self.apply(|c| c.employee_saved())
    }

    pub fn request_list_refresh(&self) {
        self.controller.update(|c| c.request_list_refresh());
    }

    pub fn resync(&self) {
        self.controller.update(|c| c.resync());
    }

    pub fn draft(&self) -> Option<EmployeeDraft> {
        self.controller.with_untracked(|c| c.draft())
    }

    pub fn save_draft(&self, draft: &EmployeeDraft) {
        self.controller.with_untracked(|c| c.save_draft(draft));
    }

    pub fn clear_draft(&self) {
        self.controller.with_untracked(|c| c.clear_draft());
    }
}

pub fn provide_session(store: SessionStore) -> SessionContext {
    let context = SessionContext::new(SessionController::hydrate(store));
    provide_context(context);
    listen_for_storage_changes(context);
    context
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| provide_session(SessionStore::browser()))
}

#[cfg(target_arch = "wasm32")]
fn listen_for_storage_changes(context: SessionContext) {
    let handle = window_event_listener(ev::storage, move |_| context.resync());
    on_cleanup(move || handle.remove());
}

#[cfg(not(target_arch = "wasm32"))]
fn listen_for_storage_changes(_context: SessionContext) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::Role,
        state::session_store::{KIOSK_MODE_KEY, USER_KEY, VIEW_KEY},
        test_support::helpers::{admin_session, employee},
        utils::storage::{KeyValueStore, MemoryStorage},
    };

    fn controller_over(storage: &MemoryStorage) -> SessionController {
        SessionController::hydrate(SessionStore::memory(storage.clone()))
    }

    fn assert_exclusive(storage: &MemoryStorage) {
        let store = SessionStore::memory(storage.clone());
        assert!(
            !(store.admin_session().is_some() && store.kiosk_session().is_some()),
            "admin and kiosk sessions persisted together"
        );
    }

    #[test]
    fn fresh_store_hydrates_anonymous_on_login_screen() {
        let storage = MemoryStorage::new();
        let controller = controller_over(&storage);
        assert_eq!(controller.persona(), Persona::Anonymous);
        assert_eq!(controller.screen(), Screen::Login);
        assert_eq!(controller.view(), &AdminView::List);
    }

    #[test]
    fn admin_login_clears_active_kiosk_session() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        controller.kiosk_logged_in(5).unwrap();
        assert_eq!(controller.screen(), Screen::Kiosk { employee_id: 5 });

        controller.admin_logged_in(admin_session(Role::Admin)).unwrap();
        assert_eq!(controller.persona(), Persona::Admin);
        assert!(controller.kiosk_session().is_none());
        assert!(storage.get(KIOSK_MODE_KEY).is_none());
        assert_eq!(controller.screen(), Screen::Admin(AdminView::List));
        assert_exclusive(&storage);
    }

    #[test]
    fn kiosk_login_is_rejected_while_admin_is_active() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        controller.admin_logged_in(admin_session(Role::Admin)).unwrap();
        let err = controller.kiosk_logged_in(3).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                event: "kiosk login",
                persona: Persona::Admin
            }
        );
        assert!(controller.kiosk_session().is_none());
        assert_exclusive(&storage);
    }

    #[test]
    fn admin_register_shift_clears_kiosk_session() {
        let storage = MemoryStorage::new();
        SessionStore::memory(storage.clone()).save_kiosk_session(KioskSession { employee_id: 4 });
        SessionStore::memory(storage.clone()).save_admin_session(&admin_session(Role::Admin));
        let mut controller = controller_over(&storage);
        assert_eq!(controller.persona(), Persona::Admin);

        controller
            .navigate(AdminView::RegisterShift { employee_id: None })
            .unwrap();
        assert!(controller.kiosk_session().is_none());
        assert_exclusive(&storage);
    }

    #[test]
    fn mutual_exclusion_holds_across_transition_sequences() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        let steps: Vec<Box<dyn Fn(&mut SessionController) -> Result<(), SessionError>>> = vec![
            Box::new(|c| c.kiosk_logged_in(9)),
            Box::new(|c| c.admin_logged_in(admin_session(Role::Admin))),
            Box::new(|c| c.kiosk_logged_in(2)),
            Box::new(|c| c.navigate(AdminView::Reports)),
            Box::new(|c| c.admin_logout()),
            Box::new(|c| c.kiosk_logged_in(2)),
            Box::new(|c| c.admin_logout()),
            Box::new(|c| c.kiosk_exit()),
            Box::new(|c| c.kiosk_exit()),
            Box::new(|c| c.admin_logged_in(admin_session(Role::Other("USER".into())))),
        ];
        for step in steps {
            let _ = step(&mut controller);
            assert!(!(controller.admin_session().is_some() && controller.kiosk_session().is_some()));
            assert_exclusive(&storage);
        }
    }

    #[test]
    fn persisted_new_view_is_restored_on_reload() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        controller.admin_logged_in(admin_session(Role::Admin)).unwrap();
        controller.navigate(AdminView::New).unwrap();
        assert_eq!(storage.get(VIEW_KEY).as_deref(), Some("new"));

        let reloaded = controller_over(&storage);
        assert_eq!(reloaded.screen(), Screen::Admin(AdminView::New));
    }

    #[test]
    fn payload_views_fall_back_to_list_on_reload() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        controller.admin_logged_in(admin_session(Role::Admin)).unwrap();
        controller.navigate(AdminView::Edit(employee(3, true))).unwrap();
        assert_eq!(controller_over(&storage).view(), &AdminView::List);

        controller.navigate(AdminView::EmployeeShiftHistory(3)).unwrap();
        assert_eq!(controller_over(&storage).view(), &AdminView::List);
    }

    #[test]
    fn unprivileged_role_is_denied() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        let session = admin_session(Role::Other("EMPLEADO".into()));
        controller.admin_logged_in(session.clone()).unwrap();
        assert_eq!(controller.screen(), Screen::AccessDenied(session));
        controller.admin_logout().unwrap();
        assert_eq!(controller.screen(), Screen::Login);
    }

    #[test]
    fn admin_logout_clears_persisted_state() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        controller.admin_logged_in(admin_session(Role::Admin)).unwrap();
        controller.navigate(AdminView::ShiftList).unwrap();
        controller.admin_logout().unwrap();
        assert!(storage.get(USER_KEY).is_none());
        assert!(storage.get(VIEW_KEY).is_none());
        assert_eq!(controller.view(), &AdminView::List);
    }

    #[test]
    fn employee_saved_returns_to_list_and_bumps_refresh() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        controller.admin_logged_in(admin_session(Role::Admin)).unwrap();
        controller.navigate(AdminView::New).unwrap();
        controller.save_draft(&EmployeeDraft {
            nombre: "Ana".into(),
            ..EmployeeDraft::default()
        });

        controller.employee_saved().unwrap();
        assert_eq!(controller.view(), &AdminView::List);
        assert_eq!(controller.list_refresh(), 1);
        assert!(controller.draft().is_none());
    }

    #[test]
    fn employee_saved_outside_form_is_rejected() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        controller.admin_logged_in(admin_session(Role::Admin)).unwrap();
        assert!(controller.employee_saved().is_err());
        assert_eq!(controller.list_refresh(), 0);
    }

    #[test]
    fn logout_in_one_tab_reaches_the_other_on_resync() {
        let storage = MemoryStorage::new();
        let mut tab_a = controller_over(&storage);
        tab_a.admin_logged_in(admin_session(Role::Admin)).unwrap();
        let mut tab_b = controller_over(&storage);
        assert_eq!(tab_b.persona(), Persona::Admin);

        tab_a.admin_logout().unwrap();
        assert_eq!(tab_b.persona(), Persona::Admin);
        tab_b.resync();
        assert_eq!(tab_b.persona(), Persona::Anonymous);
        assert_eq!(tab_b.screen(), Screen::Login);
    }

    #[test]
    fn resync_keeps_edit_target_when_view_unchanged() {
        let storage = MemoryStorage::new();
        let mut controller = controller_over(&storage);
        controller.admin_logged_in(admin_session(Role::Admin)).unwrap();
        let target = employee(8, true);
        controller.navigate(AdminView::Edit(target.clone())).unwrap();
        controller.resync();
        assert_eq!(controller.view(), &AdminView::Edit(target));
    }

    #[test]
    fn view_names_round_trip() {
        for name in [
            ViewName::List,
            ViewName::New,
            ViewName::Edit,
            ViewName::RegisterShift,
            ViewName::ShiftList,
            ViewName::EmployeeShiftHistory,
            ViewName::Reports,
        ] {
            assert_eq!(ViewName::parse(name.as_str()), Some(name));
        }
        assert_eq!(ViewName::parse("dashboard"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod host_tests {
        use super::*;
        use crate::test_support::ssr::with_runtime;

        #[test]
        fn context_exposes_screen_changes() {
            with_runtime(|| {
                let storage = MemoryStorage::new();
                let session = provide_session(SessionStore::memory(storage.clone()));
                let screen = session.screen();
                assert_eq!(screen.get_untracked(), Screen::Login);

                session.kiosk_logged_in(11).unwrap();
                assert_eq!(screen.get_untracked(), Screen::Kiosk { employee_id: 11 });
                assert!(session.admin_logout().is_err());

                session.kiosk_exit().unwrap();
                assert_eq!(screen.get_untracked(), Screen::Login);
                assert_eq!(use_session().persona(), Persona::Anonymous);
            });
        }
    }
}
