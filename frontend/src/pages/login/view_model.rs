use super::{repository::LoginRepository, utils::LoginTab};
use crate::{
    api::{AdminLoginRequest, ApiClient},
    state::session::{use_session, SessionContext},
};
use leptos::*;
use std::rc::Rc;

pub async fn submit_admin_login(
    repository: &LoginRepository,
    session: SessionContext,
    request: AdminLoginRequest,
) -> Result<(), String> {
    let admin = repository.login_admin(request).await?;
    session.admin_logged_in(admin).map_err(|err| err.to_string())
}

/// Only a verified, active employee reaches the session; every failure leaves it untouched.
pub async fn submit_kiosk_login(
    repository: &LoginRepository,
    session: SessionContext,
    raw_id: String,
) -> Result<(), String> {
    let employee_id = repository.verify_kiosk_employee(&raw_id).await?;
    session
        .kiosk_logged_in(employee_id)
        .map_err(|err| err.to_string())
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub tab: RwSignal<LoginTab>,
    pub correo: RwSignal<String>,
    pub contrasena: RwSignal<String>,
    pub admin_error: RwSignal<Option<String>>,
    pub admin_action: Action<AdminLoginRequest, Result<(), String>>,
    pub employee_id: RwSignal<String>,
    pub kiosk_error: RwSignal<Option<String>>,
    pub kiosk_action: Action<String, Result<(), String>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = LoginRepository::new_with_client(Rc::new(api));

    let tab = create_rw_signal(LoginTab::Admin);
    let correo = create_rw_signal(String::new());
    let contrasena = create_rw_signal(String::new());
    let admin_error = create_rw_signal(None::<String>);
    let employee_id = create_rw_signal(String::new());
    let kiosk_error = create_rw_signal(None::<String>);

    let repo_for_admin = repository.clone();
    let admin_action = create_action(move |request: &AdminLoginRequest| {
        let repo = repo_for_admin.clone();
        let request = request.clone();
        async move { submit_admin_login(&repo, session, request).await }
    });

    let repo_for_kiosk = repository;
    let kiosk_action = create_action(move |raw_id: &String| {
        let repo = repo_for_kiosk.clone();
        let raw_id = raw_id.clone();
        async move { submit_kiosk_login(&repo, session, raw_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = admin_action.value().get() {
            admin_error.set(result.err());
        }
    });
    create_effect(move |_| {
        if let Some(result) = kiosk_action.value().get() {
            kiosk_error.set(result.err());
        }
    });

    LoginViewModel {
        tab,
        correo,
        contrasena,
        admin_error,
        admin_action,
        employee_id,
        kiosk_error,
        kiosk_action,
    }
}
