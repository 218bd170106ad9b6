use leptos::*;
use leptos_meta::*;
use std::rc::Rc;

use crate::{
    api::ApiClient,
    components::layout::Layout,
    pages::{
        admin::{AccessDeniedPage, AdminPage},
        login::LoginPage,
        register_shift::RegisterShiftPanel,
    },
    state::{
        session::{provide_session, use_session, Screen},
        session_store::SessionStore,
    },
    utils::download::{BrowserDownloadSink, DownloadSink},
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    view! { <App /> }
}

/// Provides the shared services and renders whatever screen the session controller selects.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context::<Rc<dyn DownloadSink>>(Rc::new(BrowserDownloadSink));
    let session = provide_session(SessionStore::browser());

    view! {
        <Title text="ROOM_911" />
        <ScreenSwitch screen=session.screen() />
    }
}

#[component]
fn ScreenSwitch(screen: Memo<Screen>) -> impl IntoView {
    move || match screen.get() {
        Screen::Login => view! { <Layout><LoginPage /></Layout> }.into_view(),
        Screen::Kiosk { employee_id } => view! { <KioskScreen employee_id=employee_id /> }.into_view(),
        Screen::AccessDenied(session) => view! { <AccessDeniedPage session=session /> }.into_view(),
        Screen::Admin(current) => view! { <AdminPage current=current /> }.into_view(),
    }
}

#[component]
fn KioskScreen(employee_id: i64) -> impl IntoView {
    let session = use_session();
    let exit = Callback::new(move |_| {
        let _ = session.kiosk_exit();
    });
    view! {
        <Layout identity=format!("Empleado #{employee_id}") on_exit=exit exit_label="Cerrar Sesión">
            <RegisterShiftPanel employee_id=Some(employee_id) kiosk=true on_exit=exit />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::Role,
        state::session::AdminView,
        test_support::{
            helpers::{admin_session, provide_memory_session},
            ssr::render_to_string,
        },
    };

    fn render_screen(setup: impl FnOnce(crate::state::session::SessionContext) + 'static) -> String {
        render_to_string(move || {
            let (session, _) = provide_memory_session();
            setup(session);
            view! { <ScreenSwitch screen=session.screen() /> }
        })
    }

    #[test]
    fn anonymous_sees_login() {
        let html = render_screen(|_| {});
        assert!(html.contains("ROOM_911"));
        assert!(html.contains("Administrador"));
    }

    #[test]
    fn kiosk_session_shows_register_screen_with_exit() {
        let html = render_screen(|session| {
            session.kiosk_logged_in(4).unwrap();
        });
        assert!(html.contains("Empleado #4"));
        assert!(html.contains("Registrar Turno"));
        assert!(html.contains("Cerrar Sesión"));
        assert!(!html.contains("Nuevo Empleado"));
    }

    #[test]
    fn non_admin_role_is_denied() {
        let html = render_screen(|session| {
            session
                .admin_logged_in(admin_session(Role::Other("USER".into())))
                .unwrap();
        });
        assert!(html.contains("No tienes permiso para ver esta sección"));
    }

    #[test]
    fn admin_lands_on_requested_view() {
        let html = render_screen(|session| {
            session.admin_logged_in(admin_session(Role::Admin)).unwrap();
            session.navigate(AdminView::Reports).unwrap();
        });
        assert!(html.contains("Generar Reportes"));
    }
}
