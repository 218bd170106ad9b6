use super::{
    components::form::{AdminLoginForm, KioskLoginForm, LoginTabs},
    utils::{credentials_ready, LoginTab},
    view_model::use_login_view_model,
};
use crate::api::AdminLoginRequest;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let admin_pending = vm.admin_action.pending();
    let kiosk_pending = vm.kiosk_action.pending();

    let on_admin_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let correo = vm.correo.get_untracked();
        let contrasena = vm.contrasena.get_untracked();
        if admin_pending.get_untracked() || !credentials_ready(&correo, &contrasena) {
            return;
        }
        vm.admin_error.set(None);
        vm.admin_action.dispatch(AdminLoginRequest {
            correo: correo.trim().to_string(),
            contrasena,
        });
    });

    let on_kiosk_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if kiosk_pending.get_untracked() {
            return;
        }
        vm.kiosk_error.set(None);
        vm.kiosk_action.dispatch(vm.employee_id.get_untracked());
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-6 rounded-2xl bg-surface-elevated shadow-xl border border-border p-8">
                <div class="text-center">
                    <h1 class="text-3xl font-extrabold text-fg">"ROOM_911"</h1>
                    <p class="mt-2 text-sm text-fg-muted">"Acceso del administrador o empleado"</p>
                </div>
                <LoginTabs tab=vm.tab />
                {move || match vm.tab.get() {
                    LoginTab::Admin => view! {
                        <AdminLoginForm
                            correo=vm.correo
                            contrasena=vm.contrasena
                            error=vm.admin_error
                            pending=admin_pending
                            on_submit=on_admin_submit
                        />
                    }
                    .into_view(),
                    LoginTab::Employee => view! {
                        <KioskLoginForm
                            employee_id=vm.employee_id
                            error=vm.kiosk_error
                            pending=kiosk_pending
                            on_submit=on_kiosk_submit
                        />
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_memory_session, ssr::render_to_string};

    #[test]
    fn login_panel_renders_admin_tab_first() {
        let html = render_to_string(move || {
            provide_memory_session();
            view! { <LoginPanel /> }
        });
        assert!(html.contains("ROOM_911"));
        assert!(html.contains("Administrador"));
        assert!(html.contains("Empleado"));
        assert!(html.contains("Contraseña"));
        assert!(html.contains("Ingresar"));
        assert!(!html.contains("ID de empleado"));
    }

    #[test]
    fn employee_tab_shows_kiosk_form() {
        let html = render_to_string(move || {
            provide_memory_session();
            view! { <crate::pages::login::components::form::KioskLoginForm
                employee_id=create_rw_signal("7".to_string())
                error=Signal::derive(|| Some("Empleado no encontrado.".to_string()))
                pending=Signal::derive(|| false)
                on_submit=Callback::new(|_| {})
            /> }
        });
        assert!(html.contains("ID de empleado"));
        assert!(html.contains("Continuar"));
        assert!(html.contains("Empleado no encontrado."));
    }
}
