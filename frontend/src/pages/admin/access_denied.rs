use crate::{api::AdminSession, components::layout::Layout, state::session::use_session};
use leptos::*;

/// Shown when someone authenticated through the admin login without the admin role.
#[component]
pub fn AccessDenied(session: AdminSession) -> impl IntoView {
    let context = use_session();
    let logout = Callback::new(move |_| {
        let _ = context.admin_logout();
    });

    view! {
        <Layout>
            <div class="max-w-lg mx-auto mt-16 rounded-xl border border-border bg-surface-elevated p-8 text-center space-y-4">
                <h2 class="text-xl font-bold text-fg">"No tienes permiso para ver esta sección"</h2>
                <p class="text-sm text-fg-muted">
                    {format!(
                        "Iniciaste sesión como {} con rol {}",
                        session.identity_email,
                        session.role.as_str()
                    )}
                </p>
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text"
                    on:click=move |_| logout.call(())
                >
                    "Cerrar sesión"
                </button>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::Role,
        test_support::{
            helpers::{admin_session, provide_memory_session},
            ssr::render_to_string,
        },
    };

    #[test]
    fn names_identity_and_role() {
        let html = render_to_string(move || {
            provide_memory_session();
            view! { <AccessDenied session=admin_session(Role::Other("SUPERVISOR".into())) /> }
        });
        assert!(html.contains("No tienes permiso para ver esta sección"));
        assert!(html.contains("Iniciaste sesión como admin@room911.co con rol SUPERVISOR"));
        assert!(html.contains("Cerrar sesión"));
    }
}
