use crate::{
    components::layout::Layout,
    pages::{
        employee_form::{EmployeeFormPanel, FormMode},
        employees::EmployeesPanel,
        register_shift::RegisterShiftPanel,
        reports::ReportsPanel,
        shift_history::ShiftHistoryPanel,
        shifts::ShiftsPanel,
    },
    state::session::{use_session, AdminView},
};
use leptos::*;

/// Admin shell: renders the sub-view the session controller currently holds.
#[component]
pub fn AdminPanel(current: AdminView) -> impl IntoView {
    let session = use_session();
    let identity = session
        .admin_session()
        .map(|admin| admin.identity_email)
        .unwrap_or_default();

    let on_navigate = Callback::new(move |target: AdminView| {
        let _ = session.navigate(target);
    });
    let on_back = Callback::new(move |_| {
        let _ = session.navigate(AdminView::List);
    });
    let on_logout = Callback::new(move |_| {
        let _ = session.admin_logout();
    });
    let on_saved = Callback::new(move |_: String| {
        let _ = session.employee_saved();
    });

    let content = match current {
        AdminView::List => view! {
            <EmployeesPanel
                refresh=session.list_refresh()
                on_navigate=on_navigate
                on_logout=on_logout
                on_imported=Callback::new(move |_| session.request_list_refresh())
            />
        }
        .into_view(),
        AdminView::New => view! {
            <EmployeeFormPanel mode=FormMode::New on_saved=on_saved on_cancel=on_back />
        }
        .into_view(),
        AdminView::Edit(employee) => view! {
            <EmployeeFormPanel mode=FormMode::Edit(employee) on_saved=on_saved on_cancel=on_back />
        }
        .into_view(),
        AdminView::RegisterShift { employee_id } => view! {
            <RegisterShiftPanel employee_id=employee_id on_exit=on_back />
        }
        .into_view(),
        AdminView::ShiftList => view! { <ShiftsPanel on_back=on_back /> }.into_view(),
        AdminView::EmployeeShiftHistory(employee_id) => view! {
            <ShiftHistoryPanel employee_id=employee_id on_back=on_back />
        }
        .into_view(),
        AdminView::Reports => view! { <ReportsPanel on_back=on_back /> }.into_view(),
    };

    view! {
        <Layout identity=identity on_exit=on_logout>
            {content}
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::Role,
        test_support::{
            helpers::{admin_session, employee, provide_memory_session},
            ssr::render_to_string,
        },
    };

    fn render(current: AdminView) -> String {
        render_to_string(move || {
            let (session, _) = provide_memory_session();
            session
                .admin_logged_in(admin_session(Role::Admin))
                .unwrap();
            view! { <AdminPanel current=current /> }
        })
    }

    #[test]
    fn list_view_shows_identity_and_menu() {
        let html = render(AdminView::List);
        assert!(html.contains("admin@room911.co"));
        assert!(html.contains("Nuevo Empleado"));
    }

    #[test]
    fn each_view_renders_its_panel() {
        assert!(render(AdminView::New).contains("Registrar Empleado"));
        assert!(render(AdminView::Edit(employee(3, true))).contains("Editar empleado"));
        assert!(render(AdminView::Reports).contains("Generar Reportes"));
        assert!(render(AdminView::ShiftList).contains("Registros de Turno"));
        assert!(render(AdminView::RegisterShift { employee_id: None }).contains("ID del empleado"));
    }
}
