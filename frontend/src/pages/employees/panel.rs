use super::{
    components::{
        import_modal::ImportEmployeesModal,
        sidebar::{EmployeesSidebar, SidebarAction},
        table::EmployeeTable,
        toast::ToastMessage,
    },
    utils::PAGE_SIZE,
    view_model::{use_employees_view_model, CsvUpload},
};
use crate::{
    api::Employee,
    components::{
        confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageHeader},
        pagination::Pager,
    },
    state::session::AdminView,
    utils::pagination::page_slice,
};
use leptos::*;

/// Employee administration home: searchable table, row actions, CSV import and the menu
/// into every other admin view.
#[component]
pub fn EmployeesPanel(
    #[prop(into)] refresh: Signal<u32>,
    on_navigate: Callback<AdminView>,
    on_logout: Callback<()>,
    on_imported: Callback<()>,
) -> impl IntoView {
    let vm = use_employees_view_model(refresh, on_imported);

    let on_sidebar = Callback::new(move |action: SidebarAction| match action {
        SidebarAction::NewEmployee => on_navigate.call(AdminView::New),
        SidebarAction::Import => {
            vm.import_message.set(None);
            vm.show_import.set(true);
        }
        SidebarAction::ShiftList => on_navigate.call(AdminView::ShiftList),
        SidebarAction::RegisterShift => {
            on_navigate.call(AdminView::RegisterShift { employee_id: None })
        }
        SidebarAction::Reports => on_navigate.call(AdminView::Reports),
        SidebarAction::Logout => on_logout.call(()),
    });

    let total = Signal::derive(move || vm.filtered.with(Vec::len));
    let rows = Signal::derive(move || {
        vm.filtered
            .with(|list| page_slice(list, vm.page.get(), PAGE_SIZE))
    });

    let delete_busy = vm.delete_action.pending();
    let confirm_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|employee| {
                format!(
                    "¿Seguro que deseas eliminar a {} (ID {})? Esta acción no se puede deshacer.",
                    employee.full_name(),
                    employee.id
                )
            })
            .unwrap_or_default()
    });
    let on_confirm_delete = Callback::new(move |_| {
        if let Some(employee) = vm.pending_delete.get_untracked() {
            vm.delete_action.dispatch(employee.id);
        }
    });
    let on_cancel_delete = Callback::new(move |_| vm.pending_delete.set(None));

    let on_upload = Callback::new(move |upload: CsvUpload| vm.import_action.dispatch(upload));
    let on_close_import = Callback::new(move |_| {
        vm.show_import.set(false);
        vm.import_message.set(None);
    });

    view! {
        <div class="grid gap-6 lg:grid-cols-[14rem_1fr]">
            <EmployeesSidebar on_action=on_sidebar />
            <section class="space-y-4">
                <PageHeader title="Empleados" />
                <input
                    type="search"
                    class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                    placeholder="Buscar por ID, identificación, nombre, cargo…"
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.set_search(event_target_value(&ev))
                />
                <InlineErrorMessage error=vm.load_error />
                <Show
                    when=move || !(vm.loading.get() && vm.employees.with(Vec::is_empty))
                    fallback=|| view! { <LoadingSpinner label="Cargando empleados…" /> }
                >
                    <EmployeeTable
                        rows=rows
                        on_edit=Callback::new(move |employee: Employee| {
                            on_navigate.call(AdminView::Edit(employee))
                        })
                        on_delete=Callback::new(move |employee: Employee| {
                            vm.pending_delete.set(Some(employee))
                        })
                        on_history=Callback::new(move |id: i64| {
                            on_navigate.call(AdminView::EmployeeShiftHistory(id))
                        })
                        on_toggle=Callback::new(move |(employee, activo): (Employee, bool)| {
                            vm.toggle_action.dispatch((employee, activo))
                        })
                        toggling=vm.toggle_action.pending()
                    />
                    <Pager page=vm.page total=total page_size=PAGE_SIZE show_range=true />
                </Show>
            </section>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Eliminar empleado"
                message=confirm_message
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
                confirm_label="Eliminar"
                busy_label="Eliminando…"
                busy=delete_busy
                destructive=true
            />
            <Show when=move || vm.show_import.get()>
                <ImportEmployeesModal
                    pending=vm.import_action.pending()
                    message=vm.import_message
                    on_upload=on_upload
                    on_close=on_close_import
                />
            </Show>
            <ToastMessage toast=vm.toast />
        </div>
    }
}
