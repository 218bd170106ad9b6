use super::{
    components::{table::ShiftsTable, toolbar::ShiftsToolbar},
    repository::ShiftExport,
    utils::PAGE_SIZE,
    view_model::use_shifts_view_model,
};
use crate::{
    components::{
        layout::{ErrorMessage, FeedbackMessage, LoadingSpinner, PageHeader},
        pagination::Pager,
    },
    utils::pagination::page_slice,
};
use leptos::*;

#[component]
pub fn ShiftsPanel(on_back: Callback<()>) -> impl IntoView {
    let vm = use_shifts_view_model();
    let total = Signal::derive(move || vm.visible.with(Vec::len));
    let rows = Signal::derive(move || vm.visible.with(|list| page_slice(list, vm.page.get(), PAGE_SIZE)));
    let exporting = vm.export_action.pending();

    view! {
        <div>
            <PageHeader title="Registros de Turno" on_back=on_back>
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || exporting.get() || vm.loading.get()
                    on:click=move |_| vm.export(ShiftExport::All)
                >
                    "⬇️ Descargar todos (PDF)"
                </button>
            </PageHeader>
            <FeedbackMessage feedback=vm.feedback />
            {move || {
                if let Some(message) = vm.load_error.get() {
                    view! {
                        <div>
                            <ErrorMessage message=message />
                            <button
                                type="button"
                                class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                                on:click=move |_| vm.retry()
                            >
                                "Reintentar"
                            </button>
                        </div>
                    }
                    .into_view()
                } else if vm.loading.get() && vm.records.with(Vec::is_empty) {
                    view! { <LoadingSpinner label="Cargando registros…" /> }.into_view()
                } else {
                    view! {
                        <div>
                            <ShiftsToolbar vm=vm />
                            <ShiftsTable vm=vm rows=rows />
                            <Pager page=vm.page total=total page_size=PAGE_SIZE show_range=true />
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
