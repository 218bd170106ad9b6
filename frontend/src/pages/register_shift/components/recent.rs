use crate::{
    api::{ShiftKind, ShiftRecord},
    components::{empty_state::EmptyState, pagination::Pager},
    pages::register_shift::{utils::RECENT_PAGE_SIZE, view_model::RegisterShiftViewModel},
    utils::{pagination::page_slice, time::format_timestamp},
};
use leptos::*;

#[component]
pub fn RecentAccesses(
    vm: RegisterShiftViewModel,
    employee_id: i64,
    records: Vec<ShiftRecord>,
) -> impl IntoView {
    let total = records.len();
    let records = store_value(records);
    let rows = move || records.with_value(|list| page_slice(list, vm.page.get(), RECENT_PAGE_SIZE));
    let exporting = vm.export_action.pending();

    view! {
        <section class="rounded-xl border border-border bg-surface-elevated p-4 mt-4">
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-bold text-fg">"Accesos Recientes"</h3>
                <button
                    type="button"
                    class="rounded-md px-3 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || exporting.get()
                    on:click=move |_| vm.export_action.dispatch(employee_id)
                >
                    "📄 Descargar historial (PDF)"
                </button>
            </div>
            {if total == 0 {
                view! { <EmptyState title="Sin registros aún" /> }.into_view()
            } else {
                view! {
                    <ul class="divide-y divide-border">
                        {move || rows()
                            .into_iter()
                            .map(|record| {
                                let chip = match record.tipo {
                                    Some(ShiftKind::Entrada) => "rounded-full px-2 py-1 text-xs font-bold bg-status-success-bg text-status-success-text",
                                    Some(ShiftKind::Salida) => "rounded-full px-2 py-1 text-xs font-bold bg-status-error-bg text-status-error-text",
                                    None => "rounded-full px-2 py-1 text-xs font-bold bg-surface-muted text-fg-muted",
                                };
                                view! {
                                    <li class="flex items-center justify-between py-2 text-sm">
                                        <span>{format_timestamp(&record.fecha_hora)}</span>
                                        <span class=chip>{record.kind_display()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <Pager page=vm.page total=Signal::derive(move || total) page_size=RECENT_PAGE_SIZE />
                }
                .into_view()
            }}
        </section>
    }
}
