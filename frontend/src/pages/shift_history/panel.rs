use super::view_model::{use_shift_history_view_model, LOAD_ERROR_MESSAGE};
use crate::{
    api::ShiftRecord,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, FeedbackMessage, LoadingSpinner, PageHeader},
    },
    utils::time::format_timestamp,
};
use leptos::*;

#[component]
fn HistoryTable(records: Vec<ShiftRecord>) -> impl IntoView {
    if records.is_empty() {
        return view! { <EmptyState title="Sin registros aún" /> }.into_view();
    }
    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-3 py-2 text-left">"Tipo de Registro"</th>
                    <th class="px-3 py-2 text-left">"Fecha y Hora"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {records
                    .into_iter()
                    .map(|record| view! {
                        <tr>
                            <td class="px-3 py-2">{record.kind_display()}</td>
                            <td class="px-3 py-2">{format_timestamp(&record.fecha_hora)}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

#[component]
pub fn ShiftHistoryPanel(employee_id: i64, on_back: Callback<()>) -> impl IntoView {
    let vm = use_shift_history_view_model(employee_id);
    let exporting = vm.export_action.pending();

    view! {
        <div>
            <Transition fallback=|| view! { <LoadingSpinner label="Cargando historial..." /> }>
                {move || vm.history.get().map(|result| match result {
                    Ok(history) => view! {
                        <div>
                            <PageHeader title=history.title() on_back=on_back>
                                <button
                                    type="button"
                                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                    disabled=move || exporting.get()
                                    on:click=move |_| vm.export_action.dispatch(())
                                >
                                    {move || if exporting.get() { "Generando…" } else { "Descargar Reporte PDF" }}
                                </button>
                            </PageHeader>
                            <FeedbackMessage feedback=vm.feedback />
                            <HistoryTable records=history.records />
                        </div>
                    }
                    .into_view(),
                    Err(err) => {
                        log::error!("history for {} failed: {err}", vm.employee_id);
                        view! {
                            <div>
                                <PageHeader title="Historial de Turnos" on_back=on_back />
                                <ErrorMessage message=LOAD_ERROR_MESSAGE />
                            </div>
                        }
                        .into_view()
                    }
                })}
            </Transition>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{api::ShiftKind, test_support::{helpers::shift_record, ssr::render_to_string}};

    #[test]
    fn history_table_lists_records() {
        let html = render_to_string(move || {
            view! {
                <HistoryTable records=vec![
                    shift_record(1, 5, ShiftKind::Entrada, "2024-03-01T08:00:00"),
                ] />
            }
        });
        assert!(html.contains("ENTRADA"));
        assert!(html.contains("01&#x2F;03&#x2F;2024 08:00:00"));
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let html = render_to_string(move || view! { <HistoryTable records=Vec::new() /> });
        assert!(html.contains("Sin registros aún"));
    }
}
