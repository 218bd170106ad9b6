use crate::{
    api::ShiftRecord,
    components::empty_state::EmptyState,
    pages::shifts::{repository::ShiftExport, utils::SortKey, view_model::ShiftsViewModel},
    utils::time::format_timestamp,
};
use leptos::*;

#[component]
fn SortHeader(vm: ShiftsViewModel, key: SortKey, label: &'static str) -> impl IntoView {
    view! {
        <th class="px-3 py-2 text-left">
            <button
                type="button"
                class="font-semibold hover:underline"
                on:click=move |_| vm.toggle_sort(key)
            >
                {label}
                {move || vm.sort.get().indicator(key)}
            </button>
        </th>
    }
}

#[component]
pub fn ShiftsTable(vm: ShiftsViewModel, #[prop(into)] rows: Signal<Vec<ShiftRecord>>) -> impl IntoView {
    let exporting = vm.export_action.pending();
    view! {
        <Show
            when=move || !rows.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="Sin registros" /> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead class="bg-surface-muted">
                        <tr>
                            <SortHeader vm=vm key=SortKey::Id label="ID Empleado" />
                            <SortHeader vm=vm key=SortKey::Nombre label="Nombre" />
                            <SortHeader vm=vm key=SortKey::Tipo label="Tipo" />
                            <SortHeader vm=vm key=SortKey::Fecha label="Fecha y hora" />
                            <th class="px-3 py-2 text-left">"PDF"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || rows.get()
                            key=|record| record.id
                            children=move |record: ShiftRecord| {
                                let owner = record.owner_id();
                                let name = record.owner_name();
                                view! {
                                    <tr>
                                        <td class="px-3 py-2">{owner.map(|id| id.to_string()).unwrap_or_else(|| "-".into())}</td>
                                        <td class="px-3 py-2">{if name.is_empty() { "-".to_string() } else { name }}</td>
                                        <td class="px-3 py-2">{record.kind_display()}</td>
                                        <td class="px-3 py-2">{format_timestamp(&record.fecha_hora)}</td>
                                        <td class="px-3 py-2">
                                            {owner.map(|id| view! {
                                                <button
                                                    type="button"
                                                    class="rounded-md border border-border px-2 py-1 text-xs font-semibold disabled:opacity-50"
                                                    disabled=move || exporting.get()
                                                    on:click=move |_| vm.export(ShiftExport::Employee(id))
                                                >
                                                    "⬇️ PDF"
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
