use crate::pages::shifts::view_model::ShiftsViewModel;
use leptos::*;

const INPUT: &str = "rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm";

#[component]
pub fn ShiftsToolbar(vm: ShiftsViewModel) -> impl IntoView {
    let exporting = vm.export_action.pending();
    view! {
        <div class="flex flex-wrap items-end gap-3 mb-4">
            <input
                class=format!("{INPUT} flex-1 min-w-[14rem]")
                placeholder="Buscar por ID, nombre o tipo…"
                prop:value=move || vm.search.get()
                on:input=move |ev| vm.set_search(event_target_value(&ev))
            />
            <label class="flex flex-col text-xs font-semibold text-fg-muted">
                "Desde:"
                <input
                    type="datetime-local"
                    class=INPUT
                    prop:value=move || vm.range_from.get()
                    on:input=move |ev| vm.range_from.set(event_target_value(&ev))
                />
            </label>
            <label class="flex flex-col text-xs font-semibold text-fg-muted">
                "Hasta:"
                <input
                    type="datetime-local"
                    class=INPUT
                    prop:value=move || vm.range_to.get()
                    on:input=move |ev| vm.range_to.set(event_target_value(&ev))
                />
            </label>
            <button
                type="button"
                class="rounded-md px-3 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                disabled=move || exporting.get()
                on:click=move |_| vm.export_range()
            >
                "⬇️ PDF por rango"
            </button>
        </div>
    }
}
