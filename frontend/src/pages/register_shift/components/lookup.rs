use crate::pages::register_shift::view_model::RegisterShiftViewModel;
use leptos::*;

#[component]
pub fn LookupForm(vm: RegisterShiftViewModel, on_back: Callback<()>) -> impl IntoView {
    view! {
        <form
            class="max-w-sm mx-auto rounded-xl border border-border bg-surface-elevated p-6 space-y-3"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_lookup();
            }
        >
            <label for="employee-id" class="block text-sm font-semibold text-fg-muted">"ID del empleado"</label>
            <input
                id="employee-id"
                type="number"
                inputmode="numeric"
                placeholder="Ej: 27"
                class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                prop:value=move || vm.id_input.get()
                on:input=move |ev| vm.id_input.set(event_target_value(&ev))
            />
            {move || vm.lookup_error.get().map(|message| view! {
                <p class="text-sm text-status-error-text">{message}</p>
            })}
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                    on:click=move |_| on_back.call(())
                >
                    "Volver"
                </button>
                <button
                    type="submit"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || vm.id_input.with(|raw| raw.trim().is_empty())
                >
                    "Continuar"
                </button>
            </div>
        </form>
    }
}
