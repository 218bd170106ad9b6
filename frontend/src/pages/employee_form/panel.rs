use super::{
    components::fields::{ActiveToggle, DraftField},
    utils::FormField,
    view_model::{use_employee_form_view_model, FormMode},
};
use crate::components::layout::{ErrorMessage, PageHeader};
use leptos::*;

#[component]
fn Requirements() -> impl IntoView {
    view! {
        <section class="rounded-xl border border-border bg-surface-elevated p-4 mb-4">
            <h3 class="font-extrabold text-fg mb-2">"Requisitos para registrar"</h3>
            <ul class="list-disc pl-5 text-sm text-fg-muted space-y-1">
                <li><b>"Nombre y Apellido:"</b>" obligatorios, solo letras (se permiten tildes) y espacios."</li>
                <li><b>"Identificación:"</b>" obligatoria, solo números (mínimo 6 dígitos)."</li>
                <li><b>"Cargo y Departamento:"</b>" obligatorios, solo letras y espacios."</li>
                <li><b>"Fechas:"</b>" formato AAAA-MM-DD. La salida no puede ser anterior a la de ingreso."</li>
            </ul>
        </section>
    }
}

/// New and edit forms share fields and validation; only the edit form shows the id.
#[component]
pub fn EmployeeFormPanel(
    mode: FormMode,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let employee_id = mode.employee_id();
    let vm = use_employee_form_view_model(mode, on_saved);
    let is_new = vm.is_new();
    let title = if is_new { "Registrar Empleado" } else { "Editar empleado" };
    let pending = vm.submit_action.pending();

    let cancel = move || {
        vm.cancel();
        on_cancel.call(());
    };

    view! {
        <div class="max-w-4xl mx-auto">
            <PageHeader title=title on_back=Callback::new(move |_| cancel()) back_disabled=pending />
            {is_new.then(|| view! { <Requirements /> })}
            <form
                class="rounded-xl border border-border bg-surface-elevated p-4 space-y-4"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div class="grid gap-3 md:grid-cols-2">
                    {employee_id.map(|id| view! {
                        <div class="flex flex-col gap-1">
                            <label class="text-sm font-semibold text-fg-muted">"ID (solo lectura)"</label>
                            <input class="w-full rounded-md border border-border bg-surface-muted px-3 py-2 text-sm text-fg-muted" value=id readonly=true />
                        </div>
                    })}
                    <DraftField vm=vm field=FormField::Nombre label="Nombre *" placeholder="Ej: María" max_length=15 />
                    <DraftField vm=vm field=FormField::Apellido label="Apellido *" placeholder="Ej: Pérez" max_length=15 />
                    <DraftField vm=vm field=FormField::Identificacion label="Identificación *" placeholder="Solo números" max_length=10 numeric=true />
                    <DraftField vm=vm field=FormField::Cargo label="Cargo *" placeholder="Ej: Analista" max_length=40 />
                    <DraftField vm=vm field=FormField::Departamento label="Departamento *" placeholder="Ej: Tecnología" max_length=20 />
                    <DraftField vm=vm field=FormField::FechaIngreso label="Fecha de contratación" input_type="date" />
                    <DraftField vm=vm field=FormField::FechaSalida label="Finalización de contratación" input_type="date" />
                    <ActiveToggle vm=vm />
                </div>
                {move || vm.submit_error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| cancel()
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="submit"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || pending.get() || !vm.errors.with(|errors| errors.is_empty())
                    >
                        {move || if pending.get() {
                            "Guardando…"
                        } else if is_new {
                            "Guardar"
                        } else {
                            "Guardar cambios"
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
