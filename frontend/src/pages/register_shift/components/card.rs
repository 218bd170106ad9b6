use crate::{
    api::{Employee, ShiftKind},
    pages::register_shift::view_model::RegisterShiftViewModel,
};
use leptos::*;

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "—".to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn EmployeeInfo(employee: Employee) -> impl IntoView {
    let rows = [
        ("Empleado", employee.full_name()),
        ("ID Empleado", employee.id.to_string()),
        ("Cédula", or_dash(&employee.identificacion)),
        ("Departamento", or_dash(&employee.departamento)),
        ("Cargo", or_dash(&employee.cargo)),
    ];
    view! {
        <article class="rounded-xl border border-border bg-surface-elevated p-4">
            <h3 class="font-bold text-fg mb-3">"Mi Información"</h3>
            <dl class="grid grid-cols-2 gap-2 text-sm">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt class="text-fg-muted">{label}</dt>
                        <dd class="font-semibold text-fg">{value}</dd>
                    })
                    .collect_view()}
            </dl>
        </article>
    }
}

#[component]
pub fn ShiftActions(vm: RegisterShiftViewModel, employee_id: i64) -> impl IntoView {
    let saving = vm.register_action.pending();
    let toggle_class = move |kind: ShiftKind| {
        if vm.mode.get() == kind {
            "flex-1 rounded-md px-3 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
        } else {
            "flex-1 rounded-md px-3 py-2 text-sm font-semibold bg-surface-muted text-fg"
        }
    };

    view! {
        <article class="rounded-xl border border-border bg-surface-elevated p-4 space-y-3">
            <div class="flex items-center justify-between">
                <h3 class="font-bold text-fg">"Estado de Acceso"</h3>
                <span class="rounded-full px-3 py-1 text-xs font-bold bg-status-success-bg text-status-success-text">
                    "ACCESO AUTORIZADO"
                </span>
            </div>
            <p class="text-sm text-fg-muted">"Tienes autorización para acceder al ROOM_911"</p>
            <div class="flex gap-2" role="group">
                <button
                    type="button"
                    class=move || toggle_class(ShiftKind::Entrada)
                    on:click=move |_| vm.mode.set(ShiftKind::Entrada)
                >
                    "Entrada"
                </button>
                <button
                    type="button"
                    class=move || toggle_class(ShiftKind::Salida)
                    on:click=move |_| vm.mode.set(ShiftKind::Salida)
                >
                    "Salida"
                </button>
            </div>
            <button
                type="button"
                class="w-full rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                disabled=move || saving.get()
                on:click=move |_| vm.register(employee_id)
            >
                {move || if saving.get() {
                    "Guardando…".to_string()
                } else {
                    format!("Registrar {}", vm.mode.get().label())
                }}
            </button>
        </article>
    }
}
