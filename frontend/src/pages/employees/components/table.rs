use crate::{api::Employee, components::empty_state::EmptyState, utils::time::format_date};
use leptos::*;

const ROW_BUTTON: &str = "rounded-md border border-border px-2 py-1 text-xs font-semibold hover:bg-action-ghost-bg-hover disabled:opacity-50";

#[component]
pub fn EmployeeTable(
    #[prop(into)] rows: Signal<Vec<Employee>>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
    on_history: Callback<i64>,
    on_toggle: Callback<(Employee, bool)>,
    #[prop(into)] toggling: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="Sin resultados" /> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-3 py-2 text-left">"ID"</th>
                            <th class="px-3 py-2 text-left">"Identificación"</th>
                            <th class="px-3 py-2 text-left">"Nombres"</th>
                            <th class="px-3 py-2 text-left">"Apellidos"</th>
                            <th class="px-3 py-2 text-left">"Cargo"</th>
                            <th class="px-3 py-2 text-left">"Departamento"</th>
                            <th class="px-3 py-2 text-left">"Ingreso"</th>
                            <th class="px-3 py-2 text-left">"Estado"</th>
                            <th class="px-3 py-2 text-left">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || rows.get()
                            key=|employee| (employee.id, employee.activo)
                            children=move |employee: Employee| {
                                let for_edit = employee.clone();
                                let for_delete = employee.clone();
                                let for_toggle = employee.clone();
                                let id = employee.id;
                                let activo = employee.activo;
                                view! {
                                    <tr>
                                        <td class="px-3 py-2">{employee.id}</td>
                                        <td class="px-3 py-2">{employee.identificacion.clone()}</td>
                                        <td class="px-3 py-2">{employee.nombre.clone()}</td>
                                        <td class="px-3 py-2">{employee.apellido.clone()}</td>
                                        <td class="px-3 py-2">{employee.cargo.clone()}</td>
                                        <td class="px-3 py-2">{employee.departamento.clone()}</td>
                                        <td class="px-3 py-2">{format_date(employee.fecha_ingreso)}</td>
                                        <td class="px-3 py-2">
                                            {if activo { "Activo" } else { "Inactivo" }}
                                        </td>
                                        <td class="px-3 py-2 flex flex-wrap gap-1">
                                            <button type="button" class=ROW_BUTTON on:click=move |_| on_edit.call(for_edit.clone())>
                                                "Editar"
                                            </button>
                                            <button type="button" class=ROW_BUTTON on:click=move |_| on_history.call(id)>
                                                "Historial"
                                            </button>
                                            <button
                                                type="button"
                                                class=ROW_BUTTON
                                                disabled=move || toggling.get()
                                                on:click=move |_| on_toggle.call((for_toggle.clone(), !activo))
                                            >
                                                {if activo { "Desactivar" } else { "Activar" }}
                                            </button>
                                            <button
                                                type="button"
                                                class=format!("{ROW_BUTTON} text-action-danger-bg")
                                                on:click=move |_| on_delete.call(for_delete.clone())
                                            >
                                                "Eliminar"
                                            </button>
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
