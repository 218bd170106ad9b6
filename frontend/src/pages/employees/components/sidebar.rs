use leptos::*;

const SIDE_BUTTON: &str = "w-full text-left rounded-lg border border-border bg-surface-elevated px-3 py-2 my-1 text-sm font-medium hover:bg-action-ghost-bg-hover";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    NewEmployee,
    Import,
    ShiftList,
    RegisterShift,
    Reports,
    Logout,
}

impl SidebarAction {
    pub const ALL: [SidebarAction; 6] = [
        SidebarAction::NewEmployee,
        SidebarAction::Import,
        SidebarAction::ShiftList,
        SidebarAction::RegisterShift,
        SidebarAction::Reports,
        SidebarAction::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SidebarAction::NewEmployee => "Nuevo Empleado",
            SidebarAction::Import => "Importar",
            SidebarAction::ShiftList => "Ver Registros",
            SidebarAction::RegisterShift => "Registrar Turno",
            SidebarAction::Reports => "Reportes",
            SidebarAction::Logout => "Salir",
        }
    }
}

#[component]
pub fn EmployeesSidebar(on_action: Callback<SidebarAction>) -> impl IntoView {
    view! {
        <aside class="rounded-xl border border-border bg-surface-muted p-4 h-fit">
            <h2 class="font-extrabold text-fg mb-2">"Menú"</h2>
            {SidebarAction::ALL
                .into_iter()
                .map(|action| view! {
                    <button type="button" class=SIDE_BUTTON on:click=move |_| on_action.call(action)>
                        {action.label()}
                    </button>
                })
                .collect_view()}
        </aside>
    }
}
