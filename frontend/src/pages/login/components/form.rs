use super::messages::InlineErrorMessage;
use crate::pages::login::utils::{credentials_ready, LoginTab};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none rounded-md relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg focus:outline-none focus:ring-action-primary-focus sm:text-sm";
const SUBMIT_CLASS: &str = "w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50";

#[component]
pub fn LoginTabs(tab: RwSignal<LoginTab>) -> impl IntoView {
    let tab_button = move |target: LoginTab, label: &'static str| {
        view! {
            <button
                type="button"
                role="tab"
                class="flex-1 py-2 text-sm font-semibold rounded-md"
                class:bg-action-primary-bg=move || tab.get() == target
                class:text-action-primary-text=move || tab.get() == target
                aria-selected=move || (tab.get() == target).to_string()
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };
    view! {
        <div class="flex gap-2 p-1 rounded-lg bg-surface-muted" role="tablist">
            {tab_button(LoginTab::Admin, "Administrador")}
            {tab_button(LoginTab::Employee, "Empleado")}
        </div>
    }
}

#[component]
pub fn AdminLoginForm(
    correo: RwSignal<String>,
    contrasena: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let ready = move || credentials_ready(&correo.get(), &contrasena.get());
    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <input
                id="correo"
                type="email"
                required
                autocomplete="username"
                placeholder="Correo"
                class=INPUT_CLASS
                prop:value=correo
                on:input=move |ev| correo.set(event_target_value(&ev))
            />
            <input
                id="contrasena"
                type="password"
                required
                autocomplete="current-password"
                placeholder="Contraseña"
                class=INPUT_CLASS
                prop:value=contrasena
                on:input=move |ev| contrasena.set(event_target_value(&ev))
            />
            <button type="submit" class=SUBMIT_CLASS disabled=move || !ready() || pending.get()>
                {move || if pending.get() { "Ingresando…" } else { "Ingresar" }}
            </button>
            <InlineErrorMessage error=error />
        </form>
    }
}

#[component]
pub fn KioskLoginForm(
    employee_id: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <input
                id="kiosk-employee-id"
                type="number"
                inputmode="numeric"
                placeholder="ID de empleado"
                class=INPUT_CLASS
                prop:value=employee_id
                on:input=move |ev| employee_id.set(event_target_value(&ev))
            />
            <button type="submit" class=SUBMIT_CLASS disabled=move || pending.get()>
                {move || if pending.get() { "Verificando…" } else { "Continuar" }}
            </button>
            <InlineErrorMessage error=error />
        </form>
    }
}
