use crate::pages::employee_form::{
    utils::{field_value, FormField},
    view_model::EmployeeFormViewModel,
};
use leptos::*;

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "w-full rounded-md border border-status-error-border bg-form-control-bg px-3 py-2 text-sm"
    } else {
        "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
    }
}

/// Labelled input bound to one draft field; shows the field's error once touched.
#[component]
pub fn DraftField(
    vm: EmployeeFormViewModel,
    field: FormField,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] max_length: Option<u32>,
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    let error = move || vm.visible_error(field);
    view! {
        <div class="flex flex-col gap-1">
            <label class="text-sm font-semibold text-fg-muted">{label}</label>
            <input
                class=move || input_class(error().is_some())
                type=input_type
                placeholder=placeholder
                maxlength=max_length
                inputmode=numeric.then_some("numeric")
                autocomplete="off"
                prop:value=move || vm.draft.with(|draft| field_value(draft, field).to_string())
                on:input=move |ev| vm.set_field(field, &event_target_value(&ev))
                on:blur=move |_| vm.touch(field)
            />
            {move || error().map(|message| view! {
                <small class="rounded-md border border-status-error-border bg-status-error-bg px-2 py-1 text-xs text-status-error-text">
                    {message}
                </small>
            })}
        </div>
    }
}

#[component]
pub fn ActiveToggle(vm: EmployeeFormViewModel) -> impl IntoView {
    view! {
        <label class="inline-flex items-center gap-2 select-none">
            <input
                type="checkbox"
                prop:checked=move || vm.draft.with(|draft| draft.activo)
                on:change=move |ev| vm.set_active(event_target_checked(&ev))
            />
            <span class="text-sm text-fg">
                {move || if vm.draft.with(|draft| draft.activo) {
                    "Activo (acceso habilitado)"
                } else {
                    "Inactivo (acceso deshabilitado)"
                }}
            </span>
        </label>
    }
}
