use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal confirmation for destructive actions. While `busy` is set every dismissal path is
/// ignored and the confirm button shows `busy_label`.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] busy_label: Option<String>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_class = if destructive {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
    } else {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
    };
    let confirm_label = confirm_label
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| "Aceptar".to_string());
    let busy_label = busy_label.unwrap_or_else(|| confirm_label.clone());
    let confirm_text = move || {
        if busy.get() {
            busy_label.clone()
        } else {
            confirm_label.clone()
        }
    };

    let dismiss = move || {
        if !busy.get_untracked() {
            on_cancel.call(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Cerrar"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| dismiss()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            dismiss();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-50"
                            disabled=move || busy.get()
                            on:click=move |_| dismiss()
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="button"
                            class=confirm_class
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_text.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
