use crate::pages::employees::utils::{Toast, ToastKind};
use leptos::*;

#[component]
pub fn ToastMessage(#[prop(into)] toast: Signal<Option<Toast>>) -> impl IntoView {
    move || {
        toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "fixed bottom-6 right-6 z-[80] rounded-lg px-4 py-3 shadow-lg bg-status-success-bg text-status-success-text",
                ToastKind::Error => "fixed bottom-6 right-6 z-[80] rounded-lg px-4 py-3 shadow-lg bg-status-error-bg text-status-error-text",
            };
            view! { <div class=class role="status">{toast.message}</div> }
        })
    }
}
