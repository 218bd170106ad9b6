use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p class="text-sm text-status-error-text" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
