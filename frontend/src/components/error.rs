use crate::api::ApiError;
use leptos::*;

/// Inline banner for an [`ApiError`]. Validation errors list their `details.errors` entries;
/// transport failures get a retry hint.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
                role="alert"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if e.is(ApiError::VALIDATION_ERROR) {
                        let items: Vec<String> = e
                            .details
                            .as_ref()
                            .and_then(|d| d.get("errors"))
                            .and_then(|v| v.as_array())
                            .map(|errors| {
                                errors
                                    .iter()
                                    .filter_map(|err| err.as_str().map(str::to_string))
                                    .collect()
                            })
                            .unwrap_or_default();
                        if !items.is_empty() {
                            return view! {
                                <ul class="list-disc list-inside text-sm">
                                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                                </ul>
                            }
                            .into_view();
                        }
                    }
                    if e.is_transport() {
                        view! { <div class="text-xs opacity-75">"Verifica tu conexión e inténtalo de nuevo."</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}
