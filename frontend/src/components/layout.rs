use leptos::*;

/// Outer frame shared by every screen: brand bar plus an optional identity/exit slot.
#[component]
pub fn Layout(
    #[prop(optional, into)] identity: Option<String>,
    #[prop(optional)] on_exit: Option<Callback<()>>,
    #[prop(optional, into)] exit_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let exit_label = exit_label.unwrap_or_else(|| "Cerrar sesión".to_string());
    view! {
        <div class="min-h-screen bg-surface">
            <header class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <h1 class="text-xl font-semibold text-fg">"ROOM_911"</h1>
                        <div class="flex items-center gap-3">
                            {identity.map(|who| view! {
                                <span class="text-sm text-fg-muted">{who}</span>
                            })}
                            {on_exit.map(|on_exit| view! {
                                <button
                                    type="button"
                                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                    on:click=move |_| on_exit.call(())
                                >
                                    {exit_label.clone()}
                                </button>
                            })}
                        </div>
                    </div>
                </div>
            </header>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

/// Title row with an optional "Volver" button.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] on_back: Option<Callback<()>>,
    #[prop(optional, into)] back_disabled: MaybeSignal<bool>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center justify-between gap-3 mb-6">
            <h2 class="text-2xl font-bold text-fg">{title}</h2>
            <div class="flex items-center gap-2">
                {children.map(|children| children())}
                {on_back.map(|on_back| view! {
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                        disabled=move || back_disabled.get()
                        on:click=move |_| on_back.call(())
                    >
                        "Volver"
                    </button>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-2 p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {label.map(|label| view! { <p class="text-sm text-fg-muted">{label}</p> })}
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
            role="alert"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4"
            role="status"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

/// Renders whichever of success/error `feedback` holds.
#[component]
pub fn FeedbackMessage(#[prop(into)] feedback: Signal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|feedback| match feedback {
            Feedback::Success(message) => view! { <SuccessMessage message=message /> }.into_view(),
            Feedback::Error(message) => view! { <ErrorMessage message=message /> }.into_view(),
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_identity_and_children() {
        let html = render_to_string(move || {
            view! {
                <Layout identity="admin@room911.co" on_exit=Callback::new(|_| {})>
                    <div>"child"</div>
                </Layout>
            }
        });
        assert!(html.contains("ROOM_911"));
        assert!(html.contains("admin@room911.co"));
        assert!(html.contains("Cerrar sesión"));
        assert!(html.contains("child"));
    }

    #[test]
    fn page_header_shows_back_button_only_when_wired() {
        let with_back = render_to_string(move || {
            view! { <PageHeader title="Reportes" on_back=Callback::new(|_| {}) /> }
        });
        assert!(with_back.contains("Volver"));
        let without = render_to_string(move || view! { <PageHeader title="Reportes" /> });
        assert!(!without.contains("Volver"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            let feedback = create_rw_signal(Some(Feedback::Error("falló".into())));
            view! {
                <div>
                    <LoadingSpinner label="Cargando…" />
                    <SuccessMessage message="ok" />
                    <FeedbackMessage feedback=feedback />
                </div>
            }
        });
        assert!(html.contains("Cargando…"));
        assert!(html.contains("ok"));
        assert!(html.contains("falló"));
    }
}
