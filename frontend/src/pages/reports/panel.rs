use super::view_model::{use_reports_view_model, ReportKind};
use crate::components::layout::{FeedbackMessage, PageHeader};
use leptos::*;

#[component]
pub fn ReportsPanel(on_back: Callback<()>) -> impl IntoView {
    let vm = use_reports_view_model();
    let downloading = vm.action.pending();

    let button = move |kind: ReportKind| {
        view! {
            <button
                type="button"
                class="w-full rounded-lg px-4 py-3 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                disabled=move || downloading.get()
                on:click=move |_| vm.run(kind)
            >
                {move || if downloading.get() { "Generando…" } else { kind.button_label() }}
            </button>
        }
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <PageHeader title="Generar Reportes" on_back=on_back back_disabled=downloading />
            <div class="space-y-3">
                {button(ReportKind::Employees)}
                {button(ReportKind::Shifts)}
            </div>
            <div class="mt-4">
                <FeedbackMessage feedback=vm.feedback />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn reports_panel_offers_both_downloads() {
        let html = render_to_string(move || view! { <ReportsPanel on_back=Callback::new(|_| {}) /> });
        assert!(html.contains("Generar Reportes"));
        assert!(html.contains(ReportKind::Employees.button_label()));
        assert!(html.contains(ReportKind::Shifts.button_label()));
    }
}
