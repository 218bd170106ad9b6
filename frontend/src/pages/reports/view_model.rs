use crate::{
    api::{ApiClient, ApiError},
    components::layout::Feedback,
    utils::download::{use_download_sink, DownloadSink},
};
use leptos::*;
use std::rc::Rc;

pub const REPORT_FALLBACK_MESSAGE: &str = "Error al generar el reporte";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Employees,
    Shifts,
}

impl ReportKind {
    pub fn button_label(&self) -> &'static str {
        match self {
            ReportKind::Employees => "Descargar Reporte de Todos los Empleados (PDF)",
            ReportKind::Shifts => "Descargar Reporte de Todos los Registros de Turno (PDF)",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ReportKind::Employees => "Reporte de empleados descargado exitosamente.",
            ReportKind::Shifts => "Reporte de registros de turno descargado exitosamente.",
        }
    }
}

pub async fn generate_report(
    client: &ApiClient,
    sink: &dyn DownloadSink,
    kind: ReportKind,
) -> Feedback {
    let result = match kind {
        ReportKind::Employees => client.export_employees_pdf(sink).await,
        ReportKind::Shifts => client.export_shifts_pdf(sink).await,
    };
    report_feedback(kind, result)
}

fn report_feedback(kind: ReportKind, result: Result<String, ApiError>) -> Feedback {
    match result {
        Ok(_) => Feedback::Success(kind.success_message().to_string()),
        Err(err) => {
            log::warn!("{kind:?} report failed: {err}");
            let message = err.error.trim();
            Feedback::Error(if message.is_empty() {
                REPORT_FALLBACK_MESSAGE.to_string()
            } else {
                message.to_string()
            })
        }
    }
}

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub action: Action<ReportKind, Feedback>,
    pub feedback: RwSignal<Option<Feedback>>,
}

impl ReportsViewModel {
    pub fn run(&self, kind: ReportKind) {
        if self.action.pending().get_untracked() {
            return;
        }
        self.feedback.set(None);
        self.action.dispatch(kind);
    }
}

pub fn use_reports_view_model() -> ReportsViewModel {
    let api = Rc::new(use_context::<ApiClient>().unwrap_or_default());
    let sink = use_download_sink();
    let feedback = create_rw_signal(None::<Feedback>);

    let action = create_action(move |kind: &ReportKind| {
        let api = api.clone();
        let sink = sink.clone();
        let kind = *kind;
        async move { generate_report(&api, sink.as_ref(), kind).await }
    });
    create_effect(move |_| {
        if let Some(result) = action.value().get() {
            feedback.set(Some(result));
        }
    });

    ReportsViewModel { action, feedback }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::DownloadedFile;
    use httpmock::prelude::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingSink(Cell<usize>);

    impl DownloadSink for CountingSink {
        fn save(&self, _file: &DownloadedFile) -> Result<(), ApiError> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    #[tokio::test]
    async fn successful_reports_use_fixed_messages() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/reports/employees/pdf");
            then.status(200)
                .header("content-type", "application/pdf")
                .body("%PDF-1.4");
        });
        let client = ApiClient::new_with_base_url(server.url("/api"));
        let sink = CountingSink::default();

        let feedback = generate_report(&client, &sink, ReportKind::Employees).await;
        assert_eq!(
            feedback,
            Feedback::Success("Reporte de empleados descargado exitosamente.".into())
        );
        assert_eq!(sink.0.get(), 1);
    }

    #[tokio::test]
    async fn failed_report_shows_error_and_saves_nothing() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/reports/shifts/pdf");
            then.status(500).body("");
        });
        let client = ApiClient::new_with_base_url(server.url("/api"));
        let sink = CountingSink::default();

        let feedback = generate_report(&client, &sink, ReportKind::Shifts).await;
        assert!(matches!(feedback, Feedback::Error(_)));
        assert_eq!(sink.0.get(), 0);
    }

    #[test]
    fn blank_errors_fall_back_to_generic_text() {
        assert_eq!(
            report_feedback(ReportKind::Shifts, Err(ApiError::new(ApiError::UNKNOWN, " "))),
            Feedback::Error(REPORT_FALLBACK_MESSAGE.into())
        );
    }
}
