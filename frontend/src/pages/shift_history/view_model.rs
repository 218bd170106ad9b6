use super::repository::{EmployeeHistory, ShiftHistoryRepository};
use crate::{
    api::{ApiClient, ApiError},
    components::layout::Feedback,
    utils::download::use_download_sink,
};
use leptos::*;
use std::rc::Rc;

pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar el historial de turnos del empleado.";
pub const PDF_ERROR_MESSAGE: &str = "Error al generar el reporte PDF del historial. Intenta de nuevo.";

#[derive(Clone, Copy)]
pub struct ShiftHistoryViewModel {
    pub employee_id: i64,
    pub history: Resource<i64, Result<EmployeeHistory, ApiError>>,
    pub export_action: Action<(), Result<String, ApiError>>,
    pub feedback: RwSignal<Option<Feedback>>,
}

pub fn use_shift_history_view_model(employee_id: i64) -> ShiftHistoryViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository =
        ShiftHistoryRepository::new_with_client(Rc::new(api)).with_sink(use_download_sink());
    let feedback = create_rw_signal(None::<Feedback>);

    let repo_for_resource = repository.clone();
    let history = create_resource(
        move || employee_id,
        move |id| {
            let repo = repo_for_resource.clone();
            async move { repo.load(id).await }
        },
    );

    let export_action = create_action(move |_: &()| {
        let repo = repository.clone();
        async move { repo.export_pdf(employee_id).await }
    });
    create_effect(move |_| {
        if let Some(result) = export_action.value().get() {
            feedback.set(match result {
                Ok(_) => None,
                Err(err) => {
                    log::warn!("history pdf for {employee_id} failed: {err}");
                    Some(Feedback::Error(PDF_ERROR_MESSAGE.to_string()))
                }
            });
        }
    });

    ShiftHistoryViewModel {
        employee_id,
        history,
        export_action,
        feedback,
    }
}
