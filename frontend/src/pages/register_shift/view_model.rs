use super::{
    repository::{EmployeeCard, RegisterShiftRepository},
    utils::{parse_employee_id, registered_message},
};
use crate::{
    api::{ApiClient, ApiError, ShiftKind},
    components::layout::Feedback,
    utils::{download::use_download_sink, time::now_local_timestamp},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct RegisterShiftViewModel {
    pub id_input: RwSignal<String>,
    pub lookup_error: RwSignal<Option<String>>,
    pub target: RwSignal<Option<i64>>,
    reload: RwSignal<u32>,
    pub card: Resource<(Option<i64>, u32), Option<Result<EmployeeCard, String>>>,
    pub mode: RwSignal<ShiftKind>,
    pub page: RwSignal<usize>,
    pub feedback: RwSignal<Option<Feedback>>,
    pub register_action: Action<(i64, ShiftKind), Result<ShiftKind, String>>,
    pub export_action: Action<i64, Result<String, ApiError>>,
}

impl RegisterShiftViewModel {
    pub fn submit_lookup(&self) {
        match parse_employee_id(&self.id_input.get_untracked()) {
            Ok(id) => {
                self.lookup_error.set(None);
                self.feedback.set(None);
                self.page.set(1);
                self.target.set(Some(id));
            }
            Err(message) => self.lookup_error.set(Some(message)),
        }
    }

    /// Back to the id prompt with a clean slate.
    pub fn reset_lookup(&self) {
        self.target.set(None);
        self.id_input.set(String::new());
        self.mode.set(ShiftKind::Entrada);
        self.feedback.set(None);
        self.lookup_error.set(None);
    }

    pub fn register(&self, employee_id: i64) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        self.feedback.set(None);
        self.register_action
            .dispatch((employee_id, self.mode.get_untracked()));
    }

    /// After a successful registration the opposite kind becomes the default.
    fn registered(&self, kind: ShiftKind) {
        self.feedback
            .set(Some(Feedback::Success(registered_message(kind))));
        self.mode.set(kind.toggled());
        self.page.set(1);
        self.reload.update(|n| *n += 1);
    }
}

pub fn use_register_shift_view_model(employee_id: Option<i64>) -> RegisterShiftViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository =
        RegisterShiftRepository::new_with_client(Rc::new(api)).with_sink(use_download_sink());

    let id_input = create_rw_signal(
        employee_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    let lookup_error = create_rw_signal(None::<String>);
    let target = create_rw_signal(employee_id.filter(|id| *id > 0));
    let reload = create_rw_signal(0u32);
    let mode = create_rw_signal(ShiftKind::Entrada);
    let page = create_rw_signal(1usize);
    let feedback = create_rw_signal(None::<Feedback>);

    let repo_for_card = repository.clone();
    let card = create_resource(
        move || (target.get(), reload.get()),
        move |(target, _)| {
            let repo = repo_for_card.clone();
            async move {
                match target {
                    Some(id) => Some(repo.load_card(id).await),
                    None => None,
                }
            }
        },
    );

    let repo_for_register = repository.clone();
    let register_action = create_action(move |(employee_id, kind): &(i64, ShiftKind)| {
        let repo = repo_for_register.clone();
        let (employee_id, kind) = (*employee_id, *kind);
        async move {
            repo.register(employee_id, kind, now_local_timestamp())
                .await
                .map(|_| kind)
        }
    });

    let export_action = create_action(move |employee_id: &i64| {
        let repo = repository.clone();
        let employee_id = *employee_id;
        async move { repo.export_history(employee_id).await }
    });

    let vm = RegisterShiftViewModel {
        id_input,
        lookup_error,
        target,
        reload,
        card,
        mode,
        page,
        feedback,
        register_action,
        export_action,
    };

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(kind) => vm.registered(kind),
                Err(message) => feedback.set(Some(Feedback::Error(message))),
            }
        }
    });
    create_effect(move |_| {
        if let Some(Err(err)) = export_action.value().get() {
            log::warn!("history pdf failed: {err}");
            feedback.set(Some(Feedback::Error(if err.error.trim().is_empty() {
                "No se pudo descargar el PDF".to_string()
            } else {
                err.error
            })));
        }
    });

    vm
}
