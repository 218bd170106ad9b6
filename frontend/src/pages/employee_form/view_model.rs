use super::{
    repository::EmployeeFormRepository,
    utils::{draft_from_employee, payload_from_draft, set_field, validate_draft, FieldErrors, FormField},
};
use crate::{
    api::{ApiClient, ApiError, Employee},
    state::{
        session::{use_session, SessionContext},
        session_store::EmployeeDraft,
    },
};
use leptos::*;
use std::{collections::BTreeSet, rc::Rc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(Employee),
}

impl FormMode {
    pub fn employee_id(&self) -> Option<i64> {
        match self {
            FormMode::New => None,
            FormMode::Edit(employee) => Some(employee.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Invalid(FieldErrors),
    Api(ApiError),
}

impl SubmitError {
    pub fn message(&self) -> String {
        match self {
            SubmitError::Invalid(_) => "Revisa los campos marcados.".to_string(),
            SubmitError::Api(err) if err.is_transport() => {
                "No se pudo conectar con el servidor.".to_string()
            }
            SubmitError::Api(err) => err.error.clone(),
        }
    }
}

/// Validates first; the network is only touched for a clean draft.
pub async fn submit_employee(
    repository: &EmployeeFormRepository,
    mode: &FormMode,
    draft: &EmployeeDraft,
) -> Result<String, SubmitError> {
    let errors = validate_draft(draft);
    if !errors.is_empty() {
        return Err(SubmitError::Invalid(errors));
    }
    let payload = payload_from_draft(draft, mode.employee_id());
    let result = match mode {
        FormMode::New => repository.create(&payload).await,
        FormMode::Edit(employee) => repository.update(employee.id, &payload).await,
    };
    result.map_err(|err| {
        log::warn!("saving employee failed: {err}");
        SubmitError::Api(err)
    })
}

#[derive(Clone, Copy)]
pub struct EmployeeFormViewModel {
    session: SessionContext,
    pub mode: StoredValue<FormMode>,
    pub draft: RwSignal<EmployeeDraft>,
    pub touched: RwSignal<BTreeSet<FormField>>,
    pub errors: Memo<FieldErrors>,
    pub submit_error: RwSignal<Option<String>>,
    pub submit_action: Action<EmployeeDraft, Result<String, SubmitError>>,
}

impl EmployeeFormViewModel {
    pub fn is_new(&self) -> bool {
        self.mode.with_value(|mode| *mode == FormMode::New)
    }

    /// New-employee edits are mirrored to the persisted draft on every keystroke.
    pub fn set_field(&self, field: FormField, raw: &str) {
        self.draft.update(|draft| set_field(draft, field, raw));
        self.persist_draft();
    }

    pub fn set_active(&self, activo: bool) {
        self.draft.update(|draft| draft.activo = activo);
        self.persist_draft();
    }

    fn persist_draft(&self) {
        if self.is_new() {
            let session = self.session;
            self.draft.with_untracked(|draft| session.save_draft(draft));
        }
    }

    pub fn touch(&self, field: FormField) {
        self.touched.update(|set| {
            set.insert(field);
        });
    }

    /// Errors show only for fields the user has left at least once.
    pub fn visible_error(&self, field: FormField) -> Option<&'static str> {
        if !self.touched.with(|set| set.contains(&field)) {
            return None;
        }
        self.errors.with(|errors| errors.get(&field).copied())
    }

    pub fn submit(&self) {
        self.touched.set(FormField::ALL.into_iter().collect());
        self.submit_error.set(None);
        if !self.errors.with_untracked(FieldErrors::is_empty) || self.submit_action.pending().get_untracked() {
            return;
        }
        self.submit_action.dispatch(self.draft.get_untracked());
    }

    /// Leaving the new-employee form drops its draft.
    pub fn cancel(&self) {
        if self.is_new() {
            self.session.clear_draft();
        }
    }
}

/// `on_saved` receives the confirmation text once the backend accepted the employee.
pub fn use_employee_form_view_model(
    mode: FormMode,
    on_saved: Callback<String>,
) -> EmployeeFormViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = EmployeeFormRepository::new_with_client(Rc::new(api));
    let session = use_session();

    let initial = match &mode {
        FormMode::New => session.draft().unwrap_or_default(),
        FormMode::Edit(employee) => draft_from_employee(employee),
    };
    let draft = create_rw_signal(initial);
    let touched = create_rw_signal(BTreeSet::<FormField>::new());
    let errors = create_memo(move |_| draft.with(validate_draft));
    let submit_error = create_rw_signal(None::<String>);
    let mode = store_value(mode);

    let submit_action = create_action(move |draft: &EmployeeDraft| {
        let repo = repository.clone();
        let draft = draft.clone();
        let mode = mode.get_value();
        async move { submit_employee(&repo, &mode, &draft).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(message) => {
                    log::info!("employee saved: {message}");
                    on_saved.call(message);
                }
                Err(err) => submit_error.set(Some(err.message())),
            }
        }
    });

    EmployeeFormViewModel {
        session,
        mode,
        draft,
        touched,
        errors,
        submit_error,
        submit_action,
    }
}
