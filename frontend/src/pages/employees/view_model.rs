use super::{
    repository::EmployeesRepository,
    utils::{
        action_error_message, filter_employees, import_error_message, Toast, DELETED_MESSAGE,
        DELETE_FALLBACK_MESSAGE, TOAST_MILLIS,
    },
};
use crate::{
    api::{ApiClient, ApiError, Employee},
    utils::time::after,
};
use leptos::*;
use std::{rc::Rc, time::Duration};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub search: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub employees: RwSignal<Vec<Employee>>,
    pub load_error: RwSignal<Option<ApiError>>,
    pub loading: Signal<bool>,
    pub filtered: Memo<Vec<Employee>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub delete_action: Action<i64, Result<i64, ApiError>>,
    pub toggle_action: Action<(Employee, bool), Result<Employee, ApiError>>,
    pub toast: RwSignal<Option<Toast>>,
    pub show_import: RwSignal<bool>,
    pub import_message: RwSignal<Option<Result<String, String>>>,
    pub import_action: Action<CsvUpload, Result<String, ApiError>>,
}

impl EmployeesViewModel {
    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.page.set(1);
    }

    pub fn show_toast(&self, toast: Toast) {
        let slot = self.toast;
        slot.set(Some(toast.clone()));
        after(Duration::from_millis(TOAST_MILLIS), move || {
            if slot.get_untracked().as_ref() == Some(&toast) {
                slot.set(None);
            }
        });
    }
}

/// `refresh` is the controller's list-refresh counter; bumping it refetches.
pub fn use_employees_view_model(
    refresh: Signal<u32>,
    on_imported: Callback<()>,
) -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let search = create_rw_signal(String::new());
    let page = create_rw_signal(1usize);
    let employees = create_rw_signal(Vec::<Employee>::new());
    let load_error = create_rw_signal(None::<ApiError>);
    let pending_delete = create_rw_signal(None::<Employee>);
    let toast = create_rw_signal(None::<Toast>);
    let show_import = create_rw_signal(false);
    let import_message = create_rw_signal(None::<Result<String, String>>);

    let repo_for_resource = repository.clone();
    let resource = create_resource(
        move || refresh.get(),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_employees().await }
        },
    );
    create_effect(move |_| match resource.get() {
        Some(Ok(list)) => {
            load_error.set(None);
            employees.set(list);
        }
        Some(Err(err)) => {
            log::error!("loading employees failed: {err}");
            load_error.set(Some(err));
        }
        None => {}
    });
    let loading = resource.loading().into();

    let filtered = create_memo(move |_| employees.with(|list| filter_employees(list, &search.get())));

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.delete_employee(id).await }
    });

    let repo_for_toggle = repository.clone();
    let toggle_action = create_action(move |(employee, activo): &(Employee, bool)| {
        let repo = repo_for_toggle.clone();
        let employee = employee.clone();
        let activo = *activo;
        async move { repo.set_active(employee, activo).await }
    });

    let repo_for_import = repository;
    let import_action = create_action(move |upload: &CsvUpload| {
        let repo = repo_for_import.clone();
        let upload = upload.clone();
        async move { repo.import_csv(upload.filename, upload.bytes).await }
    });

    let vm = EmployeesViewModel {
        search,
        page,
        employees,
        load_error,
        loading,
        filtered,
        pending_delete,
        delete_action,
        toggle_action,
        toast,
        show_import,
        import_message,
        import_action,
    };

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(id) => {
                    employees.update(|list| list.retain(|employee| employee.id != id));
                    pending_delete.set(None);
                    vm.show_toast(Toast::success(DELETED_MESSAGE));
                }
                Err(err) => {
                    log::warn!("delete failed: {err}");
                    vm.show_toast(Toast::error(action_error_message(
                        &err,
                        DELETE_FALLBACK_MESSAGE,
                    )));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = toggle_action.value().get() {
            match result {
                Ok(updated) => employees.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|e| e.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(err) => vm.show_toast(Toast::error(action_error_message(
                    &err,
                    "Error al actualizar estado del empleado",
                ))),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = import_action.value().get() {
            match result {
                Ok(message) => {
                    import_message.set(Some(Ok(message)));
                    on_imported.call(());
                    after(Duration::from_millis(800), move || {
                        show_import.set(false);
                        import_message.set(None);
                    });
                }
                Err(err) => import_message.set(Some(Err(import_error_message(&err)))),
            }
        }
    });

    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::with_runtime};

    #[test]
    fn search_filters_and_resets_page() {
        with_runtime(|| {
            let vm = use_employees_view_model(Signal::derive(|| 0), Callback::new(|_| {}));
            let mut other = employee(2, true);
            other.nombre = "Marta".into();
            vm.employees.set(vec![employee(1, true), other]);
            vm.page.set(3);
            vm.set_search("marta".into());
            assert_eq!(vm.filtered.get_untracked().len(), 1);
            assert_eq!(vm.page.get_untracked(), 1);
        });
    }

    #[test]
    fn toast_holds_latest_message() {
        with_runtime(|| {
            let vm = use_employees_view_model(Signal::derive(|| 0), Callback::new(|_| {}));
            vm.show_toast(Toast::error("No se puede eliminar"));
            assert_eq!(
                vm.toast.get_untracked().map(|t| t.message),
                Some("No se puede eliminar".to_string())
            );
        });
    }
}
