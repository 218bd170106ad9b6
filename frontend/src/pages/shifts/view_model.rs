use super::{
    repository::{ShiftExport, ShiftsRepository},
    utils::{filter_records, sort_records, SortKey, SortState, LOAD_ERROR_MESSAGE, PDF_FALLBACK_MESSAGE},
};
use crate::{
    api::{ApiClient, ApiError, ShiftRecord},
    components::layout::Feedback,
    utils::download::use_download_sink,
};
use leptos::*;
use std::rc::Rc;

pub fn export_feedback(result: Result<String, ApiError>) -> Feedback {
    match result {
        Ok(filename) => Feedback::Success(format!("Descargado {filename}")),
        Err(err) => {
            log::warn!("shift export failed: {err}");
            let message = err.error.trim();
            Feedback::Error(if message.is_empty() {
                PDF_FALLBACK_MESSAGE.to_string()
            } else {
                message.to_string()
            })
        }
    }
}

#[derive(Clone, Copy)]
pub struct ShiftsViewModel {
    pub records: RwSignal<Vec<ShiftRecord>>,
    pub load_error: RwSignal<Option<String>>,
    pub loading: Signal<bool>,
    reload: RwSignal<u32>,
    pub search: RwSignal<String>,
    pub sort: RwSignal<SortState>,
    pub page: RwSignal<usize>,
    pub range_from: RwSignal<String>,
    pub range_to: RwSignal<String>,
    pub visible: Memo<Vec<ShiftRecord>>,
    pub export_action: Action<ShiftExport, Result<String, ApiError>>,
    pub feedback: RwSignal<Option<Feedback>>,
}

impl ShiftsViewModel {
    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.page.set(1);
    }

    pub fn toggle_sort(&self, key: SortKey) {
        self.sort.update(|sort| *sort = sort.toggle(key));
    }

    pub fn retry(&self) {
        self.load_error.set(None);
        self.reload.update(|n| *n += 1);
    }

    pub fn export(&self, export: ShiftExport) {
        self.feedback.set(None);
        self.export_action.dispatch(export);
    }

    pub fn export_range(&self) {
        self.export(ShiftExport::Range {
            from: self.range_from.get_untracked(),
            to: self.range_to.get_untracked(),
        });
    }
}

pub fn use_shifts_view_model() -> ShiftsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository =
        ShiftsRepository::new_with_client(Rc::new(api)).with_sink(use_download_sink());

    let records = create_rw_signal(Vec::<ShiftRecord>::new());
    let load_error = create_rw_signal(None::<String>);
    let reload = create_rw_signal(0u32);
    let search = create_rw_signal(String::new());
    let sort = create_rw_signal(SortState::default());
    let page = create_rw_signal(1usize);
    let range_from = create_rw_signal(String::new());
    let range_to = create_rw_signal(String::new());
    let feedback = create_rw_signal(None::<Feedback>);

    let repo_for_resource = repository.clone();
    let resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_records().await }
        },
    );
    create_effect(move |_| match resource.get() {
        Some(Ok(list)) => {
            load_error.set(None);
            records.set(list);
        }
        Some(Err(err)) => {
            log::error!("loading shift records failed: {err}");
            load_error.set(Some(LOAD_ERROR_MESSAGE.to_string()));
        }
        None => {}
    });

    let visible = create_memo(move |_| {
        let mut list = records.with(|list| filter_records(list, &search.get()));
        sort_records(&mut list, sort.get());
        list
    });

    let export_action = create_action(move |export: &ShiftExport| {
        let repo = repository.clone();
        let export = export.clone();
        async move { repo.export(&export).await }
    });
    create_effect(move |_| {
        if let Some(result) = export_action.value().get() {
            feedback.set(Some(export_feedback(result)));
        }
    });

    ShiftsViewModel {
        records,
        load_error,
        loading: resource.loading().into(),
        reload,
        search,
        sort,
        page,
        range_from,
        range_to,
        visible,
        export_action,
        feedback,
    }
}
