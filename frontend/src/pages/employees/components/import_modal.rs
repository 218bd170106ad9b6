use crate::pages::employees::{
    utils::{validate_csv_file_name, IMPORT_MISSING_FILE_MESSAGE},
    view_model::CsvUpload,
};
use leptos::{html::Input, *};

async fn read_file_bytes(file: web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "No se pudo leer el archivo.".to_string())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[component]
pub fn ImportEmployeesModal(
    #[prop(into)] pending: Signal<bool>,
    message: RwSignal<Option<Result<String, String>>>,
    on_upload: Callback<CsvUpload>,
    on_close: Callback<()>,
) -> impl IntoView {
    let input_ref = create_node_ref::<Input>();
    let selected = create_rw_signal(None::<String>);

    let selected_file = move || {
        input_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    };

    let on_change = move |_| {
        selected.set(selected_file().map(|file| file.name()));
        message.set(None);
    };

    let on_submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        let filename = match validate_csv_file_name(selected.get_untracked().as_deref()) {
            Ok(name) => name,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        let Some(file) = selected_file() else {
            message.set(Some(Err(IMPORT_MISSING_FILE_MESSAGE.to_string())));
            return;
        };
        spawn_local(async move {
            match read_file_bytes(file).await {
                Ok(bytes) => on_upload.call(CsvUpload { filename, bytes }),
                Err(msg) => message.set(Some(Err(msg))),
            }
        });
    };

    view! {
        <div class="fixed inset-0 z-[70] flex items-center justify-center bg-overlay-backdrop p-4" role="dialog" aria-modal="true">
            <div class="w-full max-w-md rounded-xl bg-surface-elevated shadow-xl p-6 space-y-4">
                <h2 class="text-lg font-semibold text-fg">"Importar empleados (CSV)"</h2>
                <p class="text-sm text-fg-muted">
                    "Selecciona un archivo " <b>".csv"</b> " con las columnas esperadas."
                </p>
                <input type="file" accept=".csv" node_ref=input_ref on:change=on_change class="block w-full text-sm" />
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || selected.get().is_none() || pending.get()
                        on:click=on_submit
                    >
                        {move || if pending.get() { "Importando…" } else { "Importar" }}
                    </button>
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| on_close.call(())
                    >
                        "Cancelar"
                    </button>
                </div>
                {move || message.get().map(|result| match result {
                    Ok(msg) => view! { <div class="rounded-md px-3 py-2 text-sm bg-status-success-bg text-status-success-text">{msg}</div> },
                    Err(msg) => view! { <div class="rounded-md px-3 py-2 text-sm bg-status-error-bg text-status-error-text">{msg}</div> },
                })}
            </div>
        </div>
    }
}
