use crate::api::{ApiError, DownloadedFile};

/// Final step of a report export: hands the bytes to the user.
pub trait DownloadSink {
    fn save(&self, file: &DownloadedFile) -> Result<(), ApiError>;
}

/// Saves through a Blob, an object URL and a temporary `<a download>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownloadSink;

#[cfg(target_arch = "wasm32")]
impl DownloadSink for BrowserDownloadSink {
    fn save(&self, file: &DownloadedFile) -> Result<(), ApiError> {
        use wasm_bindgen::JsCast;

        let fail = |what: &str| ApiError::unknown(format!("No se pudo descargar el archivo: {what}"));

        let array = js_sys::Array::new();
        array.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
            .map_err(|_| fail("blob"))?;

        let url =
            web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| fail("object URL"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| fail("document"))?;
        let anchor = document
            .create_element("a")
            .map_err(|_| fail("link"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| fail("link"))?;
        anchor.set_href(&url);
        anchor.set_download(&file.filename);
        anchor.style().set_property("display", "none").ok();
        document
            .body()
            .ok_or_else(|| fail("body"))?
            .append_child(&anchor)
            .map_err(|_| fail("append"))?;
        anchor.click();
        anchor.remove();
        let _ = web_sys::Url::revoke_object_url(&url);
        log::info!("downloaded {} ({} bytes)", file.filename, file.bytes.len());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DownloadSink for BrowserDownloadSink {
    fn save(&self, file: &DownloadedFile) -> Result<(), ApiError> {
        log::warn!("no browser available to save {}", file.filename);
        Err(ApiError::unknown(
            "La descarga solo está disponible en el navegador.",
        ))
    }
}

/// The sink provided by the app root, or the browser one when none was provided.
pub fn use_download_sink() -> std::rc::Rc<dyn DownloadSink> {
    leptos::use_context::<std::rc::Rc<dyn DownloadSink>>()
        .unwrap_or_else(|| std::rc::Rc::new(BrowserDownloadSink))
}
