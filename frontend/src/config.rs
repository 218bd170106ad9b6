use futures::future::{select, Either};
use serde::{Deserialize, Serialize};
use std::{future::Future, sync::OnceLock, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_DOWNLOAD_TIMEOUT_MS: u64 = 60_000;
/// Upper bound on the `./config.json` fetch; API calls wait on it before their own timeout starts.
pub const CONFIG_FETCH_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,
    #[serde(default, alias = "DOWNLOAD_TIMEOUT_MS")]
    pub download_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request: Duration,
    pub download: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            download: Duration::from_millis(DEFAULT_DOWNLOAD_TIMEOUT_MS),
        }
    }
}

impl RuntimeConfig {
    pub fn timeouts(&self) -> Timeouts {
        let defaults = Timeouts::default();
        Timeouts {
            request: self
                .request_timeout_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.request),
            download: self
                .download_timeout_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.download),
        }
    }

    /// Fills gaps in `self` from `other`.
    fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            request_timeout_ms: self.request_timeout_ms.or(other.request_timeout_ms),
            download_timeout_ms: self.download_timeout_ms.or(other.download_timeout_ms),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some()
    }
}

pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

static RESOLVED: OnceLock<RuntimeConfig> = OnceLock::new();

fn cache(cfg: RuntimeConfig) -> RuntimeConfig {
    let cfg = RuntimeConfig {
        api_base_url: cfg
            .api_base_url
            .as_deref()
            .and_then(normalize_base_url)
            .or_else(|| Some(DEFAULT_API_BASE_URL.to_string())),
        ..cfg
    };
    RESOLVED.get_or_init(|| cfg).clone()
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_object(name: &str) -> Option<JsValue> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if value.is_undefined() || value.is_null() {
            None
        } else {
            Some(value)
        }
    }

    fn read_field(obj: &JsValue, keys: &[&str]) -> Option<JsValue> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
    }

    /// `window.__ROOM911_ENV` (env.js) or `window.__ROOM911_CONFIG`, first one wins per field.
    pub fn snapshot() -> RuntimeConfig {
        ["__ROOM911_ENV", "__ROOM911_CONFIG"]
            .iter()
            .filter_map(|name| read_object(name))
            .map(|obj| RuntimeConfig {
                api_base_url: read_field(&obj, &["API_BASE_URL", "api_base_url"])
                    .and_then(|v| v.as_string()),
                request_timeout_ms: read_field(&obj, &["REQUEST_TIMEOUT_MS", "request_timeout_ms"])
                    .and_then(|v| v.as_f64())
                    .map(|ms| ms as u64),
                download_timeout_ms: read_field(
                    &obj,
                    &["DOWNLOAD_TIMEOUT_MS", "download_timeout_ms"],
                )
                .and_then(|v| v.as_f64())
                .map(|ms| ms as u64),
            })
            .fold(RuntimeConfig::default(), RuntimeConfig::or)
    }

    pub async fn fetch_config_json() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().href().ok()?;
        let url = reqwest::Url::parse(&origin).ok()?.join("./config.json").ok()?;
        let resp = reqwest::get(url).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

/// `None` when `timer` completes before `fetch`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
async fn fetch_before<T>(
    fetch: impl Future<Output = Option<T>>,
    timer: impl Future<Output = ()>,
) -> Option<T> {
    match select(Box::pin(fetch), Box::pin(timer)).await {
        Either::Left((fetched, _)) => fetched,
        Either::Right(_) => {
            log::warn!("config.json not loaded within {CONFIG_FETCH_TIMEOUT_MS} ms");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let snapshot = globals::snapshot();
    if snapshot.is_complete() {
        return cache(snapshot);
    }
    let timer = gloo_timers::future::TimeoutFuture::new(CONFIG_FETCH_TIMEOUT_MS);
    match fetch_before(globals::fetch_config_json(), timer).await {
        Some(file) => cache(snapshot.or(file)),
        None => cache(snapshot),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    cache(RuntimeConfig::default())
}

pub async fn await_api_base_url() -> String {
    await_runtime_config()
        .await
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn init() {
    let cfg = await_runtime_config().await;
    log::info!(
        "runtime config: api_base_url={}",
        cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    );
}
