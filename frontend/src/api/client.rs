use crate::{
    api::types::ApiError,
    config::{self, Timeouts},
};
use reqwest::{header::CONTENT_TYPE, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{future::Future, time::Duration};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    timeouts: Option<Timeouts>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            timeouts: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url).unwrap_or(base_url)),
            timeouts: None,
        }
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = Some(timeouts);
        self
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn timeouts(&self) -> Timeouts {
        match self.timeouts {
            Some(timeouts) => timeouts,
            None => config::await_runtime_config().await.timeouts(),
        }
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        log::debug!("{method} {url}");
        self.client.request(method, url)
    }

    /// Sends `request` with the JSON/text timeout and returns the normalised body of a
    /// success response; non-success statuses become an [`ApiError`] carrying `fallback`
    /// when the server gives no message.
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<ResponseBody, ApiError> {
        let limit = self.timeouts().await.request;
        let fallback = fallback.to_string();
        with_timeout(limit, async move {
            let response = send(request, limit).await?;
            if response.status().is_success() {
                ResponseBody::read(response).await
            } else {
                Err(failure(response, &fallback).await)
            }
        })
        .await
    }
}

/// Success body after normalisation: `204` and empty payloads are [`ResponseBody::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub(crate) async fn read(response: Response) -> Result<Self, ApiError> {
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(ResponseBody::Empty);
        }
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Error al leer la respuesta: {e}")))?;
        Ok(Self::from_text(text, is_json))
    }

    pub fn from_text(text: String, is_json: bool) -> Self {
        if text.trim().is_empty() {
            return ResponseBody::Empty;
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Null) => ResponseBody::Empty,
            Ok(value) => ResponseBody::Json(value),
            Err(err) => {
                if is_json {
                    log::warn!("response declared JSON but did not parse: {err}");
                }
                ResponseBody::Text(text)
            }
        }
    }

    /// Typed view of the body. Absent or undecodable bodies are `None`, never an error.
    pub fn decode<T: DeserializeOwned>(self) -> Option<T> {
        match self {
            ResponseBody::Json(value) => match serde_json::from_value(value) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    log::warn!("ignoring unexpected response shape: {err}");
                    None
                }
            },
            ResponseBody::Empty | ResponseBody::Text(_) => None,
        }
    }

    /// Decodes a JSON array row by row; rows that do not match `T` are skipped.
    pub fn decode_list<T: DeserializeOwned>(self) -> Vec<T> {
        let rows = match self {
            ResponseBody::Json(Value::Array(rows)) => rows,
            ResponseBody::Json(other) => {
                log::warn!("expected a list, got {}", kind_of(&other));
                return Vec::new();
            }
            ResponseBody::Empty | ResponseBody::Text(_) => return Vec::new(),
        };
        rows.into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value(row) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    log::warn!("skipping list row {index}: {err}");
                    None
                }
            })
            .collect()
    }

    /// Server-supplied `message`/`error` text, or the raw text body.
    pub fn message(&self) -> Option<String> {
        match self {
            ResponseBody::Json(value) => ["message", "error", "mensaje"].iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|msg| !msg.is_empty())
                    .map(str::to_string)
            }),
            ResponseBody::Text(text) => Some(text.trim().to_string()),
            ResponseBody::Empty => None,
        }
    }

    /// Like [`Self::message`] but preferring the `error` field, for error payloads.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ResponseBody::Json(value) => ["error", "message", "mensaje"].iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|msg| !msg.is_empty())
                    .map(str::to_string)
            }),
            _ => self.message(),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn code_for_status(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::VALIDATION_ERROR,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::UNAUTHORIZED,
        StatusCode::NOT_FOUND => ApiError::NOT_FOUND,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ApiError::TIMEOUT,
        s if s.is_server_error() => ApiError::SERVER_ERROR,
        _ => ApiError::UNKNOWN,
    }
}

/// Builds the error for a non-success response.
pub(crate) async fn failure(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let body = ResponseBody::read(response)
        .await
        .unwrap_or(ResponseBody::Empty);
    let message = body
        .error_message()
        .filter(|msg| !msg.starts_with('<'))
        .unwrap_or_else(|| fallback.to_string());
    log::warn!("request failed with {status}: {message}");
    let error = ApiError::new(code_for_status(status), message);
    match body {
        ResponseBody::Json(details) => error.with_details(details),
        _ => error,
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::timeout("La solicitud excedió el tiempo de espera.")
    } else {
        log::error!("request could not be sent: {err}");
        ApiError::request_failed(format!("No se pudo conectar con el servidor: {err}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn send(request: RequestBuilder, limit: Duration) -> Result<Response, ApiError> {
    request.timeout(limit).send().await.map_err(transport_error)
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn send(request: RequestBuilder, _limit: Duration) -> Result<Response, ApiError> {
    request.send().await.map_err(transport_error)
}

/// Native requests carry their own deadline; in the browser the whole exchange races a timer.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn with_timeout<T>(
    _limit: Duration,
    fut: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    fut.await
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn with_timeout<T>(
    limit: Duration,
    fut: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
    match select(Box::pin(fut), Box::pin(TimeoutFuture::new(millis))).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            log::warn!("request aborted after {millis} ms");
            Err(ApiError::timeout("La solicitud excedió el tiempo de espera."))
        }
    }
}
