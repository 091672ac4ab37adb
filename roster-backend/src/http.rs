//! Shared HTTP request helpers
//!
//! Both backend dialects speak the same plain-JSON REST shape, so the request
//! execution, logging and error triage live here once. Each dialect keeps its
//! own paths and payload types and calls into this layer.
//!
//! Deliberately minimal transport semantics: no timeout, no cancellation, no
//! automatic retry. A failed call is reported and the user retries manually.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{BackendError, Result};

/// Structured error body the backends return on rejection.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin REST client shared by the backend dialects.
pub(crate) struct RestClient {
    client: Client,
    base_url: String,
    backend: &'static str,
}

impl RestClient {
    pub(crate) fn new(base_url: impl Into<String>, backend: &'static str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            backend,
        }
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let (status, text) = self.execute(self.client.get(&url), "GET", &url).await?;
        if !status.is_success() {
            return Err(self.rejection(status, &text, None));
        }
        self.parse_json(&text)
    }

    /// 执行 GET 请求（按 id 取单条记录，404 映射为 `NotFound`）
    pub(crate) async fn get_by_id<T: DeserializeOwned>(&self, path: &str, id: i64) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let (status, text) = self.execute(self.client.get(&url), "GET", &url).await?;
        if !status.is_success() {
            return Err(self.rejection(status, &text, Some(id)));
        }
        self.parse_json(&text)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let (status, text) = self
            .execute(self.client.post(&url).json(body), "POST", &url)
            .await?;
        if !status.is_success() {
            return Err(self.rejection(status, &text, None));
        }
        self.parse_json(&text)
    }

    /// 执行 PUT 请求
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        id: i64,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let (status, text) = self
            .execute(self.client.put(&url).json(body), "PUT", &url)
            .await?;
        if !status.is_success() {
            return Err(self.rejection(status, &text, Some(id)));
        }
        self.parse_json(&text)
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str, id: i64) -> Result<()> {
        let url = format!("{}{path}", self.base_url);
        let (status, text) = self.execute(self.client.delete(&url), "DELETE", &url).await?;
        if !status.is_success() {
            return Err(self.rejection(status, &text, Some(id)));
        }
        Ok(())
    }

    /// Send the request and read the response body.
    ///
    /// Unified processing: sending the request, logging, reading the body.
    /// Transport failures on either step map to `NetworkError`.
    async fn execute(
        &self,
        request_builder: reqwest::RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<(StatusCode, String)> {
        log::debug!("[{}] {method} {url}", self.backend);

        let response =
            request_builder
                .send()
                .await
                .map_err(|e| BackendError::NetworkError {
                    backend: self.backend.to_string(),
                    detail: e.to_string(),
                })?;

        let status = response.status();
        log::debug!("[{}] Response Status: {status}", self.backend);

        let text = response
            .text()
            .await
            .map_err(|e| BackendError::NetworkError {
                backend: self.backend.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{}] Response Body: {text}", self.backend);

        Ok((status, text))
    }

    /// Map a non-2xx response to the error taxonomy.
    ///
    /// 404 with a known record id becomes `NotFound`; everything else tries
    /// the structured `{ "error": ... }` body and falls back to an opaque
    /// rejection when the body is not parseable.
    fn rejection(&self, status: StatusCode, body: &str, id: Option<i64>) -> BackendError {
        let message = serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error);

        if status == StatusCode::NOT_FOUND
            && let Some(id) = id
        {
            return BackendError::NotFound {
                backend: self.backend.to_string(),
                id,
                raw_message: message,
            };
        }

        if message.is_none() {
            log::warn!(
                "[{}] Rejected (HTTP {status}) with unparseable body",
                self.backend
            );
        }
        BackendError::Rejected {
            backend: self.backend.to_string(),
            message,
        }
    }

    /// Parse a successful JSON response body.
    fn parse_json<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        serde_json::from_str(text).map_err(|e| {
            log::error!("[{}] JSON parse failed: {e}", self.backend);
            log::error!("[{}] Raw response: {text}", self.backend);
            BackendError::ParseError {
                backend: self.backend.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
