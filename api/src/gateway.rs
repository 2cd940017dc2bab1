//! # Gateway — the one request path to the backend
//!
//! A [`Gateway`] owns a [`reqwest::Client`] and a base origin. Every operation
//! in this crate funnels through [`Gateway::request`]: build the URL, attach a
//! JSON content-type, send, and decode the body as JSON. There is deliberately
//! no retry, no timeout, and no status-code validation — the backend reports
//! its errors inside JSON bodies, and a non-2xx response that still decodes is
//! treated as success. The only failures are transport errors and bodies that
//! do not decode, both surfaced as [`ApiError`].
//!
//! The UI uses the process-wide [`Gateway::shared`] instance bound to
//! [`DEFAULT_BASE_URL`]; tests construct their own with [`Gateway::new`] and
//! point it at a local mock server.

use std::sync::OnceLock;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Fixed origin of the backend. Not configurable at runtime.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Errors a gateway call can produce.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape the caller expected.
    #[error("invalid response from {path}: {source}")]
    Decode {
        path: String,
        source: reqwest::Error,
    },
}

/// Thin HTTP client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The process-wide gateway bound to [`DEFAULT_BASE_URL`].
    pub fn shared() -> &'static Gateway {
        static SHARED: OnceLock<Gateway> = OnceLock::new();
        SHARED.get_or_init(|| Gateway::new(DEFAULT_BASE_URL))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// The single request path shared by every operation.
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        // Status codes are not consulted; the body decides.
        response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
