//! HTTP plumbing for the hosted platform API.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::BackendError;

/// Client for the hosted platform's REST API.
///
/// Cheap to clone; the underlying connection pool is shared. Every request
/// carries the platform API key as a bearer token and the application id
/// as a header.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    app_id: String,
}

impl BackendClient {
    pub fn new(base_url: &str, api_key: &str, app_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            app_id: app_id.to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.api_key)
            .header("X-App-Id", &self.app_id)
    }

    /// Send a request and decode a JSON body, mapping platform error
    /// responses into [`BackendError`].
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        path: &str,
    ) -> Result<T, BackendError> {
        let resp = req.send().await?;
        let resp = check_status(resp, path).await?;
        Ok(resp.json::<T>().await?)
    }
}

async fn check_status(resp: Response, path: &str) -> Result<Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(BackendError::NotFound {
            path: path.to_string(),
        });
    }
    let body = resp.text().await.unwrap_or_default();
    Err(BackendError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pull the `error` field out of a platform error body, falling back to
/// the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
