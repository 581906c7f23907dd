//! Platform integrations. Only the LLM invocation is used by this client.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::client::BackendClient;
use crate::error::BackendError;

const INVOKE_PATH: &str = "/api/integrations/llm/invoke";

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    text: String,
}

/// Invoke the platform's language-model integration with a plain-text
/// prompt and return the completion text.
///
/// Any failure — transport, timeout, or a non-2xx platform response — is
/// collapsed into [`BackendError::Invocation`]; callers see a single
/// generic invocation error.
pub async fn invoke_llm(client: &BackendClient, prompt: &str) -> Result<String, BackendError> {
    debug!(prompt_len = prompt.len(), "invoking language model");
    let req = client
        .request(Method::POST, INVOKE_PATH)
        .json(&json!({ "prompt": prompt }));
    let resp: InvokeResponse = client
        .send_json(req, INVOKE_PATH)
        .await
        .map_err(|e| BackendError::Invocation(e.to_string()))?;
    Ok(resp.text)
}
