use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("not found: {path}")]
    NotFound { path: String },

    #[error("platform returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("LLM invocation failed: {0}")]
    Invocation(String),
}
