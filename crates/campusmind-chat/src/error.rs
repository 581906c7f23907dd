use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("profile fetch failed: {0}")]
    Profile(String),

    #[error("message persistence failed: {0}")]
    Store(String),

    #[error("model invocation failed: {0}")]
    Completion(String),
}
