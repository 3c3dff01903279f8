use thiserror::Error;

#[derive(Debug, Error)]
pub enum SandboxError {
    #[error(
        "Required sandbox variable {0} is missing or empty.\n\
         Provisioning was aborted before contacting the sandbox service."
    )]
    Configuration(&'static str),

    #[error("Snapshot image not found: {0}")]
    ImageNotFound(String),

    #[error("Failed to create sandbox: {0}")]
    CreateFailed(String),

    #[error("Provisioner request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SandboxError>;
