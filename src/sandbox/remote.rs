//! Thin HTTP pass-through to the sandbox-provisioning service.
//!
//! No retries, no backoff, no response inspection beyond decoding the
//! returned ids. Failures map to [`SandboxError`] and propagate unchanged.

use serde::Deserialize;

use super::error::{Result, SandboxError};
use super::provisioner::{CreateSandboxRequest, ImageRef, ProvisionerInterface, SandboxHandle};

const PROVISIONER_URL_VAR: &str = "PROVISIONER_URL";
const PROVISIONER_TOKEN_VAR: &str = "PROVISIONER_TOKEN";

#[derive(Debug, Clone)]
pub struct RemoteProvisioner {
    base_url: String,
    api_token: String,
}

#[derive(Debug, Deserialize)]
struct CreateSandboxResponse {
    sandbox_id: String,
}

impl RemoteProvisioner {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Read the provisioning endpoint and API token from the environment.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(PROVISIONER_URL_VAR)
            .map_err(|_| SandboxError::Configuration(PROVISIONER_URL_VAR))?;
        let api_token = std::env::var(PROVISIONER_TOKEN_VAR)
            .map_err(|_| SandboxError::Configuration(PROVISIONER_TOKEN_VAR))?;
        Ok(Self::new(base_url, api_token))
    }

    fn client(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .user_agent("sandbox-infra")
            .build()?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl ProvisionerInterface for RemoteProvisioner {
    async fn create_sandbox(&self, request: &CreateSandboxRequest) -> Result<SandboxHandle> {
        let response = self
            .client()?
            .post(self.endpoint("v1/sandboxes"))
            .bearer_auth(&self.api_token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SandboxError::CreateFailed(format!(
                "HTTP {}: {}",
                status,
                body.trim()
            )));
        }

        let created: CreateSandboxResponse = response.json().await?;
        tracing::debug!("Provisioner returned sandbox '{}'", created.sandbox_id);

        Ok(SandboxHandle {
            sandbox_id: created.sandbox_id,
        })
    }

    async fn image_from_snapshot(&self, snapshot_image_id: &str) -> Result<ImageRef> {
        let response = self
            .client()?
            .get(self.endpoint(&format!("v1/images/{}", snapshot_image_id)))
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SandboxError::ImageNotFound(snapshot_image_id.to_string()));
        }

        if !response.status().is_success() {
            return Err(SandboxError::RequestFailed(format!(
                "HTTP {} resolving image {}",
                response.status(),
                snapshot_image_id
            )));
        }

        Ok(response.json().await?)
    }

    fn default_sandbox_image(&self) -> &'static str {
        "ghcr.io/sandbox-infra/agent-sandbox:latest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let provisioner = RemoteProvisioner::new("https://provisioner.example/", "tok");
        assert_eq!(
            provisioner.endpoint("v1/sandboxes"),
            "https://provisioner.example/v1/sandboxes"
        );

        let provisioner = RemoteProvisioner::new("https://provisioner.example", "tok");
        assert_eq!(
            provisioner.endpoint("v1/images/img-1"),
            "https://provisioner.example/v1/images/img-1"
        );
    }
}
