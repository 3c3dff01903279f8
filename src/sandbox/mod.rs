pub mod environment;
pub mod error;
pub mod provisioner;
pub mod remote;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::session::SessionConfig;
pub use error::{Result, SandboxError};
pub use provisioner::{CreateSandboxRequest, ImageRef, ProvisionerInterface, SandboxHandle};
pub use remote::RemoteProvisioner;

/// Caller-supplied parameters for launching a fresh sandbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxConfig {
    pub repo_owner: String,
    pub repo_name: String,
    pub control_plane_url: String,
    pub sandbox_auth_token: String,

    /// Sandbox image override; falls back to the provisioner default.
    #[serde(default)]
    pub image: Option<String>,

    /// End-user variables (secrets, custom configuration). Untrusted: they
    /// are forwarded verbatim but never allowed to shadow system variables.
    #[serde(default)]
    pub user_env_vars: Option<HashMap<String, String>>,
}

/// Parameters for recreating a sandbox from a saved snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreRequest {
    pub snapshot_image_id: String,
    pub session: SessionConfig,
    pub control_plane_url: String,
    pub sandbox_auth_token: String,

    #[serde(default)]
    pub user_env_vars: Option<HashMap<String, String>>,
}

pub fn default_provisioner() -> Result<impl ProvisionerInterface> {
    RemoteProvisioner::from_env()
}

/// Orchestrates sandbox creation and restoration against an injected
/// provisioning backend. Stateless apart from the backend itself; safe to
/// call concurrently for independent requests.
pub struct SandboxManager<P: ProvisionerInterface> {
    provisioner: P,
}

/// Stable sandbox name derived from the session id, used for log context.
pub fn generate_name(session_id: &str) -> String {
    let truncated: String = session_id.chars().take(8).collect();
    format!("sbx-{}", truncated)
}

impl<P> SandboxManager<P>
where
    P: ProvisionerInterface + Default,
{
    pub fn new() -> Self {
        Self {
            provisioner: P::default(),
        }
    }
}

impl<P> Default for SandboxManager<P>
where
    P: ProvisionerInterface + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ProvisionerInterface> SandboxManager<P> {
    pub fn with_provisioner(provisioner: P) -> Self {
        Self { provisioner }
    }

    /// Launch a fresh sandbox for the repository named in `config`.
    ///
    /// The environment is composed before the provisioning call: system
    /// variables win over user-supplied ones, and a missing control-plane
    /// URL or auth token aborts before the service is ever contacted.
    pub async fn create_sandbox(&self, config: &SandboxConfig) -> Result<SandboxHandle> {
        let system = environment::system_env_for_create(config);
        let env = environment::compose(&system, config.user_env_vars.as_ref())?;

        let image = config
            .image
            .clone()
            .unwrap_or_else(|| self.provisioner.default_sandbox_image().to_string());

        tracing::info!(
            "Creating sandbox for {}/{} with image '{}'",
            config.repo_owner,
            config.repo_name,
            image
        );
        // Key count only; values carry secrets
        tracing::debug!("Composed {} environment variables", env.len());

        self.provisioner
            .create_sandbox(&CreateSandboxRequest { image, env })
            .await
    }

    /// Recreate a sandbox from a saved snapshot image.
    ///
    /// Same precedence guarantees as [`Self::create_sandbox`]; the system
    /// set additionally carries the provider, model, and session id from
    /// the session record. Composition failures surface before the
    /// snapshot image is resolved.
    pub async fn restore_from_snapshot(&self, request: &RestoreRequest) -> Result<SandboxHandle> {
        let system = environment::system_env_for_restore(request);
        let env = environment::compose(&system, request.user_env_vars.as_ref())?;

        let image = self
            .provisioner
            .image_from_snapshot(&request.snapshot_image_id)
            .await?;

        tracing::info!(
            "Restoring sandbox '{}' from image '{}'",
            generate_name(&request.session.session_id),
            image.image_id
        );

        self.provisioner
            .create_sandbox(&CreateSandboxRequest {
                image: image.image_id,
                env,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_name_short_id() {
        assert_eq!(generate_name("abc"), "sbx-abc");
    }

    #[test]
    fn test_generate_name_long_id() {
        assert_eq!(generate_name("abcdefghijklmnop"), "sbx-abcdefgh");
    }
}
