use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Everything the provisioning service needs to launch one sandbox.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSandboxRequest {
    pub image: String,
    pub env: HashMap<String, String>,
}

/// Opaque handle to a provisioned sandbox. Never inspected beyond its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxHandle {
    pub sandbox_id: String,
}

/// A runnable image resolved from a saved snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    pub image_id: String,
}

/// Contract with the external sandbox-provisioning service.
///
/// The manager is generic over this so tests can substitute a fake that
/// captures the forwarded environment instead of contacting the service.
#[allow(async_fn_in_trait)]
pub trait ProvisionerInterface {
    /// Launch a sandbox with the given image and composed environment.
    async fn create_sandbox(&self, request: &CreateSandboxRequest) -> Result<SandboxHandle>;

    /// Resolve a previously saved snapshot into a runnable image.
    async fn image_from_snapshot(&self, snapshot_image_id: &str) -> Result<ImageRef>;

    /// The fallback sandbox image when the caller does not pin one.
    fn default_sandbox_image(&self) -> &'static str;
}
