//! Environment variable composition for sandbox provisioning.
//!
//! Pure functions for building the environment handed to the provisioning
//! service. Platform-controlled variables (identity, auth, control-plane
//! endpoint) are merged over user-supplied ones so a user value can never
//! shadow a trusted one.

use std::collections::HashMap;

use super::error::{Result, SandboxError};
use super::{RestoreRequest, SandboxConfig};

pub const CONTROL_PLANE_URL: &str = "CONTROL_PLANE_URL";
pub const SANDBOX_AUTH_TOKEN: &str = "SANDBOX_AUTH_TOKEN";
pub const REPO_OWNER: &str = "REPO_OWNER";
pub const REPO_NAME: &str = "REPO_NAME";
pub const PROVIDER: &str = "PROVIDER";
pub const MODEL: &str = "MODEL";
pub const SESSION_ID: &str = "SESSION_ID";

/// Variables that must be present and non-empty before any provisioning
/// call is attempted. Never defaulted when blank.
const REQUIRED_SYSTEM_VARS: &[&str] = &[CONTROL_PLANE_URL, SANDBOX_AUTH_TOKEN];

/// System variables for launching a fresh sandbox.
pub(crate) fn system_env_for_create(config: &SandboxConfig) -> HashMap<String, String> {
    HashMap::from([
        (CONTROL_PLANE_URL.to_string(), config.control_plane_url.clone()),
        (SANDBOX_AUTH_TOKEN.to_string(), config.sandbox_auth_token.clone()),
        (REPO_OWNER.to_string(), config.repo_owner.clone()),
        (REPO_NAME.to_string(), config.repo_name.clone()),
    ])
}

/// System variables for restoring a sandbox from a snapshot. Extends the
/// create set with the session-identifying fields from the session record.
pub(crate) fn system_env_for_restore(request: &RestoreRequest) -> HashMap<String, String> {
    let session = &request.session;
    HashMap::from([
        (CONTROL_PLANE_URL.to_string(), request.control_plane_url.clone()),
        (SANDBOX_AUTH_TOKEN.to_string(), request.sandbox_auth_token.clone()),
        (REPO_OWNER.to_string(), session.repo_owner.clone()),
        (REPO_NAME.to_string(), session.repo_name.clone()),
        (PROVIDER.to_string(), session.provider.clone()),
        (MODEL.to_string(), session.model.clone()),
        (SESSION_ID.to_string(), session.session_id.clone()),
    ])
}

/// Merge user-supplied variables under the system-controlled ones.
///
/// The user map is copied first and system entries are written on top, so a
/// colliding user key is silently overridden rather than rejected, and user
/// keys that don't collide pass through verbatim. Neither input is mutated;
/// identical inputs always produce an identical result.
pub(crate) fn compose(
    system: &HashMap<String, String>,
    user: Option<&HashMap<String, String>>,
) -> Result<HashMap<String, String>> {
    for &key in REQUIRED_SYSTEM_VARS {
        if system.get(key).is_none_or(|v| v.is_empty()) {
            return Err(SandboxError::Configuration(key));
        }
    }

    let mut env = user.cloned().unwrap_or_default();
    for (key, value) in system {
        env.insert(key.clone(), value.clone());
    }

    Ok(env)
}
