//! Session configuration records handed over by the control plane.

use serde::{Deserialize, Serialize};

/// Identifies the agent session a restored sandbox belongs to.
///
/// Supplied by the caller as an opaque record (typically deserialized from
/// JSON); the restore path only reads named fields from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub repo_owner: String,
    pub repo_name: String,
    pub provider: String,
    pub model: String,
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_deserializes_from_control_plane_json() {
        let json = r#"{
            "repo_owner": "acme",
            "repo_name": "repo",
            "provider": "anthropic",
            "model": "claude-sonnet-4-5",
            "session_id": "sess-1"
        }"#;

        let session: SessionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(session.repo_owner, "acme");
        assert_eq!(session.provider, "anthropic");
        assert_eq!(session.session_id, "sess-1");
    }
}
