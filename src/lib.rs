//! Sandbox Infra library - Sandbox provisioning for AI agent sessions
//!
//! Launches isolated execution sandboxes (fresh or restored from a snapshot)
//! for agent sessions against a repository. The sandbox lifecycle itself is
//! delegated to an external provisioning service; this crate owns the
//! environment handed to it.

pub mod sandbox;
pub mod session;
