//! Data models for the session layer.

pub mod identity;

pub use identity::{Capability, Identity, Permission, Role, RoleDescriptor};
