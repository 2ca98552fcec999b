//! Mostrador client session layer.
//!
//! This crate holds the authentication state of the Mostrador shop front-end:
//! - `SessionStore`: the signed-in identity and bearer-token pair, mirrored
//!   into durable storage so a fresh process can pick up where it left off
//! - `AccessGuard`: the render-time decision gating the staff-only area
//! - `Storage`: the key-value surface the store persists through, with
//!   keychain, file, and in-memory adapters
//!
//! The store publishes every change through a watch channel, so readers
//! never have to poll for login or logout.

pub mod guard;
pub mod models;
pub mod session;
pub mod storage;

pub use guard::{AccessDecision, AccessGuard};
pub use models::{Capability, Identity, Permission, Role, RoleDescriptor};
pub use session::{Session, SessionError, SessionStore};
pub use storage::{FileStorage, KeyringStorage, MemoryStorage, Storage};
