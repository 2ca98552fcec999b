//! Session state and the persisted session store.
//!
//! This module provides:
//! - `Session`: the whole-process authentication state (identity + tokens)
//! - `SessionStore`: mutation operations with durable persistence and
//!   change notifications
//!
//! Sessions survive restarts through a snapshot written on every change.

pub mod state;
pub mod store;

pub use state::{Session, Snapshot};
pub use store::{SessionError, SessionStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SESSION_KEY};
