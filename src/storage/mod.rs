//! Durable key-value storage behind the session store.
//!
//! This module provides:
//! - `Storage`: the string-to-string surface the store persists through
//! - `KeyringStorage`: OS keychain entries via keyring
//! - `FileStorage`: one file per key under an app data directory
//! - `MemoryStorage`: HashMap-backed, for tests and embedding
//!
//! The store treats a storage failure as fatal to the feature; adapters
//! report errors but never retry.

pub mod file;
pub mod keyring;
pub mod memory;

pub use file::FileStorage;
pub use keyring::KeyringStorage;
pub use memory::MemoryStorage;

use anyhow::Result;

pub trait Storage {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
