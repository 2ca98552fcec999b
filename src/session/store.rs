use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::models::Identity;
use crate::session::state::{Session, Snapshot};
use crate::storage::Storage;

/// Storage key for the raw access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the raw refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Storage key for the serialized session snapshot
pub const SESSION_KEY: &str = "auth-storage";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("storage operation failed: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("session snapshot is corrupt: {0}")]
    CorruptSnapshot(#[from] serde_json::Error),

    #[error("identity update requires an authenticated session")]
    NotAuthenticated,
}

/// Holds the process-wide session and mirrors it into durable storage.
///
/// All mutation goes through `login`, `logout`, and `update_identity`; each
/// computes the next `Session`, persists it, then swaps it in and notifies
/// subscribers in one step. Readers take whole-session snapshots via
/// `session()` or a `subscribe()` receiver, never field-at-a-time views.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    state: watch::Sender<Session>,
}

impl<S: Storage> SessionStore<S> {
    /// Store with an empty, unauthenticated session.
    pub fn new(storage: S) -> Self {
        let (state, _) = watch::channel(Session::logged_out());
        Self { storage, state }
    }

    /// Store restored from the snapshot a previous run left in `storage`.
    ///
    /// A missing snapshot starts empty. One that fails the authentication
    /// invariant is discarded rather than trusted, and storage is reset to
    /// the logged-out layout so no stale token keys outlive it.
    pub fn open(storage: S) -> Result<Self, SessionError> {
        let mut store = Self::new(storage);
        if let Some(raw) = store.storage.get(SESSION_KEY)? {
            let snapshot: Snapshot = serde_json::from_str(&raw)?;
            if snapshot.session.is_consistent() {
                debug!(
                    authenticated = snapshot.session.authenticated,
                    saved_at = %snapshot.saved_at,
                    "restored session snapshot"
                );
                store.state.send_replace(snapshot.session);
            } else {
                warn!("discarding session snapshot that fails the authentication invariant");
                store.storage.remove(ACCESS_TOKEN_KEY)?;
                store.storage.remove(REFRESH_TOKEN_KEY)?;
                store.persist(&Session::logged_out())?;
            }
        }
        Ok(store)
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().authenticated
    }

    /// Watch the session. The receiver observes every subsequent change
    /// without polling.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Record a successful login.
    ///
    /// Both tokens and the snapshot reach durable storage before the
    /// in-memory session flips, so a crash in between leaves at worst a
    /// restorable logged-in snapshot, never a half-authenticated session.
    pub fn login(
        &mut self,
        identity: Identity,
        access_token: String,
        refresh_token: String,
    ) -> Result<(), SessionError> {
        let user = identity.id.clone();
        self.storage.put(ACCESS_TOKEN_KEY, &access_token)?;
        self.storage.put(REFRESH_TOKEN_KEY, &refresh_token)?;

        let next = Session::logged_in(identity, access_token, refresh_token);
        self.persist(&next)?;

        info!(%user, "logged in");
        self.state.send_replace(next);
        Ok(())
    }

    /// Clear the session and both token keys. Safe to call when already
    /// logged out.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.storage.remove(ACCESS_TOKEN_KEY)?;
        self.storage.remove(REFRESH_TOKEN_KEY)?;

        let next = Session::logged_out();
        self.persist(&next)?;

        info!("logged out");
        self.state.send_replace(next);
        Ok(())
    }

    /// Replace the identity of the signed-in user, leaving tokens and the
    /// authenticated flag alone.
    ///
    /// Rejected while logged out: an identity without a live session would
    /// break the authentication invariant.
    pub fn update_identity(&mut self, identity: Identity) -> Result<(), SessionError> {
        if !self.is_authenticated() {
            return Err(SessionError::NotAuthenticated);
        }

        let next = self.session().with_identity(identity);
        self.persist(&next)?;

        debug!("identity updated");
        self.state.send_replace(next);
        Ok(())
    }

    fn persist(&mut self, next: &Session) -> Result<(), SessionError> {
        let contents = serde_json::to_string(&Snapshot::new(next.clone()))?;
        self.storage.put(SESSION_KEY, &contents)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
