use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Identity;

/// Whole-process authentication state.
///
/// The four fields move together: every transition produces a complete new
/// `Session`, so a reader holding a snapshot never sees a half-applied
/// update. `authenticated` is true only between a successful login and the
/// next logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Option<Identity>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub authenticated: bool,
}

impl Session {
    /// State after a successful login.
    pub fn logged_in(identity: Identity, access_token: String, refresh_token: String) -> Self {
        Self {
            identity: Some(identity),
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
            authenticated: true,
        }
    }

    /// The empty, unauthenticated state.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Same session with the identity swapped out. Tokens and the
    /// authenticated flag are untouched.
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Authenticated implies identity and both tokens are present.
    pub fn is_consistent(&self) -> bool {
        !self.authenticated
            || (self.identity.is_some()
                && self.access_token.is_some()
                && self.refresh_token.is_some())
    }
}

/// Persisted form of a session, stamped with the write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub session: Session,
    pub saved_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            saved_at: Utc::now(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
