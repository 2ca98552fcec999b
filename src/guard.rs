//! Render-time access decision for protected regions.

use crate::models::Capability;
use crate::session::Session;

/// Outcome of an access check. Performing the redirect belongs to the
/// host's navigation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the protected region.
    Render,
    /// Not signed in; send the visitor to the login page.
    RedirectToLogin,
    /// Signed in but not allowed here; send them to the home page.
    RedirectToHome,
}

/// Gate for a protected region, parameterized by the capability the region
/// requires.
///
/// The guard holds no state and caches nothing; callers evaluate it on
/// every render pass because the session can change between passes.
#[derive(Debug, Clone, Copy)]
pub struct AccessGuard {
    required: Capability,
}

impl AccessGuard {
    pub fn new(required: Capability) -> Self {
        Self { required }
    }

    /// Guard for the staff-only area.
    pub fn staff_area() -> Self {
        Self::new(Capability::StaffArea)
    }

    /// First match wins: unauthenticated goes to login, a role granting the
    /// required capability renders, everything else goes home.
    pub fn evaluate(&self, session: &Session) -> AccessDecision {
        if !session.authenticated {
            return AccessDecision::RedirectToLogin;
        }
        let granted = session
            .identity
            .as_ref()
            .is_some_and(|i| i.grants(self.required));
        if granted {
            AccessDecision::Render
        } else {
            AccessDecision::RedirectToHome
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Identity, Role, RoleDescriptor};

    fn session_with(role: Option<Role>) -> Session {
        let identity = Identity {
            id: "u-1".to_string(),
            email: "ana@mostrador.mx".to_string(),
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            full_name: None,
            role: role.map(|role| RoleDescriptor {
                role,
                permissions: None,
            }),
        };
        Session::logged_in(identity, "tok_a".to_string(), "tok_r".to_string())
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let guard = AccessGuard::staff_area();
        assert_eq!(
            guard.evaluate(&Session::logged_out()),
            AccessDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_staff_roles_render() {
        let guard = AccessGuard::staff_area();
        assert_eq!(
            guard.evaluate(&session_with(Some(Role::Admin))),
            AccessDecision::Render
        );
        assert_eq!(
            guard.evaluate(&session_with(Some(Role::Empleado))),
            AccessDecision::Render
        );
    }

    #[test]
    fn test_customer_redirects_home() {
        let guard = AccessGuard::staff_area();
        assert_eq!(
            guard.evaluate(&session_with(Some(Role::Cliente))),
            AccessDecision::RedirectToHome
        );
    }

    #[test]
    fn test_unknown_or_missing_role_redirects_home() {
        let guard = AccessGuard::staff_area();
        assert_eq!(
            guard.evaluate(&session_with(Some(Role::Unknown))),
            AccessDecision::RedirectToHome
        );
        assert_eq!(
            guard.evaluate(&session_with(None)),
            AccessDecision::RedirectToHome
        );
    }
}
