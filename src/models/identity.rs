use serde::{Deserialize, Serialize};

/// Things a protected region of the front-end can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Access to the staff-only area (dashboards, order management).
    StaffArea,
}

/// Closed set of roles the backend assigns to accounts.
///
/// Role names on the wire are the backend's Spanish labels ("Empleado" is
/// staff, "Cliente" is a customer). Anything unrecognized collapses into
/// `Unknown`, which grants nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Empleado,
    Cliente,
    Unknown,
}

impl Role {
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Admin | Role::Empleado => &[Capability::StaffArea],
            Role::Cliente | Role::Unknown => &[],
        }
    }

    pub fn grants(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Admin" => Role::Admin,
            "Empleado" => Role::Empleado,
            "Cliente" => Role::Cliente,
            _ => Role::Unknown,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Empleado => write!(f, "Empleado"),
            Role::Cliente => write!(f, "Cliente"),
            Role::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    pub code: String,
    pub name: String,
}

/// Role assignment attached to an identity by the login API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDescriptor {
    pub role: Role,
    #[serde(default)]
    pub permissions: Option<Vec<Permission>>,
}

/// Profile of the signed-in user, as supplied by the login API.
///
/// `role` is absent for accounts that never carried one; once set it always
/// reflects the last successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<RoleDescriptor>,
}

impl Identity {
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref().filter(|n| !n.is_empty()) {
            Some(full) => full.to_string(),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Whether this user's role grants `capability`. Absent role grants
    /// nothing.
    pub fn grants(&self, capability: Capability) -> bool {
        self.role
            .as_ref()
            .is_some_and(|r| r.role.grants(capability))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Option<Role>) -> Identity {
        Identity {
            id: "u-17".to_string(),
            email: "ana@mostrador.mx".to_string(),
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            full_name: None,
            role: role.map(|role| RoleDescriptor {
                role,
                permissions: None,
            }),
        }
    }

    #[test]
    fn test_role_from_wire_name() {
        assert_eq!(Role::from("Admin".to_string()), Role::Admin);
        assert_eq!(Role::from("Empleado".to_string()), Role::Empleado);
        assert_eq!(Role::from("Cliente".to_string()), Role::Cliente);
        assert_eq!(Role::from("SuperUser".to_string()), Role::Unknown);
    }

    #[test]
    fn test_role_deserializes_unrecognized_name_as_unknown() {
        let role: Role = serde_json::from_str("\"Gerente\"").unwrap();
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn test_role_serializes_as_wire_name() {
        assert_eq!(serde_json::to_string(&Role::Empleado).unwrap(), "\"Empleado\"");
    }

    #[test]
    fn test_staff_roles_grant_staff_area() {
        assert!(Role::Admin.grants(Capability::StaffArea));
        assert!(Role::Empleado.grants(Capability::StaffArea));
        assert!(!Role::Cliente.grants(Capability::StaffArea));
        assert!(!Role::Unknown.grants(Capability::StaffArea));
    }

    #[test]
    fn test_identity_without_role_grants_nothing() {
        assert!(!identity(None).grants(Capability::StaffArea));
        assert!(identity(Some(Role::Admin)).grants(Capability::StaffArea));
    }

    #[test]
    fn test_display_name_falls_back_to_composed_name() {
        let mut id = identity(None);
        assert_eq!(id.display_name(), "Ana García");

        id.full_name = Some("Ana María García".to_string());
        assert_eq!(id.display_name(), "Ana María García");
    }
}
