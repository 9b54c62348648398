// ============================================================================
// Nav Core - Role Entity
// File: crates/nav-core/src/domain/role.rs
// Description: Closed set of acting-user roles gating destination visibility
// ============================================================================

use serde::{Deserialize, Serialize};

/// Acting-user role. The set is closed so that role-based branching stays
/// exhaustiveness-checked; an unknown role string maps to `None` upstream
/// and restricted destinations are filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Employee => "employee",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "hr" => Some(Role::Hr),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
