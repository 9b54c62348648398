// ============================================================================
// Nav Core - Destination Entity
// File: crates/nav-core/src/domain/destination.rs
// Description: Node of the navigation tree (leaf or collapsible group)
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::role::Role;

/// Opaque reference to a visual icon. The engine never inspects or branches
/// on its contents; the display layer resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Destination entity: one node of the menu tree.
///
/// A node with a non-empty `children` list is a group; groups may carry a
/// legacy `path` but are never navigated to, only toggled. An absent
/// `allowed_roles` means visible to every role; a present set must be
/// non-empty (enforced at catalog construction).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Destination {
    #[validate(length(min = 1, max = 64, message = "Destination id must be between 1 and 64 characters"))]
    pub id: String,

    #[validate(length(min = 1, max = 100, message = "Label must be between 1 and 100 characters"))]
    pub label: String,

    pub icon: IconRef,

    #[validate(length(max = 255, message = "Destination path too long"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_roles: Option<Vec<Role>>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Destination>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Destination {
    /// Leaf destination with a navigable path.
    pub fn leaf(id: &str, label: &str, icon: &str, path: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: IconRef::new(icon),
            path: Some(path.to_string()),
            allowed_roles: None,
            children: Vec::new(),
            badge: None,
        }
    }

    /// Group destination holding an ordered list of children.
    pub fn group(id: &str, label: &str, icon: &str, children: Vec<Destination>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: IconRef::new(icon),
            path: None,
            allowed_roles: None,
            children,
            badge: None,
        }
    }

    pub fn with_roles(mut self, roles: &[Role]) -> Self {
        self.allowed_roles = Some(roles.to_vec());
        self
    }

    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badge = Some(badge.to_string());
        self
    }

    /// Legacy path on a group node; kept for display routing history but
    /// never treated as a navigation target.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Role check for this node alone (children are checked separately).
    /// `None` fails closed: only role-free nodes stay visible.
    pub fn visible_to(&self, role: Option<Role>) -> bool {
        match &self.allowed_roles {
            None => true,
            Some(allowed) => role.map_or(false, |r| allowed.contains(&r)),
        }
    }
}
