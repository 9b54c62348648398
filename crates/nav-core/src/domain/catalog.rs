// ============================================================================
// Nav Core - Menu Catalog
// File: crates/nav-core/src/domain/catalog.rs
// Description: Immutable ordered destination tree plus the landing path
// ============================================================================

use std::collections::HashSet;

use serde::Serialize;
use validator::Validate;

use crate::error::DomainError;
use nav_shared::constants::MAX_MENU_DEPTH;

use super::destination::Destination;
use super::role::Role;

/// The full navigation tree. Configuration, not runtime state: built once,
/// validated, and only ever read afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct MenuCatalog {
    destinations: Vec<Destination>,
    root_path: String,
}

impl MenuCatalog {
    /// Build a catalog, enforcing the tree invariants: globally-unique ids,
    /// non-empty `allowed_roles` where present, bounded depth, and per-node
    /// field validation.
    pub fn new(destinations: Vec<Destination>, root_path: &str) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for dest in &destinations {
            check_subtree(dest, &mut seen, 1)?;
        }
        Ok(Self {
            destinations,
            root_path: root_path.to_string(),
        })
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Landing destination; the route matcher treats it as exact-match only.
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Depth-first lookup by id.
    pub fn find(&self, id: &str) -> Option<&Destination> {
        fn find_in<'a>(nodes: &'a [Destination], id: &str) -> Option<&'a Destination> {
            for node in nodes {
                if node.id == id {
                    return Some(node);
                }
                if let Some(found) = find_in(&node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        find_in(&self.destinations, id)
    }
}

fn check_subtree(
    dest: &Destination,
    seen: &mut HashSet<String>,
    depth: usize,
) -> Result<(), DomainError> {
    if depth > MAX_MENU_DEPTH {
        return Err(DomainError::MenuTooDeep {
            id: dest.id.clone(),
            max: MAX_MENU_DEPTH,
        });
    }
    dest.validate()
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;
    if !seen.insert(dest.id.clone()) {
        return Err(DomainError::DuplicateDestinationId(dest.id.clone()));
    }
    if let Some(roles) = &dest.allowed_roles {
        if roles.is_empty() {
            return Err(DomainError::EmptyAllowedRoles(dest.id.clone()));
        }
    }
    for child in &dest.children {
        check_subtree(child, seen, depth + 1)?;
    }
    Ok(())
}

/// The StaffHub console tree. Order here is display order.
pub fn default_catalog() -> Result<MenuCatalog, DomainError> {
    MenuCatalog::new(
        vec![
            Destination::leaf("dashboard", "Dashboard", "home", "/dashboard"),
            Destination::group(
                "attendance",
                "Attendance",
                "clock",
                vec![
                    Destination::leaf("attendance-me", "My Attendance", "user-check", "/attendance/me"),
                    Destination::leaf("attendance-report", "Team Report", "bar-chart", "/attendance/report")
                        .with_roles(&[Role::Admin, Role::Hr]),
                ],
            ),
            Destination::group(
                "leave",
                "Leave",
                "calendar",
                vec![
                    Destination::leaf("leave-apply", "Apply Leave", "calendar-plus", "/leave/apply"),
                    Destination::leaf("leave-history", "Leave History", "history", "/leave/history"),
                    Destination::leaf("leave-approvals", "Approvals", "check-circle", "/leave/approvals")
                        .with_roles(&[Role::Admin, Role::Hr]),
                ],
            )
            .with_path("/leave"),
            Destination::group(
                "payroll",
                "Payroll",
                "banknote",
                vec![
                    Destination::leaf("payslips", "My Payslips", "file-text", "/payroll/payslips"),
                    Destination::leaf("payroll-runs", "Payroll Runs", "calculator", "/payroll/runs")
                        .with_roles(&[Role::Admin]),
                ],
            ),
            Destination::group(
                "employees",
                "Employees",
                "users",
                vec![
                    Destination::leaf("directory", "Directory", "book-user", "/employees/directory"),
                    Destination::leaf("onboarding", "Onboarding", "user-plus", "/employees/onboarding"),
                ],
            )
            .with_roles(&[Role::Admin, Role::Hr]),
            Destination::leaf("helpdesk", "Help Desk", "life-buoy", "/helpdesk").with_badge("2"),
            Destination::leaf("settings", "Settings", "settings", "/settings")
                .with_roles(&[Role::Admin]),
        ],
        "/dashboard",
    )
}
