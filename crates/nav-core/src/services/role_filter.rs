// ============================================================================
// Nav Core - Role Filter
// File: crates/nav-core/src/services/role_filter.rs
// Description: Catalog x role -> visible subset, order-preserving
// ============================================================================

use crate::domain::{Destination, MenuCatalog, Role};

/// Visible subset of the catalog for `role`. A node survives iff it carries
/// no `allowed_roles` or the role is a member; children of surviving nodes
/// are filtered by the same rule. Groups whose children all fall away are
/// kept with an empty child list, not pruned.
pub fn filter(catalog: &MenuCatalog, role: Option<Role>) -> Vec<Destination> {
    filter_nodes(catalog.destinations(), role)
}

fn filter_nodes(nodes: &[Destination], role: Option<Role>) -> Vec<Destination> {
    nodes
        .iter()
        .filter(|node| node.visible_to(role))
        .map(|node| {
            let mut kept = node.clone();
            kept.children = filter_nodes(&node.children, role);
            kept
        })
        .collect()
}
