// ============================================================================
// Nav Core - Route Matcher
// File: crates/nav-core/src/services/route_matcher.rs
// Description: Destination path x current location -> active flags
// ============================================================================

use crate::domain::Destination;
use nav_shared::utils::normalize_path;

/// Whether `path` is active at `location`.
///
/// Exact matches are always active. Every path except `root_path` also
/// matches as a segment-aligned prefix: `/leave` is active at
/// `/leave/history` but not at `/leaves`. The root path matches only
/// exactly, so the landing destination does not light up under every deep
/// route. Empty or malformed inputs are simply inactive.
pub fn is_active(path: &str, location: &str, root_path: &str) -> bool {
    let path = normalize_path(path);
    let location = normalize_path(location);
    if path.is_empty() || location.is_empty() {
        return false;
    }
    if location == path {
        return true;
    }
    if path == normalize_path(root_path) {
        return false;
    }
    match location.strip_prefix(path) {
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// Whether any node in `node`'s subtree (strictly below it) is active at
/// `location`. Nodes without a path are skipped, never matched.
pub fn has_active_descendant(node: &Destination, location: &str, root_path: &str) -> bool {
    node.children.iter().any(|child| {
        child
            .path
            .as_deref()
            .is_some_and(|p| is_active(p, location, root_path))
            || has_active_descendant(child, location, root_path)
    })
}
