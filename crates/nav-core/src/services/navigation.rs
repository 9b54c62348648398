// ============================================================================
// Nav Core - Navigation Controller
// File: crates/nav-core/src/services/navigation.rs
// Description: Per-render composition of filter, matcher, and toggle state
// ============================================================================
//! Navigation controller: renders the visible menu and handles clicks,
//! layout toggles, and logout requests.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{Destination, IconRef, MenuCatalog};
use crate::ports::{IdentityError, IdentityProvider, RouteDispatcher};
use crate::services::{role_filter, route_matcher};
use crate::state::{ExpansionState, LayoutMode};

/// One rendered destination, ready for display. When the layout is
/// collapsed, `label` is absent and `children` is empty regardless of
/// expansion membership.
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub icon: IconRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub is_group: bool,
    pub active: bool,
    pub child_active: bool,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

/// Orchestrates the menu for one mounted navigation surface. Owns the
/// expansion and layout state exclusively for the surface's lifetime; the
/// catalog is shared and read-only.
pub struct NavigationController<I: IdentityProvider, R: RouteDispatcher> {
    catalog: Arc<MenuCatalog>,
    login_path: String,
    identity: Arc<I>,
    router: Arc<R>,
    expansion: ExpansionState,
    layout: LayoutMode,
}

impl<I: IdentityProvider, R: RouteDispatcher> NavigationController<I, R> {
    pub fn new(catalog: Arc<MenuCatalog>, login_path: &str, identity: Arc<I>, router: Arc<R>) -> Self {
        Self {
            catalog,
            login_path: login_path.to_string(),
            identity,
            router,
            expansion: ExpansionState::new(),
            layout: LayoutMode::default(),
        }
    }

    /// One render pass: role filter, then active/child-active/expanded flags
    /// per visible node, in catalog order.
    pub fn render(&self) -> Vec<MenuEntry> {
        let role = self.identity.current_role();
        let location = self.router.current_location();
        debug!(?role, %location, "Rendering navigation");

        let visible = role_filter::filter(&self.catalog, role);
        visible
            .iter()
            .map(|node| self.render_node(node, &location))
            .collect()
    }

    fn render_node(&self, node: &Destination, location: &str) -> MenuEntry {
        let root = self.catalog.root_path();
        let collapsed = self.layout.is_collapsed();

        let active = node
            .path
            .as_deref()
            .is_some_and(|p| route_matcher::is_active(p, location, root));
        let child_active = node.is_group() && route_matcher::has_active_descendant(node, location, root);
        let expanded = !collapsed && self.expansion.is_expanded(&node.id);

        let children = if collapsed {
            Vec::new()
        } else {
            node.children
                .iter()
                .map(|child| self.render_node(child, location))
                .collect()
        };

        MenuEntry {
            id: node.id.clone(),
            label: (!collapsed).then(|| node.label.clone()),
            icon: node.icon.clone(),
            badge: node.badge.clone(),
            path: node.path.clone(),
            is_group: node.is_group(),
            active,
            child_active,
            expanded,
            children,
        }
    }

    /// Click on a destination. Groups only toggle their expansion, even when
    /// they carry a legacy path; leaves navigate; pathless leaves are inert.
    pub fn activate(&mut self, id: &str) {
        let Some(node) = self.catalog.find(id) else {
            warn!(%id, "Click on unknown destination");
            return;
        };
        if node.is_group() {
            self.toggle_group(id);
        } else if let Some(path) = node.path.clone() {
            info!(%id, %path, "Navigating");
            self.router.navigate(&path);
        }
    }

    pub fn toggle_group(&mut self, id: &str) {
        self.expansion.toggle(id);
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggled();
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn display_name(&self) -> Option<String> {
        self.identity.display_name()
    }

    /// Ask the identity provider to terminate the session, then dispatch
    /// navigation to the login destination whether or not it succeeded.
    /// The error is returned so the caller can surface the failure; the
    /// redirect itself is fail-open.
    pub async fn logout(&self) -> Result<(), IdentityError> {
        let result = self.identity.logout().await;
        if let Err(e) = &result {
            warn!("Logout failed, redirecting to login anyway: {}", e);
        } else {
            info!("Logout succeeded");
        }
        self.router.navigate(&self.login_path);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_catalog, Role};
    use crate::ports::identity::MockIdentityProvider;
    use crate::ports::router::MockRouteDispatcher;

    fn identity(role: Option<Role>) -> Arc<MockIdentityProvider> {
        let mut mock = MockIdentityProvider::new();
        mock.expect_current_role().return_const(role);
        mock.expect_display_name().return_const(Some("Ana Lim".to_string()));
        Arc::new(mock)
    }

    fn router_at(location: &str) -> Arc<MockRouteDispatcher> {
        let mut mock = MockRouteDispatcher::new();
        mock.expect_current_location().return_const(location.to_string());
        mock.expect_navigate().return_const(());
        Arc::new(mock)
    }

    fn controller(
        role: Option<Role>,
        location: &str,
    ) -> NavigationController<MockIdentityProvider, MockRouteDispatcher> {
        NavigationController::new(
            Arc::new(default_catalog().unwrap()),
            "/login",
            identity(role),
            router_at(location),
        )
    }

    fn entry<'a>(entries: &'a [MenuEntry], id: &str) -> &'a MenuEntry {
        entries.iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn test_active_trail_under_leave_history() {
        let ctl = controller(Some(Role::Employee), "/leave/history");
        let entries = ctl.render();

        let leave = entry(&entries, "leave");
        assert!(leave.child_active);
        assert!(entry(&leave.children, "leave-history").active);
        assert!(!entry(&leave.children, "leave-apply").active);
        assert!(!entry(&entries, "dashboard").active);
    }

    #[test]
    fn test_restricted_destination_absent_for_employee() {
        let ctl = controller(Some(Role::Employee), "/dashboard");
        let entries = ctl.render();
        assert!(entries.iter().all(|e| e.id != "settings"));
        assert!(entries.iter().all(|e| e.id != "employees"));
    }

    #[test]
    fn test_collapsed_layout_dominates_expansion_state() {
        let mut ctl = controller(Some(Role::Admin), "/dashboard");
        ctl.toggle_group("payroll");
        assert!(ctl.is_expanded("payroll"));

        ctl.toggle_layout();
        let entries = ctl.render();
        let payroll = entry(&entries, "payroll");
        assert!(!payroll.expanded);
        assert!(payroll.children.is_empty());
        assert!(payroll.label.is_none());

        // Membership survives the collapsed phase.
        ctl.toggle_layout();
        let entries = ctl.render();
        let payroll = entry(&entries, "payroll");
        assert!(payroll.expanded);
        assert!(!payroll.children.is_empty());
        assert_eq!(payroll.label.as_deref(), Some("Payroll"));
    }

    #[tokio::test]
    async fn test_failed_logout_still_redirects_to_login() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_logout()
            .returning(|| Err(IdentityError::Unavailable("connection reset".into())));

        let mut router = MockRouteDispatcher::new();
        router
            .expect_navigate()
            .withf(|path| path == "/login")
            .times(1)
            .return_const(());

        let ctl = NavigationController::new(
            Arc::new(default_catalog().unwrap()),
            "/login",
            Arc::new(identity),
            Arc::new(router),
        );
        let result = ctl.logout().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_successful_logout_redirects_to_login() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_logout().returning(|| Ok(()));

        let mut router = MockRouteDispatcher::new();
        router
            .expect_navigate()
            .withf(|path| path == "/login")
            .times(1)
            .return_const(());

        let ctl = NavigationController::new(
            Arc::new(default_catalog().unwrap()),
            "/login",
            Arc::new(identity),
            Arc::new(router),
        );
        assert!(ctl.logout().await.is_ok());
    }

    #[test]
    fn test_click_on_group_with_legacy_path_toggles_without_navigating() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_role().return_const(Some(Role::Employee));

        let mut router = MockRouteDispatcher::new();
        router.expect_navigate().times(0);

        let mut ctl = NavigationController::new(
            Arc::new(default_catalog().unwrap()),
            "/login",
            Arc::new(identity),
            Arc::new(router),
        );
        // "leave" carries a legacy path but is a group.
        ctl.activate("leave");
        assert!(ctl.is_expanded("leave"));
        ctl.activate("leave");
        assert!(!ctl.is_expanded("leave"));
    }

    #[test]
    fn test_click_on_leaf_navigates() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_role().return_const(Some(Role::Employee));

        let mut router = MockRouteDispatcher::new();
        router
            .expect_navigate()
            .withf(|path| path == "/helpdesk")
            .times(1)
            .return_const(());

        let mut ctl = NavigationController::new(
            Arc::new(default_catalog().unwrap()),
            "/login",
            Arc::new(identity),
            Arc::new(router),
        );
        ctl.activate("helpdesk");
    }

    #[test]
    fn test_click_on_unknown_id_is_inert() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_role().return_const(Some(Role::Employee));

        let mut router = MockRouteDispatcher::new();
        router.expect_navigate().times(0);

        let mut ctl = NavigationController::new(
            Arc::new(default_catalog().unwrap()),
            "/login",
            Arc::new(identity),
            Arc::new(router),
        );
        ctl.activate("not-a-destination");
    }

    #[test]
    fn test_root_destination_not_active_under_deep_route() {
        let ctl = controller(Some(Role::Employee), "/leave/history");
        let entries = ctl.render();
        assert!(!entry(&entries, "dashboard").active);

        let ctl = controller(Some(Role::Employee), "/dashboard");
        let entries = ctl.render();
        assert!(entry(&entries, "dashboard").active);
    }
}
