// ============================================================================
// Nav API - Port Adapters
// File: crates/nav-api/src/adapters.rs
// Description: HTTP-session-backed implementations of the nav-core ports
// ============================================================================
//! Concrete ports for the HTTP surface. The browser owns the real router, so
//! the dispatcher here relays: it holds the location the client last
//! reported and records navigation requests for the client to perform.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use nav_core::domain::Role;
use nav_core::ports::{IdentityError, IdentityProvider, RouteDispatcher};

/// Identity fixed at session creation. Logout terminates nothing server-side
/// beyond the session entry itself; the handler drops the session after
/// calling it.
pub struct SessionIdentity {
    role: Option<Role>,
    display_name: Option<String>,
}

impl SessionIdentity {
    pub fn new(role: Option<Role>, display_name: Option<String>) -> Self {
        Self { role, display_name }
    }
}

#[async_trait]
impl IdentityProvider for SessionIdentity {
    fn current_role(&self) -> Option<Role> {
        self.role
    }

    fn display_name(&self) -> Option<String> {
        self.display_name.clone()
    }

    async fn logout(&self) -> Result<(), IdentityError> {
        info!(role = ?self.role, "Session logout requested");
        Ok(())
    }
}

/// Relays routing across the HTTP boundary: `set_location` before each
/// render, `take_requested` after each click to hand the redirect back to
/// the client.
#[derive(Default)]
pub struct RelayDispatcher {
    location: Mutex<String>,
    requested: Mutex<Option<String>>,
}

impl RelayDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_location(&self, location: &str) {
        *self.location.lock().unwrap_or_else(|e| e.into_inner()) = location.to_string();
    }

    pub fn take_requested(&self) -> Option<String> {
        self.requested.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

impl RouteDispatcher for RelayDispatcher {
    fn current_location(&self) -> String {
        self.location.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn navigate(&self, path: &str) {
        *self.requested.lock().unwrap_or_else(|e| e.into_inner()) = Some(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_dispatcher_round_trip() {
        let dispatcher = RelayDispatcher::new();
        dispatcher.set_location("/leave/history");
        assert_eq!(dispatcher.current_location(), "/leave/history");

        assert_eq!(dispatcher.take_requested(), None);
        dispatcher.navigate("/helpdesk");
        assert_eq!(dispatcher.take_requested(), Some("/helpdesk".to_string()));
        assert_eq!(dispatcher.take_requested(), None);
    }
}
