//! App state: catalog plus the per-session navigation controllers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use nav_core::domain::{MenuCatalog, Role};
use nav_core::services::NavigationController;
use nav_shared::config::AppConfig;
use nav_shared::types::{new_session_id, SessionId};

use crate::adapters::{RelayDispatcher, SessionIdentity};

/// One mounted navigation surface. The controller owns the expansion and
/// layout state; the dispatcher handle is kept for location updates and for
/// collecting navigation requests.
pub struct NavSession {
    pub controller: NavigationController<SessionIdentity, RelayDispatcher>,
    pub dispatcher: Arc<RelayDispatcher>,
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MenuCatalog>,
    pub config: AppConfig,
    pub sessions: Arc<Mutex<HashMap<SessionId, NavSession>>>,
}

impl AppState {
    pub fn new(catalog: MenuCatalog, config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Mount a new surface for the given identity; state starts empty.
    pub async fn create_session(&self, role: Option<Role>, display_name: Option<String>) -> SessionId {
        let dispatcher = Arc::new(RelayDispatcher::new());
        let identity = Arc::new(SessionIdentity::new(role, display_name));
        let controller = NavigationController::new(
            Arc::clone(&self.catalog),
            &self.config.nav.login_path,
            identity,
            Arc::clone(&dispatcher),
        );
        let id = new_session_id();
        self.sessions.lock().await.insert(
            id,
            NavSession {
                controller,
                dispatcher,
            },
        );
        id
    }

    pub async fn drop_session(&self, id: &SessionId) -> bool {
        self.sessions.lock().await.remove(id).is_some()
    }
}
