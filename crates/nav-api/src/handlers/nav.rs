// ============================================================================
// Nav API - Menu Handlers
// File: crates/nav-api/src/handlers/nav.rs
// ============================================================================
//! Menu render and interaction handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use nav_core::services::MenuEntry;
use nav_core::state::LayoutMode;
use nav_shared::types::SessionId;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub session_id: SessionId,
    /// Current location as reported by the client-side router.
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub display_name: Option<String>,
    pub layout: LayoutMode,
    pub items: Vec<MenuEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleGroupRequest {
    pub session_id: SessionId,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleLayoutRequest {
    pub session_id: SessionId,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub layout: LayoutMode,
}

#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    pub session_id: SessionId,
    pub id: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct ActivateResponse {
    /// Path the client should route to, when the click was a navigation.
    pub navigated_to: Option<String>,
}

fn session_not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error("SESSION_NOT_FOUND", "Unknown session id")),
    )
}

/// Menu render handler - GET /api/v1/nav/menu
pub async fn menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<ApiResponse<MenuResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&query.session_id).ok_or_else(session_not_found)?;

    session.dispatcher.set_location(&query.location);
    Ok(Json(ApiResponse::success(MenuResponse {
        display_name: session.controller.display_name(),
        layout: session.controller.layout(),
        items: session.controller.render(),
    })))
}

/// Group toggle handler - POST /api/v1/nav/toggle-group
pub async fn toggle_group(
    State(state): State<AppState>,
    Json(payload): Json<ToggleGroupRequest>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&payload.session_id)
        .ok_or_else(session_not_found)?;

    session.controller.toggle_group(&payload.id);
    Ok(Json(ApiResponse::success(())))
}

/// Layout toggle handler - POST /api/v1/nav/toggle-layout
pub async fn toggle_layout(
    State(state): State<AppState>,
    Json(payload): Json<ToggleLayoutRequest>,
) -> Result<Json<ApiResponse<LayoutResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&payload.session_id)
        .ok_or_else(session_not_found)?;

    session.controller.toggle_layout();
    Ok(Json(ApiResponse::success(LayoutResponse {
        layout: session.controller.layout(),
    })))
}

/// Click handler - POST /api/v1/nav/activate
///
/// Groups toggle, leaves navigate; the requested path comes back to the
/// client, which owns the real router.
pub async fn activate(
    State(state): State<AppState>,
    Json(payload): Json<ActivateRequest>,
) -> Result<Json<ApiResponse<ActivateResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&payload.session_id)
        .ok_or_else(session_not_found)?;

    session.dispatcher.set_location(&payload.location);
    session.controller.activate(&payload.id);
    Ok(Json(ApiResponse::success(ActivateResponse {
        navigated_to: session.dispatcher.take_requested(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_core::domain::default_catalog;
    use nav_shared::config::{AppConfig, AppSettings, NavSettings};

    fn test_state() -> AppState {
        AppState::new(
            default_catalog().unwrap(),
            AppConfig {
                app: AppSettings {
                    env: "test".into(),
                    host: "127.0.0.1".into(),
                    port: 0,
                    name: "staffhub-test".into(),
                },
                nav: NavSettings {
                    root_path: "/dashboard".into(),
                    login_path: "/login".into(),
                },
            },
        )
    }

    #[tokio::test]
    async fn test_menu_renders_for_created_session() {
        let state = test_state();
        let session_id = state
            .create_session(Some(nav_core::domain::Role::Employee), Some("Ana Lim".into()))
            .await;

        let result = menu(
            State(state),
            Query(MenuQuery {
                session_id,
                location: "/leave/history".into(),
            }),
        )
        .await
        .unwrap();

        let data = result.0.data.unwrap();
        assert_eq!(data.display_name.as_deref(), Some("Ana Lim"));
        let leave = data.items.iter().find(|e| e.id == "leave").unwrap();
        assert!(leave.child_active);
        assert!(data.items.iter().all(|e| e.id != "settings"));
    }

    #[tokio::test]
    async fn test_activate_leaf_reports_navigation() {
        let state = test_state();
        let session_id = state.create_session(None, None).await;

        let result = activate(
            State(state),
            Json(ActivateRequest {
                session_id,
                id: "helpdesk".into(),
                location: "/dashboard".into(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(result.0.data.unwrap().navigated_to.as_deref(), Some("/helpdesk"));
    }

    #[tokio::test]
    async fn test_activate_group_toggles_without_navigation() {
        let state = test_state();
        let session_id = state.create_session(Some(nav_core::domain::Role::Admin), None).await;

        let result = activate(
            State(state.clone()),
            Json(ActivateRequest {
                session_id,
                id: "payroll".into(),
                location: "/dashboard".into(),
            }),
        )
        .await
        .unwrap();

        assert!(result.0.data.unwrap().navigated_to.is_none());
        let sessions = state.sessions.lock().await;
        assert!(sessions.get(&session_id).unwrap().controller.is_expanded("payroll"));
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let state = test_state();
        let result = menu(
            State(state),
            Query(MenuQuery {
                session_id: nav_shared::types::new_session_id(),
                location: "/dashboard".into(),
            }),
        )
        .await;
        assert!(result.is_err());
    }
}
