// ============================================================================
// Nav API - Session Handlers
// File: crates/nav-api/src/handlers/session.rs
// ============================================================================
//! Session lifecycle handlers (mount, unmount, logout)

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use nav_core::domain::Role;
use nav_shared::types::SessionId;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Session creation payload. An unrecognized or absent role degrades to "no
/// role": restricted destinations are simply filtered out.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub role: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub redirect_to: String,
    /// Whether the identity provider acknowledged the termination. The
    /// redirect is issued either way.
    pub terminated: bool,
}

#[derive(Debug, Deserialize)]
pub struct SessionRef {
    pub session_id: SessionId,
}

/// Create session handler - POST /api/v1/nav/session
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Json<ApiResponse<SessionResponse>> {
    let role = match payload.role.as_deref() {
        Some(raw) => {
            let parsed = Role::from_str(raw);
            if parsed.is_none() {
                warn!(%raw, "Unknown role on session creation, treating as no role");
            }
            parsed
        }
        None => None,
    };

    let session_id = state.create_session(role, payload.display_name).await;
    Json(ApiResponse::success(SessionResponse {
        session_id,
        role: role.map(|r| r.as_str().to_string()),
    }))
}

/// Destroy session handler - DELETE /api/v1/nav/session
pub async fn destroy(
    State(state): State<AppState>,
    Json(payload): Json<SessionRef>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    if state.drop_session(&payload.session_id).await {
        Ok(Json(ApiResponse::success(())))
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("SESSION_NOT_FOUND", "Unknown session id")),
        ))
    }
}

/// Logout handler - POST /api/v1/nav/logout
///
/// Calls the identity port, then reports the redirect target. A failed
/// termination still redirects; `terminated: false` lets the client surface
/// the failure instead of silently claiming success.
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<SessionRef>,
) -> Result<Json<ApiResponse<LogoutResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let mut sessions = state.sessions.lock().await;
    let Some(session) = sessions.get(&payload.session_id) else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("SESSION_NOT_FOUND", "Unknown session id")),
        ));
    };

    let result = session.controller.logout().await;
    let redirect_to = session
        .dispatcher
        .take_requested()
        .unwrap_or_else(|| state.config.nav.login_path.clone());

    sessions.remove(&payload.session_id);

    Ok(Json(ApiResponse::success(LogoutResponse {
        redirect_to,
        terminated: result.is_ok(),
    })))
}
