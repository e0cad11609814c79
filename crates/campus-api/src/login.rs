//! The login endpoint.
//!
//! `POST /api/login` checks a username + password pair against the user
//! collection (exact, case-sensitive, plaintext demo credentials) and
//! returns the user's public projection on success. No session state is
//! created; clients resend the username in the `x-username` header on
//! every subsequent request and the identity resolver re-derives the
//! principal each time.

use axum::extract::State;
use axum::Json;
use campus_types::UserInfo;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/login`.
///
/// Missing fields default to the empty string, which simply matches no
/// user and yields the same 401 as a wrong password.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Success body for `POST /api/login`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The authenticated user, minus the password.
    pub user: UserInfo,
}

/// Handle `POST /api/login`.
///
/// This endpoint is independent of the role gate: anyone may attempt a
/// login.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let store = state.store.read().await;
    let user = store
        .verify_credentials(&request.username, &request.password)
        .ok_or(ApiError::Unauthorized)?;

    debug!(username = user.username, role = %user.role, "login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        user: UserInfo::from(user),
    }))
}
