//! Identity resolution and role gating middleware.
//!
//! Two cooperating layers:
//!
//! 1. [`resolve_principal`] runs on every request. It reads the
//!    `x-username` header, looks the value up in the user collection,
//!    and binds the matching [`Principal`] into the request extensions.
//!    This is a trust-the-caller identity assertion -- no password is
//!    checked here -- kept as its own seam so it can be swapped for
//!    real credential verification without touching handler logic.
//! 2. [`require_role`] is mounted per route group. It allows the
//!    request through only if a principal is bound AND its role equals
//!    the required role; otherwise it short-circuits with 403 and the
//!    downstream handler never runs. A pure gate: no logging, no audit
//!    trail.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use campus_types::{Role, StudentId, TeacherId, User, UserId, UserInfo};

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the caller-asserted username on every gated request.
pub const USERNAME_HEADER: &str = "x-username";

/// The identity resolved for an incoming request.
///
/// Teachers and students share the user id-space with their roster
/// records by seeding convention; the [`teacher_id`](Self::teacher_id)
/// and [`student_id`](Self::student_id) conversions are the only places
/// that convention is relied on.
#[derive(Debug, Clone)]
pub struct Principal {
    user: User,
}

impl Principal {
    /// Wrap a resolved user record.
    pub const fn new(user: User) -> Self {
        Self { user }
    }

    /// The principal's role.
    pub const fn role(&self) -> Role {
        self.user.role
    }

    /// The principal's user id.
    pub const fn user_id(&self) -> UserId {
        self.user.id
    }

    /// The teacher record id this principal maps to.
    pub const fn teacher_id(&self) -> TeacherId {
        TeacherId::new(self.user.id.into_inner())
    }

    /// The student record id this principal maps to.
    pub const fn student_id(&self) -> StudentId {
        StudentId::new(self.user.id.into_inner())
    }

    /// Public projection of the underlying user.
    pub fn info(&self) -> UserInfo {
        UserInfo::from(&self.user)
    }
}

/// Middleware: bind the request's principal from the `x-username` header.
///
/// An absent header, a non-UTF-8 value, or an unknown username all
/// leave the request without a principal; rejection is the role gate's
/// job, not this layer's.
pub async fn resolve_principal(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let username = request
        .headers()
        .get(USERNAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    if let Some(username) = username {
        let store = state.store.read().await;
        if let Some(user) = store.user_by_username(&username) {
            request.extensions_mut().insert(Principal::new(user.clone()));
        }
    }

    next.run(request).await
}

/// Middleware: allow the request only for a principal with `required` role.
///
/// Mounted as a `route_layer` on each role's sub-router.
pub async fn require_role(required: Role, request: Request, next: Next) -> Response {
    let authorized = request
        .extensions()
        .get::<Principal>()
        .is_some_and(|principal| principal.role() == required);

    if authorized {
        next.run(request).await
    } else {
        ApiError::Forbidden.into_response()
    }
}
