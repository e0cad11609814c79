//! Axum router construction for the Campus API.
//!
//! Assembles the login route, the three role-gated route groups, and
//! the status page into a single [`Router`]. The identity resolver runs
//! as an outer layer on every request; each role group carries its own
//! [`require_role`](crate::auth::require_role) gate as a `route_layer`,
//! so the gate sees the principal the resolver bound. CORS allows any
//! origin because the frontend is served separately.

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::routing::{get, post, put};
use axum::Router;
use campus_types::Role;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{admin, auth, login, status, student, teacher};

/// Build the complete Axum router for the Campus server.
///
/// Unknown routes fall through to Axum's default 404.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin_routes = Router::new()
        .route(
            "/students",
            get(admin::list_students).post(admin::create_student),
        )
        .route(
            "/students/{id}",
            put(admin::update_student).delete(admin::delete_student),
        )
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            auth::require_role(Role::Admin, request, next)
        }));

    let teacher_routes = Router::new()
        .route("/classes", get(teacher::assigned_classes))
        .route("/students/{class_id}", get(teacher::class_students))
        .route("/attendance", post(teacher::record_attendance))
        .route(
            "/attendance-report/{class_id}",
            get(teacher::attendance_report),
        )
        .route("/performance", post(teacher::upsert_performance))
        .route("/performance/{student_id}", get(teacher::get_performance))
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            auth::require_role(Role::Teacher, request, next)
        }));

    let student_routes = Router::new()
        .route("/academic-records", get(student::academic_records))
        .route("/attendance", get(student::my_attendance))
        .route("/feedback", get(student::my_feedback))
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            auth::require_role(Role::Student, request, next)
        }));

    Router::new()
        // Status page
        .route("/", get(status::index))
        // Authentication
        .route("/api/login", post(login::login))
        // Role-gated groups
        .nest("/api/admin", admin_routes)
        .nest("/api/teacher", teacher_routes)
        .nest("/api/student", student_routes)
        // Outer layers run first: principal resolution must precede the
        // per-group role gates.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::resolve_principal,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
