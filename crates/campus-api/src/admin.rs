//! Admin-gated roster management handlers.
//!
//! All four routes require the `admin` role:
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/admin/students` | List the roster in insertion order |
//! | `POST` | `/api/admin/students` | Create a student (max-plus-one id) |
//! | `PUT` | `/api/admin/students/:id` | Partial update |
//! | `DELETE` | `/api/admin/students/:id` | Remove a student |

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_types::{ClassId, Student, StudentId, StudentPatch};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/admin/students`.
///
/// All three fields are required; presence is validated here rather
/// than at deserialization so a missing field yields the API's own 400
/// rather than a framework rejection.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    /// Display name. Required, non-empty.
    #[serde(default)]
    pub name: Option<String>,
    /// Class reference. Required, non-empty; not validated against the
    /// class list.
    #[serde(default)]
    pub class: Option<ClassId>,
    /// Subject names. Required to be present; may be empty.
    #[serde(default)]
    pub subjects: Option<Vec<String>>,
}

/// Handle `GET /api/admin/students`.
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    let store = state.store.read().await;
    Json(store.students().to_vec())
}

/// Handle `POST /api/admin/students`.
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let name = request.name.filter(|n| !n.is_empty());
    let class = request.class.filter(|c| !c.is_empty());
    let (Some(name), Some(class), Some(subjects)) = (name, class, request.subjects) else {
        return Err(ApiError::missing_fields());
    };

    let mut store = state.store.write().await;
    let student = store.create_student(name, class, subjects);
    info!(id = %student.id, class = %student.class, "student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// Handle `PUT /api/admin/students/:id`.
///
/// Applies only the fields present in the body; a present-but-falsy
/// value overwrites, an absent key leaves the field unchanged.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    Json(patch): Json<StudentPatch>,
) -> Result<Json<Student>, ApiError> {
    let mut store = state.store.write().await;
    let student = store.update_student(id, patch)?;
    info!(id = %student.id, "student updated");
    Ok(Json(student))
}

/// Handle `DELETE /api/admin/students/:id`.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.delete_student(id)?;
    info!(id = %id, "student deleted");
    Ok(StatusCode::NO_CONTENT)
}
