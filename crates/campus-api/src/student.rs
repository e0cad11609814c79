//! Student-gated handlers: a student's own records.
//!
//! Every route resolves data by the principal's own id; there is no way
//! for a student to address another student's records.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/student/academic-records` | Own roster entry + performance |
//! | `GET` | `/api/student/attendance` | Own attendance records |
//! | `GET` | `/api/student/feedback` | Own feedback field |

use axum::extract::State;
use axum::{Extension, Json};
use campus_types::{AttendanceRecord, Student};
use serde::Serialize;

use crate::auth::Principal;
use crate::error::ApiError;
use crate::state::AppState;

/// Response body for `GET /api/student/academic-records`.
#[derive(Debug, Serialize)]
pub struct AcademicRecords {
    /// The student's own roster entry.
    pub student: Student,
    /// The student's performance record, or `{}` when none exists.
    pub performance: serde_json::Value,
}

/// Response body for `GET /api/student/feedback`.
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    /// The stored feedback value, or `[]` when no record exists or the
    /// field was never set. The shape is whatever the teacher stored.
    pub feedback: serde_json::Value,
}

/// Handle `GET /api/student/academic-records`.
///
/// 404 when no roster entry matches the principal's id; a missing
/// performance record is not an error, just an empty object.
pub async fn academic_records(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<AcademicRecords>, ApiError> {
    let store = state.store.read().await;
    let student = store
        .student_by_id(principal.student_id())
        .ok_or_else(|| ApiError::NotFound(String::from("Student not found")))?
        .clone();

    let performance = store
        .performance_for_student(student.id)
        .and_then(|record| serde_json::to_value(record).ok())
        .unwrap_or_else(|| serde_json::json!({}));

    Ok(Json(AcademicRecords {
        student,
        performance,
    }))
}

/// Handle `GET /api/student/attendance`.
pub async fn my_attendance(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Json<Vec<AttendanceRecord>> {
    let store = state.store.read().await;
    Json(store.attendance_for_student(principal.student_id()))
}

/// Handle `GET /api/student/feedback`.
pub async fn my_feedback(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Json<FeedbackResponse> {
    let store = state.store.read().await;
    let feedback = store
        .performance_for_student(principal.student_id())
        .and_then(|record| record.feedback.clone())
        // A stored null counts as unset, same as a missing record.
        .filter(|value| !value.is_null())
        .unwrap_or_else(|| serde_json::json!([]));
    Json(FeedbackResponse { feedback })
}
