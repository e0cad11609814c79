//! Teacher-gated handlers: classes, attendance, and performance entry.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/teacher/classes` | The principal's assigned classes |
//! | `GET` | `/api/teacher/students/:classId` | Students in a class |
//! | `POST` | `/api/teacher/attendance` | Record attendance (replace-on-conflict) |
//! | `GET` | `/api/teacher/attendance-report/:classId` | Attendance for a class |
//! | `GET` | `/api/teacher/performance/:studentId` | One student's performance record |
//! | `POST` | `/api/teacher/performance` | Upsert a performance record |

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use campus_types::{
    AttendanceRecord, AttendanceStatus, ClassId, PerformancePatch, PerformanceRecord, Student,
    StudentId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::Principal;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/teacher/attendance`.
///
/// All four fields are required; presence is validated in the handler.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    /// The student the entry is for.
    #[serde(default)]
    pub student_id: Option<StudentId>,
    /// The class the entry is for.
    #[serde(default)]
    pub class_id: Option<ClassId>,
    /// The calendar date of the class.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Present or absent.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}

/// Confirmation body returned by the attendance endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Handle `GET /api/teacher/classes`.
///
/// Resolves the teacher record whose id equals the principal's user id
/// (the shared id-space convention) and returns its assigned classes.
pub async fn assigned_classes(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<ClassId>>, ApiError> {
    let store = state.store.read().await;
    let teacher = store
        .teacher_by_id(principal.teacher_id())
        .ok_or_else(|| ApiError::NotFound(String::from("Teacher not found")))?;
    Ok(Json(teacher.assigned_classes.clone()))
}

/// Handle `GET /api/teacher/students/:classId`.
///
/// Exact string match on the class id; an empty result is 200, not 404.
pub async fn class_students(
    State(state): State<AppState>,
    Path(class_id): Path<ClassId>,
) -> Json<Vec<Student>> {
    let store = state.store.read().await;
    Json(store.students_in_class(&class_id))
}

/// Handle `POST /api/teacher/attendance`.
///
/// At most one record exists per (student, class, date); a second
/// submission for the same key replaces the first.
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(request): Json<RecordAttendanceRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let class_id = request.class_id.filter(|c| !c.is_empty());
    let (Some(student_id), Some(class_id), Some(date), Some(status)) =
        (request.student_id, class_id, request.date, request.status)
    else {
        return Err(ApiError::missing_fields());
    };

    let mut store = state.store.write().await;
    store.record_attendance(AttendanceRecord {
        student_id,
        class_id: class_id.clone(),
        date,
        status,
    });
    info!(student = %student_id, class = %class_id, %date, "attendance recorded");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: String::from("Attendance recorded"),
        }),
    ))
}

/// Handle `GET /api/teacher/attendance-report/:classId`.
pub async fn attendance_report(
    State(state): State<AppState>,
    Path(class_id): Path<ClassId>,
) -> Json<Vec<AttendanceRecord>> {
    let store = state.store.read().await;
    Json(store.attendance_for_class(&class_id))
}

/// Handle `GET /api/teacher/performance/:studentId`.
pub async fn get_performance(
    State(state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<PerformanceRecord>, ApiError> {
    let store = state.store.read().await;
    let record = store
        .performance_for_student(student_id)
        .ok_or_else(|| ApiError::NotFound(String::from("Performance record not found")))?;
    Ok(Json(record.clone()))
}

/// Handle `POST /api/teacher/performance`.
///
/// Creates the record with exactly the supplied fields when no record
/// exists for the student, otherwise merges field-by-field: a field
/// present in the payload overwrites (even with a falsy value such as
/// a mark of 0), an absent field is left untouched.
pub async fn upsert_performance(
    State(state): State<AppState>,
    Json(patch): Json<PerformancePatch>,
) -> Result<Json<PerformanceRecord>, ApiError> {
    let Some(student_id) = patch.student_id else {
        return Err(ApiError::Validation(String::from("Missing studentId")));
    };

    let mut store = state.store.write().await;
    let record = store.upsert_performance(student_id, patch);
    info!(student = %student_id, "performance upserted");
    Ok(Json(record))
}
