//! Integration tests for the Campus API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. Every test runs against a fresh seeded store:
//! users `admin1`/`teacher1`/`student1`, students 1 and 2 in "Class 1",
//! one teacher assigned to "Class 1", and empty attendance/performance.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use campus_api::router::build_router;
use campus_api::state::AppState;
use campus_store::demo_store;
use serde_json::{json, Value};
use tower::ServiceExt;

/// A fresh router over the seeded demo store.
fn app() -> Router {
    build_router(AppState::new(demo_store()))
}

/// Build a request, optionally with a principal header and JSON body.
fn request(
    method: &str,
    path: &str,
    username: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(username) = username {
        builder = builder.header("x-username", username);
    }
    match body {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Read a response body as JSON.
async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =========================================================================
// Status page and routing
// =========================================================================

#[tokio::test]
async fn index_returns_html() {
    let response = app()
        .oneshot(request("GET", "/", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Campus API"));
    assert!(html.contains("/api/login"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = app()
        .oneshot(request("GET", "/api/nope", Some("admin1"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =========================================================================
// Login
// =========================================================================

#[tokio::test]
async fn login_success_returns_user_without_password() {
    let response = app()
        .oneshot(request(
            "POST",
            "/api/login",
            None,
            Some(json!({"username": "teacher1", "password": "teacherpass"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["username"], "teacher1");
    assert_eq!(body["user"]["role"], "teacher");
    assert_eq!(body["user"]["id"], 1);
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn login_failure_is_unauthorized() {
    let response = app()
        .oneshot(request(
            "POST",
            "/api/login",
            None,
            Some(json!({"username": "teacher1", "password": "wrong"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_is_case_sensitive() {
    let response = app()
        .oneshot(request(
            "POST",
            "/api/login",
            None,
            Some(json!({"username": "Teacher1", "password": "teacherpass"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =========================================================================
// Role gating
// =========================================================================

#[tokio::test]
async fn gated_route_without_principal_is_forbidden() {
    let response = app()
        .oneshot(request("GET", "/api/admin/students", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Forbidden: Insufficient role");
}

#[tokio::test]
async fn gated_route_with_unknown_username_is_forbidden() {
    let response = app()
        .oneshot(request("GET", "/api/admin/students", Some("ghost"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn wrong_role_is_forbidden_on_every_group() {
    let cases = [
        ("GET", "/api/admin/students", "teacher1"),
        ("GET", "/api/teacher/classes", "admin1"),
        ("GET", "/api/student/attendance", "teacher1"),
        ("POST", "/api/teacher/attendance", "student1"),
    ];
    for (method, path, username) in cases {
        let response = app()
            .oneshot(request(method, path, Some(username), None))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{method} {path} as {username}"
        );
    }
}

#[tokio::test]
async fn forbidden_write_performs_no_mutation() {
    let app = app();
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/admin/students",
            Some("student1"),
            Some(json!({"name": "X", "class": "Class 1", "subjects": []})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(request("GET", "/api/admin/students", Some("admin1"), None))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// =========================================================================
// Admin: student roster
// =========================================================================

#[tokio::test]
async fn list_students_returns_seed_in_order() {
    let response = app()
        .oneshot(request("GET", "/api/admin/students", Some("admin1"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0]["name"], "Student A");
    assert_eq!(students[1]["name"], "Student B");
}

#[tokio::test]
async fn create_student_assigns_next_id_and_grows_roster() {
    let app = app();
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/admin/students",
            Some("admin1"),
            Some(json!({"name": "X", "class": "Class 1", "subjects": ["Mathematics"]})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 3);
    assert_eq!(created["name"], "X");
    assert_eq!(created["class"], "Class 1");

    let response = app
        .oneshot(request("GET", "/api/admin/students", Some("admin1"), None))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_student_missing_field_is_bad_request() {
    let app = app();
    for payload in [
        json!({"class": "Class 1", "subjects": []}),
        json!({"name": "X", "subjects": []}),
        json!({"name": "X", "class": "Class 1"}),
        json!({"name": "", "class": "Class 1", "subjects": []}),
    ] {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/admin/students",
                Some("admin1"),
                Some(payload),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Missing required fields");
    }
}

#[tokio::test]
async fn update_student_applies_only_present_fields() {
    let response = app()
        .oneshot(request(
            "PUT",
            "/api/admin/students/1",
            Some("admin1"),
            Some(json!({"name": "Renamed"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["class"], "Class 1");
    assert_eq!(body["subjects"], json!(["Mathematics", "Science"]));
}

#[tokio::test]
async fn update_missing_student_is_not_found() {
    let response = app()
        .oneshot(request(
            "PUT",
            "/api/admin/students/99",
            Some("admin1"),
            Some(json!({"name": "Nobody"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Student not found");
}

#[tokio::test]
async fn delete_student_returns_no_content() {
    let app = app();
    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            "/api/admin/students/1",
            Some("admin1"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/admin/students", Some("admin1"), None))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // A second delete is a 404, not idempotent success.
    let response = app
        .oneshot(request(
            "DELETE",
            "/api/admin/students/1",
            Some("admin1"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn student_id_reused_after_deleting_highest() {
    let app = app();
    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            "/api/admin/students/2",
            Some("admin1"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request(
            "POST",
            "/api/admin/students",
            Some("admin1"),
            Some(json!({"name": "Y", "class": "Class 2", "subjects": []})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 2);
}

// =========================================================================
// Teacher: classes and attendance
// =========================================================================

#[tokio::test]
async fn teacher_sees_assigned_classes() {
    let response = app()
        .oneshot(request("GET", "/api/teacher/classes", Some("teacher1"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!(["Class 1"]));
}

#[tokio::test]
async fn teacher_without_roster_record_is_not_found() {
    // A teacher-role user whose id matches no teacher record: the role
    // gate passes but the roster lookup fails.
    let store = campus_store::Store::new(
        vec![campus_types::User {
            id: campus_types::UserId::new(9),
            username: String::from("substitute"),
            password: String::from("subpass"),
            role: campus_types::Role::Teacher,
        }],
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    let app = build_router(AppState::new(store));

    let response = app
        .oneshot(request("GET", "/api/teacher/classes", Some("substitute"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Teacher not found");
}

#[tokio::test]
async fn class_students_filters_exactly() {
    let app = app();
    let response = app
        .clone()
        .oneshot(request(
            "GET",
            "/api/teacher/students/Class%201",
            Some("teacher1"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // An unknown class is an empty list, not a 404.
    let response = app
        .oneshot(request(
            "GET",
            "/api/teacher/students/Class%209",
            Some("teacher1"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn attendance_resubmission_keeps_latest_status() {
    let app = app();
    for status in ["present", "absent"] {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/teacher/attendance",
                Some("teacher1"),
                Some(json!({
                    "studentId": 1,
                    "classId": "Class 1",
                    "date": "2025-03-10",
                    "status": status,
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Attendance recorded");
    }

    let response = app
        .oneshot(request(
            "GET",
            "/api/teacher/attendance-report/Class%201",
            Some("teacher1"),
            None,
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "absent");
    assert_eq!(records[0]["date"], "2025-03-10");
}

#[tokio::test]
async fn attendance_missing_field_is_bad_request() {
    let response = app()
        .oneshot(request(
            "POST",
            "/api/teacher/attendance",
            Some("teacher1"),
            Some(json!({"studentId": 1, "classId": "Class 1", "date": "2025-03-10"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Missing required fields");
}

// =========================================================================
// Teacher: performance
// =========================================================================

#[tokio::test]
async fn performance_for_unknown_student_is_not_found() {
    let response = app()
        .oneshot(request(
            "GET",
            "/api/teacher/performance/1",
            Some("teacher1"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Performance record not found");
}

#[tokio::test]
async fn performance_upsert_requires_student_id() {
    let response = app()
        .oneshot(request(
            "POST",
            "/api/teacher/performance",
            Some("teacher1"),
            Some(json!({"term1": 50})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Missing studentId");
}

#[tokio::test]
async fn performance_create_holds_only_supplied_fields() {
    let response = app()
        .oneshot(request(
            "POST",
            "/api/teacher/performance",
            Some("teacher1"),
            Some(json!({"studentId": 1, "feedback": "Keep it up"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["studentId"], 1);
    assert_eq!(body["feedback"], "Keep it up");
    // Unsupplied marks are absent keys, not nulls.
    let obj = body.as_object().unwrap();
    assert!(!obj.contains_key("term1"));
    assert!(!obj.contains_key("term2"));
    assert!(!obj.contains_key("term3"));
    assert!(!obj.contains_key("periodicTests"));
}

#[tokio::test]
async fn performance_merge_overwrites_present_falsy_and_keeps_absent() {
    let app = app();
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/teacher/performance",
            Some("teacher1"),
            Some(json!({"studentId": 1, "term1": 80, "term2": 90})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // A mark of 0 is present-but-falsy and must overwrite term1.
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/teacher/performance",
            Some("teacher1"),
            Some(json!({"studentId": 1, "term1": 0})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["term1"].as_f64(), Some(0.0));
    assert_eq!(body["term2"].as_f64(), Some(90.0));

    // The merge updated the single existing record in place.
    let response = app
        .oneshot(request(
            "GET",
            "/api/teacher/performance/1",
            Some("teacher1"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["term1"].as_f64(), Some(0.0));
}

// =========================================================================
// Student: own records
// =========================================================================

#[tokio::test]
async fn academic_records_resolve_own_student() {
    let response = app()
        .oneshot(request(
            "GET",
            "/api/student/academic-records",
            Some("student1"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // User student1 carries id 2, matching Student B.
    assert_eq!(body["student"]["id"], 2);
    assert_eq!(body["student"]["name"], "Student B");
    // No performance record yet: an empty object, not null.
    assert_eq!(body["performance"], json!({}));
}

#[tokio::test]
async fn academic_records_without_roster_entry_is_not_found() {
    let app = app();
    // The admin removes Student B; user student1 (id 2) now has no
    // roster entry.
    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            "/api/admin/students/2",
            Some("admin1"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request(
            "GET",
            "/api/student/academic-records",
            Some("student1"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Student not found");
}

#[tokio::test]
async fn academic_records_include_performance_once_recorded() {
    let app = app();
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/teacher/performance",
            Some("teacher1"),
            Some(json!({"studentId": 2, "term1": 75})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(
            "GET",
            "/api/student/academic-records",
            Some("student1"),
            None,
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["performance"]["studentId"], 2);
    assert_eq!(body["performance"]["term1"].as_f64(), Some(75.0));
}

#[tokio::test]
async fn student_attendance_is_scoped_to_principal() {
    let app = app();
    for (student, date) in [(1, "2025-03-10"), (2, "2025-03-10"), (2, "2025-03-11")] {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/teacher/attendance",
                Some("teacher1"),
                Some(json!({
                    "studentId": student,
                    "classId": "Class 1",
                    "date": date,
                    "status": "present",
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(request(
            "GET",
            "/api/student/attendance",
            Some("student1"),
            None,
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["studentId"] == 2));
}

#[tokio::test]
async fn feedback_defaults_to_empty_list() {
    let response = app()
        .oneshot(request("GET", "/api/student/feedback", Some("student1"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["feedback"], json!([]));
}

#[tokio::test]
async fn feedback_returns_stored_value_verbatim() {
    let app = app();
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/teacher/performance",
            Some("teacher1"),
            Some(json!({"studentId": 2, "feedback": ["More practice", "Good attitude"]})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request("GET", "/api/student/feedback", Some("student1"), None))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["feedback"], json!(["More practice", "Good attitude"]));
}
