//! Minimal HTML status page served at `GET /`.
//!
//! The real frontend is served separately; this page exists so a
//! browser pointed at the API port sees live collection counts and the
//! endpoint list instead of a 404.

use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::state::AppState;

/// Serve a minimal HTML page showing server status and API links.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    let student_count = store.students().len();
    let class_count = store.classes().len();
    let subject_count = store.subjects().len();
    let attendance_count = store.attendance_count();
    let performance_count = store.performance_count();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Campus API</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        code {{ color: #7ee787; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Campus API</h1>
    <p class="subtitle">School-management demo server</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Students</div>
            <div class="value">{student_count}</div>
        </div>
        <div class="metric">
            <div class="label">Classes</div>
            <div class="value">{class_count}</div>
        </div>
        <div class="metric">
            <div class="label">Subjects</div>
            <div class="value">{subject_count}</div>
        </div>
        <div class="metric">
            <div class="label">Attendance</div>
            <div class="value">{attendance_count}</div>
        </div>
        <div class="metric">
            <div class="label">Performance</div>
            <div class="value">{performance_count}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><code>POST /api/login</code> -- Authenticate (demo credentials)</li>
        <li><code>GET/POST /api/admin/students</code> -- Roster (admin)</li>
        <li><code>PUT/DELETE /api/admin/students/:id</code> -- Roster (admin)</li>
        <li><code>GET /api/teacher/classes</code> -- Assigned classes (teacher)</li>
        <li><code>GET /api/teacher/students/:classId</code> -- Students in class (teacher)</li>
        <li><code>POST /api/teacher/attendance</code> -- Record attendance (teacher)</li>
        <li><code>GET /api/teacher/attendance-report/:classId</code> -- Attendance report (teacher)</li>
        <li><code>GET/POST /api/teacher/performance</code> -- Performance records (teacher)</li>
        <li><code>GET /api/student/academic-records</code> -- Own records (student)</li>
        <li><code>GET /api/student/attendance</code> -- Own attendance (student)</li>
        <li><code>GET /api/student/feedback</code> -- Own feedback (student)</li>
    </ul>

    <p>Role-gated routes require the <code>x-username</code> header.</p>
</body>
</html>"#
    ))
}
