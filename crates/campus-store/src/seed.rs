//! Demo seed dataset for the Campus store.
//!
//! Three login users (one per role), two students, one teacher, two
//! classes, and two subjects. Attendance and performance start empty
//! and are populated only through the API.
//!
//! Teachers and students share the user id-space by convention: user
//! `teacher1` carries id 1, matching Teacher One's id, and user
//! `student1` carries id 2, matching Student B. The admin takes id 3,
//! which deliberately matches no roster record. Keep this alignment
//! when editing the seed; the teacher- and student-gated endpoints
//! resolve roster records by principal id.

use campus_types::{
    Class, ClassId, Role, Student, StudentId, Subject, SubjectId, Teacher, TeacherId, User, UserId,
};

use crate::store::Store;

/// Helper to build a [`User`].
fn user(id: u32, username: &str, password: &str, role: Role) -> User {
    User {
        id: UserId::new(id),
        username: username.to_string(),
        password: password.to_string(),
        role,
    }
}

/// Helper to build a [`Student`].
fn student(id: u32, name: &str, class: &str, subjects: &[&str]) -> Student {
    Student {
        id: StudentId::new(id),
        name: name.to_string(),
        class: ClassId::from(class),
        subjects: subjects.iter().map(ToString::to_string).collect(),
    }
}

/// Build the seeded demo store.
pub fn demo_store() -> Store {
    let users = vec![
        user(1, "teacher1", "teacherpass", Role::Teacher),
        user(2, "student1", "studentpass", Role::Student),
        user(3, "admin1", "adminpass", Role::Admin),
    ];

    let students = vec![
        student(1, "Student A", "Class 1", &["Mathematics", "Science"]),
        student(2, "Student B", "Class 1", &["Mathematics", "Science"]),
    ];

    let teachers = vec![Teacher {
        id: TeacherId::new(1),
        name: String::from("Teacher One"),
        assigned_classes: vec![ClassId::from("Class 1")],
    }];

    let classes = vec![
        Class {
            id: ClassId::from("Class 1"),
            teacher_id: Some(TeacherId::new(1)),
        },
        Class {
            id: ClassId::from("Class 2"),
            teacher_id: None,
        },
    ];

    let subjects = vec![
        Subject {
            id: SubjectId::new(1),
            name: String::from("Mathematics"),
        },
        Subject {
            id: SubjectId::new(2),
            name: String::from("Science"),
        },
    ];

    Store::new(users, students, teachers, classes, subjects)
}
