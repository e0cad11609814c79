//! Error types for the `campus-store` crate.
//!
//! All fallible store operations return [`StoreError`] through the
//! standard [`Result`] type.

use campus_types::{StudentId, TeacherId};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// No student record with the given id exists.
    #[error("Student not found")]
    StudentNotFound(StudentId),

    /// No teacher record with the given id exists.
    #[error("Teacher not found")]
    TeacherNotFound(TeacherId),

    /// No performance record for the given student exists.
    #[error("Performance record not found")]
    PerformanceNotFound(StudentId),
}
