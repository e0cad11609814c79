//! Shared type definitions for the Campus school-management API.
//!
//! This crate is the single source of truth for all types used across the
//! Campus workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe wrappers for all entity identifiers
//! - [`enums`] -- Enumeration types (roles, attendance status)
//! - [`records`] -- Core entity records (users, students, attendance, performance)
//! - [`patch`] -- Present-vs-absent field wrapper for partial updates

pub mod enums;
pub mod ids;
pub mod patch;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use enums::{AttendanceStatus, Role};
pub use ids::{ClassId, StudentId, SubjectId, TeacherId, UserId};
pub use patch::{Patch, PerformancePatch, StudentPatch};
pub use records::{
    AttendanceRecord, Class, Mark, PerformanceRecord, Student, Subject, Teacher, User, UserInfo,
};
