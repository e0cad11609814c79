//! Core entity records for the Campus store.
//!
//! Field names follow the JSON surface consumed by the frontend
//! (`studentId`, `assignedClasses`, `periodicTests`), so every struct
//! serializes in camelCase. Mark values use [`Decimal`] rather than
//! floats and travel as JSON numbers via [`Mark`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AttendanceStatus, Role};
use crate::ids::{ClassId, StudentId, SubjectId, TeacherId, UserId};

/// A single mark value (term or periodic-test score).
///
/// Stored as an exact [`Decimal`] but serialized as a plain JSON number,
/// matching what grade-entry clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Mark(
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub Decimal,
);

impl Mark {
    /// Return the inner decimal value.
    pub const fn into_inner(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Mark {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A login user seeded at process start.
///
/// Users are never created, updated, or deleted through the API, and the
/// password is plaintext demo data that must never leave the process --
/// responses carry the [`UserInfo`] projection instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier. By seeding convention teachers and
    /// students share this id with their Teacher/Student record.
    pub id: UserId,
    /// Login name, matched exactly (case-sensitive).
    pub username: String,
    /// Plaintext password, compared exactly. Never serialized.
    pub password: String,
    /// The role gating which endpoints this user may call.
    pub role: Role,
}

/// Public projection of a [`User`]: everything except the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UserInfo {
    /// Unique user identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// The user's role.
    pub role: Role,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// A student on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Student {
    /// Unique id, assigned as (max existing id) + 1 on creation.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// The class the student belongs to. Not validated against the
    /// class list; an unknown class simply matches no teacher queries.
    pub class: ClassId,
    /// Subject names the student takes, in enrollment order. Free-form
    /// strings, not validated against the subject list.
    pub subjects: Vec<String>,
}

/// A teacher seeded at process start. Read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Teacher {
    /// Unique teacher identifier (shares the user id-space by convention).
    pub id: TeacherId,
    /// Display name.
    pub name: String,
    /// Classes this teacher is responsible for.
    pub assigned_classes: Vec<ClassId>,
}

/// A class seeded at process start. Read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Class {
    /// Human-readable class identifier (e.g. `"Class 1"`).
    pub id: ClassId,
    /// The assigned teacher, or `None` for an unassigned class.
    pub teacher_id: Option<TeacherId>,
}

/// A subject seeded at process start. Read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Subject {
    /// Unique subject identifier.
    pub id: SubjectId,
    /// Subject name (e.g. `"Mathematics"`).
    pub name: String,
}

/// One attendance entry for one student in one class on one date.
///
/// Natural key: (`student_id`, `class_id`, `date`). The store keeps at
/// most one record per key; re-submission replaces the old record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AttendanceRecord {
    /// The student the entry is for.
    pub student_id: StudentId,
    /// The class the entry is for.
    pub class_id: ClassId,
    /// The calendar date of the class.
    pub date: NaiveDate,
    /// Present or absent.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Whether this record shares a natural key with `other`.
    pub fn same_key(&self, other: &Self) -> bool {
        self.student_id == other.student_id
            && self.class_id == other.class_id
            && self.date == other.date
    }
}

/// Academic performance for one student, keyed by `student_id`.
///
/// Every field except the key is optional: an upsert that never supplied
/// `term2` leaves the key out of the JSON entirely rather than emitting
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PerformanceRecord {
    /// The student this record belongs to. At most one record per student.
    pub student_id: StudentId,
    /// First term mark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub term1: Option<Mark>,
    /// Second term mark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub term2: Option<Mark>,
    /// Third term mark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub term3: Option<Mark>,
    /// Periodic test mark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub periodic_tests: Option<Mark>,
    /// Free-shape teacher feedback; whatever JSON the teacher submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub feedback: Option<serde_json::Value>,
}

impl PerformanceRecord {
    /// An empty record for the given student, all fields unset.
    pub const fn empty(student_id: StudentId) -> Self {
        Self {
            student_id,
            term1: None,
            term2: None,
            term3: None,
            periodic_tests: None,
            feedback: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mark_serializes_as_json_number() {
        let mark = Mark(Decimal::new(875, 1));
        let json = serde_json::to_value(mark).unwrap();
        assert!(json.is_number());
    }

    #[test]
    fn performance_record_omits_unset_fields() {
        let record = PerformanceRecord {
            term1: Some(Mark(Decimal::ZERO)),
            ..PerformanceRecord::empty(StudentId::new(1))
        };
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("term1"));
        assert!(!obj.contains_key("term2"));
        assert!(!obj.contains_key("feedback"));
    }

    #[test]
    fn student_uses_original_field_names() {
        let student = Student {
            id: StudentId::new(1),
            name: String::from("Student A"),
            class: ClassId::from("Class 1"),
            subjects: vec![String::from("Mathematics")],
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["class"], "Class 1");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn attendance_natural_key_ignores_status() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let a = AttendanceRecord {
            student_id: StudentId::new(1),
            class_id: ClassId::from("Class 1"),
            date,
            status: AttendanceStatus::Present,
        };
        let b = AttendanceRecord {
            status: AttendanceStatus::Absent,
            ..a.clone()
        };
        assert!(a.same_key(&b));
    }

    #[test]
    fn user_info_drops_password() {
        let user = User {
            id: UserId::new(1),
            username: String::from("teacher1"),
            password: String::from("teacherpass"),
            role: Role::Teacher,
        };
        let info = UserInfo::from(&user);
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "teacher1");
        assert_eq!(json["role"], "teacher");
    }
}
