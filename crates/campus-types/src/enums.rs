//! Enumeration types shared across the Campus workspace.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The role attached to a login user, used for endpoint gating.
///
/// Every role-gated route requires exactly one role; there is no role
/// hierarchy (an admin is not implicitly a teacher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Role {
    /// Manages the student roster.
    Admin,
    /// Records attendance and performance for assigned classes.
    Teacher,
    /// Reads their own academic records, attendance, and feedback.
    Student,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Teacher => write!(f, "teacher"),
            Self::Student => write!(f, "student"),
        }
    }
}

/// Attendance status for a single student on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum AttendanceStatus {
    /// The student attended the class.
    Present,
    /// The student was absent.
    Absent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).ok().as_deref(), Some("\"admin\""));
        let parsed: Result<Role, _> = serde_json::from_str("\"teacher\"");
        assert_eq!(parsed.ok(), Some(Role::Teacher));
    }

    #[test]
    fn status_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).ok().as_deref(),
            Some("\"present\"")
        );
        let parsed: Result<AttendanceStatus, _> = serde_json::from_str("\"absent\"");
        assert_eq!(parsed.ok(), Some(AttendanceStatus::Absent));
    }
}
