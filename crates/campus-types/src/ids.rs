//! Type-safe identifier wrappers for every Campus entity.
//!
//! Users, students, teachers, and subjects are identified by small
//! integers; classes by opaque strings (e.g. `"Class 1"`). Wrapping each
//! in its own newtype prevents accidental mixing of identifiers at
//! compile time, in particular across the user/teacher/student shared
//! id-space convention (see [`crate::records::User`]).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around `u32` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub u32);

        impl $name {
            /// Wrap a raw integer identifier.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Return the inner integer value.
            pub const fn into_inner(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a login user (principal).
    UserId
}

define_id! {
    /// Unique identifier for a student record.
    StudentId
}

define_id! {
    /// Unique identifier for a teacher record.
    TeacherId
}

define_id! {
    /// Unique identifier for a subject.
    SubjectId
}

/// Unique identifier for a class.
///
/// Classes use human-readable string ids on the wire (`"Class 1"`),
/// unlike the integer-keyed entities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClassId(pub String);

impl ClassId {
    /// Wrap a raw class identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for ClassId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClassId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClassId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let user = UserId::new(1);
        let student = StudentId::new(1);
        // Same inner value, different types -- the compiler enforces no mixing.
        assert_eq!(user.into_inner(), student.into_inner());
    }

    #[test]
    fn integer_id_serializes_as_bare_number() {
        let id = StudentId::new(7);
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("7"));
    }

    #[test]
    fn class_id_serializes_as_bare_string() {
        let id = ClassId::from("Class 1");
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("\"Class 1\""));
    }

    #[test]
    fn id_display_matches_inner() {
        assert_eq!(TeacherId::new(3).to_string(), "3");
        assert_eq!(ClassId::from("Class 2").to_string(), "Class 2");
    }
}
