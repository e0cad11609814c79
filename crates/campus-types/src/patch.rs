//! Present-vs-absent field wrapper for partial updates.
//!
//! JSON partial updates must distinguish a key that is missing from a
//! key that carries a falsy value: `{"term1": 0}` overwrites `term1`
//! with zero, while `{}` leaves it untouched. `Option<T>` cannot encode
//! that difference once `null` and "missing" collapse together, so
//! update payloads use [`Patch<T>`] instead: a missing key deserializes
//! (via `#[serde(default)]`) to [`Patch::Absent`], a present key to
//! [`Patch::Value`].

use serde::{Deserialize, Deserializer};

use crate::ids::{ClassId, StudentId};
use crate::records::Mark;

/// A field of a partial-update payload: absent from the JSON, or
/// present with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// The key was not present in the payload; leave the field untouched.
    #[default]
    Absent,
    /// The key was present; overwrite the field, even with a falsy value.
    Value(T),
}

impl<T> Patch<T> {
    /// Whether the field was absent from the payload.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Convert into a plain [`Option`], losing the absent/present
    /// distinction. Useful when building a brand-new record where
    /// absent fields simply stay unset.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Overwrite `field` if the patch carries a value.
    pub fn apply_to(self, field: &mut T) {
        if let Self::Value(value) = self {
            *field = value;
        }
    }

    /// Overwrite an optional `field` if the patch carries a value.
    ///
    /// An absent patch never clears the field; this core has no
    /// "unset" operation.
    pub fn apply_to_optional(self, field: &mut Option<T>) {
        if let Self::Value(value) = self {
            *field = Some(value);
        }
    }
}

// A present key deserializes the inner type directly; the Absent case
// only ever arises through #[serde(default)] on the containing struct.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::Value)
    }
}

/// Partial update for a student record (`PUT /api/admin/students/:id`).
///
/// Only the fields present in the payload are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPatch {
    /// New display name.
    #[serde(default)]
    pub name: Patch<String>,
    /// New class reference (not validated against the class list).
    #[serde(default)]
    pub class: Patch<ClassId>,
    /// New subject list, replacing the old one wholesale.
    #[serde(default)]
    pub subjects: Patch<Vec<String>>,
}

/// Upsert payload for a performance record (`POST /api/teacher/performance`).
///
/// `student_id` is the natural key and is always required; the mark and
/// feedback fields are merged per-field into any existing record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePatch {
    /// The student this record belongs to.
    pub student_id: Option<StudentId>,
    /// First term mark.
    #[serde(default)]
    pub term1: Patch<Mark>,
    /// Second term mark.
    #[serde(default)]
    pub term2: Patch<Mark>,
    /// Third term mark.
    #[serde(default)]
    pub term3: Patch<Mark>,
    /// Periodic test mark.
    #[serde(default)]
    pub periodic_tests: Patch<Mark>,
    /// Free-shape teacher feedback (string, list, anything the client sends).
    #[serde(default)]
    pub feedback: Patch<serde_json::Value>,
}
