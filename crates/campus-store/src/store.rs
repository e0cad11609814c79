//! The in-memory entity store.
//!
//! [`Store`] owns every collection the API serves: the immutable
//! directory (users, teachers, classes, subjects) and the mutable
//! roster (students, attendance, performance). Collections are plain
//! ordered vectors; all lookups are linear scans, which is fine at the
//! scale this store carries.
//!
//! The store itself is synchronous and single-owner. Callers that share
//! it across request handlers must wrap it in one lock and complete
//! each read-modify-write inside a single guard acquisition, so the
//! natural-key invariants below hold:
//!
//! - at most one [`AttendanceRecord`] per (student, class, date)
//! - at most one [`PerformanceRecord`] per student
//! - student ids are unique, assigned as (max existing id) + 1

use campus_types::{
    AttendanceRecord, Class, ClassId, PerformancePatch, PerformanceRecord, Student, StudentId,
    StudentPatch, Subject, Teacher, TeacherId, User,
};

use crate::error::StoreError;

/// In-memory holder of all Campus entity collections.
///
/// Insertion order is preserved and is the order every list endpoint
/// returns.
#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Vec<User>,
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    classes: Vec<Class>,
    subjects: Vec<Subject>,
    attendance: Vec<AttendanceRecord>,
    performance: Vec<PerformanceRecord>,
}

impl Store {
    /// Create a store from seeded directory data and an initial roster.
    ///
    /// Users, teachers, classes, and subjects never change after this;
    /// attendance and performance start empty.
    pub const fn new(
        users: Vec<User>,
        students: Vec<Student>,
        teachers: Vec<Teacher>,
        classes: Vec<Class>,
        subjects: Vec<Subject>,
    ) -> Self {
        Self {
            users,
            students,
            teachers,
            classes,
            subjects,
            attendance: Vec::new(),
            performance: Vec::new(),
        }
    }

    // -----------------------------------------------------------------
    // Directory lookups (immutable collections)
    // -----------------------------------------------------------------

    /// Find a user by exact username match. No credential check.
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Find a user by exact username and password match (both
    /// case-sensitive). This is the login check.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
    }

    /// Find a teacher by id.
    pub fn teacher_by_id(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// All classes, in seed order.
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// All subjects, in seed order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    // -----------------------------------------------------------------
    // Students
    // -----------------------------------------------------------------

    /// All students, in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Find a student by id.
    pub fn student_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// All students whose class matches `class_id` exactly.
    pub fn students_in_class(&self, class_id: &ClassId) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| s.class == *class_id)
            .cloned()
            .collect()
    }

    /// Append a new student, assigning the next free id.
    ///
    /// The id is (max existing id) + 1, or 1 for an empty roster. Ids
    /// are therefore reused once the highest-id student is deleted.
    pub fn create_student(
        &mut self,
        name: String,
        class: ClassId,
        subjects: Vec<String>,
    ) -> Student {
        let id = self
            .students
            .iter()
            .map(|s| s.id.into_inner())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        let student = Student {
            id: StudentId::new(id),
            name,
            class,
            subjects,
        };
        self.students.push(student.clone());
        student
    }

    /// Apply a partial update to the student with the given id.
    ///
    /// Only fields present in the patch are overwritten; the record
    /// keeps its position in the roster.
    pub fn update_student(
        &mut self,
        id: StudentId,
        patch: StudentPatch,
    ) -> Result<Student, StoreError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::StudentNotFound(id))?;
        patch.name.apply_to(&mut student.name);
        patch.class.apply_to(&mut student.class);
        patch.subjects.apply_to(&mut student.subjects);
        Ok(student.clone())
    }

    /// Remove the student with the given id.
    ///
    /// Attendance and performance records referencing the student are
    /// left in place; nothing cascades.
    pub fn delete_student(&mut self, id: StudentId) -> Result<(), StoreError> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::StudentNotFound(id))?;
        self.students.remove(index);
        Ok(())
    }

    // -----------------------------------------------------------------
    // Attendance
    // -----------------------------------------------------------------

    /// All attendance records, in insertion order.
    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    /// Insert an attendance record, replacing any existing record with
    /// the same (student, class, date) natural key.
    ///
    /// Replace means remove-then-insert: the new record supersedes the
    /// old one entirely and moves to the end of the sequence.
    pub fn record_attendance(&mut self, record: AttendanceRecord) {
        self.attendance.retain(|r| !r.same_key(&record));
        self.attendance.push(record);
    }

    /// All attendance records for a class, in insertion order.
    pub fn attendance_for_class(&self, class_id: &ClassId) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|r| r.class_id == *class_id)
            .cloned()
            .collect()
    }

    /// All attendance records for a student, in insertion order.
    pub fn attendance_for_student(&self, student_id: StudentId) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect()
    }

    // -----------------------------------------------------------------
    // Performance
    // -----------------------------------------------------------------

    /// Find the performance record for a student, if one exists.
    pub fn performance_for_student(&self, student_id: StudentId) -> Option<&PerformanceRecord> {
        self.performance.iter().find(|r| r.student_id == student_id)
    }

    /// Create-or-merge the performance record for a student.
    ///
    /// If no record exists, a new one is created holding exactly the
    /// fields the patch supplies. If one exists, each field present in
    /// the patch overwrites the stored field -- a present-but-falsy
    /// value (e.g. a mark of 0) still overwrites, while an absent field
    /// is left untouched. Records are never deleted.
    pub fn upsert_performance(
        &mut self,
        student_id: StudentId,
        patch: PerformancePatch,
    ) -> PerformanceRecord {
        if let Some(record) = self.performance.iter_mut().find(|r| r.student_id == student_id) {
            patch.term1.apply_to_optional(&mut record.term1);
            patch.term2.apply_to_optional(&mut record.term2);
            patch.term3.apply_to_optional(&mut record.term3);
            patch.periodic_tests.apply_to_optional(&mut record.periodic_tests);
            patch.feedback.apply_to_optional(&mut record.feedback);
            return record.clone();
        }

        let record = PerformanceRecord {
            student_id,
            term1: patch.term1.into_option(),
            term2: patch.term2.into_option(),
            term3: patch.term3.into_option(),
            periodic_tests: patch.periodic_tests.into_option(),
            feedback: patch.feedback.into_option(),
        };
        self.performance.push(record.clone());
        record
    }

    // -----------------------------------------------------------------
    // Counts (status page)
    // -----------------------------------------------------------------

    /// Number of students on the roster.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of attendance records held.
    pub fn attendance_count(&self) -> usize {
        self.attendance.len()
    }

    /// Number of performance records held.
    pub fn performance_count(&self) -> usize {
        self.performance.len()
    }
}
