//! In-memory entity store for the Campus school-management API.
//!
//! The store holds every collection the API serves and enforces the
//! record-identity invariants: unique max-plus-one student ids,
//! replace-on-conflict attendance keyed by (student, class, date), and
//! merge-on-upsert performance keyed by student.
//!
//! # Modules
//!
//! - [`store`] -- The [`Store`] itself and its operations
//! - [`seed`] -- The demo dataset loaded at process start
//! - [`error`] -- [`StoreError`]

pub mod error;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use seed::demo_store;
pub use store::Store;
