//! Campus REST API server (Axum HTTP) over the in-memory store.
//!
//! The transport (TCP accept loop, HTTP parsing, routing) is Axum's;
//! this crate supplies the request-handling core: identity resolution,
//! role gating, and the resource handlers with their record-identity
//! semantics (max-plus-one student ids, replace-on-conflict attendance,
//! merge-on-upsert performance).
//!
//! # Modules
//!
//! - [`state`] -- Shared [`AppState`](state::AppState) (store behind one lock)
//! - [`auth`] -- Identity resolver and role-gate middleware
//! - [`error`] -- [`ApiError`](error::ApiError) and its HTTP mapping
//! - [`login`] -- `POST /api/login`
//! - [`admin`] -- Admin-gated roster management
//! - [`teacher`] -- Teacher-gated attendance and performance entry
//! - [`student`] -- Student-gated own-record reads
//! - [`status`] -- HTML status page
//! - [`router`] -- Router assembly and middleware ordering
//! - [`server`] -- TCP bind and serve loop

pub mod admin;
pub mod auth;
pub mod error;
pub mod login;
pub mod router;
pub mod server;
pub mod state;
pub mod status;
pub mod student;
pub mod teacher;
