//! Shared application state for the Campus API server.
//!
//! [`AppState`] owns the [`Store`] behind a single read-write lock.
//! Every handler completes its read-modify-write sequence inside one
//! guard acquisition, which is what keeps the store's natural-key
//! invariants intact under the multi-threaded runtime (the store is
//! process-wide and shared by all requests).

use std::sync::Arc;

use campus_store::Store;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Cheap to clone; injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The entity store, guarded by one lock for the whole process.
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    /// Create application state owning the given store.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
