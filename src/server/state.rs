//! Application state shared across all request handlers.
//!
//! The state is built once at startup and cloned into each handler through Axum's
//! state extraction. It holds only the store gateway: routes and the static asset
//! descriptor are fixed when the router is built and need no runtime state.

use crate::server::data::store::Store;

/// Application state containing shared resources.
///
/// Cloning is cheap: `Store` wraps a pooled connection handle and every clone shares
/// the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Store gateway shared by every request.
    ///
    /// Concurrency control (connection checkout and return) is left to the pool;
    /// nothing here takes a lock.
    pub store: Store,
}

impl AppState {
    /// Creates a new application state around the store gateway.
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
