//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Media storage backend for uploaded icons and banners

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::media::storage::MediaStorage;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn MediaStorage>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Backend that stores and removes uploaded media blobs.
    ///
    /// Services receive it as `&dyn MediaStorage`, which lets tests swap in
    /// the in-memory backend.
    pub storage: Arc<dyn MediaStorage>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `storage` - Media storage backend
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, storage: Arc<dyn MediaStorage>) -> Self {
        Self { db, storage }
    }
}
