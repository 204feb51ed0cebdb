//! The storage capability handed to the HTTP layer.
//!
//! # Design
//! Handlers never reach for a global connection. They receive a `TodoStore`
//! through router state, so tests can swap in `MemoryStore` or a store that
//! always fails. Methods return `Send` futures so they can be awaited from
//! axum handlers running on a multi-threaded runtime.

use std::future::Future;

use crate::error::StoreResult;
use crate::types::{Todo, TodoId};

/// CRUD access to the single `todos` collection.
///
/// Implementations hold only shared, thread-safe handles (a connection pool
/// or a lock); any per-operation resource is acquired and released inside
/// the call.
pub trait TodoStore: Clone + Send + Sync + 'static {
    /// Every stored todo, in whatever order the backend yields them.
    fn find_all(&self) -> impl Future<Output = StoreResult<Vec<Todo>>> + Send;

    /// Exactly one todo. `StoreError::NotFound` if absent.
    fn find_by_id(&self, id: TodoId) -> impl Future<Output = StoreResult<Todo>> + Send;

    fn insert(&self, todo: Todo) -> impl Future<Output = StoreResult<()>> + Send;

    /// Remove one todo. `StoreError::NotFound` if nothing was removed.
    fn delete_by_id(&self, id: TodoId) -> impl Future<Output = StoreResult<()>> + Send;
}
