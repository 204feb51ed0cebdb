//! In-process `TodoStore` used by tests and local runs without MongoDB.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::TodoStore;
use crate::types::{Todo, TodoId};

type Todos = Arc<RwLock<BTreeMap<TodoId, Todo>>>;

/// A `TodoStore` backed by a shared map. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    todos: Todos,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

impl TodoStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> StoreResult<Todo> {
        let todos = self.todos.read().await;
        todos.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn insert(&self, todo: Todo) -> StoreResult<()> {
        let mut todos = self.todos.write().await;
        if todos.contains_key(&todo.id) {
            return Err(StoreError::Duplicate(todo.id));
        }
        debug!(id = %todo.id, "inserting todo");
        todos.insert(todo.id, todo);
        Ok(())
    }

    async fn delete_by_id(&self, id: TodoId) -> StoreResult<()> {
        let mut todos = self.todos.write().await;
        debug!(%id, "deleting todo");
        todos.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
