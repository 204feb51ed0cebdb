//! Data access layer for the todo service.
//!
//! # Overview
//! Defines the todo domain types and the `TodoStore` capability the HTTP
//! layer calls into: list, fetch by id, insert, delete by id, all against a
//! single `todos` collection.
//!
//! # Design
//! - `MongoStore` is the production backend; `MemoryStore` has the same
//!   semantics and needs no server.
//! - Store failures surface as `StoreError`. Missing records are reported as
//!   `StoreError::NotFound` by both backends.
//! - `TodoId` wraps the store's native object id and is always rendered as a
//!   hex string outside the store.

pub mod error;
pub mod memory;
pub mod mongo;
pub mod store;
pub mod types;

pub use error::{InvalidTodoId, StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::TodoStore;
pub use types::{NewTodo, Todo, TodoId};
