pub mod memory;
pub mod todo_repo;

use async_trait::async_trait;

use crate::models::{Todo, TodoFields};
use crate::utils::errors::Result;

pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use todo_repo::TodoRepo;

/// Persistent collection of todos keyed by id.
///
/// Every lookup by id fails with `AppError::NotFound` when no such record exists.
/// `?Send` because fetch futures on the Workers runtime are not `Send`.
#[async_trait(?Send)]
pub trait TodoStore {
    /// All records, oldest first (ascending id).
    async fn list_all(&self) -> Result<Vec<Todo>>;

    async fn get(&self, id: i64) -> Result<Todo>;

    /// Stores a new unresolved record and returns it with its assigned id.
    async fn create(&self, fields: TodoFields) -> Result<Todo>;

    /// Replaces title, description and due date. `resolved` is left alone.
    async fn update(&self, id: i64, fields: TodoFields) -> Result<Todo>;

    async fn delete(&self, id: i64) -> Result<()>;

    /// Flips `resolved` and returns the updated record.
    async fn toggle(&self, id: i64) -> Result<Todo>;
}
