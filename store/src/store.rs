//! The storage contract shared by every backend.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::TodoItem;

/// Persistence operations behind the todo HTTP handlers.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Short backend name, used in logs and the health endpoint.
    fn name(&self) -> &'static str;

    /// All items with `completed == true`, in backend order.
    async fn list_completed(&self) -> Result<Vec<TodoItem>>;

    /// All items with `completed == false`, in backend order.
    async fn list_incomplete(&self) -> Result<Vec<TodoItem>>;

    /// Store a new incomplete item under a fresh id and return it.
    async fn create(&self, title: &str) -> Result<TodoItem>;

    /// Set the completion flag of an existing item.
    ///
    /// Returns `StoreError::NotFound` when no item has `id`.
    async fn update_status(&self, id: i64, completed: bool) -> Result<TodoItem>;

    /// Remove the item with `id`. Removing an unknown id succeeds.
    async fn delete(&self, id: i64) -> Result<()>;
}
