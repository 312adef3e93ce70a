//! In-process backend.
//!
//! # Design
//! Items live in a `Vec` guarded by a `tokio::sync::RwLock`, so listings keep
//! insertion order and concurrent requests cannot interleave a mutation. Ids
//! come from a counter that only moves forward: deleting an item never frees
//! its id for reuse.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::store::TodoStore;
use crate::types::TodoItem;

#[derive(Debug)]
struct Inner {
    items: Vec<TodoItem>,
    next_id: i64,
}

/// `TodoStore` backed by process memory. Contents vanish on restart.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// An empty store whose first id is 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    async fn list_by_status(&self, completed: bool) -> Vec<TodoItem> {
        let inner = self.inner.read().await;
        inner
            .items
            .iter()
            .filter(|item| item.completed == completed)
            .cloned()
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_completed(&self) -> Result<Vec<TodoItem>> {
        Ok(self.list_by_status(true).await)
    }

    async fn list_incomplete(&self) -> Result<Vec<TodoItem>> {
        Ok(self.list_by_status(false).await)
    }

    async fn create(&self, title: &str) -> Result<TodoItem> {
        let mut inner = self.inner.write().await;
        let item = TodoItem::new(inner.next_id, title);
        inner.next_id += 1;
        inner.items.push(item.clone());
        debug!(id = item.id, "created todo");
        Ok(item)
    }

    async fn update_status(&self, id: i64, completed: bool) -> Result<TodoItem> {
        let mut inner = self.inner.write().await;
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        item.completed = completed;
        debug!(id, completed, "updated todo status");
        Ok(item.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        debug!(id, removed = before - inner.items.len(), "deleted todo");
        Ok(())
    }
}
