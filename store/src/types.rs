//! Domain record for the todo service.
//!
//! # Design
//! `title` is fixed at creation. `completed` is the only field that changes
//! after an item exists, and only through `TodoStore::update_status`.

use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    /// A freshly created, not yet completed item.
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            completed: false,
        }
    }
}
