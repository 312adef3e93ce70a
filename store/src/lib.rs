//! Storage layer for the todo service.
//!
//! # Overview
//! Every HTTP handler talks to a `TodoStore`. Two backends satisfy the
//! contract: `MemoryStore`, which lives for the lifetime of the process, and
//! `PgStore`, which keeps items in a Postgres `todo` table.
//!
//! # Design
//! - `TodoStore` is an async, object-safe trait so the server can hold an
//!   `Arc<dyn TodoStore>` and pick the backend at startup.
//! - Raw path and form values are turned into typed arguments by the helpers
//!   in `parse`, which report `StoreError::InvalidArgument` on bad input.
//! - Backends never panic on storage failures; they return
//!   `StoreError::Storage` and leave the status mapping to the caller.

pub mod error;
pub mod memory;
pub mod parse;
pub mod postgres;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use parse::{parse_id, parse_status};
pub use postgres::{DbConfig, PgStore};
pub use store::TodoStore;
pub use types::TodoItem;

// Re-exported so callers can name `StoreError::Storage` payloads.
pub use sqlx;
