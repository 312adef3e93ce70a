//! HTTP front end for the todo service.
//!
//! Routes requests onto whichever `TodoStore` the binary selected at startup.
//! Path ids and form values arrive as raw strings and are parsed here, so a
//! malformed value is answered with 406 before the store is touched.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use todo_store::TodoStore;
use tokio::net::TcpListener;
use tracing::info;

pub mod config;
pub mod error;
pub mod handlers;

pub use config::{Backend, Config};
pub use error::{ApiError, StatusMessage};

pub type SharedStore = Arc<dyn TodoStore>;

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/todos", post(handlers::create_todo))
        .route("/todos/completed", get(handlers::list_completed))
        .route("/todos/incomplete", get(handlers::list_incomplete))
        .route(
            "/todos/{id}",
            put(handlers::update_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    info!(addr = ?listener.local_addr().ok(), backend = store.name(), "serving todo api");
    axum::serve(listener, app(store)).await
}
