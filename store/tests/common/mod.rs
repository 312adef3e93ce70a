//! Backend-agnostic scenarios shared by the per-backend test files.

use todo_store::{StoreError, TodoStore};

/// Create, complete, reopen and delete one item, checking both listings at
/// every step.
pub async fn lifecycle(store: &dyn TodoStore) {
    let created = store.create("buy milk").await.unwrap();
    assert_eq!(created.title, "buy milk");
    assert!(!created.completed);
    let id = created.id;

    let open = store.list_incomplete().await.unwrap();
    assert_eq!(open.iter().filter(|item| item.id == id).count(), 1);
    assert!(store.list_completed().await.unwrap().iter().all(|item| item.id != id));

    let done = store.update_status(id, true).await.unwrap();
    assert_eq!(done.id, id);
    assert_eq!(done.title, "buy milk");
    assert!(done.completed);
    assert!(store.list_completed().await.unwrap().contains(&done));
    assert!(store.list_incomplete().await.unwrap().iter().all(|item| item.id != id));

    let reopened = store.update_status(id, false).await.unwrap();
    assert!(!reopened.completed);
    assert!(store.list_incomplete().await.unwrap().contains(&reopened));
    assert!(store.list_completed().await.unwrap().iter().all(|item| item.id != id));

    store.delete(id).await.unwrap();
    assert!(store.list_completed().await.unwrap().iter().all(|item| item.id != id));
    assert!(store.list_incomplete().await.unwrap().iter().all(|item| item.id != id));

    // Second delete of the same id is still a success.
    store.delete(id).await.unwrap();
}

/// Updating an id nobody holds reports `NotFound` with that id.
pub async fn update_missing(store: &dyn TodoStore, missing: i64) {
    let err = store.update_status(missing, true).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

/// An id freed by delete is never handed out again.
pub async fn ids_stay_unique(store: &dyn TodoStore) {
    let first = store.create("first").await.unwrap();
    let second = store.create("second").await.unwrap();
    store.delete(first.id).await.unwrap();
    let third = store.create("third").await.unwrap();

    assert_ne!(third.id, first.id);
    assert_ne!(third.id, second.id);
    assert!(third.id > second.id);
}
