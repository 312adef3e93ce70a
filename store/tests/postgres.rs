//! Lifecycle scenarios against a live Postgres database.
//!
//! Ignored by default. Point `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`
//! and `DB_NAME` at a scratch database and run with `--ignored`. The `todo`
//! table is created from `schema.sql` if it is missing.

mod common;

use todo_store::{DbConfig, PgStore};

fn config_from_env() -> DbConfig {
    let var = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());
    DbConfig {
        host: var("DB_HOST", "localhost"),
        port: var("DB_PORT", "5432").parse().expect("DB_PORT must be a port number"),
        user: var("DB_USER", "postgres"),
        password: var("DB_PASSWORD", ""),
        database: var("DB_NAME", "todo"),
    }
}

async fn store() -> PgStore {
    let store = PgStore::connect(&config_from_env()).await.expect("database connection");
    sqlx::query(include_str!("../schema.sql"))
        .execute(store.pool())
        .await
        .expect("create todo table");
    store
}

#[tokio::test]
#[ignore = "needs a live Postgres database"]
async fn lifecycle() {
    common::lifecycle(&store().await).await;
}

#[tokio::test]
#[ignore = "needs a live Postgres database"]
async fn update_missing_is_not_found() {
    common::update_missing(&store().await, i64::MAX).await;
}

#[tokio::test]
#[ignore = "needs a live Postgres database"]
async fn ids_stay_unique() {
    common::ids_stay_unique(&store().await).await;
}

#[tokio::test]
#[ignore = "needs a live Postgres database"]
async fn unreachable_database_fails_to_connect() {
    let config = DbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        ..config_from_env()
    };
    assert!(PgStore::connect(&config).await.is_err());
}
