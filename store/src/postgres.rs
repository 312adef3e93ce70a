//! Postgres backend.
//!
//! # Design
//! Each operation issues exactly one statement against the `todo` table and
//! no explicit transactions are opened; concurrent access is left to the
//! database. The table layout lives in `schema.sql` next to this crate's
//! manifest; this module never creates or alters it.

use std::fmt;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use sqlx::{Connection, FromRow};
use tracing::{debug, error, info};

use crate::error::{Result, StoreError};
use crate::store::TodoStore;
use crate::types::TodoItem;

const MAX_CONNECTIONS: u32 = 5;

const SELECT_BY_STATUS: &str = "SELECT id, title, status FROM todo WHERE status = $1 ORDER BY id";
const INSERT: &str = "INSERT INTO todo (title) VALUES ($1) RETURNING id, title, status";
const UPDATE_STATUS: &str = "UPDATE todo SET status = $1 WHERE id = $2 RETURNING id, title, status";
const DELETE: &str = "DELETE FROM todo WHERE id = $1";

/// Connection parameters for the Postgres backend.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

impl DbConfig {
    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }
}

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    status: bool,
}

impl From<TodoRow> for TodoItem {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            completed: row.status,
        }
    }
}

/// `TodoStore` backed by a Postgres `todo` table.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open a pool and verify the database answers a ping.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(config.connect_options())
            .await?;

        let mut conn = pool.acquire().await?;
        conn.ping().await?;
        drop(conn);

        info!(host = %config.host, port = config.port, database = %config.database, "database connected");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn list_by_status(&self, completed: bool) -> Result<Vec<TodoItem>> {
        let rows = sqlx::query_as::<_, TodoRow>(SELECT_BY_STATUS)
            .bind(completed)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_failure("list todos"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Log a driver error with context and wrap it as `StoreError::Storage`.
fn storage_failure(op: &'static str) -> impl Fn(sqlx::Error) -> StoreError {
    move |err| {
        error!(op, error = %err, "database error");
        StoreError::Storage(err)
    }
}

#[async_trait]
impl TodoStore for PgStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn list_completed(&self) -> Result<Vec<TodoItem>> {
        self.list_by_status(true).await
    }

    async fn list_incomplete(&self) -> Result<Vec<TodoItem>> {
        self.list_by_status(false).await
    }

    async fn create(&self, title: &str) -> Result<TodoItem> {
        let row = sqlx::query_as::<_, TodoRow>(INSERT)
            .bind(title)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_failure("create todo"))?;
        debug!(id = row.id, "created todo");
        Ok(row.into())
    }

    async fn update_status(&self, id: i64, completed: bool) -> Result<TodoItem> {
        let row = sqlx::query_as::<_, TodoRow>(UPDATE_STATUS)
            .bind(completed)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_failure("update todo"))?;
        let row = row.ok_or(StoreError::NotFound(id))?;
        debug!(id, completed, "updated todo status");
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_failure("delete todo"))?;
        debug!(id, removed = result.rows_affected(), "deleted todo");
        Ok(())
    }
}
