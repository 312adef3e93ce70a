//! Command-line and environment configuration, read once at startup.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};
use todo_store::DbConfig;

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// Keep items in process memory
    #[default]
    Memory,
    /// Keep items in a Postgres `todo` table
    Postgres,
}

/// Todo list HTTP backend
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "TODO_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Storage backend
    #[arg(long, env = "TODO_BACKEND", value_enum, default_value_t = Backend::Memory)]
    pub backend: Backend,

    /// Database host (postgres backend)
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port (postgres backend)
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user (postgres backend)
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password (postgres backend)
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database name (postgres backend)
    #[arg(long, env = "DB_NAME", default_value = "todo")]
    pub db_name: String,
}

impl Config {
    pub fn db(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
        }
    }
}
