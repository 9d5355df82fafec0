//! Infrastructure: configuration and SQLite connections.

pub mod config;
pub mod db;

pub use config::{DbConfig, DbLocation, DATABASE_PATH_ENV, MEMORY_TOKEN};
pub use db::{create_database_connection, open_connection, with_connection, DbConnection};
