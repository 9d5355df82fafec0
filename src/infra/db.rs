//! SQLite connection factory.

use super::config::{DbConfig, DbLocation};
use crate::error::AppError;
use rusqlite::Connection;
use std::ops::Deref;

/// An open SQLite connection owned by one caller.
///
/// Dropping the handle closes the connection; `close` does the same but
/// reports failures. Either way the handle is gone afterwards, so a closed
/// connection can never be used.
#[derive(Debug)]
pub struct DbConnection {
    conn: Connection,
    location: DbLocation,
}

impl DbConnection {
    pub fn location(&self) -> &DbLocation {
        &self.location
    }

    /// Trivial round trip to the backend.
    pub fn ping(&self) -> Result<(), AppError> {
        self.conn.query_row("SELECT 1", [], |r| r.get::<_, i64>(0))?;
        Ok(())
    }

    pub fn close(self) -> Result<(), AppError> {
        let DbConnection { conn, location } = self;
        // On failure rusqlite hands the connection back; dropping it retries the close.
        conn.close().map_err(|(_, e)| AppError::Db(e))?;
        log::debug!("closed database {}", describe(&location));
        Ok(())
    }
}

impl Deref for DbConnection {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

/// Open a connection at the configured location.
///
/// No directories are created and no statements are run. Storage errors are
/// returned as `AppError::Db` wrapping the `rusqlite::Error` unchanged.
pub fn open_connection(config: &DbConfig) -> Result<DbConnection, AppError> {
    let location = config.location().clone();
    let conn = match &location {
        DbLocation::Memory => Connection::open_in_memory()?,
        DbLocation::File(path) => Connection::open(path)?,
    };
    log::debug!("opened database {}", describe(&location));
    Ok(DbConnection { conn, location })
}

/// Open a connection using `DATABASE_PATH` from the environment.
///
/// Fails with `AppError::Config` before touching storage when the variable is
/// unset or empty.
pub fn create_database_connection() -> Result<DbConnection, AppError> {
    let config = DbConfig::from_env()?;
    open_connection(&config)
}

/// Run `f` with a connection from `create_database_connection`, then close it.
///
/// The connection is released on every path. If `f` fails its error wins over
/// any close error.
pub fn with_connection<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce(&DbConnection) -> Result<T, AppError>,
{
    let conn = create_database_connection()?;
    match f(&conn) {
        Ok(value) => {
            conn.close()?;
            Ok(value)
        }
        Err(e) => {
            drop(conn);
            Err(e)
        }
    }
}

fn describe(location: &DbLocation) -> String {
    match location {
        DbLocation::Memory => "in memory".to_string(),
        DbLocation::File(path) => format!("at {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_connection_is_usable() {
        let conn = open_connection(&DbConfig::memory()).unwrap();
        assert!(conn.location().is_memory());
        conn.ping().unwrap();
        conn.execute("CREATE TABLE t (x INTEGER)", []).unwrap();
        conn.close().unwrap();
    }

    #[test]
    fn memory_connections_are_independent() {
        let a = open_connection(&DbConfig::memory()).unwrap();
        let b = open_connection(&DbConfig::memory()).unwrap();
        a.execute("CREATE TABLE books (title TEXT)", []).unwrap();
        let n: i64 = b
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = 'books'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn open_runs_no_statements() {
        let conn = open_connection(&DbConfig::memory()).unwrap();
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master", [], |r| r.get(0))
            .unwrap();
        assert_eq!(n, 0);
    }
}
