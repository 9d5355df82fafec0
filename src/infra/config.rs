//! Database configuration read at the process boundary.

use crate::error::AppError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Environment variable holding the database location.
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

/// Reserved value selecting a transient, memory-only database.
pub const MEMORY_TOKEN: &str = ":memory:";

const MISSING_PATH_MESSAGE: &str = "DATABASE_PATH environment variable is required. \
     Please set it using: npx dotenvx set DATABASE_PATH ./data/books.db";

/// Where a connection is backed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    Memory,
    File(PathBuf),
}

impl DbLocation {
    pub fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Memory => None,
            Self::File(p) => Some(p),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    location: DbLocation,
}

impl DbConfig {
    /// Validate a raw `DATABASE_PATH` value. The value is used as given and
    /// need not be valid Unicode.
    pub fn new(value: impl AsRef<OsStr>) -> Result<Self, AppError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(missing_path());
        }
        let location = if value == MEMORY_TOKEN {
            DbLocation::Memory
        } else {
            DbLocation::File(PathBuf::from(value))
        };
        Ok(Self { location })
    }

    pub fn memory() -> Self {
        Self {
            location: DbLocation::Memory,
        }
    }

    /// Resolve `DATABASE_PATH` through `lookup`; `None` means unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        match lookup(DATABASE_PATH_ENV) {
            Some(value) => Self::new(value),
            None => Err(missing_path()),
        }
    }

    /// Read `DATABASE_PATH` from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    pub fn location(&self) -> &DbLocation {
        &self.location
    }
}

fn missing_path() -> AppError {
    AppError::Config(MISSING_PATH_MESSAGE.to_string())
}
