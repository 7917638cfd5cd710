// Preference storage
// Durable key-value storage for user preferences

use anyhow::{Context, Result};
use rusqlite::OptionalExtension;
use std::collections::HashMap;

use crate::services::database::Database;

/// Key-value backend the theme preference persists through.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Returns `Ok(None)` when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value`, replacing any previous value for `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in the `preferences` table.
pub struct SqlitePreferenceStore<'a> {
    db: &'a Database,
}

impl<'a> SqlitePreferenceStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl PreferenceStore for SqlitePreferenceStore<'_> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let conn = self.db.connection();
        let value = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read preference '{}'", key))?;

        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let conn = self.db.connection();
        conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value, updated_at) \
             VALUES (?1, ?2, CURRENT_TIMESTAMP)",
            (key, value),
        )
        .with_context(|| format!("Failed to write preference '{}'", key))?;

        Ok(())
    }
}

/// Process-local store, used by tests and when no database is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, e.g. to simulate an earlier session.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
