//! SQLite-based study log.
//!
//! Provides persistent storage for:
//! - Per-day focus totals (sessions and minutes)
//! - Unlocked achievements
//! - Key-value store for small bits of application state

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, DayRecord, StudyDay, StudyStore};
use crate::achievements::Achievement;
use crate::error::{CoreError, StoreError};

/// SQLite database for the study log.
pub struct StudyDb {
    conn: Connection,
}

impl StudyDb {
    /// Open the database at `<data dir>/studyflow.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("studyflow.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open (or create) the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS study_days (
                day           TEXT PRIMARY KEY,
                sessions      INTEGER NOT NULL DEFAULT 0,
                total_minutes INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS achievements (
                id          TEXT PRIMARY KEY,
                unlocked_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn parse_day(raw: String) -> Result<StudyDay, StoreError> {
        raw.parse().map_err(|e: chrono::ParseError| StoreError::Corrupt {
            key: raw.clone(),
            message: e.to_string(),
        })
    }
}

impl StudyStore for StudyDb {
    fn record_focus(&mut self, day: StudyDay, minutes: u32) -> Result<DayRecord, StoreError> {
        let key = day.to_string();
        // The day upsert and `last_study_day` commit together.
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO study_days (day, sessions, total_minutes) VALUES (?1, 1, ?2)
             ON CONFLICT(day) DO UPDATE SET
                sessions = sessions + 1,
                total_minutes = total_minutes + excluded.total_minutes",
            params![key, minutes],
        )?;
        tx.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES ('last_study_day', ?1)",
            params![key],
        )?;
        let record = tx
            .query_row(
                "SELECT sessions, total_minutes FROM study_days WHERE day = ?1",
                params![key],
                |row| {
                    Ok(DayRecord {
                        sessions: row.get(0)?,
                        total_minutes: row.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| StoreError::QueryFailed(format!("record for {key} vanished")))?;
        tx.commit()?;
        Ok(record)
    }

    fn day(&self, day: StudyDay) -> Result<Option<DayRecord>, StoreError> {
        let record = self
            .conn
            .query_row(
                "SELECT sessions, total_minutes FROM study_days WHERE day = ?1",
                params![day.to_string()],
                |row| {
                    Ok(DayRecord {
                        sessions: row.get(0)?,
                        total_minutes: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    fn days(&self) -> Result<BTreeMap<StudyDay, DayRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT day, sessions, total_minutes FROM study_days ORDER BY day")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                DayRecord {
                    sessions: row.get(1)?,
                    total_minutes: row.get(2)?,
                },
            ))
        })?;

        let mut days = BTreeMap::new();
        for row in rows {
            let (raw, record) = row?;
            days.insert(Self::parse_day(raw)?, record);
        }
        Ok(days)
    }

    fn unlocked_achievements(&self) -> Result<BTreeSet<Achievement>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT id FROM achievements")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut unlocked = BTreeSet::new();
        for row in rows {
            let id = row?;
            match id.parse::<Achievement>() {
                Ok(achievement) => {
                    unlocked.insert(achievement);
                }
                Err(_) => tracing::warn!(%id, "ignoring unknown achievement id"),
            }
        }
        Ok(unlocked)
    }

    fn unlock(&mut self, achievement: Achievement) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO achievements (id, unlocked_at) VALUES (?1, ?2)",
            params![achievement.id(), Utc::now().to_rfc3339()],
        )?;
        Ok(changed > 0)
    }
}
