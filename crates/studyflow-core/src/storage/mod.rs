mod config;
mod day;
mod memory;
pub mod study_db;

pub use config::{Config, NotificationsConfig, TimerConfig};
pub use day::{DayRecord, StudyDay};
pub use memory::MemoryStore;
pub use study_db::StudyDb;

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::achievements::Achievement;
use crate::error::{ConfigError, StoreError};

/// Durable study log: per-day focus totals plus unlocked achievements.
///
/// The session controller only ever calls [`StudyStore::record_focus`], and
/// treats a failure there as non-fatal.
pub trait StudyStore {
    /// Add one completed focus session worth `minutes` to `day`, creating the
    /// record if absent. Returns the updated record.
    fn record_focus(&mut self, day: StudyDay, minutes: u32) -> Result<DayRecord, StoreError>;

    fn day(&self, day: StudyDay) -> Result<Option<DayRecord>, StoreError>;

    /// Every recorded day, oldest first.
    fn days(&self) -> Result<BTreeMap<StudyDay, DayRecord>, StoreError>;

    fn unlocked_achievements(&self) -> Result<BTreeSet<Achievement>, StoreError>;

    /// Returns `true` only when the achievement was not unlocked before.
    fn unlock(&mut self, achievement: Achievement) -> Result<bool, StoreError>;
}

/// Returns the StudyFlow data directory, creating it if needed.
///
/// `STUDYFLOW_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/studyflow[-dev]/`, with `STUDYFLOW_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("STUDYFLOW_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STUDYFLOW_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studyflow-dev")
            } else {
                base_dir.join("studyflow")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
