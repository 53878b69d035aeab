use std::collections::{BTreeMap, BTreeSet};

use super::{DayRecord, StudyDay, StudyStore};
use crate::achievements::Achievement;
use crate::error::StoreError;

/// In-process study log. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    days: BTreeMap<StudyDay, DayRecord>,
    achievements: BTreeSet<Achievement>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a day directly, replacing any existing record.
    pub fn insert_day(&mut self, day: StudyDay, record: DayRecord) {
        self.days.insert(day, record);
    }
}

impl StudyStore for MemoryStore {
    fn record_focus(&mut self, day: StudyDay, minutes: u32) -> Result<DayRecord, StoreError> {
        let record = self.days.entry(day).or_default();
        record.add_focus(minutes);
        Ok(*record)
    }

    fn day(&self, day: StudyDay) -> Result<Option<DayRecord>, StoreError> {
        Ok(self.days.get(&day).copied())
    }

    fn days(&self) -> Result<BTreeMap<StudyDay, DayRecord>, StoreError> {
        Ok(self.days.clone())
    }

    fn unlocked_achievements(&self) -> Result<BTreeSet<Achievement>, StoreError> {
        Ok(self.achievements.clone())
    }

    fn unlock(&mut self, achievement: Achievement) -> Result<bool, StoreError> {
        Ok(self.achievements.insert(achievement))
    }
}
