//! Local achievements unlocked from the study log.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::ports::Notice;
use crate::stats::current_streak;
use crate::storage::{StudyDay, StudyStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    FirstSession,
    WeekWarrior,
    Bookworm,
    TimeMaster,
}

impl Achievement {
    pub const ALL: [Achievement; 4] = [
        Achievement::FirstSession,
        Achievement::WeekWarrior,
        Achievement::Bookworm,
        Achievement::TimeMaster,
    ];

    /// Stable storage key.
    pub fn id(&self) -> &'static str {
        match self {
            Achievement::FirstSession => "first-session",
            Achievement::WeekWarrior => "week-warrior",
            Achievement::Bookworm => "bookworm",
            Achievement::TimeMaster => "time-master",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Achievement::FirstSession => "First Focus Session",
            Achievement::WeekWarrior => "Week Warrior",
            Achievement::Bookworm => "Bookworm",
            Achievement::TimeMaster => "Time Master",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Achievement::FirstSession => "🏆",
            Achievement::WeekWarrior => "🔥",
            Achievement::Bookworm => "📚",
            Achievement::TimeMaster => "⏰",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown achievement: {0}")]
pub struct UnknownAchievement(pub String);

impl FromStr for Achievement {
    type Err = UnknownAchievement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Achievement::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| UnknownAchievement(s.to_string()))
    }
}

/// Evaluates unlock rules against the study log.
///
/// Only `FirstSession` and `WeekWarrior` have rules; the other catalog
/// entries can only be unlocked directly through the store.
#[derive(Debug, Clone)]
pub struct AchievementTracker {
    pub week_warrior_streak: u32,
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self {
            week_warrior_streak: 7,
        }
    }
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlock whatever the log now qualifies for. Returns newly unlocked
    /// achievements only.
    pub fn check(
        &self,
        store: &mut dyn StudyStore,
        today: StudyDay,
    ) -> Result<Vec<Achievement>, StoreError> {
        let mut earned = Vec::new();

        let today_sessions = store.day(today)?.map(|r| r.sessions).unwrap_or(0);
        if today_sessions >= 1 {
            earned.push(Achievement::FirstSession);
        }

        let streak = current_streak(&store.days()?, today);
        if streak >= self.week_warrior_streak {
            earned.push(Achievement::WeekWarrior);
        }

        let mut unlocked = Vec::new();
        for achievement in earned {
            if store.unlock(achievement)? {
                tracing::info!(id = achievement.id(), "achievement unlocked");
                unlocked.push(achievement);
            }
        }
        Ok(unlocked)
    }
}

pub fn announce(achievement: Achievement) -> Notice {
    Notice::success(format!(
        "{} Achievement unlocked: {}",
        achievement.icon(),
        achievement.name()
    ))
}
