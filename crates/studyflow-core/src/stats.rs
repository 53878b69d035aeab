//! Study statistics derived from the study log.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::storage::{DayRecord, StudyDay};

/// Today's sessions against the daily goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub day: StudyDay,
    pub sessions: u32,
    pub total_minutes: u32,
    pub goal: u32,
    /// 0.0 .. 100.0, capped.
    pub percent: f64,
}

impl DailyProgress {
    pub fn new(day: StudyDay, record: Option<DayRecord>, goal: u32) -> Self {
        let record = record.unwrap_or_default();
        let percent = if goal == 0 {
            0.0
        } else {
            (record.sessions as f64 / goal as f64 * 100.0).min(100.0)
        };
        Self {
            day,
            sessions: record.sessions,
            total_minutes: record.total_minutes,
            goal,
            percent,
        }
    }

    /// `"3/8"`
    pub fn label(&self) -> String {
        format!("{}/{}", self.sessions, self.goal)
    }
}

/// Aggregate over every recorded day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudySummary {
    pub total_sessions: u64,
    pub total_minutes: u64,
    /// Whole hours, rounded to nearest.
    pub total_hours: u64,
    pub days_studied: usize,
    pub streak: u32,
}

pub fn summarize(days: &BTreeMap<StudyDay, DayRecord>, today: StudyDay) -> StudySummary {
    let total_sessions = days.values().map(|r| r.sessions as u64).sum();
    let total_minutes: u64 = days.values().map(|r| r.total_minutes as u64).sum();
    StudySummary {
        total_sessions,
        total_minutes,
        total_hours: (total_minutes + 30) / 60,
        days_studied: days.len(),
        streak: current_streak(days, today),
    }
}

/// Consecutive recorded days ending today. A missing record today yields 0.
///
/// Days after `today` are ignored.
pub fn current_streak(days: &BTreeMap<StudyDay, DayRecord>, today: StudyDay) -> u32 {
    let mut streak = 0;
    let mut expected = Some(today);

    for day in days.range(..=today).map(|(day, _)| *day).rev() {
        if Some(day) != expected {
            break;
        }
        streak += 1;
        expected = day.pred();
    }
    streak
}
