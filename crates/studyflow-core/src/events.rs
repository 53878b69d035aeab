use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::StudyDay;
use crate::timer::{Phase, RunState};

/// Every state change of the session controller produces an Event.
/// Front ends print them; the achievement tracker reacts to completions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    Tick {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Focus interval finished; the break is now loaded.
    FocusCompleted {
        completed_focus_count: u32,
        day: StudyDay,
        credited_minutes: u32,
        /// Whether the study log accepted the write.
        recorded: bool,
        at: DateTime<Utc>,
    },
    /// Break finished; the next focus interval is now loaded.
    BreakCompleted {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        run_state: RunState,
        remaining_secs: u32,
        full_secs: u32,
        clock: String,
        progress: f64,
        completed_focus_count: u32,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::TimerStarted { at, .. }
            | Event::TimerPaused { at, .. }
            | Event::TimerReset { at, .. }
            | Event::Tick { at, .. }
            | Event::FocusCompleted { at, .. }
            | Event::BreakCompleted { at }
            | Event::StateSnapshot { at, .. } => *at,
        }
    }

    /// True for events that end an interval.
    pub fn is_completion(&self) -> bool {
        matches!(self, Event::FocusCompleted { .. } | Event::BreakCompleted { .. })
    }
}
