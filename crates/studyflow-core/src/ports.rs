//! Interfaces the session controller drives.
//!
//! None of these may fail back into the controller except [`AudioCue`], whose
//! error is discarded at the call site.

use serde::{Deserialize, Serialize};

use crate::error::CueError;
use crate::storage::StudyDay;
use crate::timer::DisplayFrame;

/// Renders the countdown.
pub trait DisplaySink {
    fn render(&mut self, frame: &DisplayFrame);

    /// Toggle the "session active" visual cue.
    fn set_active(&mut self, active: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
}

/// A transient, auto-dismissing message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Best-effort completion sound.
pub trait AudioCue {
    fn play(&mut self) -> Result<(), CueError>;
}

/// Source of "today" for the study log.
pub trait Clock {
    fn today(&self) -> StudyDay;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> StudyDay {
        StudyDay::today()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub StudyDay);

impl Clock for FixedClock {
    fn today(&self) -> StudyDay {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn render(&mut self, _frame: &DisplayFrame) {}
    fn set_active(&mut self, _active: bool) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _notice: Notice) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&mut self) -> Result<(), CueError> {
        Ok(())
    }
}
