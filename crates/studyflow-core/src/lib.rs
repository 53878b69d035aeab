//! # StudyFlow Core Library
//!
//! This library provides the core logic for StudyFlow, a focus/break study
//! timer. The CLI binary is a thin terminal layer over the same library.
//!
//! ## Architecture
//!
//! - **Session Controller**: A four-operation state machine (start, pause,
//!   reset, tick-driven completion) cycling between Focus and Break
//! - **Ticker**: Cancellable one-second tick sources; the controller owns at
//!   most one at a time
//! - **Storage**: SQLite-backed study log keyed by ISO calendar day, plus
//!   TOML-based configuration
//! - **Stats / Achievements**: Daily goal progress, streaks and unlocks
//!   derived from the study log
//!
//! ## Key Components
//!
//! - [`SessionController`]: Core timer state machine
//! - [`SessionRunner`]: Async driver wiring a [`TokioTicker`] to the controller
//! - [`StudyStore`]: Persistence interface, implemented by [`StudyDb`] and
//!   [`MemoryStore`]
//! - [`Config`]: Application configuration management

pub mod achievements;
pub mod error;
pub mod events;
pub mod ports;
pub mod runtime;
pub mod stats;
pub mod storage;
pub mod subjects;
pub mod ticker;
pub mod timer;

pub use achievements::{Achievement, AchievementTracker};
pub use error::{ConfigError, CoreError, CueError, StoreError};
pub use events::Event;
pub use ports::{AudioCue, Clock, DisplaySink, Notice, NoticeLevel, Notifier, SystemClock};
pub use runtime::{Command, SessionRunner};
pub use stats::{DailyProgress, StudySummary};
pub use storage::{Config, DayRecord, MemoryStore, StudyDay, StudyDb, StudyStore};
pub use subjects::{Subject, SubjectPicker};
pub use ticker::{ManualTicker, TickId, Ticker, TokioTicker};
pub use timer::{Collaborators, DisplayFrame, Phase, RunState, SessionController};
