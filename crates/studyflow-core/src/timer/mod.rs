mod controller;
mod display;
mod phase;

pub use controller::{Collaborators, RunState, SessionController, SessionState};
pub use display::{format_clock, progress_fraction, DisplayFrame};
pub use phase::{IntervalDurations, Phase};
