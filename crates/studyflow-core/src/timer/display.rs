//! Rendering helpers for the countdown.
//!
//! The controller hands a [`DisplayFrame`] to its display sink; how the frame
//! is drawn (ring, bar, terminal line) is up to the sink.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Zero-padded `MM:SS`. Minutes are not wrapped at 60.
pub fn format_clock(remaining_secs: u32) -> String {
    let minutes = remaining_secs / 60;
    let seconds = remaining_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Elapsed share of the interval, 0.0 .. 1.0.
pub fn progress_fraction(full_secs: u32, remaining_secs: u32) -> f64 {
    if full_secs == 0 {
        return 0.0;
    }
    let elapsed = full_secs.saturating_sub(remaining_secs);
    elapsed as f64 / full_secs as f64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFrame {
    pub clock: String,
    pub phase: Phase,
    pub progress: f64,
}

impl DisplayFrame {
    pub fn new(phase: Phase, full_secs: u32, remaining_secs: u32) -> Self {
        Self {
            clock: format_clock(remaining_secs),
            phase,
            progress: progress_fraction(full_secs, remaining_secs),
        }
    }

    pub fn label(&self) -> &'static str {
        self.phase.label()
    }

    /// Progress mapped onto an arbitrary range, e.g. `360.0` for a ring.
    pub fn scaled(&self, range: f64) -> f64 {
        self.progress * range
    }

    pub fn degrees(&self) -> f64 {
        self.scaled(360.0)
    }
}
