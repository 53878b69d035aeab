//! Terminal implementations of the controller's collaborators.

use std::io::Write;

use studyflow_core::ports::{AudioCue, DisplaySink, Notice, NoticeLevel, Notifier};
use studyflow_core::{CueError, DisplayFrame};

const BAR_WIDTH: usize = 24;

/// Redraws a single status line in place.
#[derive(Default)]
pub struct TerminalDisplay {
    active: bool,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&self, frame: &DisplayFrame) -> String {
        let filled = (frame.progress * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let marker = if self.active { '>' } else { ' ' };
        format!(
            "\r{marker} {:<5} {}  [{}{}] {:>3.0}%",
            frame.label(),
            frame.clock,
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            frame.progress * 100.0,
        )
    }
}

impl DisplaySink for TerminalDisplay {
    fn render(&mut self, frame: &DisplayFrame) {
        let mut out = std::io::stdout().lock();
        // A closed stdout must not take the timer down with it.
        let _ = out.write_all(self.line(frame).as_bytes());
        let _ = out.flush();
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Prints notices on their own line to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        tracing::info!(level = ?notice.level, message = %notice.message, "notice");
        let tag = match notice.level {
            NoticeLevel::Info => "StudyFlow",
            NoticeLevel::Success => "StudyFlow *",
        };
        eprintln!("\n[{tag}] {}", notice.message);
    }
}

/// Rings the terminal bell.
pub struct BellCue;

impl AudioCue for BellCue {
    fn play(&mut self) -> Result<(), CueError> {
        let mut out = std::io::stdout().lock();
        out.write_all(b"\x07")?;
        out.flush()?;
        Ok(())
    }
}
