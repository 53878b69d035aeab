use serde::{Deserialize, Serialize};

/// Which kind of interval is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Focus,
    Break,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Focus => "Focus",
            Phase::Break => "Break",
        }
    }

    /// The phase that follows this one in the cycle.
    pub fn next(&self) -> Phase {
        match self {
            Phase::Focus => Phase::Break,
            Phase::Break => Phase::Focus,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Full length of each interval, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalDurations {
    pub focus_secs: u32,
    pub break_secs: u32,
}

impl IntervalDurations {
    pub const DEFAULT_FOCUS_MIN: u32 = 25;
    pub const DEFAULT_BREAK_MIN: u32 = 5;

    /// Build from whole minutes.
    ///
    /// Uses saturating arithmetic so absurd config values cannot overflow.
    pub fn from_minutes(focus_min: u32, break_min: u32) -> Self {
        Self {
            focus_secs: focus_min.saturating_mul(60),
            break_secs: break_min.saturating_mul(60),
        }
    }

    pub fn duration(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus_secs,
            Phase::Break => self.break_secs,
        }
    }

    /// Minutes credited to the study log for one completed focus interval.
    pub fn focus_minutes(&self) -> u32 {
        self.focus_secs / 60
    }
}

impl Default for IntervalDurations {
    fn default() -> Self {
        Self::from_minutes(Self::DEFAULT_FOCUS_MIN, Self::DEFAULT_BREAK_MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations() {
        let d = IntervalDurations::default();
        assert_eq!(d.duration(Phase::Focus), 1500);
        assert_eq!(d.duration(Phase::Break), 300);
        assert_eq!(d.focus_minutes(), 25);
    }

    #[test]
    fn phases_alternate() {
        assert_eq!(Phase::Focus.next(), Phase::Break);
        assert_eq!(Phase::Break.next(), Phase::Focus);
    }

    #[test]
    fn from_minutes_saturates() {
        let d = IntervalDurations::from_minutes(u32::MAX, 1);
        assert_eq!(d.focus_secs, u32::MAX);
        assert_eq!(d.break_secs, 60);
    }
}
