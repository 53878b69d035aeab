//! Session cycle controller.
//!
//! Owns the focus/break countdown. The controller never spins its own timer:
//! it asks a [`Ticker`] for a cancellable one-second source and the caller
//! routes each firing back through [`SessionController::on_tick`].
//!
//! ## State Transitions
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --start--> Running
//!   ^                |
//!   +---complete-----+      (reset from anywhere -> Idle)
//! ```
//!
//! `complete` flips the phase: Focus -> Break -> Focus.
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = SessionController::new(&config.timer, parts);
//! controller.start();
//! // Once per second while running:
//! controller.tick(); // Returns Some(Event::FocusCompleted { .. }) at zero
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::display::{progress_fraction, DisplayFrame};
use super::phase::{IntervalDurations, Phase};
use crate::events::Event;
use crate::ports::{
    AudioCue, Clock, DisplaySink, Notice, Notifier, NullDisplay, NullNotifier, SilentCue,
    SystemClock,
};
use crate::storage::{StudyStore, TimerConfig};
use crate::ticker::{TickId, Ticker, TICK_PERIOD};

const MSG_FOCUS_STARTED: &str = "Focus session started!";
const MSG_BREAK_STARTED: &str = "Break started!";
const MSG_PAUSED: &str = "Session paused";
const MSG_FOCUS_DONE: &str = "Focus session completed! Time for a break";
const MSG_BREAK_DONE: &str = "Break time over! Ready for another focus session?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
    Paused,
}

/// Everything the controller knows about the current cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    phase: Phase,
    remaining_secs: u32,
    run_state: RunState,
    completed_focus_count: u32,
}

impl SessionState {
    fn new(durations: &IntervalDurations) -> Self {
        Self {
            phase: Phase::Focus,
            remaining_secs: durations.duration(Phase::Focus),
            run_state: RunState::Idle,
            completed_focus_count: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn completed_focus_count(&self) -> u32 {
        self.completed_focus_count
    }
}

/// External collaborators wired into a controller.
pub struct Collaborators {
    pub ticker: Box<dyn Ticker>,
    pub store: Box<dyn StudyStore>,
    pub display: Box<dyn DisplaySink>,
    pub notifier: Box<dyn Notifier>,
    pub audio: Box<dyn AudioCue>,
    pub clock: Box<dyn Clock>,
}

impl Collaborators {
    /// No display, notifications or sound; local calendar for the study log.
    pub fn headless(ticker: Box<dyn Ticker>, store: Box<dyn StudyStore>) -> Self {
        Self {
            ticker,
            store,
            display: Box::new(NullDisplay),
            notifier: Box::new(NullNotifier),
            audio: Box::new(SilentCue),
            clock: Box::new(SystemClock),
        }
    }
}

pub struct SessionController {
    state: SessionState,
    durations: IntervalDurations,
    max_display_sessions: u32,
    /// The only live tick source, if any.
    tick: Option<TickId>,
    ticker: Box<dyn Ticker>,
    store: Box<dyn StudyStore>,
    display: Box<dyn DisplaySink>,
    notifier: Box<dyn Notifier>,
    audio: Box<dyn AudioCue>,
    clock: Box<dyn Clock>,
}

impl SessionController {
    /// Starts `Idle` in a full Focus interval.
    pub fn new(config: &TimerConfig, parts: Collaborators) -> Self {
        let durations = config.durations();
        Self {
            state: SessionState::new(&durations),
            durations,
            max_display_sessions: config.max_display_sessions,
            tick: None,
            ticker: parts.ticker,
            store: parts.store,
            display: parts.display,
            notifier: parts.notifier,
            audio: parts.audio,
            clock: parts.clock,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.state.remaining_secs
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn is_running(&self) -> bool {
        self.state.run_state == RunState::Running
    }

    pub fn completed_focus_count(&self) -> u32 {
        self.state.completed_focus_count
    }

    /// Completed count capped at the configured display maximum.
    pub fn display_focus_count(&self) -> u32 {
        self.state.completed_focus_count.min(self.max_display_sessions)
    }

    pub fn max_display_sessions(&self) -> u32 {
        self.max_display_sessions
    }

    pub fn durations(&self) -> IntervalDurations {
        self.durations
    }

    pub fn full_secs(&self) -> u32 {
        self.durations.duration(self.state.phase)
    }

    /// 0.0 .. 1.0 progress within the current interval.
    pub fn progress_fraction(&self) -> f64 {
        progress_fraction(self.full_secs(), self.state.remaining_secs)
    }

    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame::new(self.state.phase, self.full_secs(), self.state.remaining_secs)
    }

    pub fn clock(&self) -> String {
        self.frame().clock
    }

    pub fn active_tick(&self) -> Option<TickId> {
        self.tick
    }

    pub fn store(&self) -> &dyn StudyStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn StudyStore {
        self.store.as_mut()
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let frame = self.frame();
        Event::StateSnapshot {
            phase: self.state.phase,
            run_state: self.state.run_state,
            remaining_secs: self.state.remaining_secs,
            full_secs: self.full_secs(),
            clock: frame.clock,
            progress: frame.progress,
            completed_focus_count: self.state.completed_focus_count,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin or resume the countdown. `None` if already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running() {
            return None;
        }

        self.stop_tick();
        self.tick = Some(self.ticker.schedule(TICK_PERIOD));
        self.state.run_state = RunState::Running;
        debug!(phase = %self.state.phase, remaining = self.state.remaining_secs, "timer started");

        self.display.set_active(true);
        let message = match self.state.phase {
            Phase::Focus => MSG_FOCUS_STARTED,
            Phase::Break => MSG_BREAK_STARTED,
        };
        self.notifier.notify(Notice::info(message));

        Some(Event::TimerStarted {
            phase: self.state.phase,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Freeze the countdown. `None` unless running.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }

        self.stop_tick();
        self.state.run_state = RunState::Paused;
        debug!(remaining = self.state.remaining_secs, "timer paused");
        self.notifier.notify(Notice::info(MSG_PAUSED));

        Some(Event::TimerPaused {
            phase: self.state.phase,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop and refill the current phase. The phase itself is kept.
    pub fn reset(&mut self) -> Option<Event> {
        self.stop_tick();
        self.state.run_state = RunState::Idle;
        self.state.remaining_secs = self.full_secs();
        debug!(phase = %self.state.phase, "timer reset");

        self.display.set_active(false);
        self.display.render(&self.frame());

        Some(Event::TimerReset {
            phase: self.state.phase,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Advance the countdown by one second. No-op unless running.
    ///
    /// Decrements first and then tests for zero, so each interval completes
    /// exactly once.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }

        self.state.remaining_secs = self.state.remaining_secs.saturating_sub(1);
        if self.state.remaining_secs == 0 {
            self.display.render(&self.frame());
            return Some(self.complete());
        }

        self.display.render(&self.frame());
        Some(Event::Tick {
            phase: self.state.phase,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Route a firing from the ticker. Firings from a cancelled source are
    /// dropped.
    pub fn on_tick(&mut self, id: TickId) -> Option<Event> {
        if self.tick != Some(id) {
            debug!(tick = id.value(), "ignoring stale tick");
            return None;
        }
        self.tick()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete(&mut self) -> Event {
        self.stop_tick();
        self.state.run_state = RunState::Idle;

        let event = match self.state.phase {
            Phase::Focus => {
                self.state.completed_focus_count =
                    self.state.completed_focus_count.saturating_add(1);

                let day = self.clock.today();
                let minutes = self.durations.focus_minutes();
                let recorded = match self.store.record_focus(day, minutes) {
                    Ok(record) => {
                        debug!(
                            %day,
                            sessions = record.sessions,
                            total_minutes = record.total_minutes,
                            "focus session recorded"
                        );
                        true
                    }
                    Err(err) => {
                        warn!(%day, %err, "could not record focus session");
                        false
                    }
                };

                self.enter(Phase::Break);
                info!(completed = self.state.completed_focus_count, "focus complete, break loaded");
                self.notifier.notify(Notice::info(MSG_FOCUS_DONE));

                Event::FocusCompleted {
                    completed_focus_count: self.state.completed_focus_count,
                    day,
                    credited_minutes: minutes,
                    recorded,
                    at: Utc::now(),
                }
            }
            Phase::Break => {
                self.enter(Phase::Focus);
                info!("break complete, focus loaded");
                self.notifier.notify(Notice::info(MSG_BREAK_DONE));
                Event::BreakCompleted { at: Utc::now() }
            }
        };

        self.display.render(&self.frame());
        self.display.set_active(false);
        if let Err(err) = self.audio.play() {
            debug!(%err, "completion cue failed");
        }

        event
    }

    fn enter(&mut self, phase: Phase) {
        self.state.phase = phase;
        self.state.remaining_secs = self.durations.duration(phase);
    }

    fn stop_tick(&mut self) {
        if let Some(id) = self.tick.take() {
            self.ticker.cancel(id);
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.stop_tick();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::rc::Rc;

    use proptest::prelude::*;

    use super::*;
    use crate::achievements::Achievement;
    use crate::error::{CueError, StoreError};
    use crate::ports::FixedClock;
    use crate::storage::{DayRecord, MemoryStore, StudyDay};
    use crate::ticker::ManualTicker;

    #[derive(Clone, Default)]
    struct Screen {
        frames: Rc<RefCell<Vec<DisplayFrame>>>,
        active: Rc<RefCell<bool>>,
    }

    impl DisplaySink for Screen {
        fn render(&mut self, frame: &DisplayFrame) {
            self.frames.borrow_mut().push(frame.clone());
        }
        fn set_active(&mut self, active: bool) {
            *self.active.borrow_mut() = active;
        }
    }

    #[derive(Clone, Default)]
    struct Inbox(Rc<RefCell<Vec<Notice>>>);

    impl Notifier for Inbox {
        fn notify(&mut self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    #[derive(Clone, Default)]
    struct Speaker {
        plays: Rc<RefCell<u32>>,
        broken: bool,
    }

    impl AudioCue for Speaker {
        fn play(&mut self) -> Result<(), CueError> {
            *self.plays.borrow_mut() += 1;
            if self.broken {
                Err(CueError::Unavailable)
            } else {
                Ok(())
            }
        }
    }

    struct DownStore;

    impl StudyStore for DownStore {
        fn record_focus(&mut self, _day: StudyDay, _minutes: u32) -> Result<DayRecord, StoreError> {
            Err(StoreError::Unavailable)
        }
        fn day(&self, _day: StudyDay) -> Result<Option<DayRecord>, StoreError> {
            Err(StoreError::Unavailable)
        }
        fn days(&self) -> Result<BTreeMap<StudyDay, DayRecord>, StoreError> {
            Err(StoreError::Unavailable)
        }
        fn unlocked_achievements(&self) -> Result<BTreeSet<Achievement>, StoreError> {
            Err(StoreError::Unavailable)
        }
        fn unlock(&mut self, _achievement: Achievement) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    struct Rig {
        controller: SessionController,
        ticker: ManualTicker,
        screen: Screen,
        inbox: Inbox,
        speaker: Speaker,
    }

    fn today() -> StudyDay {
        StudyDay::from_ymd(2024, 9, 2).unwrap()
    }

    fn rig_with(store: Box<dyn StudyStore>, speaker: Speaker) -> Rig {
        let ticker = ManualTicker::new();
        let screen = Screen::default();
        let inbox = Inbox::default();
        let controller = SessionController::new(
            &TimerConfig::default(),
            Collaborators {
                ticker: Box::new(ticker.clone()),
                store,
                display: Box::new(screen.clone()),
                notifier: Box::new(inbox.clone()),
                audio: Box::new(speaker.clone()),
                clock: Box::new(FixedClock(today())),
            },
        );
        Rig {
            controller,
            ticker,
            screen,
            inbox,
            speaker,
        }
    }

    fn rig() -> Rig {
        rig_with(Box::new(MemoryStore::new()), Speaker::default())
    }

    fn run_ticks(controller: &mut SessionController, n: u32) -> Vec<Event> {
        (0..n).filter_map(|_| controller.tick()).collect()
    }

    fn completions(events: &[Event]) -> usize {
        events.iter().filter(|e| e.is_completion()).count()
    }

    #[test]
    fn starts_idle_in_full_focus() {
        let rig = rig();
        let c = &rig.controller;
        assert_eq!(c.phase(), Phase::Focus);
        assert_eq!(c.remaining_secs(), 1500);
        assert_eq!(c.run_state(), RunState::Idle);
        assert_eq!(c.completed_focus_count(), 0);
        assert_eq!(c.clock(), "25:00");
        assert!(c.active_tick().is_none());
    }

    #[test]
    fn start_pause_start() {
        let mut rig = rig();
        assert!(rig.controller.start().is_some());
        assert_eq!(rig.controller.run_state(), RunState::Running);
        assert!(*rig.screen.active.borrow());

        assert!(rig.controller.pause().is_some());
        assert_eq!(rig.controller.run_state(), RunState::Paused);
        assert!(rig.ticker.active().is_empty());

        assert!(rig.controller.start().is_some());
        assert_eq!(rig.controller.run_state(), RunState::Running);
        assert_eq!(rig.ticker.active().len(), 1);

        let messages: Vec<_> = rig.inbox.0.borrow().iter().map(|n| n.message.clone()).collect();
        assert_eq!(messages, vec![MSG_FOCUS_STARTED, MSG_PAUSED, MSG_FOCUS_STARTED]);
    }

    #[test]
    fn start_in_break_announces_break() {
        let mut rig = rig();
        rig.controller.start();
        run_ticks(&mut rig.controller, 1500);
        assert_eq!(rig.controller.phase(), Phase::Break);
        rig.inbox.0.borrow_mut().clear();

        assert!(matches!(
            rig.controller.start(),
            Some(Event::TimerStarted { phase: Phase::Break, remaining_secs: 300, .. })
        ));
        let messages: Vec<_> = rig.inbox.0.borrow().iter().map(|n| n.message.clone()).collect();
        assert_eq!(messages, vec![MSG_BREAK_STARTED]);
    }

    #[test]
    fn double_start_keeps_one_tick_source() {
        let mut rig = rig();
        assert!(rig.controller.start().is_some());
        assert!(rig.controller.start().is_none());
        assert_eq!(rig.ticker.active().len(), 1);
        assert_eq!(rig.ticker.scheduled_count(), 1);
        assert_eq!(rig.inbox.0.borrow().len(), 1);
    }

    #[test]
    fn stale_tick_ids_are_ignored() {
        let mut rig = rig();
        rig.controller.start();
        let first = rig.controller.active_tick().unwrap();
        rig.controller.pause();
        rig.controller.start();
        let second = rig.controller.active_tick().unwrap();
        assert_ne!(first, second);

        assert!(rig.controller.on_tick(first).is_none());
        assert_eq!(rig.controller.remaining_secs(), 1500);
        assert!(rig.controller.on_tick(second).is_some());
        assert_eq!(rig.controller.remaining_secs(), 1499);
    }

    #[test]
    fn tick_is_noop_unless_running() {
        let mut rig = rig();
        assert!(rig.controller.tick().is_none());
        rig.controller.start();
        rig.controller.pause();
        assert!(rig.controller.tick().is_none());
        assert_eq!(rig.controller.remaining_secs(), 1500);
    }

    #[test]
    fn full_focus_interval_completes_once() {
        let mut rig = rig();
        rig.controller.start();
        let events = run_ticks(&mut rig.controller, 1500);

        assert_eq!(completions(&events), 1);
        assert!(matches!(
            events.last(),
            Some(Event::FocusCompleted { completed_focus_count: 1, credited_minutes: 25, recorded: true, .. })
        ));
        assert_eq!(rig.controller.phase(), Phase::Break);
        assert_eq!(rig.controller.remaining_secs(), 300);
        assert_eq!(rig.controller.run_state(), RunState::Idle);
        assert!(rig.ticker.active().is_empty());

        let frames = rig.screen.frames.borrow();
        let n = frames.len();
        assert_eq!(frames[n - 2].clock, "00:00");
        assert_eq!(frames[n - 1].clock, "05:00");
        assert_eq!(frames[n - 1].label(), "Break");
        assert!(!*rig.screen.active.borrow());
        assert_eq!(*rig.speaker.plays.borrow(), 1);
    }

    #[test]
    fn focus_completion_writes_one_day_record() {
        let mut rig = rig();
        rig.controller.start();
        run_ticks(&mut rig.controller, 1500);

        let record = rig.controller.store().day(today()).unwrap().unwrap();
        assert_eq!(record, DayRecord { sessions: 1, total_minutes: 25 });
        assert_eq!(rig.controller.store().days().unwrap().len(), 1);
    }

    #[test]
    fn break_completion_does_not_count() {
        let mut rig = rig();
        rig.controller.start();
        run_ticks(&mut rig.controller, 1500);
        rig.controller.start();
        let events = run_ticks(&mut rig.controller, 300);

        assert!(matches!(events.last(), Some(Event::BreakCompleted { .. })));
        assert_eq!(rig.controller.phase(), Phase::Focus);
        assert_eq!(rig.controller.remaining_secs(), 1500);
        assert_eq!(rig.controller.completed_focus_count(), 1);
        assert_eq!(rig.controller.store().day(today()).unwrap().unwrap().sessions, 1);

        let last = rig.inbox.0.borrow().last().cloned().unwrap();
        assert_eq!(last.message, MSG_BREAK_DONE);
    }

    #[test]
    fn extra_ticks_after_completion_do_nothing() {
        let mut rig = rig();
        rig.controller.start();
        let events = run_ticks(&mut rig.controller, 1600);
        assert_eq!(completions(&events), 1);
        assert_eq!(rig.controller.remaining_secs(), 300);
    }

    #[test]
    fn reset_refills_current_phase() {
        let mut rig = rig();
        rig.controller.start();
        run_ticks(&mut rig.controller, 600);
        assert_eq!(rig.controller.remaining_secs(), 900);

        rig.controller.reset();
        assert_eq!(rig.controller.run_state(), RunState::Idle);
        assert_eq!(rig.controller.phase(), Phase::Focus);
        assert_eq!(rig.controller.remaining_secs(), 1500);
        assert!(rig.ticker.active().is_empty());
        assert!(!*rig.screen.active.borrow());
    }

    #[test]
    fn reset_during_break_keeps_break() {
        let mut rig = rig();
        rig.controller.start();
        run_ticks(&mut rig.controller, 1500);
        rig.controller.start();
        run_ticks(&mut rig.controller, 100);
        rig.controller.reset();
        assert_eq!(rig.controller.phase(), Phase::Break);
        assert_eq!(rig.controller.remaining_secs(), 300);
    }

    #[test]
    fn pause_then_resume_keeps_remaining() {
        let mut rig = rig();
        rig.controller.start();
        run_ticks(&mut rig.controller, 500);
        assert_eq!(rig.controller.remaining_secs(), 1000);

        rig.controller.pause();
        rig.controller.start();
        assert_eq!(rig.controller.remaining_secs(), 1000);
        rig.controller.tick();
        assert_eq!(rig.controller.remaining_secs(), 999);
    }

    #[test]
    fn pause_when_idle_is_silent() {
        let mut rig = rig();
        let before = rig.controller.state().clone();
        assert!(rig.controller.pause().is_none());
        assert_eq!(rig.controller.state(), &before);
        assert!(rig.inbox.0.borrow().is_empty());
    }

    #[test]
    fn store_failure_does_not_block_transition() {
        let mut rig = rig_with(Box::new(DownStore), Speaker::default());
        rig.controller.start();
        let events = run_ticks(&mut rig.controller, 1500);

        assert!(matches!(
            events.last(),
            Some(Event::FocusCompleted { recorded: false, .. })
        ));
        assert_eq!(rig.controller.phase(), Phase::Break);
        assert_eq!(rig.controller.completed_focus_count(), 1);
    }

    #[test]
    fn audio_failure_is_swallowed() {
        let speaker = Speaker {
            broken: true,
            ..Speaker::default()
        };
        let mut rig = rig_with(Box::new(MemoryStore::new()), speaker);
        rig.controller.start();
        let events = run_ticks(&mut rig.controller, 1500);
        assert_eq!(completions(&events), 1);
        assert_eq!(*rig.speaker.plays.borrow(), 1);
        assert_eq!(rig.controller.phase(), Phase::Break);
    }

    #[test]
    fn display_count_is_capped_but_count_is_not() {
        let mut rig = rig();
        for _ in 0..10 {
            rig.controller.start();
            run_ticks(&mut rig.controller, 1500);
            rig.controller.start();
            run_ticks(&mut rig.controller, 300);
        }
        assert_eq!(rig.controller.completed_focus_count(), 10);
        assert_eq!(rig.controller.display_focus_count(), 8);
        assert_eq!(rig.controller.store().day(today()).unwrap().unwrap().total_minutes, 250);
    }

    #[test]
    fn progress_tracks_elapsed_share() {
        let mut rig = rig();
        rig.controller.start();
        run_ticks(&mut rig.controller, 375);
        assert_eq!(rig.controller.progress_fraction(), 0.25);
        assert_eq!(rig.controller.frame().degrees(), 90.0);
    }

    #[test]
    fn snapshot_reports_state() {
        let rig = rig();
        match rig.controller.snapshot() {
            Event::StateSnapshot {
                phase,
                run_state,
                remaining_secs,
                clock,
                ..
            } => {
                assert_eq!(phase, Phase::Focus);
                assert_eq!(run_state, RunState::Idle);
                assert_eq!(remaining_secs, 1500);
                assert_eq!(clock, "25:00");
            }
            other => panic!("Expected StateSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn dropping_controller_cancels_tick() {
        let mut rig = rig();
        rig.controller.start();
        let probe = rig.ticker.clone();
        drop(rig);
        assert!(probe.active().is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Start,
        Pause,
        Reset,
        Ticks(u32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Start),
            Just(Op::Pause),
            Just(Op::Reset),
            (1u32..2000).prop_map(Op::Ticks),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op(), 0..40)) {
            let mut rig = rig();
            let mut focus_done = 0u32;

            for op in ops {
                let events: Vec<Event> = match op {
                    Op::Start => rig.controller.start().into_iter().collect(),
                    Op::Pause => rig.controller.pause().into_iter().collect(),
                    Op::Reset => rig.controller.reset().into_iter().collect(),
                    Op::Ticks(n) => run_ticks(&mut rig.controller, n),
                };
                focus_done += events
                    .iter()
                    .filter(|e| matches!(e, Event::FocusCompleted { .. }))
                    .count() as u32;

                let c = &rig.controller;
                prop_assert!(c.remaining_secs() <= c.full_secs());
                prop_assert_eq!(c.is_running(), c.active_tick().is_some());
                prop_assert!(rig.ticker.active().len() <= 1);
                prop_assert_eq!(c.completed_focus_count(), focus_done);
            }
        }
    }
}
