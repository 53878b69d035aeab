//! Cancellable periodic tick sources.
//!
//! The session controller owns at most one live [`TickId`] at a time. A tick
//! source only reports *which* handle fired; the controller decides whether
//! that handle is still the active one.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// One real second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Identifies one scheduled tick source. Never reused by the ticker that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TickId(u64);

impl TickId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

pub trait Ticker {
    /// Begin firing every `period`, starting one period from now.
    fn schedule(&mut self, period: Duration) -> TickId;

    /// Stop the source immediately. Unknown or already-cancelled ids are ignored.
    fn cancel(&mut self, id: TickId);
}

#[derive(Debug, Default)]
struct ManualState {
    next: u64,
    active: BTreeSet<TickId>,
    scheduled: usize,
}

/// Ticker that never fires on its own; callers drive the controller's
/// `tick()` by hand. Clones share state, so a test can keep one clone and
/// inspect what the controller scheduled.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    state: Rc<RefCell<ManualState>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids scheduled and not yet cancelled.
    pub fn active(&self) -> Vec<TickId> {
        self.state.borrow().active.iter().copied().collect()
    }

    /// Total number of `schedule` calls so far.
    pub fn scheduled_count(&self) -> usize {
        self.state.borrow().scheduled
    }
}

impl Ticker for ManualTicker {
    fn schedule(&mut self, _period: Duration) -> TickId {
        let mut state = self.state.borrow_mut();
        state.next += 1;
        state.scheduled += 1;
        let id = TickId(state.next);
        state.active.insert(id);
        id
    }

    fn cancel(&mut self, id: TickId) {
        self.state.borrow_mut().active.remove(&id);
    }
}

/// Ticker backed by tokio timers.
///
/// Each scheduled id gets its own task that pushes the id into a channel once
/// per period. `cancel` aborts the task; ids already queued in the channel are
/// left for the receiver to discard.
pub struct TokioTicker {
    next: u64,
    tx: mpsc::UnboundedSender<TickId>,
    tasks: HashMap<TickId, JoinHandle<()>>,
}

impl TokioTicker {
    /// Must be called from within a tokio runtime.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TickId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let ticker = Self {
            next: 0,
            tx,
            tasks: HashMap::new(),
        };
        (ticker, rx)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Ticker for TokioTicker {
    fn schedule(&mut self, period: Duration) -> TickId {
        self.next += 1;
        let id = TickId(self.next);
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(id).is_err() {
                    break;
                }
            }
        });

        self.tasks.insert(id, handle);
        id
    }

    fn cancel(&mut self, id: TickId) {
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
        }
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
