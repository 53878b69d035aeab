//! Async driver that connects a [`TokioTicker`] to a [`SessionController`].
//!
//! Everything runs on one task: commands and tick firings are handled one at a
//! time, each to completion, so the controller needs no locking.
//!
//! [`TokioTicker`]: crate::ticker::TokioTicker

use tokio::sync::mpsc;

use crate::events::Event;
use crate::ticker::TickId;
use crate::timer::SessionController;

/// User-issued controller commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Reset,
    Status,
    Quit,
}

impl Command {
    /// Parse one line of interactive input.
    pub fn parse(input: &str) -> Option<Command> {
        match input.trim().to_ascii_lowercase().as_str() {
            "s" | "start" | "resume" => Some(Command::Start),
            "p" | "pause" => Some(Command::Pause),
            "r" | "reset" => Some(Command::Reset),
            "status" | "?" => Some(Command::Status),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

pub struct SessionRunner {
    controller: SessionController,
    ticks: mpsc::UnboundedReceiver<TickId>,
}

impl SessionRunner {
    pub fn new(controller: SessionController, ticks: mpsc::UnboundedReceiver<TickId>) -> Self {
        Self { controller, ticks }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// Apply one command. `Quit` is handled by [`SessionRunner::run`].
    pub fn apply(&mut self, command: Command) -> Option<Event> {
        dispatch(&mut self.controller, command)
    }

    /// Run until `Quit` arrives or the command channel closes.
    ///
    /// `observer` sees every emitted event together with the controller, so it
    /// can react to completions (e.g. check achievements against the store).
    pub async fn run<F>(&mut self, mut commands: mpsc::Receiver<Command>, mut observer: F)
    where
        F: FnMut(&mut SessionController, &Event),
    {
        let Self { controller, ticks } = self;
        loop {
            tokio::select! {
                command = commands.recv() => {
                    let command = match command {
                        None | Some(Command::Quit) => break,
                        Some(command) => command,
                    };
                    if let Some(event) = dispatch(controller, command) {
                        observer(controller, &event);
                    }
                }
                Some(id) = ticks.recv() => {
                    if let Some(event) = controller.on_tick(id) {
                        observer(controller, &event);
                    }
                }
            }
        }
        tracing::debug!("session runner stopped");
    }
}

fn dispatch(controller: &mut SessionController, command: Command) -> Option<Event> {
    match command {
        Command::Start => controller.start(),
        Command::Pause => controller.pause(),
        Command::Reset => controller.reset(),
        Command::Status => Some(controller.snapshot()),
        Command::Quit => None,
    }
}
