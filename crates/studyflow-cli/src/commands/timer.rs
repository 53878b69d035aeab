use clap::Subcommand;
use studyflow_core::achievements::announce;
use studyflow_core::ports::{AudioCue, Notifier, NullNotifier, SilentCue, SystemClock};
use studyflow_core::storage::{MemoryStore, StudyDb, StudyStore};
use studyflow_core::ticker::ManualTicker;
use studyflow_core::{
    AchievementTracker, Collaborators, Command, Config, Event, SessionController, SessionRunner,
    TokioTicker,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::terminal::{BellCue, TerminalDisplay, TerminalNotifier};

const HELP: &str = "commands: s=start/resume  p=pause  r=reset  status  q=quit";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the focus/break timer interactively (reads commands from stdin)
    Run {
        /// Keep the study log in memory only
        #[arg(long)]
        ephemeral: bool,
        /// Start the first focus interval immediately and keep running after
        /// stdin closes
        #[arg(long)]
        start: bool,
    },
    /// Print the initial timer state as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Run { ephemeral, start } => run_interactive(&config, ephemeral, start),
        TimerAction::Status => {
            let parts = Collaborators::headless(
                Box::new(ManualTicker::new()),
                Box::new(MemoryStore::new()),
            );
            let controller = SessionController::new(&config.timer, parts);
            println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);
            Ok(())
        }
    }
}

fn notifier(config: &Config) -> Box<dyn Notifier> {
    if config.notifications.enabled {
        Box::new(TerminalNotifier)
    } else {
        Box::new(NullNotifier)
    }
}

fn audio(config: &Config) -> Box<dyn AudioCue> {
    if config.notifications.sound {
        Box::new(BellCue)
    } else {
        Box::new(SilentCue)
    }
}

fn run_interactive(
    config: &Config,
    ephemeral: bool,
    start: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store: Box<dyn StudyStore> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(StudyDb::open()?)
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = rt.block_on(async {
        let (ticker, ticks) = TokioTicker::new();
        let parts = Collaborators {
            ticker: Box::new(ticker),
            store,
            display: Box::new(TerminalDisplay::new()),
            notifier: notifier(config),
            audio: audio(config),
            clock: Box::new(SystemClock),
        };
        let mut runner = SessionRunner::new(SessionController::new(&config.timer, parts), ticks);

        let (tx, rx) = mpsc::channel(16);
        if start {
            tx.send(Command::Start).await?;
        }
        tokio::spawn(read_commands(tx, start));
        eprintln!("{HELP}");

        let tracker = AchievementTracker::new();
        let mut achievements = notifier(config);
        let mut output: Result<(), serde_json::Error> = Ok(());

        runner
            .run(rx, |controller, event| match event {
                Event::FocusCompleted { day, .. } => {
                    match tracker.check(controller.store_mut(), *day) {
                        Ok(unlocked) => {
                            for achievement in unlocked {
                                achievements.notify(announce(achievement));
                            }
                        }
                        Err(err) => tracing::warn!(%err, "achievement check failed"),
                    }
                }
                Event::StateSnapshot { .. } => match serde_json::to_string(event) {
                    Ok(json) => println!("\n{json}"),
                    Err(err) => output = Err(err),
                },
                _ => {}
            })
            .await;

        let controller = runner.controller();
        eprintln!(
            "\nsession over: {} focus interval(s) completed ({}/{} shown)",
            controller.completed_focus_count(),
            controller.display_focus_count(),
            controller.max_display_sessions(),
        );
        output?;
        Ok::<(), Box<dyn std::error::Error>>(())
    });

    // Don't wait on a stdin read that may never return.
    rt.shutdown_background();
    result
}

/// Forward stdin lines to the runner. With `hold_open`, EOF leaves the
/// channel open so a `--start` countdown keeps running without a terminal.
async fn read_commands(tx: mpsc::Sender<Command>, hold_open: bool) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Some(command) => {
                if tx.send(command).await.is_err() || command == Command::Quit {
                    return;
                }
            }
            None => eprintln!("unknown command '{}'. {HELP}", line.trim()),
        }
    }

    if hold_open {
        tracing::debug!("stdin closed, timer keeps running");
        std::future::pending::<()>().await;
    }
}
