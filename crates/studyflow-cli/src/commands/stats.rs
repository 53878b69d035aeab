use clap::Subcommand;
use studyflow_core::stats::{current_streak, summarize, DailyProgress};
use studyflow_core::{Config, StudyDay, StudyDb, StudyStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's sessions against the daily goal
    Today {
        #[arg(long)]
        json: bool,
    },
    /// Totals across every recorded day
    All {
        #[arg(long)]
        json: bool,
    },
    /// Consecutive study days ending today
    Streak,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = StudyDb::open()?;
    let today = StudyDay::today();

    match action {
        StatsAction::Today { json } => {
            let goal = Config::load_or_default().timer.max_display_sessions;
            let progress = DailyProgress::new(today, db.day(today)?, goal);
            if json {
                println!("{}", serde_json::to_string_pretty(&progress)?);
            } else {
                println!(
                    "{}: {} sessions ({:.0}% of goal), {} min",
                    progress.day,
                    progress.label(),
                    progress.percent,
                    progress.total_minutes
                );
            }
        }
        StatsAction::All { json } => {
            let summary = summarize(&db.days()?, today);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{} sessions over {} day(s), {}h total, streak {} day(s)",
                    summary.total_sessions,
                    summary.days_studied,
                    summary.total_hours,
                    summary.streak
                );
            }
        }
        StatsAction::Streak => {
            println!("{}", current_streak(&db.days()?, today));
        }
    }
    Ok(())
}
