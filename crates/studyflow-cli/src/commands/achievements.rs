use clap::Subcommand;
use studyflow_core::{Achievement, AchievementTracker, StudyDay, StudyDb, StudyStore};

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// Show every achievement and whether it is unlocked
    List {
        #[arg(long)]
        json: bool,
    },
    /// Re-evaluate unlock rules against the study log
    Check,
}

#[derive(serde::Serialize)]
struct Row {
    id: &'static str,
    name: &'static str,
    unlocked: bool,
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = StudyDb::open()?;

    match action {
        AchievementsAction::List { json } => {
            let unlocked = db.unlocked_achievements()?;
            let rows: Vec<Row> = Achievement::ALL
                .into_iter()
                .map(|a| Row {
                    id: a.id(),
                    name: a.name(),
                    unlocked: unlocked.contains(&a),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (achievement, row) in Achievement::ALL.iter().zip(&rows) {
                    let mark = if row.unlocked { achievement.icon() } else { "  " };
                    println!("{mark} {:<20} {}", row.name, row.id);
                }
            }
        }
        AchievementsAction::Check => {
            let unlocked = AchievementTracker::new().check(&mut db, StudyDay::today())?;
            if unlocked.is_empty() {
                println!("no new achievements");
            }
            for achievement in unlocked {
                println!("unlocked: {} {}", achievement.icon(), achievement.name());
            }
        }
    }
    Ok(())
}
