use clap::Subcommand;
use studyflow_core::{StudyDb, Subject, SubjectPicker};

const SUBJECT_KEY: &str = "selected_subject";

#[derive(Subcommand)]
pub enum SubjectAction {
    /// List available subjects
    List,
    /// Select the subject to study
    Pick {
        /// Subject key: math, science, literature, history
        subject: Subject,
    },
    /// Show the selected subject
    Current,
}

fn load_picker(db: &StudyDb) -> SubjectPicker {
    let selected = match db.kv_get(SUBJECT_KEY) {
        Ok(Some(key)) => key.parse::<Subject>().ok(),
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(%err, "could not read selected subject");
            None
        }
    };
    SubjectPicker::with_selected(selected)
}

pub fn run(action: SubjectAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SubjectAction::List => {
            for subject in Subject::ALL {
                println!("{:<12} {}", subject.key(), subject.display_name());
            }
        }
        SubjectAction::Pick { subject } => {
            let db = StudyDb::open()?;
            let mut picker = load_picker(&db);
            let notice = picker.select(subject);
            db.kv_set(SUBJECT_KEY, subject.key())?;
            println!("{}", notice.message);
        }
        SubjectAction::Current => {
            let db = StudyDb::open()?;
            match load_picker(&db).selected() {
                Some(subject) => println!("{}", subject.display_name()),
                None => println!("no subject selected"),
            }
        }
    }
    Ok(())
}
