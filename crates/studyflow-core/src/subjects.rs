//! Subject picker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ports::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Science,
    Literature,
    History,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Math,
        Subject::Science,
        Subject::Literature,
        Subject::History,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::Literature => "literature",
            Subject::History => "history",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Math => "Mathematics",
            Subject::Science => "Science",
            Subject::Literature => "Literature",
            Subject::History => "History",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subject '{0}' (expected one of: math, science, literature, history)")]
pub struct UnknownSubject(pub String);

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Subject::ALL
            .into_iter()
            .find(|subject| subject.key() == wanted)
            .ok_or_else(|| UnknownSubject(s.to_string()))
    }
}

/// Holds the one currently selected subject.
#[derive(Debug, Clone, Default)]
pub struct SubjectPicker {
    selected: Option<Subject>,
}

impl SubjectPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected(selected: Option<Subject>) -> Self {
        Self { selected }
    }

    /// Replace the selection and return the confirmation to show.
    pub fn select(&mut self, subject: Subject) -> Notice {
        self.selected = Some(subject);
        Notice::info(format!(
            "{} selected. Ready to start studying!",
            subject.display_name()
        ))
    }

    pub fn selected(&self) -> Option<Subject> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!("math".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!(" History ".parse::<Subject>().unwrap(), Subject::History);
        assert!("art".parse::<Subject>().is_err());
    }

    #[test]
    fn unknown_subject_lists_valid_keys() {
        let err = "art".parse::<Subject>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown subject 'art' (expected one of: math, science, literature, history)"
        );
    }

    #[test]
    fn selecting_replaces_previous() {
        let mut picker = SubjectPicker::new();
        assert!(picker.selected().is_none());

        picker.select(Subject::Science);
        let notice = picker.select(Subject::Math);
        assert_eq!(picker.selected(), Some(Subject::Math));
        assert_eq!(notice.message, "Mathematics selected. Ready to start studying!");
    }
}
