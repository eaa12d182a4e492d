use super::{ClassName, SubjectName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many sessions of a subject a class needs per week, and the size of
/// the teacher pool available to teach it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubjectRequirement {
    pub sessions: u32,
    pub teachers: u32,
}

/// The raw wire shape: `className -> subject -> requirement`. Kept as plain
/// `String` keys so it deserializes straight from the JSON a data provider
/// hands us; `ScheduleRequest` wraps it with the typed `ClassName`/
/// `SubjectName` keys the solver works with internally.
pub type RawRequest = HashMap<String, HashMap<String, SubjectRequirement>>;

/// A validated, typed scheduling request.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    pub classes: HashMap<ClassName, HashMap<SubjectName, SubjectRequirement>>,
}

impl ScheduleRequest {
    pub fn class_names(&self) -> impl Iterator<Item = &ClassName> {
        self.classes.keys()
    }

    /// Total sessions requested across all subjects for a class.
    pub fn total_sessions(&self, class: &ClassName) -> u32 {
        self.classes
            .get(class)
            .map(|subjects| subjects.values().map(|r| r.sessions).sum())
            .unwrap_or(0)
    }

    pub fn requirement(&self, class: &ClassName, subject: &SubjectName) -> Option<&SubjectRequirement> {
        self.classes.get(class).and_then(|subjects| subjects.get(subject))
    }
}
