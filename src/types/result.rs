use super::{ClassName, GridConfig, Slot, SubjectName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One class's timetable: a grid of optional subjects plus the teacher
/// label recorded for each placed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTimetable {
    /// `grid[day][period]`, `None` for an empty slot.
    pub grid: Vec<Vec<Option<SubjectName>>>,
    /// `assignments[subject][slot] = teacher label`.
    pub assignments: HashMap<SubjectName, HashMap<Slot, String>>,
}

impl ClassTimetable {
    pub fn empty(config: &GridConfig) -> Self {
        Self {
            grid: vec![vec![None; config.periods as usize]; config.days as usize],
            assignments: HashMap::new(),
        }
    }

    pub fn subject_at(&self, slot: Slot) -> Option<&SubjectName> {
        self.grid
            .get(slot.day as usize)
            .and_then(|row| row.get(slot.period as usize))
            .and_then(|cell| cell.as_ref())
    }

    pub fn is_empty_at(&self, slot: Slot) -> bool {
        self.subject_at(slot).is_none()
    }

    /// Count of cells holding `subject`.
    pub fn count(&self, subject: &SubjectName) -> u32 {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.as_ref() == Some(subject))
            .count() as u32
    }

    pub fn day_count(&self, subject: &SubjectName, day: u8) -> u32 {
        self.grid[day as usize]
            .iter()
            .filter(|cell| cell.as_ref() == Some(subject))
            .count() as u32
    }

    pub fn period_count(&self, subject: &SubjectName, period: u8) -> u32 {
        self.grid
            .iter()
            .filter(|row| row[period as usize].as_ref() == Some(subject))
            .count() as u32
    }

    pub fn day_load(&self, day: u8) -> u32 {
        self.grid[day as usize].iter().filter(|c| c.is_some()).count() as u32
    }

    pub fn empty_slots(&self, config: &GridConfig) -> Vec<Slot> {
        let mut slots = Vec::new();
        for d in 0..config.days {
            for p in 0..config.periods {
                let slot = Slot::new(d, p);
                if self.is_empty_at(slot) {
                    slots.push(slot);
                }
            }
        }
        slots
    }
}

/// Metadata about a single `solve` invocation, useful for observability
/// without parsing the narrative log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveMetadata {
    pub generated_at: String,
    pub algorithm_version: String,
    pub seed: u64,
    pub solve_time_ms: u64,
    pub evictions_performed: u32,
}

/// The full output of `solve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResult {
    pub classes: HashMap<ClassName, ClassTimetable>,
    pub warnings: Vec<String>,
    pub metadata: SolveMetadata,
}

impl SolveResult {
    /// Stable warning format: `unplaced: class=<C> subject=<S> placed=<k>/<n>`.
    pub fn unplaced_warning(class: &ClassName, subject: &SubjectName, placed: u32, needed: u32) -> String {
        format!("unplaced: class={} subject={} placed={}/{}", class, subject, placed, needed)
    }

    pub fn has_warning_for(&self, class: &ClassName, subject: &SubjectName) -> bool {
        let needle = format!("class={} subject={}", class, subject);
        self.warnings.iter().any(|w| w.contains(&needle))
    }
}
