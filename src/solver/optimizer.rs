//! Distribution optimizer: a bounded hill climber that
//! relocates already-placed sessions to improve each subject's distribution
//! score, never decreasing it for any subject it touches.

use super::SolverState;
use crate::scorer::distribution_score;
use crate::types::{ClassName, Slot, SubjectName};

pub fn optimize_distribution(state: &mut SolverState) {
    let max_sweeps = state.config.optimizer_max_sweeps;

    for _ in 0..max_sweeps {
        let mut improved = false;

        let pairs: Vec<(ClassName, SubjectName)> = state
            .classes
            .iter()
            .flat_map(|(class, timetable)| {
                timetable
                    .assignments
                    .keys()
                    .filter(|subject| timetable.assignments[*subject].len() >= 2)
                    .map(move |subject| (class.clone(), subject.clone()))
            })
            .collect();

        for (class, subject) in pairs {
            if relocate_best(state, &class, &subject) {
                improved = true;
            }
        }

        if !improved {
            break;
        }
    }
}

/// Try relocating every currently-placed session of `subject` in `class` to
/// a slot that strictly improves `D`, measured against the score at entry
/// (with every session, including the one being considered, still placed).
/// Tries every session in `current_slots`, not just the first that moves.
fn relocate_best(state: &mut SolverState, class: &ClassName, subject: &SubjectName) -> bool {
    let teacher_idx = state.assigned_teachers[class][subject];
    let current_slots: Vec<Slot> = state.classes[class].assignments[subject].keys().copied().collect();
    let current_score = distribution_score(&state.classes[class], subject, &state.config.grid);

    let mut improved = false;

    for old_slot in current_slots {
        let label = state.classes[class].assignments[subject][&old_slot].clone();
        state.unplace(class, subject, old_slot, teacher_idx);

        let mut best: Option<(Slot, f64)> = None;
        for candidate in state.classes[class].empty_slots(&state.config.grid) {
            if candidate == old_slot || state.is_teacher_busy(subject, candidate, teacher_idx) {
                continue;
            }

            let timetable = state.classes.get_mut(class).expect("class exists");
            timetable.grid[candidate.day as usize][candidate.period as usize] = Some(subject.clone());
            let score = distribution_score(timetable, subject, &state.config.grid);
            timetable.grid[candidate.day as usize][candidate.period as usize] = None;

            if score > best.map(|(_, s)| s).unwrap_or(current_score) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((new_slot, score)) if score > current_score => {
                state.place_with_label(class, subject, new_slot, teacher_idx, label);
                improved = true;
            }
            _ => {
                state.place_with_label(class, subject, old_slot, teacher_idx, label);
            }
        }
    }

    improved
}

impl SolverState {
    /// Re-place a session using a previously recorded label, without calling
    /// the teacher-naming function again (used by the optimizer, which only
    /// relocates sessions that were already named once at placement time).
    pub(super) fn place_with_label(&mut self, class: &ClassName, subject: &SubjectName, slot: Slot, teacher_idx: u32, label: String) {
        let timetable = self.classes.get_mut(class).expect("class exists");
        timetable.grid[slot.day as usize][slot.period as usize] = Some(subject.clone());
        timetable.assignments.entry(subject.clone()).or_default().insert(slot, label);

        self.occupancy
            .entry(subject.clone())
            .or_default()
            .entry(slot)
            .or_default()
            .insert(teacher_idx, class.clone());
    }
}
