//! Backtracking solver: places `sessions_left` sessions
//! of one subject into one class's grid, undoing every partial placement on
//! a failing branch so the global invariants hold across every call
//! boundary.

use super::SolverState;
use crate::scorer::{distribution_score, scored_slots};
use crate::types::{ClassName, SubjectName};

pub fn backtrack<F>(
    state: &mut SolverState,
    teacher_name_fn: &F,
    class: &ClassName,
    subject: &SubjectName,
    sessions_left: u32,
    retry_mode: bool,
) -> bool
where
    F: Fn(&ClassName, &SubjectName, u8, u8, u32) -> String,
{
    if sessions_left == 0 {
        return true;
    }

    let max_attempts = if retry_mode {
        state.config.retry_max_attempts
    } else {
        state.config.max_attempts
    };
    let teacher_idx = state.assigned_teachers[class][subject];

    let slots = {
        let timetable = &state.classes[class];
        scored_slots(timetable, subject, &state.config.grid, &mut state.jitter, retry_mode)
    };

    let mut attempts = 0u32;
    for slot in slots {
        if attempts >= max_attempts {
            break;
        }
        attempts += 1;

        if !state.classes[class].is_empty_at(slot) {
            continue;
        }

        if state.is_teacher_busy(subject, slot, teacher_idx) {
            continue;
        }

        if !retry_mode {
            let timetable = state.classes.get_mut(class).expect("class exists");
            timetable.grid[slot.day as usize][slot.period as usize] = Some(subject.clone());
            let d = distribution_score(timetable, subject, &state.config.grid);
            timetable.grid[slot.day as usize][slot.period as usize] = None;

            let gate_trips = d < state.config.distribution_gate_score_threshold
                && sessions_left < state.config.distribution_gate_sessions_threshold
                && attempts < max_attempts / 2;
            if gate_trips {
                continue;
            }
        }

        state.place(class, subject, slot, teacher_idx, teacher_name_fn);

        if backtrack(state, teacher_name_fn, class, subject, sessions_left - 1, retry_mode) {
            return true;
        }

        state.unplace(class, subject, slot, teacher_idx);
    }

    false
}
