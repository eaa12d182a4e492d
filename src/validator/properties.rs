use crate::allocator::allocate_teachers;
use crate::types::{ClassName, ScheduleRequest, Slot, SolveResult, SubjectName};
use std::collections::HashMap;

/// `grid[d][p] = s` iff `assignments[s]` has key `(d,p)`.
pub fn check_grid_assignment_consistency(result: &SolveResult) -> Vec<String> {
    let mut violations = Vec::new();

    for (class, timetable) in &result.classes {
        for (d, row) in timetable.grid.iter().enumerate() {
            for (p, cell) in row.iter().enumerate() {
                let slot = Slot::new(d as u8, p as u8);
                match cell {
                    Some(subject) => {
                        let recorded = timetable
                            .assignments
                            .get(subject)
                            .map(|slots| slots.contains_key(&slot))
                            .unwrap_or(false);
                        if !recorded {
                            violations.push(format!(
                                "class={} slot={} grid holds {} but assignments has no entry",
                                class, slot, subject
                            ));
                        }
                    }
                    None => {
                        for (subject, slots) in &timetable.assignments {
                            if slots.contains_key(&slot) {
                                violations.push(format!(
                                    "class={} slot={} assignments records {} but the grid cell is empty",
                                    class, slot, subject
                                ));
                            }
                        }
                    }
                }
            }
        }
    }

    violations
}

/// No two classes place the same subject at the same slot using the same
/// teacher index. Teacher indices aren't stored in the result, so this
/// reconstructs them with the same deterministic allocator `solve` used.
pub fn check_teacher_exclusivity(request: &ScheduleRequest, result: &SolveResult) -> Vec<String> {
    let assigned = match allocate_teachers(request) {
        Ok(a) => a,
        Err(err) => return vec![format!("cannot reconstruct teacher allocation: {err}")],
    };

    let mut seen: HashMap<(SubjectName, Slot, u32), ClassName> = HashMap::new();
    let mut violations = Vec::new();

    for (class, timetable) in &result.classes {
        for (subject, slots) in &timetable.assignments {
            let teacher_idx = match assigned.get(class).and_then(|m| m.get(subject)) {
                Some(idx) => *idx,
                None => continue,
            };

            for slot in slots.keys() {
                let key = (subject.clone(), *slot, teacher_idx);
                if let Some(other) = seen.insert(key, class.clone()) {
                    if other != *class {
                        violations.push(format!(
                            "teacher exclusivity violated: subject={} slot={} teacher={} classes={},{}",
                            subject, slot, teacher_idx, other, class
                        ));
                    }
                }
            }
        }
    }

    violations
}

/// Placed session count never exceeds the requested count.
pub fn check_session_count_upper_bound(request: &ScheduleRequest, result: &SolveResult) -> Vec<String> {
    let mut violations = Vec::new();

    for (class, timetable) in &result.classes {
        for (subject, requirement) in request.classes.get(class).into_iter().flatten() {
            let placed = timetable.count(subject);
            if placed > requirement.sessions {
                violations.push(format!(
                    "class={} subject={} placed {} exceeds requested {}",
                    class, subject, placed, requirement.sessions
                ));
            }
        }
    }

    violations
}

/// If no warning was recorded for `(class, subject)`, every requested
/// session must have been placed.
pub fn check_full_placement_unless_warned(request: &ScheduleRequest, result: &SolveResult) -> Vec<String> {
    let mut violations = Vec::new();

    for (class, subjects) in &request.classes {
        for (subject, requirement) in subjects {
            if requirement.sessions == 0 {
                continue;
            }
            if result.has_warning_for(class, subject) {
                continue;
            }

            let placed = result.classes.get(class).map(|t| t.count(subject)).unwrap_or(0);
            if placed != requirement.sessions {
                violations.push(format!(
                    "class={} subject={} placed {}/{} with no warning recorded",
                    class, subject, placed, requirement.sessions
                ));
            }
        }
    }

    violations
}
