mod backtrack;
mod conflict_resolver;
mod optimizer;

pub use backtrack::*;
pub use conflict_resolver::*;
pub use optimizer::*;

use crate::allocator::{allocate_teachers, AssignedTeachers};
use crate::error::SolverError;
use crate::orderer::{priority_order, Task};
use crate::rng::Jitter;
use crate::types::{
    ClassName, ClassTimetable, GridConfig, ScheduleRequest, Slot, SolveMetadata, SolveResult, SolverConfig,
    SubjectName,
};
use std::collections::HashMap;
use std::time::Instant;

/// `occupancy[subject][slot][teacher_idx] = class`, shared across every class.
pub type Occupancy = HashMap<SubjectName, HashMap<Slot, HashMap<u32, ClassName>>>;

/// All mutable state threaded through a single `solve` call. Owns the grid
/// per class, the cross-class teacher occupancy table, the teacher
/// assignment, and the seeded RNG — no hidden global state.
pub struct SolverState {
    pub classes: HashMap<ClassName, ClassTimetable>,
    pub occupancy: Occupancy,
    pub assigned_teachers: AssignedTeachers,
    pub config: SolverConfig,
    pub jitter: Jitter,
}

impl SolverState {
    fn new(request: &ScheduleRequest, assigned_teachers: AssignedTeachers, config: SolverConfig, seed: u64) -> Self {
        let classes = request
            .classes
            .keys()
            .map(|class| (class.clone(), ClassTimetable::empty(&config.grid)))
            .collect();

        Self {
            classes,
            occupancy: HashMap::new(),
            assigned_teachers,
            config,
            jitter: Jitter::new(seed),
        }
    }

    pub fn is_teacher_busy(&self, subject: &SubjectName, slot: Slot, teacher_idx: u32) -> bool {
        self.occupancy
            .get(subject)
            .and_then(|by_slot| by_slot.get(&slot))
            .map(|by_teacher| by_teacher.contains_key(&teacher_idx))
            .unwrap_or(false)
    }

    /// Place a session, recording the grid cell, the per-class assignment
    /// label, and the global occupancy entry. Callers must have already
    /// checked the slot is empty and the teacher is free.
    pub fn place<F>(&mut self, class: &ClassName, subject: &SubjectName, slot: Slot, teacher_idx: u32, teacher_name_fn: &F)
    where
        F: Fn(&ClassName, &SubjectName, u8, u8, u32) -> String,
    {
        let label = teacher_name_fn(class, subject, slot.day, slot.period, teacher_idx);

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

    /// Exact inverse of `place`, used to back out a failed placement.
    pub fn unplace(&mut self, class: &ClassName, subject: &SubjectName, slot: Slot, teacher_idx: u32) {
        let timetable = self.classes.get_mut(class).expect("class exists");
        timetable.grid[slot.day as usize][slot.period as usize] = None;
        if let Some(slots) = timetable.assignments.get_mut(subject) {
            slots.remove(&slot);
        }

        if let Some(by_slot) = self.occupancy.get_mut(subject) {
            if let Some(by_teacher) = by_slot.get_mut(&slot) {
                by_teacher.remove(&teacher_idx);
            }
        }
    }

    pub fn placed_count(&self, class: &ClassName, subject: &SubjectName) -> u32 {
        self.classes[class].count(subject)
    }
}

/// Validate the request up front so the
/// backtracking core can assume well-formed input.
pub fn validate_request(request: &ScheduleRequest, grid: &GridConfig) -> Result<(), SolverError> {
    let capacity = grid.capacity();

    for (class, subjects) in &request.classes {
        if class.0.trim().is_empty() {
            return Err(SolverError::EmptyClassName);
        }

        for (subject, requirement) in subjects {
            if subject.0.trim().is_empty() {
                return Err(SolverError::EmptySubjectName { class: class.to_string() });
            }

            if requirement.sessions == 0 {
                continue;
            }

            if requirement.teachers == 0 {
                return Err(SolverError::NoTeachersForSessions {
                    class: class.to_string(),
                    subject: subject.to_string(),
                    sessions: requirement.sessions,
                });
            }

            if requirement.sessions > capacity {
                return Err(SolverError::SessionsExceedCapacity {
                    class: class.to_string(),
                    subject: subject.to_string(),
                    sessions: requirement.sessions,
                    capacity,
                });
            }
        }
    }

    Ok(())
}

/// Run the full pipeline: allocate teachers, order
/// tasks, backtrack each in priority order, optimize distribution, then
/// resolve conflicts for anything left unplaced.
pub fn solve<F>(request: &ScheduleRequest, teacher_name_fn: F, seed: u64, config: &SolverConfig) -> SolveResult
where
    F: Fn(&ClassName, &SubjectName, u8, u8, u32) -> String,
{
    let start = Instant::now();

    if let Err(err) = validate_request(request, &config.grid) {
        log::warn!("rejecting request: {err}");
        return SolveResult {
            classes: HashMap::new(),
            warnings: vec![format!("invalid input: {err}")],
            metadata: SolveMetadata {
                generated_at: now_rfc3339(),
                algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
                seed,
                solve_time_ms: start.elapsed().as_millis() as u64,
                evictions_performed: 0,
            },
        };
    }

    let assigned_teachers = match allocate_teachers(request) {
        Ok(a) => a,
        Err(err) => {
            log::warn!("teacher allocation rejected request: {err}");
            let mut warnings = vec![format!("invalid input: {err}")];
            for (class, subjects) in &request.classes {
                for (subject, requirement) in subjects {
                    if requirement.sessions > 0 {
                        warnings.push(SolveResult::unplaced_warning(class, subject, 0, requirement.sessions));
                    }
                }
            }
            return SolveResult {
                classes: HashMap::new(),
                warnings,
                metadata: SolveMetadata {
                    generated_at: now_rfc3339(),
                    algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
                    seed,
                    solve_time_ms: start.elapsed().as_millis() as u64,
                    evictions_performed: 0,
                },
            };
        }
    };

    let mut state = SolverState::new(request, assigned_teachers, *config, seed);
    let order = priority_order(request);

    log::debug!("scheduling {} (class, subject) tasks", order.len());

    let mut failed: Vec<(Task, u32)> = Vec::new();
    for task in &order {
        let needed = request.classes[&task.class][&task.subject].sessions;
        let success = backtrack::backtrack(&mut state, &teacher_name_fn, &task.class, &task.subject, needed, false);
        if !success {
            log::debug!("first pass failed for {}/{}", task.class, task.subject);
            failed.push((task.clone(), needed));
        }
    }

    optimizer::optimize_distribution(&mut state);

    let mut evictions_performed = 0;
    if !failed.is_empty() {
        log::debug!("conflict resolver activating for {} failed pairs", failed.len());
        evictions_performed = conflict_resolver::resolve_conflicts(&mut state, &order, &failed, &teacher_name_fn);
    }

    // Check every scheduled pair, not just the ones that failed their first
    // pass: a pair can also fall short if the conflict resolver evicted one
    // of its sessions as a donor and couldn't re-place it.
    let mut warnings = Vec::new();
    for task in &order {
        let needed = request.classes[&task.class][&task.subject].sessions;
        let placed = state.placed_count(&task.class, &task.subject);
        if placed < needed {
            warnings.push(SolveResult::unplaced_warning(&task.class, &task.subject, placed, needed));
        }
    }

    SolveResult {
        classes: state.classes,
        warnings,
        metadata: SolveMetadata {
            generated_at: now_rfc3339(),
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            seed,
            solve_time_ms: start.elapsed().as_millis() as u64,
            evictions_performed,
        },
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
