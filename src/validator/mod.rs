//! Re-checks a produced `SolveResult` for the structural properties
//! verifiable from a single result file: grid/assignment consistency,
//! teacher exclusivity, session-count bounds, and full placement unless
//! warned. Stable teacher-per-pair, determinism, and backtracking's undo
//! discipline depend on internal solver state or repeated runs and are
//! covered by unit/property tests instead of this CLI-facing check.

mod properties;

pub use properties::*;

use crate::types::{ScheduleRequest, SolveResult};

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub violations: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

pub fn validate_result(request: &ScheduleRequest, result: &SolveResult) -> ValidationReport {
    let mut violations = Vec::new();

    violations.extend(properties::check_grid_assignment_consistency(result));
    violations.extend(properties::check_teacher_exclusivity(request, result));
    violations.extend(properties::check_session_count_upper_bound(request, result));
    violations.extend(properties::check_full_placement_unless_warned(request, result));

    ValidationReport { violations }
}
