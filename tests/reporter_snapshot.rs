//! Snapshot test for the Markdown reporter output on a fixed, fully-packed
//! request where every grid slot must hold the one requested subject
//! regardless of jitter or slot-scoring order, so the rendered table is
//! reproducible without depending on RNG internals.

use school_timetable_solver::reporter::generate_markdown_report;
use school_timetable_solver::solver::solve;
use school_timetable_solver::types::{ClassName, GridConfig, ScheduleRequest, SolverConfig, SubjectName, SubjectRequirement};
use std::collections::HashMap;

fn teacher_label(class: &ClassName, subject: &SubjectName, _day: u8, _period: u8, idx: u32) -> String {
    format!("{}-{}-{}", class, subject, idx)
}

#[test]
fn fully_packed_single_class_markdown_report_matches_snapshot() {
    let mut classes: HashMap<ClassName, HashMap<SubjectName, SubjectRequirement>> = HashMap::new();
    let mut subjects = HashMap::new();
    subjects.insert(SubjectName::from("Math"), SubjectRequirement { sessions: 3, teachers: 1 });
    classes.insert(ClassName::from("10A"), subjects);
    let request = ScheduleRequest { classes };

    let config = SolverConfig { grid: GridConfig { days: 1, periods: 3 }, ..Default::default() };
    let mut result = solve(&request, teacher_label, 7, &config);

    assert!(result.warnings.is_empty());
    result.metadata.generated_at = "2026-01-01T00:00:00Z".to_string();
    result.metadata.solve_time_ms = 0;

    insta::assert_snapshot!(generate_markdown_report(&result), @r###"
    # Timetable

    Generated: 2026-01-01T00:00:00Z
    Algorithm: v0.1.0
    Seed: 7
    Solve time: 0ms
    Evictions performed: 0

    ## Warnings: none

    ## 10A

    | Day | P1 | P2 | P3 |
    |-----|---|---|---|
    | Monday | Math | Math | Math |
    "###);
}
