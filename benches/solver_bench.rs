use criterion::{black_box, criterion_group, criterion_main, Criterion};
use school_timetable_solver::solver::solve;
use school_timetable_solver::types::{ClassName, ScheduleRequest, SolverConfig, SubjectName, SubjectRequirement};
use std::collections::HashMap;

fn teacher_label(class: &ClassName, subject: &SubjectName, _day: u8, _period: u8, idx: u32) -> String {
    format!("{}-{}-{}", class, subject, idx)
}

fn small_request() -> ScheduleRequest {
    let mut classes = HashMap::new();
    let mut subjects = HashMap::new();
    subjects.insert(SubjectName::from("Math"), SubjectRequirement { sessions: 5, teachers: 1 });
    subjects.insert(SubjectName::from("English"), SubjectRequirement { sessions: 4, teachers: 1 });
    classes.insert(ClassName::from("A"), subjects);
    ScheduleRequest { classes }
}

fn tight_capacity_request() -> ScheduleRequest {
    let mut classes = HashMap::new();
    let mut subjects = HashMap::new();
    subjects.insert(SubjectName::from("Math"), SubjectRequirement { sessions: 20, teachers: 1 });
    subjects.insert(SubjectName::from("English"), SubjectRequirement { sessions: 15, teachers: 1 });
    classes.insert(ClassName::from("A"), subjects);
    ScheduleRequest { classes }
}

fn teacher_scarce_request() -> ScheduleRequest {
    let mut classes = HashMap::new();
    for name in ["A", "B", "C", "D"] {
        let mut subjects = HashMap::new();
        subjects.insert(SubjectName::from("Math"), SubjectRequirement { sessions: 5, teachers: 1 });
        classes.insert(ClassName::from(name), subjects);
    }
    ScheduleRequest { classes }
}

fn bench_solve(c: &mut Criterion) {
    let config = SolverConfig::default();

    c.bench_function("solve_small", |b| {
        let request = small_request();
        b.iter(|| solve(black_box(&request), teacher_label, 1, &config));
    });

    c.bench_function("solve_tight_capacity", |b| {
        let request = tight_capacity_request();
        b.iter(|| solve(black_box(&request), teacher_label, 1, &config));
    });

    c.bench_function("solve_teacher_scarce", |b| {
        let request = teacher_scarce_request();
        b.iter(|| solve(black_box(&request), teacher_label, 1, &config));
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
