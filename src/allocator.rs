//! Teacher allocation: assigns one teacher index per
//! (class, subject) pair before scheduling starts, balancing load across the
//! subject's teacher pool.

use crate::error::SolverError;
use crate::types::{ClassName, ScheduleRequest, SubjectName};
use std::collections::HashMap;

/// `assigned[class][subject] = teacher index`.
pub type AssignedTeachers = HashMap<ClassName, HashMap<SubjectName, u32>>;

pub fn allocate_teachers(request: &ScheduleRequest) -> Result<AssignedTeachers, SolverError> {
    let mut subjects: Vec<&SubjectName> = request
        .classes
        .values()
        .flat_map(|s| s.keys())
        .collect::<std::collections::HashSet<_>>()
        .into_iter()
        .collect();
    subjects.sort();

    let mut assigned: AssignedTeachers = HashMap::new();

    for subject in subjects {
        let mut requesting: Vec<&ClassName> = request
            .classes
            .iter()
            .filter(|(_, subjects)| subjects.get(subject).map(|r| r.sessions > 0).unwrap_or(false))
            .map(|(class, _)| class)
            .collect();
        requesting.sort();

        if requesting.is_empty() {
            continue;
        }

        let max_teachers = requesting
            .iter()
            .map(|class| request.classes[*class][subject].teachers)
            .max()
            .unwrap_or(1)
            .max(1);

        let mut used_by: Vec<u32> = vec![0; max_teachers as usize];

        for class in requesting {
            let requirement = &request.classes[class][subject];

            // Balance load across the subject's full declared pool (every
            // class requesting it may share any of these indices), then
            // check that this class itself declared enough teachers to
            // cover the index load-balancing actually picked for it.
            let chosen = (0..max_teachers)
                .min_by_key(|&t| (used_by[t as usize], t))
                .expect("pool is non-empty");

            if chosen >= requirement.teachers {
                return Err(SolverError::InsufficientTeacherPool {
                    class: class.to_string(),
                    subject: subject.to_string(),
                    declared: requirement.teachers,
                    required: chosen + 1,
                });
            }

            used_by[chosen as usize] += 1;
            assigned.entry(class.clone()).or_default().insert(subject.clone(), chosen);
        }
    }

    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubjectRequirement;

    fn req(pairs: &[(&str, &str, u32, u32)]) -> ScheduleRequest {
        let mut request = ScheduleRequest::default();
        for (class, subject, sessions, teachers) in pairs {
            request
                .classes
                .entry(ClassName::from(*class))
                .or_default()
                .insert(SubjectName::from(*subject), SubjectRequirement { sessions: *sessions, teachers: *teachers });
        }
        request
    }

    #[test]
    fn balances_load_within_one() {
        let request = req(&[
            ("A", "M", 3, 2),
            ("B", "M", 3, 2),
            ("C", "M", 3, 2),
        ]);
        let assigned = allocate_teachers(&request).unwrap();

        let mut counts = vec![0u32; 2];
        for subjects in assigned.values() {
            let idx = subjects[&SubjectName::from("M")];
            counts[idx as usize] += 1;
        }
        assert!((counts[0] as i32 - counts[1] as i32).abs() <= 1);
    }

    #[test]
    fn single_teacher_pool_assigns_index_zero() {
        let request = req(&[("A", "M", 5, 1), ("B", "M", 5, 1)]);
        let assigned = allocate_teachers(&request).unwrap();
        for subjects in assigned.values() {
            assert_eq!(subjects[&SubjectName::from("M")], 0);
        }
    }

    #[test]
    fn zero_session_subjects_are_not_allocated() {
        let request = req(&[("A", "M", 0, 1)]);
        let assigned = allocate_teachers(&request).unwrap();
        assert!(assigned.get(&ClassName::from("A")).is_none());
    }

    #[test]
    fn insufficient_declared_pool_is_rejected() {
        // "Alpha" declares a 3-teacher pool and is processed first
        // (alphabetical order), taking index 0. "Beta" declares only 1
        // teacher but the load balancer, working across the subject's full
        // 3-wide pool, has nothing better than index 1 left for it — which
        // exceeds the 1 teacher Beta actually declared.
        let request = req(&[("Alpha", "M", 3, 3), ("Beta", "M", 3, 1)]);

        let err = allocate_teachers(&request).unwrap_err();
        match err {
            SolverError::InsufficientTeacherPool { class, subject, declared, required } => {
                assert_eq!(class, "Beta");
                assert_eq!(subject, "M");
                assert_eq!(declared, 1);
                assert_eq!(required, 2);
            }
            other => panic!("expected InsufficientTeacherPool, got {other:?}"),
        }
    }
}
