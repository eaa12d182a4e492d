//! Converts the raw wire shape (plain string keys) into a typed, validated
//! `ScheduleRequest`. Domain feasibility checks (capacity, teacher pools)
//! still happen inside `solver::validate_request` at `solve` time; this
//! module only rejects requests that are malformed before they ever reach
//! the solver.

use crate::error::SolverError;
use crate::types::{ClassName, RawRequest, ScheduleRequest, SubjectName};
use std::collections::HashMap;

pub fn into_schedule_request(raw: RawRequest) -> Result<ScheduleRequest, SolverError> {
    let mut classes = HashMap::with_capacity(raw.len());

    for (class_name, subjects) in raw {
        if class_name.trim().is_empty() {
            return Err(SolverError::EmptyClassName);
        }
        let class = ClassName::from(class_name.as_str());

        let mut typed_subjects = HashMap::with_capacity(subjects.len());
        for (subject_name, requirement) in subjects {
            if subject_name.trim().is_empty() {
                return Err(SolverError::EmptySubjectName { class: class.to_string() });
            }
            typed_subjects.insert(SubjectName::from(subject_name.as_str()), requirement);
        }

        classes.insert(class, typed_subjects);
    }

    Ok(ScheduleRequest { classes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubjectRequirement;

    #[test]
    fn converts_raw_keys_into_typed_newtypes() {
        let mut raw: RawRequest = HashMap::new();
        let mut subjects = HashMap::new();
        subjects.insert("Math".to_string(), SubjectRequirement { sessions: 3, teachers: 1 });
        raw.insert("10A".to_string(), subjects);

        let request = into_schedule_request(raw).unwrap();
        assert_eq!(request.requirement(&ClassName::from("10A"), &SubjectName::from("Math")).unwrap().sessions, 3);
    }

    #[test]
    fn rejects_empty_class_name() {
        let mut raw: RawRequest = HashMap::new();
        raw.insert(" ".to_string(), HashMap::new());
        assert!(matches!(into_schedule_request(raw), Err(SolverError::EmptyClassName)));
    }

    #[test]
    fn rejects_empty_subject_name() {
        let mut raw: RawRequest = HashMap::new();
        let mut subjects = HashMap::new();
        subjects.insert("".to_string(), SubjectRequirement { sessions: 1, teachers: 1 });
        raw.insert("10A".to_string(), subjects);
        assert!(matches!(into_schedule_request(raw), Err(SolverError::EmptySubjectName { .. })));
    }
}
