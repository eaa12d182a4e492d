//! Priority ordering: produces the deterministic sequence
//! of (class, subject) scheduling tasks, most-constrained first.

use crate::types::{ClassName, ScheduleRequest, SubjectName};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub class: ClassName,
    pub subject: SubjectName,
}

/// Smaller sorts earlier: (teachers asc, sessions desc, class-total desc, name tie-break).
fn priority_key(request: &ScheduleRequest, task: &Task) -> (u32, i64, i64, ClassName, SubjectName) {
    let requirement = &request.classes[&task.class][&task.subject];
    (
        requirement.teachers,
        -(requirement.sessions as i64),
        -(request.total_sessions(&task.class) as i64),
        task.class.clone(),
        task.subject.clone(),
    )
}

pub fn priority_order(request: &ScheduleRequest) -> Vec<Task> {
    let mut tasks: Vec<Task> = request
        .classes
        .iter()
        .flat_map(|(class, subjects)| {
            subjects.iter().filter(|(_, r)| r.sessions > 0).map(move |(subject, _)| Task {
                class: class.clone(),
                subject: subject.clone(),
            })
        })
        .collect();

    tasks.sort_by(|a, b| priority_key(request, a).cmp(&priority_key(request, b)));
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubjectRequirement;

    fn set(request: &mut ScheduleRequest, class: &str, subject: &str, sessions: u32, teachers: u32) {
        request
            .classes
            .entry(ClassName::from(class))
            .or_default()
            .insert(SubjectName::from(subject), SubjectRequirement { sessions, teachers });
    }

    #[test]
    fn fewer_teachers_sorts_first() {
        let mut request = ScheduleRequest::default();
        set(&mut request, "A", "Art", 3, 4);
        set(&mut request, "A", "Math", 3, 1);

        let order = priority_order(&request);
        assert_eq!(order[0].subject, SubjectName::from("Math"));
    }

    #[test]
    fn zero_sessions_excluded() {
        let mut request = ScheduleRequest::default();
        set(&mut request, "A", "Math", 0, 1);
        set(&mut request, "A", "Eng", 2, 1);

        let order = priority_order(&request);
        assert_eq!(order.len(), 1);
        assert_eq!(order[0].subject, SubjectName::from("Eng"));
    }

    #[test]
    fn more_sessions_sorts_before_fewer_at_same_teacher_count() {
        let mut request = ScheduleRequest::default();
        set(&mut request, "A", "Math", 2, 1);
        set(&mut request, "A", "Eng", 5, 1);

        let order = priority_order(&request);
        assert_eq!(order[0].subject, SubjectName::from("Eng"));
    }
}
