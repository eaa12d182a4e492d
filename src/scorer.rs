//! Slot scorer and distribution score. Lower scores
//! are better for slot ordering; higher is better for the distribution score.

use crate::rng::Jitter;
use crate::types::{ClassTimetable, GridConfig, Slot, SubjectName};

/// `D(subject)`: +1 per day the subject appears on, minus 0.2 per extra
/// session beyond the first on a day it already appears on. Maximum equals
/// `config.days` (one session per day).
pub fn distribution_score(timetable: &ClassTimetable, subject: &SubjectName, config: &GridConfig) -> f64 {
    let mut score = 0.0;
    for day in 0..config.days {
        let count = timetable.day_count(subject, day);
        if count > 0 {
            score += 1.0;
            if count > 1 {
                score -= 0.2 * (count - 1) as f64;
            }
        }
    }
    score
}

/// Scored, ascending-sorted empty slots for placing `subject`. In retry mode
/// every remaining empty slot is guaranteed present even if the scored pass
/// somehow omitted one (it never does today, but this keeps the contract
/// explicit).
pub fn scored_slots(
    timetable: &ClassTimetable,
    subject: &SubjectName,
    config: &GridConfig,
    jitter: &mut Jitter,
    retry_mode: bool,
) -> Vec<Slot> {
    let mut day_count = vec![0u32; config.days as usize];
    let mut period_count = vec![0u32; config.periods as usize];
    let mut day_load = vec![0u32; config.days as usize];

    for d in 0..config.days {
        day_load[d as usize] = timetable.day_load(d);
        day_count[d as usize] = timetable.day_count(subject, d);
    }
    for p in 0..config.periods {
        period_count[p as usize] = timetable.period_count(subject, p);
    }

    let mid = config.periods as i32 / 2;

    let mut scored: Vec<(Slot, f64)> = Vec::new();
    for d in 0..config.days {
        for p in 0..config.periods {
            let slot = Slot::new(d, p);
            if !timetable.is_empty_at(slot) {
                continue;
            }

            let mut score = 0.0;

            if day_count[d as usize] == 0 {
                score -= 15.0;
            } else {
                score += 6.0 * day_count[d as usize] as f64;
            }

            let left_adjacent = p > 0 && timetable.subject_at(Slot::new(d, p - 1)) == Some(subject);
            let right_adjacent =
                p + 1 < config.periods && timetable.subject_at(Slot::new(d, p + 1)) == Some(subject);
            if left_adjacent {
                score += 4.0;
            }
            if right_adjacent {
                score += 4.0;
            }
            if left_adjacent && right_adjacent {
                score += 5.0;
            }

            score += 3.0 * period_count[p as usize] as f64;
            score += 0.5 * day_load[d as usize] as f64;
            score += 0.2 * (p as i32 - mid).unsigned_abs() as f64;
            score += jitter.next();

            scored.push((slot, score));
        }
    }

    scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
    let mut slots: Vec<Slot> = scored.into_iter().map(|(s, _)| s).collect();

    if retry_mode {
        for slot in timetable.empty_slots(config) {
            if !slots.contains(&slot) {
                slots.push(slot);
            }
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_day_is_preferred_over_occupied_day() {
        let config = GridConfig { days: 2, periods: 2 };
        let mut timetable = ClassTimetable::empty(&config);
        let subject = SubjectName::from("M");
        timetable.grid[0][0] = Some(subject.clone());
        timetable.assignments.entry(subject.clone()).or_default().insert(Slot::new(0, 0), "T".to_string());

        let mut jitter = Jitter::new(1);
        let slots = scored_slots(&timetable, &subject, &config, &mut jitter, false);

        // Day 1 (no subject yet) should be scored ahead of day 0's remaining slot.
        assert_eq!(slots[0].day, 1);
    }

    #[test]
    fn perfect_spread_scores_days_count() {
        let config = GridConfig { days: 5, periods: 7 };
        let mut timetable = ClassTimetable::empty(&config);
        let subject = SubjectName::from("M");
        for d in 0..5 {
            timetable.grid[d as usize][0] = Some(subject.clone());
        }
        assert_eq!(distribution_score(&timetable, &subject, &config), 5.0);
    }

    #[test]
    fn clustering_on_one_day_penalizes_score() {
        let config = GridConfig { days: 5, periods: 7 };
        let mut timetable = ClassTimetable::empty(&config);
        let subject = SubjectName::from("M");
        timetable.grid[0][0] = Some(subject.clone());
        timetable.grid[0][1] = Some(subject.clone());
        timetable.grid[0][2] = Some(subject.clone());
        let score = distribution_score(&timetable, &subject, &config);
        assert!(score < 1.0);
    }
}
