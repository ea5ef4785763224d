//! Combination validity.
//!
//! # Rules
//! A combination (one option per class) is valid iff:
//! 1. No two options imply a conflicting exam (same id, overlapping time).
//! 2. Every option fits the accepted daily window.
//! 3. On every weekday, no two options active that day overlap in time.
//!
//! Rules are checked in this order and the first failure rejects the
//! combination. [`check_combination`] instead reports every violation.
//!
//! # Complexity
//! O(k²) for k options (pairwise exam check plus pairwise per-day check).

use crate::models::{
    exams_conflict_with, group_by_day, ExamConflictPolicy, ScheduleOption, Violation, Weekday,
};

use super::window::{fits_window, AcceptedWindow};

/// First rule a combination fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Options at these positions sit the same exam at overlapping times.
    ExamConflict(usize, usize),
    /// The option at this position leaves the accepted window.
    OutsideWindow(usize),
    /// Options at these positions overlap on this day.
    TimeOverlap(Weekday, usize, usize),
}

/// Whether a combination is a valid timetable under the default exam policy.
pub fn is_valid_combination(options: &[&ScheduleOption], accepted: &AcceptedWindow) -> bool {
    first_rejection(options, accepted, ExamConflictPolicy::default()).is_none()
}

/// Finds the first rule a combination fails, or `None` if it is valid.
pub fn first_rejection(
    options: &[&ScheduleOption],
    accepted: &AcceptedWindow,
    policy: ExamConflictPolicy,
) -> Option<Rejection> {
    if options.len() > 1 {
        for (i, a) in options.iter().enumerate() {
            for (j, b) in options.iter().enumerate().skip(i + 1) {
                if exams_conflict_with(a.exam.as_ref(), b.exam.as_ref(), policy) {
                    return Some(Rejection::ExamConflict(i, j));
                }
            }
        }
    }

    if let Some(i) = options.iter().position(|o| !fits_window(o, accepted)) {
        return Some(Rejection::OutsideWindow(i));
    }

    for day in Weekday::ALL {
        for (i, a) in options.iter().enumerate() {
            if !a.days.contains(day) {
                continue;
            }
            for (j, b) in options.iter().enumerate().skip(i + 1) {
                if b.days.contains(day) && a.time.overlaps(&b.time) {
                    return Some(Rejection::TimeOverlap(day, i, j));
                }
            }
        }
    }

    None
}

/// Reports every violation in a combination.
///
/// Empty iff [`first_rejection`] returns `None` under the same policy.
pub fn check_combination(
    options: &[&ScheduleOption],
    accepted: &AcceptedWindow,
    policy: ExamConflictPolicy,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (i, a) in options.iter().enumerate() {
        for b in options.iter().skip(i + 1) {
            if exams_conflict_with(a.exam.as_ref(), b.exam.as_ref(), policy) {
                // Conflicting exams always share an id
                let exam_id = a.exam.as_ref().map_or(0, |e| e.id);
                violations.push(Violation::exam_conflict(a, b, exam_id));
            }
        }
    }

    for option in options.iter().filter(|o| !fits_window(o, accepted)) {
        violations.push(Violation::outside_window(option, accepted));
    }

    for (day, today) in group_by_day(options) {
        for (i, a) in today.iter().enumerate() {
            for b in today.iter().skip(i + 1) {
                if a.time.overlaps(&b.time) {
                    violations.push(Violation::time_overlap(day, a, b));
                }
            }
        }
    }

    violations
}
