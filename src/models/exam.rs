//! Exam model and exam conflict detection.
//!
//! Exam identifiers are not unique across a catalog: sections of the
//! same course (or different courses) that sit one physical exam share
//! its identifier. Conflict detection is therefore scoped to exams with
//! the same identifier; exams with different identifiers are unrelated
//! even if their times overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeRange;

/// An exam slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exam {
    /// Exam identifier (shared by every section sitting this exam).
    pub id: i32,
    /// When the exam is held.
    pub time: TimeRange,
    /// Held in person (`false` = remote).
    pub in_person: bool,
}

/// How same-identifier exams are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamConflictPolicy {
    /// Same identifier and overlapping times conflict, including two
    /// references to the very same exam slot.
    #[default]
    SameIdOverlap,
    /// As `SameIdOverlap`, except that identical exam records (same id,
    /// same time, same modality) are one shared slot and never conflict.
    AllowIdentical,
}

impl Exam {
    /// Creates an in-person exam.
    pub fn new(id: i32, time: TimeRange) -> Self {
        Self {
            id,
            time,
            in_person: true,
        }
    }

    /// Sets the modality.
    pub fn with_in_person(mut self, in_person: bool) -> Self {
        self.in_person = in_person;
        self
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.in_person { "in person" } else { "remote" };
        write!(f, "(exam {} {} {})", self.id, self.time, mode)
    }
}

/// Whether two (possibly absent) exams conflict.
///
/// `false` if either is absent or the identifiers differ; otherwise
/// `true` iff their time ranges overlap.
pub fn exams_conflict(a: Option<&Exam>, b: Option<&Exam>) -> bool {
    exams_conflict_with(a, b, ExamConflictPolicy::SameIdOverlap)
}

/// [`exams_conflict`] under an explicit policy.
pub fn exams_conflict_with(a: Option<&Exam>, b: Option<&Exam>, policy: ExamConflictPolicy) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    if a.id != b.id {
        return false;
    }
    if policy == ExamConflictPolicy::AllowIdentical && a == b {
        return false;
    }
    a.time.overlaps(&b.time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam(id: i32, time: &str) -> Exam {
        Exam::new(id, time.parse().unwrap())
    }

    #[test]
    fn test_absent_never_conflicts() {
        let e = exam(1, "09:00-11:00");
        assert!(!exams_conflict(None, None));
        assert!(!exams_conflict(Some(&e), None));
        assert!(!exams_conflict(None, Some(&e)));
    }

    #[test]
    fn test_different_ids_never_conflict() {
        let a = exam(1, "09:00-11:00");
        let b = exam(2, "09:00-11:00");
        assert!(!exams_conflict(Some(&a), Some(&b)));
    }

    #[test]
    fn test_same_id_overlapping_conflicts() {
        let a = exam(7, "09:00-11:00");
        let b = exam(7, "10:00-12:00");
        assert!(exams_conflict(Some(&a), Some(&b)));
        assert!(exams_conflict(Some(&b), Some(&a)));
    }

    #[test]
    fn test_same_id_back_to_back_ok() {
        let a = exam(7, "09:00-11:00");
        let b = exam(7, "11:00-13:00");
        assert!(!exams_conflict(Some(&a), Some(&b)));
    }

    #[test]
    fn test_identical_exam_is_conflict_by_default() {
        let a = exam(3, "14:00-16:00");
        let b = a.clone();
        assert!(exams_conflict(Some(&a), Some(&b)));
        assert!(exams_conflict(Some(&a), Some(&a)));
    }

    #[test]
    fn test_identical_exam_allowed_by_policy() {
        let a = exam(3, "14:00-16:00");
        let policy = ExamConflictPolicy::AllowIdentical;
        assert!(!exams_conflict_with(Some(&a), Some(&a.clone()), policy));

        // Differing modality is not the same slot
        let remote = a.clone().with_in_person(false);
        assert!(exams_conflict_with(Some(&a), Some(&remote), policy));

        // Overlapping but not identical still conflicts
        let shifted = exam(3, "15:00-17:00");
        assert!(exams_conflict_with(Some(&a), Some(&shifted), policy));
    }

    #[test]
    fn test_display() {
        let e = exam(4, "08:00-10:00").with_in_person(false);
        assert_eq!(e.to_string(), "(exam 4 08:00-10:00 remote)");
    }
}
