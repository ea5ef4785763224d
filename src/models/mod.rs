//! Timetable domain models.
//!
//! Provides the data types consumed and produced by the combination
//! engine. Catalog ingestion builds [`Class`] values into a [`Catalog`];
//! the engine reads them and produces [`Combination`]s that borrow the
//! chosen [`ScheduleOption`]s.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Training Center | Sports Club |
//! |-------------|------------|-----------------|-------------|
//! | Class | Course | Workshop | Program |
//! | ScheduleOption | Section / Parallel | Session Slot | Team Slot |
//! | Exam | Final Exam | Certification | Tournament |
//! | Combination | Semester Timetable | Attendee Plan | Weekly Plan |

mod class;
mod combination;
mod exam;
mod time;
mod weekday;

pub use class::{Catalog, Class, ClassId, ScheduleOption};
pub use combination::{Combination, Violation, ViolationType};
pub(crate) use combination::group_by_day;
pub use exam::{exams_conflict, exams_conflict_with, Exam, ExamConflictPolicy};
pub use time::{times_overlap, TimeOfDay, TimeRange};
pub use weekday::{active, Weekday, WeekdaySet};
