//! Accepted daily window check.

use crate::models::{ScheduleOption, TimeRange};

/// The caller's acceptable time-of-day span, applied to every weekday.
pub type AcceptedWindow = TimeRange;

/// Whether an option's meeting time lies inside the accepted window.
///
/// Both bounds are inclusive: an option exactly matching the window
/// fits. Days are irrelevant; the same window governs every active day.
#[inline]
pub fn fits_window(option: &ScheduleOption, accepted: &AcceptedWindow) -> bool {
    accepted.contains(&option.time)
}
