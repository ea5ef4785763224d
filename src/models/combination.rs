//! Combination (solution) model.
//!
//! A combination is one chosen schedule option per class, in catalog
//! order. Combinations borrow their options from the catalog; they never
//! copy or modify catalog data.

use serde::Serialize;

use super::{ClassId, ScheduleOption, TimeRange, Weekday};

/// One choice of schedule option per class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combination<'a> {
    options: Vec<&'a ScheduleOption>,
}

/// Reason a combination is not a valid timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Human-readable description.
    pub message: String,
}

/// Classification of combination violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ViolationType {
    /// Two options imply the same exam at overlapping times.
    ExamConflict {
        exam_id: i32,
        first: ClassId,
        second: ClassId,
    },
    /// An option's meeting time leaves the accepted daily window.
    OutsideWindow { class: ClassId },
    /// Two options meet at overlapping times on the same weekday.
    TimeOverlap {
        day: Weekday,
        first: ClassId,
        second: ClassId,
    },
}

impl Violation {
    /// Creates an exam conflict violation.
    pub fn exam_conflict(a: &ScheduleOption, b: &ScheduleOption, exam_id: i32) -> Self {
        Self {
            violation_type: ViolationType::ExamConflict {
                exam_id,
                first: a.class,
                second: b.class,
            },
            message: format!(
                "classes {} and {} sit exam {} at overlapping times",
                a.class, b.class, exam_id
            ),
        }
    }

    /// Creates an outside-window violation.
    pub fn outside_window(option: &ScheduleOption, window: &TimeRange) -> Self {
        Self {
            violation_type: ViolationType::OutsideWindow {
                class: option.class,
            },
            message: format!(
                "class {} meets {} outside the accepted window {}",
                option.class, option.time, window
            ),
        }
    }

    /// Creates a time overlap violation.
    pub fn time_overlap(day: Weekday, a: &ScheduleOption, b: &ScheduleOption) -> Self {
        Self {
            violation_type: ViolationType::TimeOverlap {
                day,
                first: a.class,
                second: b.class,
            },
            message: format!(
                "classes {} ({}) and {} ({}) overlap on {}",
                a.class, a.time, b.class, b.time, day
            ),
        }
    }
}

impl<'a> Combination<'a> {
    /// Creates a combination from options in class order.
    pub fn new(options: Vec<&'a ScheduleOption>) -> Self {
        Self { options }
    }

    /// Chosen options, aligned with catalog class order.
    pub fn options(&self) -> &[&'a ScheduleOption] {
        &self.options
    }

    /// The option chosen for a class.
    pub fn option_for(&self, class: ClassId) -> Option<&'a ScheduleOption> {
        self.options.iter().copied().find(|o| o.class == class)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options grouped by the weekdays they meet on, in calendar order.
    ///
    /// An option appears once for each of its active days. Within a day
    /// options are sorted by start time; days with nothing scheduled are
    /// omitted.
    pub fn by_day(&self) -> Vec<(Weekday, Vec<&'a ScheduleOption>)> {
        group_by_day(&self.options)
    }

    /// Total meeting minutes per week.
    pub fn weekly_minutes(&self) -> u32 {
        self.options
            .iter()
            .map(|o| u32::from(o.time.duration_minutes()) * o.days.len() as u32)
            .sum()
    }

    /// Consumes the combination, returning its options.
    pub fn into_options(self) -> Vec<&'a ScheduleOption> {
        self.options
    }
}

/// Groups options by active weekday, each day sorted by start time.
pub(crate) fn group_by_day<'a>(
    options: &[&'a ScheduleOption],
) -> Vec<(Weekday, Vec<&'a ScheduleOption>)> {
    Weekday::ALL
        .into_iter()
        .filter_map(|day| {
            let mut today: Vec<&'a ScheduleOption> = options
                .iter()
                .copied()
                .filter(|o| o.days.contains(day))
                .collect();
            if today.is_empty() {
                return None;
            }
            today.sort_by_key(|o| o.time.start);
            Some((day, today))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, Class};

    fn option(group: u32, days: &str, time: &str) -> ScheduleOption {
        ScheduleOption::new(group, days.parse().unwrap(), time.parse().unwrap())
    }

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with_class(Class::new("Physics").with_option(option(1, "Mon-Wed", "11:00-12:30")))
            .with_class(Class::new("Algebra").with_option(option(4, "Mon-Fri", "08:00-09:30")))
            .with_class(Class::new("Seminar").with_option(option(2, "Thu", "15:00-17:00")))
    }

    fn first_options(catalog: &Catalog) -> Combination<'_> {
        Combination::new(catalog.classes().iter().map(|c| &c.options[0]).collect())
    }

    #[test]
    fn test_by_day_groups_and_sorts() {
        let catalog = sample_catalog();
        let combination = first_options(&catalog);
        let days = combination.by_day();

        let names: Vec<Weekday> = days.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            names,
            vec![Weekday::Monday, Weekday::Wednesday, Weekday::Thursday, Weekday::Friday]
        );

        // Monday: Algebra (08:00) before Physics (11:00)
        let monday = &days[0].1;
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].group, 4);
        assert_eq!(monday[1].group, 1);
    }

    #[test]
    fn test_option_for() {
        let catalog = sample_catalog();
        let combination = first_options(&catalog);
        assert_eq!(combination.option_for(ClassId(2)).map(|o| o.group), Some(2));
        assert!(combination.option_for(ClassId(9)).is_none());
        assert_eq!(combination.len(), 3);
    }

    #[test]
    fn test_weekly_minutes() {
        let catalog = sample_catalog();
        let combination = first_options(&catalog);
        // 90*2 + 90*2 + 120*1
        assert_eq!(combination.weekly_minutes(), 480);
    }

    #[test]
    fn test_empty_combination() {
        let combination = Combination::new(Vec::new());
        assert!(combination.is_empty());
        assert!(combination.by_day().is_empty());
        assert_eq!(combination.weekly_minutes(), 0);
    }

    #[test]
    fn test_violation_factories() {
        let catalog = sample_catalog();
        let a = &catalog.classes()[0].options[0];
        let b = &catalog.classes()[1].options[0];

        let v = Violation::time_overlap(Weekday::Monday, a, b);
        assert_eq!(
            v.violation_type,
            ViolationType::TimeOverlap {
                day: Weekday::Monday,
                first: ClassId(0),
                second: ClassId(1)
            }
        );
        assert!(v.message.contains("Mon"));

        let window: TimeRange = "09:00-16:30".parse().unwrap();
        let v = Violation::outside_window(b, &window);
        assert_eq!(v.violation_type, ViolationType::OutsideWindow { class: ClassId(1) });

        let v = Violation::exam_conflict(a, b, 3);
        assert!(matches!(v.violation_type, ViolationType::ExamConflict { exam_id: 3, .. }));
    }
}
