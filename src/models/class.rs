//! Class, schedule option and catalog models.
//!
//! A class is a course offering with several mutually exclusive schedule
//! options (sections). The order of a class's options is the order in
//! which they are enumerated; the order of classes in a [`Catalog`] is
//! the order of options inside every resulting combination.
//!
//! # Ownership
//! A class owns its options. Each option refers back to its class by
//! [`ClassId`], the position of the class inside the catalog, so there
//! are no ownership cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Exam, TimeRange, WeekdaySet};

/// Position of a class inside a [`Catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassId(pub usize);

impl ClassId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One concrete way of taking a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOption {
    /// Owning class (attribution only; never used for validity).
    pub class: ClassId,
    /// Section / group number.
    pub group: u32,
    /// Days on which the class meets.
    pub days: WeekdaySet,
    /// Meeting time, identical on every active day.
    pub time: TimeRange,
    /// Held in person (`false` = remote).
    pub in_person: bool,
    /// Seats still available. Informational.
    pub available_seats: u32,
    /// Exam for this option: its own, the class default, or none.
    pub exam: Option<Exam>,
    /// Whether `exam` came from the class default rather than the option.
    #[serde(default)]
    exam_inherited: bool,
}

impl ScheduleOption {
    /// Creates an in-person option with no seats information and no exam.
    pub fn new(group: u32, days: WeekdaySet, time: TimeRange) -> Self {
        Self {
            class: ClassId::default(),
            group,
            days,
            time,
            in_person: true,
            available_seats: 0,
            exam: None,
            exam_inherited: false,
        }
    }

    /// Sets the modality.
    pub fn with_in_person(mut self, in_person: bool) -> Self {
        self.in_person = in_person;
        self
    }

    /// Sets the number of available seats.
    pub fn with_available_seats(mut self, seats: u32) -> Self {
        self.available_seats = seats;
        self
    }

    /// Overrides the class's default exam for this option.
    pub fn with_exam(mut self, exam: Exam) -> Self {
        self.exam = Some(exam);
        self.exam_inherited = false;
        self
    }

    /// Whether the exam is the owning class's default.
    pub fn exam_is_inherited(&self) -> bool {
        self.exam_inherited
    }

    fn inherit_exam(&mut self, exam: Option<&Exam>) {
        self.exam = exam.cloned();
        self.exam_inherited = exam.is_some();
    }
}

impl fmt::Display for ScheduleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.in_person { "in person" } else { "remote" };
        write!(
            f,
            "Group {:02}: {} {} {} {} seats",
            self.group, self.days, self.time, mode, self.available_seats
        )?;
        if let Some(exam) = &self.exam {
            write!(f, " {exam}")?;
        }
        Ok(())
    }
}

/// A course offering with mutually exclusive schedule options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Position in the owning catalog.
    pub id: ClassId,
    /// Display name.
    pub name: String,
    /// Candidate options, in enumeration order.
    pub options: Vec<ScheduleOption>,
    /// Exam used by options that don't specify their own.
    pub exam: Option<Exam>,
}

impl Class {
    /// Creates a class with no options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ClassId::default(),
            name: name.into(),
            options: Vec::new(),
            exam: None,
        }
    }

    /// Sets the default exam.
    ///
    /// Every option already added without an exam of its own takes it,
    /// replacing any previous default.
    pub fn with_exam(mut self, exam: Exam) -> Self {
        for option in self
            .options
            .iter_mut()
            .filter(|o| o.exam.is_none() || o.exam_inherited)
        {
            option.inherit_exam(Some(&exam));
        }
        self.exam = Some(exam);
        self
    }

    /// Appends an option, binding it to this class.
    ///
    /// An option without its own exam inherits the class default.
    pub fn with_option(mut self, mut option: ScheduleOption) -> Self {
        option.class = self.id;
        if option.exam.is_none() {
            option.inherit_exam(self.exam.as_ref());
        }
        self.options.push(option);
        self
    }

    /// Number of options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Whether this class has any options at all.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    fn bind(&mut self, id: ClassId) {
        self.id = id;
        for option in &mut self.options {
            option.class = id;
        }
    }
}

/// An ordered list of classes.
///
/// Assigns each inserted class its [`ClassId`] and rebinds the class's
/// options to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    classes: Vec<Class>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class.
    pub fn with_class(mut self, class: Class) -> Self {
        self.push(class);
        self
    }

    /// Appends a class and returns its id.
    pub fn push(&mut self, mut class: Class) -> ClassId {
        let id = ClassId(self.classes.len());
        class.bind(id);
        self.classes.push(class);
        id
    }

    /// Classes in catalog order.
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// Looks up a class by id.
    pub fn class(&self, id: ClassId) -> Option<&Class> {
        self.classes.get(id.index())
    }

    /// Name of the class an option belongs to.
    pub fn class_name(&self, option: &ScheduleOption) -> Option<&str> {
        self.class(option.class).map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of candidate combinations (product of option counts).
    ///
    /// `None` on overflow.
    pub fn candidate_count(&self) -> Option<usize> {
        self.classes
            .iter()
            .try_fold(1usize, |acc, c| acc.checked_mul(c.option_count()))
    }
}
