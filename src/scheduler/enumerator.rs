//! Exhaustive combination enumeration.
//!
//! # Algorithm
//! 1. Walk the Cartesian product of every class's option list with an
//!    odometer: the first class's index changes slowest, the last
//!    class's fastest.
//! 2. Validate each candidate independently (see [`super::validator`]).
//! 3. Keep the survivors in generation order.
//!
//! There is no pruning and no ranking: every valid combination is
//! returned, and its position is purely its place in product order.
//!
//! # Complexity
//! O(∏ |options|) candidates, each validated in O(k²) for k classes.

use crate::config::PlannerConfig;
use crate::models::{Class, Combination, ScheduleOption};

use super::validator::first_rejection;
use super::window::AcceptedWindow;

/// Odometer over the Cartesian product of class option lists.
///
/// Yields one option per class, in class order. Zero classes yield a
/// single empty tuple; a class with no options yields nothing.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'a> {
    classes: &'a [Class],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> CartesianProduct<'a> {
    /// Starts at the first option of every class.
    pub fn new(classes: &'a [Class]) -> Self {
        Self {
            classes,
            indices: vec![0; classes.len()],
            done: classes.iter().any(|c| c.options.is_empty()),
        }
    }

    /// Advances the odometer; marks exhaustion after the last tuple.
    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.classes[pos].options.len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.done = true;
    }
}

impl<'a> Iterator for CartesianProduct<'a> {
    type Item = Vec<&'a ScheduleOption>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let tuple = self
            .classes
            .iter()
            .zip(&self.indices)
            .map(|(class, &i)| &class.options[i])
            .collect();
        self.advance();
        Some(tuple)
    }
}

/// Result of an enumeration run.
#[derive(Debug, Clone)]
pub struct Enumeration<'a> {
    /// Valid combinations in product order.
    pub combinations: Vec<Combination<'a>>,
    /// Candidates generated and validated.
    pub examined: usize,
}

impl<'a> Enumeration<'a> {
    /// Whether no valid timetable exists.
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

/// Combination engine configured with a window and exam policy.
///
/// Stateless between calls; the catalog is only read.
///
/// # Example
///
/// ```
/// use u_timetable::config::PlannerConfig;
/// use u_timetable::models::{Catalog, Class, ScheduleOption};
/// use u_timetable::scheduler::Planner;
///
/// let option = |days: &str, time: &str| {
///     ScheduleOption::new(1, days.parse().unwrap(), time.parse().unwrap())
/// };
/// let catalog = Catalog::new()
///     .with_class(Class::new("Algebra").with_option(option("Mon-Wed", "09:00-10:30")))
///     .with_class(
///         Class::new("Physics")
///             .with_option(option("Mon", "10:00-11:00"))
///             .with_option(option("Tue", "10:00-11:00")),
///     );
///
/// let config = PlannerConfig::new().with_accepted_window("08:00-17:00".parse().unwrap());
/// let result = Planner::new(config).enumerate(catalog.classes());
/// assert_eq!(result.examined, 2);
/// assert_eq!(result.combinations.len(), 1); // Physics on Monday overlaps Algebra
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Enumerates every valid combination of one option per class.
    pub fn enumerate<'a>(&self, classes: &'a [Class]) -> Enumeration<'a> {
        let accepted = &self.config.accepted_window;
        let policy = self.config.exam_policy;
        let candidates = classes
            .iter()
            .try_fold(1usize, |acc, c| acc.checked_mul(c.option_count()));
        tracing::debug!(
            classes = classes.len(),
            candidates = ?candidates,
            accepted_window = %accepted,
            exam_policy = ?policy,
            "enumerating combinations"
        );

        let mut combinations = Vec::new();
        let mut examined = 0usize;
        for candidate in CartesianProduct::new(classes) {
            examined += 1;
            match first_rejection(&candidate, accepted, policy) {
                None => combinations.push(Combination::new(candidate)),
                Some(reason) => tracing::trace!(candidate = examined, ?reason, "rejected"),
            }
        }

        tracing::debug!(
            examined,
            accepted = combinations.len(),
            "enumeration finished"
        );
        Enumeration {
            combinations,
            examined,
        }
    }
}

/// Enumerates every valid combination under the default exam policy.
///
/// Returns an empty list when no timetable is possible, including when
/// any class has no options.
pub fn enumerate_valid_combinations<'a>(
    classes: &'a [Class],
    accepted: &AcceptedWindow,
) -> Vec<Combination<'a>> {
    let config = PlannerConfig::new().with_accepted_window(*accepted);
    Planner::new(config).enumerate(classes).combinations
}
