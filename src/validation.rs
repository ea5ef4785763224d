//! Catalog integrity checks.
//!
//! The engine assumes a well-formed catalog. Ingestion code can call
//! [`validate_catalog`] before enumeration to detect:
//! - Duplicate class names
//! - Options whose back-reference doesn't point at their owning class
//! - Options that meet on no day at all
//! - Meeting or exam time ranges whose start is after their end
//!
//! A class with no options is *not* an error: it simply means no
//! timetable is possible, and enumeration returns an empty list.

use crate::models::{Class, ClassId, TimeRange};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two classes share the same name.
    DuplicateClassName,
    /// An option refers to a class other than the one that owns it.
    MismatchedClassReference,
    /// An option is active on no weekday.
    NoActiveDays,
    /// A meeting or exam range starts after it ends.
    InvertedTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog (classes in catalog order).
///
/// Class `i` is expected to carry `ClassId(i)`, as assigned by
/// [`crate::models::Catalog`].
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(classes: &[Class]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (position, class) in classes.iter().enumerate() {
        if !names.insert(class.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateClassName,
                format!("Duplicate class name: {}", class.name),
            ));
        }

        let expected = ClassId(position);
        if class.id != expected {
            errors.push(ValidationError::new(
                ValidationErrorKind::MismatchedClassReference,
                format!(
                    "Class '{}' at position {} carries id {}",
                    class.name, position, class.id
                ),
            ));
        }

        if let Some(exam) = &class.exam {
            check_range(&mut errors, &exam.time, || {
                format!("default exam of class '{}'", class.name)
            });
        }

        for option in &class.options {
            let label = || format!("group {} of class '{}'", option.group, class.name);

            if option.class != expected {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MismatchedClassReference,
                    format!("{} refers to class {}", label(), option.class),
                ));
            }
            if option.days.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NoActiveDays,
                    format!("{} meets on no day", label()),
                ));
            }
            check_range(&mut errors, &option.time, label);
            if let Some(exam) = &option.exam {
                check_range(&mut errors, &exam.time, || format!("exam of {}", label()));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_range(errors: &mut Vec<ValidationError>, range: &TimeRange, what: impl Fn() -> String) {
    if range.is_inverted() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedTimeRange,
            format!("Time range {} of {} starts after it ends", range, what()),
        ));
    }
}
