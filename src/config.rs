//! Planner configuration.
//!
//! Loaded from JSON; every field is optional.
//!
//! ```json
//! {
//!   "accepted_window": "09:00-16:30",
//!   "exam_policy": "same_id_overlap"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::models::{ExamConflictPolicy, TimeRange};

/// Settings that govern combination validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Daily time-of-day span every option must fit in.
    pub accepted_window: TimeRange,
    /// How same-identifier exams are compared.
    pub exam_policy: ExamConflictPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            accepted_window: TimeRange::whole_day(),
            exam_policy: ExamConflictPolicy::default(),
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration (whole day, strict exam policy).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accepted window.
    pub fn with_accepted_window(mut self, window: TimeRange) -> Self {
        self.accepted_window = window;
        self
    }

    /// Sets the exam conflict policy.
    pub fn with_exam_policy(mut self, policy: ExamConflictPolicy) -> Self {
        self.exam_policy = policy;
        self
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        tracing::debug!(
            accepted_window = %config.accepted_window,
            exam_policy = ?config.exam_policy,
            "loaded planner configuration"
        );
        Ok(config)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading planner configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
