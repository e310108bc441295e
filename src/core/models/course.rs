//! Course model

use crate::core::models::Grade;
use serde::{Deserialize, Serialize};

/// Represents one completed or hypothetical academic course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Opaque identifier, stable only while persisted. Hypothetical
    /// courses used in what-if projections carry an empty id.
    #[serde(default)]
    pub id: String,

    /// Free-text name, conventionally prefixed with a subject code
    /// (e.g., "MTH101")
    pub name: String,

    /// Credit hours (can be fractional). Must be positive; the math in
    /// `core::gpa` assumes callers have guarded this.
    pub credit_hours: f64,

    /// Letter grade received
    pub grade: Grade,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Opaque identifier
    /// * `name` - Course name (e.g., "MTH101")
    /// * `credit_hours` - Credit hours
    /// * `grade` - Letter grade
    #[must_use]
    pub const fn new(id: String, name: String, credit_hours: f64, grade: Grade) -> Self {
        Self {
            id,
            name,
            credit_hours,
            grade,
        }
    }

    /// Create a hypothetical course for what-if projections (no durable id)
    #[must_use]
    pub const fn hypothetical(name: String, credit_hours: f64, grade: Grade) -> Self {
        Self::new(String::new(), name, credit_hours, grade)
    }

    /// The subject code: the leading alphabetic run of the name,
    /// normalized to uppercase (e.g., "MTH" from "MTH101" or "mth 101").
    ///
    /// Returns `None` when the name has no leading alphabetic run; such
    /// courses are skipped by subject grouping rather than binned under a
    /// fallback key.
    #[must_use]
    pub fn subject(&self) -> Option<String> {
        let prefix: String = self
            .name
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .collect();

        if prefix.is_empty() {
            None
        } else {
            Some(prefix.to_ascii_uppercase())
        }
    }
}
