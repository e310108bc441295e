//! Semester model

use crate::core::gpa;
use crate::core::models::{Course, GradingScale};
use serde::{Deserialize, Serialize};

/// An ordered collection of courses with a display name.
///
/// The `gpa` field is a display cache refreshed whenever membership
/// changes. The aggregation engine never reads it; all GPA math recomputes
/// from the live course list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Opaque identifier, stable only while persisted
    #[serde(default)]
    pub id: String,

    /// Display name (e.g., "Fall 2025")
    pub name: String,

    /// Courses in the order they were recorded
    #[serde(default)]
    pub courses: Vec<Course>,

    /// Cached GPA for display. Never an input to further math.
    #[serde(default)]
    pub gpa: f64,
}

impl Semester {
    /// Create a new, empty semester
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            courses: Vec::new(),
            gpa: 0.0,
        }
    }

    /// Add a course and refresh the cached GPA
    pub fn add_course(&mut self, course: Course, scale: GradingScale) {
        self.courses.push(course);
        self.refresh_gpa(scale);
    }

    /// Remove a course by id and refresh the cached GPA
    ///
    /// # Returns
    /// `true` if a course was removed, `false` if no course had that id
    pub fn remove_course(&mut self, course_id: &str, scale: GradingScale) -> bool {
        if let Some(pos) = self.courses.iter().position(|c| c.id == course_id) {
            self.courses.remove(pos);
            self.refresh_gpa(scale);
            true
        } else {
            false
        }
    }

    /// Look up a course by id
    #[must_use]
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Mutable course lookup by id
    pub fn course_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == course_id)
    }

    /// Recompute the cached GPA from the live course list
    pub fn refresh_gpa(&mut self, scale: GradingScale) {
        self.gpa = gpa::semester_gpa(&self.courses, scale);
    }

    /// Total credit hours across this semester's courses
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|c| c.credit_hours).sum()
    }

    /// Number of courses in this semester
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }
}
