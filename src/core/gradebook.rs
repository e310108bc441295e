//! Gradebook persistence
//!
//! The gradebook is the on-disk record of semesters (with nested courses)
//! and the CGPA goal, stored as TOML. It is the caller-facing boundary the
//! pure computation core is fed from: create/update/delete operations are
//! keyed by opaque ids, input validation (positive credits, goal range)
//! happens here, and every mutation refreshes the affected semester's
//! cached display GPA. The computation functions themselves only ever see
//! immutable snapshots of `semesters`.

use crate::core::gpa;
use crate::core::models::{Course, Goal, Grade, GradingScale, Semester};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// All recorded semesters plus the optional CGPA goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeBook {
    /// Semesters in recorded order (newest first by convention; the
    /// analytics engine preserves whatever order is stored here)
    #[serde(default)]
    pub semesters: Vec<Semester>,

    /// Target CGPA for the whole history, if one has been set
    #[serde(default)]
    pub goal: Option<Goal>,
}

impl GradeBook {
    /// Create an empty gradebook
    #[must_use]
    pub const fn new() -> Self {
        Self {
            semesters: Vec::new(),
            goal: None,
        }
    }

    /// Load a gradebook from a TOML file.
    ///
    /// A missing file is a first run, not an error: an empty gradebook is
    /// returned.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let gradebook: Self = toml::from_str(&content)?;
        Ok(gradebook)
    }

    /// Save the gradebook to a TOML file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Add a semester with a freshly assigned id
    ///
    /// # Returns
    /// The id of the new semester.
    pub fn add_semester(&mut self, name: String) -> String {
        let id = self.next_id("s");
        self.semesters.push(Semester::new(id.clone(), name));
        id
    }

    /// Rename a semester
    ///
    /// # Returns
    /// `true` if a semester with that id existed.
    pub fn rename_semester(&mut self, semester_id: &str, name: String) -> bool {
        match self.semester_mut(semester_id) {
            Some(semester) => {
                semester.name = name;
                true
            }
            None => false,
        }
    }

    /// Remove a semester and all its courses
    ///
    /// # Returns
    /// `true` if a semester with that id existed.
    pub fn remove_semester(&mut self, semester_id: &str) -> bool {
        let before = self.semesters.len();
        self.semesters.retain(|s| s.id != semester_id);
        self.semesters.len() != before
    }

    /// Look up a semester by id
    #[must_use]
    pub fn semester(&self, semester_id: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == semester_id)
    }

    /// Mutable semester lookup by id
    pub fn semester_mut(&mut self, semester_id: &str) -> Option<&mut Semester> {
        self.semesters.iter_mut().find(|s| s.id == semester_id)
    }

    /// Add a course to a semester, refreshing its cached GPA
    ///
    /// # Errors
    /// Returns an error if the semester does not exist or the credit
    /// hours are not a positive finite number.
    pub fn add_course(
        &mut self,
        semester_id: &str,
        name: String,
        credit_hours: f64,
        grade: Grade,
        scale: GradingScale,
    ) -> Result<String, String> {
        if !credit_hours.is_finite() || credit_hours <= 0.0 {
            return Err(format!(
                "Credit hours must be a positive number (got {credit_hours})"
            ));
        }

        let id = self.next_id("c");
        let semester = self
            .semester_mut(semester_id)
            .ok_or_else(|| format!("No semester with id '{semester_id}'"))?;

        semester.add_course(Course::new(id.clone(), name, credit_hours, grade), scale);
        Ok(id)
    }

    /// Remove a course from a semester, refreshing its cached GPA
    ///
    /// # Returns
    /// `true` if the semester and course both existed.
    pub fn remove_course(
        &mut self,
        semester_id: &str,
        course_id: &str,
        scale: GradingScale,
    ) -> bool {
        self.semester_mut(semester_id)
            .is_some_and(|semester| semester.remove_course(course_id, scale))
    }

    /// Set the CGPA goal, validating it against the active scale
    ///
    /// # Errors
    /// Returns an error if the target is outside `[0, scale max]`.
    pub fn set_goal(&mut self, target_cgpa: f64, scale: GradingScale) -> Result<(), String> {
        self.goal = Some(Goal::new(target_cgpa, scale)?);
        Ok(())
    }

    /// Clear the CGPA goal
    ///
    /// # Returns
    /// `true` if a goal had been set.
    pub fn clear_goal(&mut self) -> bool {
        self.goal.take().is_some()
    }

    /// Flatten all semesters' courses into one snapshot, in stored order
    #[must_use]
    pub fn all_courses(&self) -> Vec<Course> {
        self.semesters
            .iter()
            .flat_map(|s| s.courses.iter().cloned())
            .collect()
    }

    /// Cumulative GPA over every recorded course
    #[must_use]
    pub fn cumulative_gpa(&self, scale: GradingScale) -> f64 {
        gpa::cumulative_gpa(&self.semesters, scale)
    }

    /// Total credit hours over every recorded course
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        gpa::total_credits(&self.semesters)
    }

    /// Total number of recorded courses
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(Semester::course_count).sum()
    }

    /// Next unused id for the given prefix ("s" for semesters, "c" for
    /// courses). Ids are opaque to everything but this allocator.
    fn next_id(&self, prefix: &str) -> String {
        let max_seen = self
            .semesters
            .iter()
            .map(|s| s.id.as_str())
            .chain(
                self.semesters
                    .iter()
                    .flat_map(|s| s.courses.iter().map(|c| c.id.as_str())),
            )
            .filter_map(|id| id.strip_prefix(prefix))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        format!("{prefix}{}", max_seen + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: GradingScale = GradingScale::FivePoint;

    #[test]
    fn test_add_semester_assigns_unique_ids() {
        let mut book = GradeBook::new();
        let first = book.add_semester("Fall 2025".to_string());
        let second = book.add_semester("Spring 2026".to_string());

        assert_ne!(first, second);
        assert_eq!(book.semesters.len(), 2);
    }

    #[test]
    fn test_add_course_refreshes_semester_cache() {
        let mut book = GradeBook::new();
        let sid = book.add_semester("Fall 2025".to_string());

        book.add_course(&sid, "MTH101".to_string(), 3.0, Grade::B, SCALE)
            .expect("add course");

        let semester = book.semester(&sid).expect("semester");
        assert!((semester.gpa - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_course_rejects_non_positive_credits() {
        let mut book = GradeBook::new();
        let sid = book.add_semester("Fall 2025".to_string());

        assert!(book
            .add_course(&sid, "MTH101".to_string(), 0.0, Grade::A, SCALE)
            .is_err());
        assert!(book
            .add_course(&sid, "MTH101".to_string(), -2.0, Grade::A, SCALE)
            .is_err());
        assert!(book
            .add_course(&sid, "MTH101".to_string(), f64::NAN, Grade::A, SCALE)
            .is_err());
    }

    #[test]
    fn test_add_course_to_missing_semester_fails() {
        let mut book = GradeBook::new();
        assert!(book
            .add_course("s99", "MTH101".to_string(), 3.0, Grade::A, SCALE)
            .is_err());
    }

    #[test]
    fn test_remove_course() {
        let mut book = GradeBook::new();
        let sid = book.add_semester("Fall 2025".to_string());
        let cid = book
            .add_course(&sid, "MTH101".to_string(), 3.0, Grade::A, SCALE)
            .expect("add course");

        assert!(book.remove_course(&sid, &cid, SCALE));
        assert!(!book.remove_course(&sid, &cid, SCALE));
        assert_eq!(book.course_count(), 0);
    }

    #[test]
    fn test_remove_semester() {
        let mut book = GradeBook::new();
        let sid = book.add_semester("Fall 2025".to_string());

        assert!(book.remove_semester(&sid));
        assert!(!book.remove_semester(&sid));
    }

    #[test]
    fn test_course_ids_stay_unique_after_removal() {
        let mut book = GradeBook::new();
        let sid = book.add_semester("Fall 2025".to_string());
        let first = book
            .add_course(&sid, "MTH101".to_string(), 3.0, Grade::A, SCALE)
            .expect("add course");
        let second = book
            .add_course(&sid, "MTH102".to_string(), 3.0, Grade::B, SCALE)
            .expect("add course");
        book.remove_course(&sid, &first, SCALE);
        let third = book
            .add_course(&sid, "MTH103".to_string(), 3.0, Grade::C, SCALE)
            .expect("add course");

        assert_ne!(third, second);
    }

    #[test]
    fn test_goal_round_trip() {
        let mut book = GradeBook::new();
        book.set_goal(4.5, SCALE).expect("valid goal");
        assert!((book.goal.expect("goal").target_cgpa - 4.5).abs() < f64::EPSILON);

        assert!(book.clear_goal());
        assert!(!book.clear_goal());
    }

    #[test]
    fn test_goal_validation_uses_active_scale() {
        let mut book = GradeBook::new();
        assert!(book.set_goal(4.5, GradingScale::FourPoint).is_err());
        assert!(book.set_goal(4.5, GradingScale::FivePoint).is_ok());
    }

    #[test]
    fn test_cumulative_gpa_over_all_semesters() {
        let mut book = GradeBook::new();
        let fall = book.add_semester("Fall 2025".to_string());
        let spring = book.add_semester("Spring 2026".to_string());
        book.add_course(&fall, "MTH101".to_string(), 4.0, Grade::A, SCALE)
            .expect("add");
        book.add_course(&spring, "PHY101".to_string(), 1.0, Grade::F, SCALE)
            .expect("add");

        // (5.0*4 + 0.0*1) / 5
        assert!((book.cumulative_gpa(SCALE) - 4.0).abs() < 1e-9);
        assert!((book.total_credits() - 5.0).abs() < 1e-9);
    }
}
