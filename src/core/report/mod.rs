//! Report generation module
//!
//! Generates transcript reports in Markdown and HTML with GPA metrics,
//! goal progress, per-semester tables, subject performance, and the grade
//! distribution. All rounding and "goal unreachable" classification lives
//! here, on the presentation side of the core.

pub mod formats;

use crate::core::analytics::{self, GradeCount, SemesterTrend, SubjectPerformance};
use crate::core::gradebook::GradeBook;
use crate::core::models::{Course, GradingScale};
use crate::core::projection::{self, GoalProgress};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a report template needs, computed once from a
/// gradebook snapshot.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The gradebook being reported
    pub gradebook: &'a GradeBook,
    /// Active grading scale
    pub scale: GradingScale,
    /// Flattened course snapshot, in stored order
    pub courses: Vec<Course>,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context from a gradebook snapshot
    #[must_use]
    pub fn new(gradebook: &'a GradeBook, scale: GradingScale) -> Self {
        Self {
            gradebook,
            scale,
            courses: gradebook.all_courses(),
        }
    }

    /// Cumulative GPA across the whole gradebook
    #[must_use]
    pub fn cgpa(&self) -> f64 {
        self.gradebook.cumulative_gpa(self.scale)
    }

    /// Total credit hours
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.gradebook.total_credits()
    }

    /// Total course count
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.gradebook.course_count()
    }

    /// Semester count
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.gradebook.semesters.len()
    }

    /// Progress toward the goal, if one is set
    #[must_use]
    pub fn goal_progress(&self) -> Option<(f64, GoalProgress)> {
        self.gradebook.goal.map(|goal| {
            (
                goal.target_cgpa,
                projection::goal_progress(self.cgpa(), goal.target_cgpa),
            )
        })
    }

    /// Per-semester trend series, in stored order
    #[must_use]
    pub fn trends(&self) -> Vec<SemesterTrend> {
        analytics::semester_trends(&self.gradebook.semesters, self.scale)
    }

    /// Subject performance view
    #[must_use]
    pub fn subjects(&self) -> Vec<SubjectPerformance> {
        analytics::subject_performance(&self.courses, self.scale)
    }

    /// Grade distribution view
    #[must_use]
    pub fn distribution(&self) -> Vec<GradeCount> {
        analytics::grade_distribution(&self.courses)
    }

    /// Highest-scoring course, if any
    #[must_use]
    pub fn best_course(&self) -> Option<&Course> {
        analytics::best_course(&self.courses, self.scale)
    }

    /// Lowest-scoring course, if any
    #[must_use]
    pub fn worst_course(&self) -> Option<&Course> {
        analytics::worst_course(&self.courses, self.scale)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
