//! Subject and grade analytics
//!
//! Derived views over a flattened course list: grade-frequency
//! distribution, best/worst course, per-subject averages, and per-semester
//! trend series. All pure functions; each returns a new aggregate built in
//! one pass rather than threading mutable accumulators between callers.

use crate::core::gpa;
use crate::core::models::{Course, Grade, GradingScale, Semester};

/// Subjects with fewer contributing courses than this are suppressed from
/// the subject view; the statistic is too noisy below the threshold.
pub const SUBJECT_MIN_COURSES: usize = 2;

/// Occurrence count for one grade value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeCount {
    /// The grade
    pub grade: Grade,
    /// How many courses received it
    pub count: usize,
}

/// Credit-weighted average for one subject prefix
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectPerformance {
    /// Subject key (uppercased leading alphabetic run, e.g. "MTH")
    pub subject: String,
    /// Credit-weighted average grade points
    pub average: f64,
    /// Number of contributing courses
    pub count: usize,
}

/// One point in the per-semester trend series
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterTrend {
    /// Semester display name
    pub label: String,
    /// That semester's own weighted-mean GPA (`0.0` for zero credits)
    pub gpa: f64,
    /// Total credit hours in the semester
    pub credits: f64,
}

/// Count occurrences per grade value, ordered by descending count.
///
/// Ties preserve first-encountered order.
#[must_use]
pub fn grade_distribution(courses: &[Course]) -> Vec<GradeCount> {
    let mut counts: Vec<GradeCount> = Vec::new();

    for course in courses {
        match counts.iter_mut().find(|entry| entry.grade == course.grade) {
            Some(entry) => entry.count += 1,
            None => counts.push(GradeCount {
                grade: course.grade,
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Courses sorted by point value descending (stable for equal points)
fn sorted_by_points<'a>(courses: &'a [Course], scale: GradingScale) -> Vec<&'a Course> {
    let mut sorted: Vec<&Course> = courses.iter().collect();
    sorted.sort_by(|a, b| {
        scale
            .points(b.grade)
            .total_cmp(&scale.points(a.grade))
    });
    sorted
}

/// The highest-scoring course, or `None` for an empty list
#[must_use]
pub fn best_course<'a>(courses: &'a [Course], scale: GradingScale) -> Option<&'a Course> {
    sorted_by_points(courses, scale).first().copied()
}

/// The lowest-scoring course, or `None` for an empty list
#[must_use]
pub fn worst_course<'a>(courses: &'a [Course], scale: GradingScale) -> Option<&'a Course> {
    sorted_by_points(courses, scale).last().copied()
}

/// Group courses by subject prefix and compute credit-weighted averages.
///
/// Courses whose name has no leading alphabetic run are excluded entirely.
/// Subjects with fewer than [`SUBJECT_MIN_COURSES`] contributing courses
/// are suppressed. Results are ordered by descending average (ties stable
/// in first-encountered subject order).
#[must_use]
pub fn subject_performance(courses: &[Course], scale: GradingScale) -> Vec<SubjectPerformance> {
    struct Bucket {
        subject: String,
        total_points: f64,
        total_credits: f64,
        count: usize,
    }

    let mut buckets: Vec<Bucket> = Vec::new();

    for course in courses {
        let Some(subject) = course.subject() else {
            continue;
        };

        let points = scale.points(course.grade);
        match buckets.iter_mut().find(|b| b.subject == subject) {
            Some(bucket) => {
                bucket.total_points += points * course.credit_hours;
                bucket.total_credits += course.credit_hours;
                bucket.count += 1;
            }
            None => buckets.push(Bucket {
                subject,
                total_points: points * course.credit_hours,
                total_credits: course.credit_hours,
                count: 1,
            }),
        }
    }

    let mut performances: Vec<SubjectPerformance> = buckets
        .into_iter()
        .filter(|b| b.count >= SUBJECT_MIN_COURSES)
        .map(|b| SubjectPerformance {
            subject: b.subject,
            average: if b.total_credits == 0.0 {
                0.0
            } else {
                b.total_points / b.total_credits
            },
            count: b.count,
        })
        .collect();

    performances.sort_by(|a, b| b.average.total_cmp(&a.average));
    performances
}

/// Per-semester `(label, gpa, credits)` series in the supplied order.
///
/// The engine does not reorder semesters; a zero-credit semester yields a
/// `0.0` GPA point rather than a gap.
#[must_use]
pub fn semester_trends(semesters: &[Semester], scale: GradingScale) -> Vec<SemesterTrend> {
    semesters
        .iter()
        .map(|semester| SemesterTrend {
            label: semester.name.clone(),
            gpa: gpa::semester_gpa(&semester.courses, scale),
            credits: semester.total_credits(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: GradingScale = GradingScale::FivePoint;

    fn course(name: &str, credits: f64, grade: Grade) -> Course {
        Course::hypothetical(name.to_string(), credits, grade)
    }

    #[test]
    fn distribution_orders_by_count_with_stable_ties() {
        // Grades A, A, B, F: B before F because B was encountered first
        let courses = vec![
            course("MTH101", 3.0, Grade::A),
            course("MTH102", 3.0, Grade::A),
            course("PHY101", 3.0, Grade::B),
            course("CHM101", 3.0, Grade::F),
        ];

        let distribution = grade_distribution(&courses);
        let pairs: Vec<(Grade, usize)> = distribution.iter().map(|d| (d.grade, d.count)).collect();
        assert_eq!(
            pairs,
            vec![(Grade::A, 2), (Grade::B, 1), (Grade::F, 1)]
        );
    }

    #[test]
    fn distribution_of_empty_list_is_empty() {
        assert!(grade_distribution(&[]).is_empty());
    }

    #[test]
    fn best_and_worst_by_point_value() {
        let courses = vec![
            course("PHY101", 3.0, Grade::C),
            course("MTH101", 3.0, Grade::A),
            course("CHM101", 3.0, Grade::F),
        ];

        assert_eq!(best_course(&courses, SCALE).map(|c| c.name.as_str()), Some("MTH101"));
        assert_eq!(worst_course(&courses, SCALE).map(|c| c.name.as_str()), Some("CHM101"));
    }

    #[test]
    fn best_and_worst_absent_for_empty_list() {
        assert!(best_course(&[], SCALE).is_none());
        assert!(worst_course(&[], SCALE).is_none());
    }

    #[test]
    fn single_course_is_both_best_and_worst() {
        let courses = vec![course("MTH101", 3.0, Grade::B)];
        assert_eq!(best_course(&courses, SCALE), worst_course(&courses, SCALE));
    }

    #[test]
    fn subjects_below_threshold_are_suppressed() {
        // MTH has 2 courses, PHY only 1: only MTH appears
        let courses = vec![
            course("MTH101", 3.0, Grade::A),
            course("MTH102", 3.0, Grade::B),
            course("PHY101", 3.0, Grade::A),
        ];

        let subjects = subject_performance(&courses, SCALE);
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].subject, "MTH");
        assert_eq!(subjects[0].count, 2);
    }

    #[test]
    fn subject_average_is_credit_weighted() {
        // (5.0*3 + 4.0*1) / 4 = 4.75
        let courses = vec![
            course("MTH101", 3.0, Grade::A),
            course("MTH102", 1.0, Grade::B),
        ];

        let subjects = subject_performance(&courses, SCALE);
        assert!((subjects[0].average - 4.75).abs() < 1e-9);
    }

    #[test]
    fn subject_grouping_is_case_insensitive() {
        let courses = vec![
            course("mth101", 3.0, Grade::A),
            course("MTH102", 3.0, Grade::A),
        ];

        let subjects = subject_performance(&courses, SCALE);
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].subject, "MTH");
    }

    #[test]
    fn courses_without_alphabetic_prefix_are_excluded() {
        let courses = vec![
            course("101", 3.0, Grade::A),
            course("102", 3.0, Grade::A),
            course("MTH101", 3.0, Grade::B),
            course("MTH102", 3.0, Grade::B),
        ];

        let subjects = subject_performance(&courses, SCALE);
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].subject, "MTH");
    }

    #[test]
    fn subjects_ordered_by_descending_average() {
        let courses = vec![
            course("PHY101", 3.0, Grade::C),
            course("PHY102", 3.0, Grade::C),
            course("MTH101", 3.0, Grade::A),
            course("MTH102", 3.0, Grade::A),
        ];

        let subjects = subject_performance(&courses, SCALE);
        assert_eq!(subjects[0].subject, "MTH");
        assert_eq!(subjects[1].subject, "PHY");
    }

    #[test]
    fn trends_preserve_input_order() {
        let mut newest = Semester::new("s2".to_string(), "Spring 2026".to_string());
        newest.courses.push(course("MTH201", 3.0, Grade::B));
        let mut oldest = Semester::new("s1".to_string(), "Fall 2025".to_string());
        oldest.courses.push(course("MTH101", 3.0, Grade::A));

        let trends = semester_trends(&[newest, oldest], SCALE);
        assert_eq!(trends[0].label, "Spring 2026");
        assert_eq!(trends[1].label, "Fall 2025");
        assert!((trends[0].gpa - 4.0).abs() < 1e-9);
        assert!((trends[1].gpa - 5.0).abs() < 1e-9);
    }

    #[test]
    fn zero_credit_semester_yields_zero_point_not_gap() {
        let empty = Semester::new("s1".to_string(), "Gap Term".to_string());
        let trends = semester_trends(&[empty], SCALE);

        assert_eq!(trends.len(), 1);
        assert!(trends[0].gpa.abs() < f64::EPSILON);
        assert!(trends[0].credits.abs() < f64::EPSILON);
    }
}
