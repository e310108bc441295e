//! Credit-weighted GPA aggregation
//!
//! Every function here is a pure computation over an immutable snapshot:
//! no hidden state, no side effects, safe to call repeatedly or memoize.
//! Values are returned at full precision; display rounding belongs to the
//! presentation layer.

use crate::core::models::{Course, GradingScale, Semester};

/// Credit-weighted mean grade points over an iterator of courses.
///
/// Returns `0.0` when the credit-hour sum is zero (empty input, or every
/// course carrying zero credits), never NaN or infinity.
fn weighted_mean<'a>(courses: impl Iterator<Item = &'a Course>, scale: GradingScale) -> f64 {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;

    for course in courses {
        total_points += scale.points(course.grade) * course.credit_hours;
        total_credits += course.credit_hours;
    }

    if total_credits == 0.0 {
        0.0
    } else {
        total_points / total_credits
    }
}

/// GPA for one semester's course list.
///
/// `sum(points(grade) * credits) / sum(credits)`, or `0.0` for a zero
/// credit total.
#[must_use]
pub fn semester_gpa(courses: &[Course], scale: GradingScale) -> f64 {
    weighted_mean(courses.iter(), scale)
}

/// Cumulative GPA over all semesters.
///
/// Flattens every semester's course list into one logical sequence and
/// applies the same weighted mean. This is deliberately NOT the mean of
/// per-semester GPA values, which would misweight semesters with different
/// credit loads. Cached per-semester GPA fields are never consulted.
#[must_use]
pub fn cumulative_gpa(semesters: &[Semester], scale: GradingScale) -> f64 {
    weighted_mean(semesters.iter().flat_map(|s| s.courses.iter()), scale)
}

/// Total credit hours across all semesters
#[must_use]
pub fn total_credits(semesters: &[Semester]) -> f64 {
    semesters.iter().map(Semester::total_credits).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    const SCALE: GradingScale = GradingScale::FivePoint;

    fn course(name: &str, credits: f64, grade: Grade) -> Course {
        Course::hypothetical(name.to_string(), credits, grade)
    }

    fn semester(name: &str, courses: Vec<Course>) -> Semester {
        let mut s = Semester::new(String::new(), name.to_string());
        s.courses = courses;
        s
    }

    #[test]
    fn empty_course_list_yields_zero() {
        assert!(semester_gpa(&[], SCALE).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_credit_courses_yield_zero_not_nan() {
        let courses = vec![course("MTH101", 0.0, Grade::A)];
        let gpa = semester_gpa(&courses, SCALE);
        assert!(gpa.abs() < f64::EPSILON);
        assert!(gpa.is_finite());
    }

    #[test]
    fn single_course_gpa_equals_its_points() {
        let courses = vec![course("MTH101", 3.0, Grade::BPlus)];
        assert!((semester_gpa(&courses, SCALE) - 4.3).abs() < 1e-9);
    }

    #[test]
    fn gpa_weights_by_credit_hours() {
        // 5.0 * 4 + 0.0 * 1 = 20 over 5 credits
        let courses = vec![course("MTH101", 4.0, Grade::A), course("PHY101", 1.0, Grade::F)];
        assert!((semester_gpa(&courses, SCALE) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn gpa_stays_within_scale_bounds() {
        let courses = vec![
            course("MTH101", 3.0, Grade::A),
            course("PHY101", 2.0, Grade::CMinus),
            course("CHM101", 1.5, Grade::F),
        ];
        for scale in [GradingScale::FivePoint, GradingScale::FourPoint] {
            let gpa = semester_gpa(&courses, scale);
            assert!(gpa >= 0.0);
            assert!(gpa <= scale.max_cgpa());
        }
    }

    #[test]
    fn cumulative_equals_flattened_semester_gpa() {
        let s1 = semester(
            "Fall",
            vec![course("MTH101", 4.0, Grade::A), course("PHY101", 3.0, Grade::B)],
        );
        let s2 = semester("Spring", vec![course("CHM101", 1.0, Grade::C)]);

        let flattened: Vec<Course> = s1.courses.iter().chain(s2.courses.iter()).cloned().collect();

        let cgpa = cumulative_gpa(&[s1, s2], SCALE);
        let flat_gpa = semester_gpa(&flattened, SCALE);
        assert!((cgpa - flat_gpa).abs() < 1e-12);
    }

    #[test]
    fn cumulative_is_not_mean_of_semester_gpas() {
        // Heavy A semester and light F semester: the flat weighted mean
        // must sit far above the arithmetic mean of the two GPAs.
        let s1 = semester("Fall", vec![course("MTH101", 9.0, Grade::A)]);
        let s2 = semester("Spring", vec![course("PHY101", 1.0, Grade::F)]);

        let per_semester_mean = (semester_gpa(&s1.courses, SCALE)
            + semester_gpa(&s2.courses, SCALE))
            / 2.0;
        let cgpa = cumulative_gpa(&[s1, s2], SCALE);

        assert!((cgpa - 4.5).abs() < 1e-9);
        assert!((per_semester_mean - 2.5).abs() < 1e-9);
        assert!((cgpa - per_semester_mean).abs() > 1.0);
    }

    #[test]
    fn cumulative_ignores_stale_gpa_cache() {
        let mut s1 = semester("Fall", vec![course("MTH101", 3.0, Grade::B)]);
        s1.gpa = 9.99; // poisoned cache must not leak into the math
        assert!((cumulative_gpa(&[s1], SCALE) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let semesters = vec![semester(
            "Fall",
            vec![course("MTH101", 3.0, Grade::A), course("PHY101", 2.0, Grade::D)],
        )];
        let first = cumulative_gpa(&semesters, SCALE);
        let second = cumulative_gpa(&semesters, SCALE);
        assert!((first - second).abs() < f64::EPSILON);
    }

    #[test]
    fn total_credits_sums_all_semesters() {
        let s1 = semester("Fall", vec![course("MTH101", 3.0, Grade::A)]);
        let s2 = semester("Spring", vec![course("PHY101", 2.5, Grade::B)]);
        assert!((total_credits(&[s1, s2]) - 5.5).abs() < 1e-9);
    }
}
