//! End-to-end tests for the computation engine: aggregation, analytics,
//! and goal projection over a populated gradebook.

use gradetrack::core::analytics;
use gradetrack::core::gradebook::GradeBook;
use gradetrack::core::models::{Course, Grade, GradingScale};
use gradetrack::core::projection;

const SCALE: GradingScale = GradingScale::FivePoint;

fn populated_book() -> GradeBook {
    let mut book = GradeBook::new();
    let fall = book.add_semester("Fall 2025".to_string());
    let spring = book.add_semester("Spring 2026".to_string());

    book.add_course(&fall, "MTH101".to_string(), 3.0, Grade::A, SCALE)
        .expect("add");
    book.add_course(&fall, "MTH102".to_string(), 3.0, Grade::B, SCALE)
        .expect("add");
    book.add_course(&fall, "PHY101".to_string(), 2.0, Grade::CPlus, SCALE)
        .expect("add");
    book.add_course(&spring, "MTH201".to_string(), 3.0, Grade::AMinus, SCALE)
        .expect("add");
    book.add_course(&spring, "PHY201".to_string(), 2.0, Grade::BMinus, SCALE)
        .expect("add");
    book
}

#[test]
fn test_cumulative_gpa_is_flattened_weighted_mean() {
    let book = populated_book();

    // (5.0*3 + 4.0*3 + 3.3*2 + 4.7*3 + 3.7*2) / 13
    let expected = (5.0 * 3.0 + 4.0 * 3.0 + 3.3 * 2.0 + 4.7 * 3.0 + 3.7 * 2.0) / 13.0;
    assert!((book.cumulative_gpa(SCALE) - expected).abs() < 1e-9);
    assert!((book.total_credits() - 13.0).abs() < 1e-9);
}

#[test]
fn test_cumulative_gpa_is_not_mean_of_semester_gpas() {
    let mut book = GradeBook::new();
    let heavy = book.add_semester("Heavy".to_string());
    let light = book.add_semester("Light".to_string());
    book.add_course(&heavy, "MTH101".to_string(), 9.0, Grade::A, SCALE)
        .expect("add");
    book.add_course(&light, "PHY101".to_string(), 1.0, Grade::F, SCALE)
        .expect("add");

    // Weighted: 45/10 = 4.5. Mean of semester GPAs would be 2.5.
    assert!((book.cumulative_gpa(SCALE) - 4.5).abs() < 1e-9);
}

#[test]
fn test_empty_gradebook_yields_zero_everything() {
    let book = GradeBook::new();

    assert!(book.cumulative_gpa(SCALE).abs() < f64::EPSILON);
    assert!(book.total_credits().abs() < f64::EPSILON);
    assert!(analytics::grade_distribution(&book.all_courses()).is_empty());
    assert!(analytics::best_course(&book.all_courses(), SCALE).is_none());
}

#[test]
fn test_analytics_over_flattened_courses() {
    let book = populated_book();
    let courses = book.all_courses();

    // MTH has 3 courses, PHY has 2: both clear the threshold
    let subjects = analytics::subject_performance(&courses, SCALE);
    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0].subject, "MTH");
    assert_eq!(subjects[0].count, 3);
    assert_eq!(subjects[1].subject, "PHY");
    assert!(subjects[0].average > subjects[1].average);

    let best = analytics::best_course(&courses, SCALE).expect("best");
    assert_eq!(best.name, "MTH101");
    let worst = analytics::worst_course(&courses, SCALE).expect("worst");
    assert_eq!(worst.name, "PHY101");
}

#[test]
fn test_trends_follow_stored_semester_order() {
    let book = populated_book();
    let trends = analytics::semester_trends(&book.semesters, SCALE);

    assert_eq!(trends.len(), 2);
    assert_eq!(trends[0].label, "Fall 2025");
    assert_eq!(trends[1].label, "Spring 2026");
    assert!((trends[0].credits - 8.0).abs() < 1e-9);
    assert!((trends[1].credits - 5.0).abs() < 1e-9);
}

#[test]
fn test_goal_progress_from_gradebook_state() {
    let mut book = populated_book();
    book.set_goal(4.5, SCALE).expect("goal");

    let cgpa = book.cumulative_gpa(SCALE);
    let progress = projection::goal_progress(cgpa, 4.5);

    assert!((progress.percent - (cgpa / 4.5 * 100.0).min(100.0)).abs() < 1e-9);
    assert!((progress.difference - (4.5 - cgpa)).abs() < 1e-9);
}

#[test]
fn test_whatif_projection_against_recomputation() {
    let book = populated_book();
    let cgpa = book.cumulative_gpa(SCALE);
    let credits = book.total_credits();

    let additions = vec![
        Course::hypothetical("CHM101".to_string(), 3.0, Grade::A),
        Course::hypothetical("CHM102".to_string(), 2.0, Grade::B),
    ];
    let projected = projection::projected_cgpa(cgpa, credits, &additions, SCALE);

    // Cross-check by actually adding the courses to a copy
    let mut extended = book.clone();
    let extra = extended.add_semester("Hypothetical".to_string());
    extended
        .add_course(&extra, "CHM101".to_string(), 3.0, Grade::A, SCALE)
        .expect("add");
    extended
        .add_course(&extra, "CHM102".to_string(), 2.0, Grade::B, SCALE)
        .expect("add");

    assert!((projected - extended.cumulative_gpa(SCALE)).abs() < 1e-9);
}

#[test]
fn test_required_average_reachability_classification() {
    let book = populated_book();
    let cgpa = book.cumulative_gpa(SCALE);
    let credits = book.total_credits();

    // A modest target over a large load should be reachable
    let reachable = projection::required_average(cgpa, credits, 4.3, 15.0);
    assert!(reachable > 0.0);
    assert!(reachable <= SCALE.max_cgpa());

    // Near-maximum target over a tiny load should not be
    let unreachable = projection::required_average(cgpa, credits, 4.99, 1.0);
    assert!(unreachable > SCALE.max_cgpa());
}

#[test]
fn test_four_point_scale_end_to_end() {
    let scale = GradingScale::FourPoint;
    let mut book = GradeBook::new();
    let fall = book.add_semester("Fall 2025".to_string());
    book.add_course(&fall, "MTH101".to_string(), 3.0, Grade::A, scale)
        .expect("add");
    book.add_course(&fall, "MTH102".to_string(), 3.0, Grade::B, scale)
        .expect("add");

    // (4.0*3 + 3.0*3) / 6 = 3.5
    assert!((book.cumulative_gpa(scale) - 3.5).abs() < 1e-9);
    assert!(book.cumulative_gpa(scale) <= scale.max_cgpa());
}
