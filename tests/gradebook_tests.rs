//! Integration tests for gradebook persistence

use gradetrack::core::gradebook::GradeBook;
use gradetrack::core::models::{Grade, GradingScale};
use std::fs;
use tempfile::TempDir;

const SCALE: GradingScale = GradingScale::FivePoint;

fn sample_book() -> GradeBook {
    let mut book = GradeBook::new();
    let fall = book.add_semester("Fall 2025".to_string());
    let spring = book.add_semester("Spring 2026".to_string());
    book.add_course(&fall, "MTH101".to_string(), 3.0, Grade::A, SCALE)
        .expect("add course");
    book.add_course(&fall, "PHY101".to_string(), 2.0, Grade::BPlus, SCALE)
        .expect("add course");
    book.add_course(&spring, "MTH201".to_string(), 3.0, Grade::AMinus, SCALE)
        .expect("add course");
    book.set_goal(4.8, SCALE).expect("set goal");
    book
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gradebook.toml");

    let book = sample_book();
    book.save(&path).expect("Failed to save gradebook");

    let loaded = GradeBook::load(&path).expect("Failed to load gradebook");
    assert_eq!(loaded, book);
    assert_eq!(loaded.course_count(), 3);
    assert!((loaded.cumulative_gpa(SCALE) - book.cumulative_gpa(SCALE)).abs() < 1e-9);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("dir").join("gradebook.toml");

    sample_book().save(&path).expect("Failed to save gradebook");
    assert!(path.exists());
}

#[test]
fn test_missing_file_is_an_empty_gradebook() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("does_not_exist.toml");

    let book = GradeBook::load(&path).expect("Missing file should not be an error");
    assert!(book.semesters.is_empty());
    assert!(book.goal.is_none());
}

#[test]
fn test_malformed_file_fails_to_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gradebook.toml");
    fs::write(&path, "this is not [valid toml").expect("write");

    assert!(GradeBook::load(&path).is_err());
}

#[test]
fn test_unknown_grade_label_degrades_to_f_on_load() {
    // Data from a partially migrated source: "A+" is outside the
    // enumeration and must not fail the whole load.
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gradebook.toml");
    let content = r#"
[[semesters]]
id = "s1"
name = "Fall 2025"

[[semesters.courses]]
id = "c1"
name = "MTH101"
credit_hours = 3.0
grade = "A+"

[[semesters.courses]]
id = "c2"
name = "MTH102"
credit_hours = 3.0
grade = "B"
"#;
    fs::write(&path, content).expect("write");

    let book = GradeBook::load(&path).expect("Unknown grade should degrade, not fail");
    let courses = book.all_courses();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].grade, Grade::F);
    assert_eq!(courses[1].grade, Grade::B);

    // The degraded grade carries zero points: (0*3 + 4*3) / 6 = 2.0
    assert!((book.cumulative_gpa(SCALE) - 2.0).abs() < 1e-9);
}

#[test]
fn test_goal_survives_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gradebook.toml");

    let mut book = sample_book();
    book.save(&path).expect("save");
    let loaded = GradeBook::load(&path).expect("load");
    assert!((loaded.goal.expect("goal").target_cgpa - 4.8).abs() < f64::EPSILON);

    book.clear_goal();
    book.save(&path).expect("save");
    let loaded = GradeBook::load(&path).expect("load");
    assert!(loaded.goal.is_none());
}

#[test]
fn test_ids_remain_unique_after_reload() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gradebook.toml");

    let book = sample_book();
    book.save(&path).expect("save");

    let mut loaded = GradeBook::load(&path).expect("load");
    let existing_ids: Vec<String> = loaded
        .all_courses()
        .iter()
        .map(|c| c.id.clone())
        .collect();
    let semester_id = loaded.semesters[0].id.clone();
    let new_id = loaded
        .add_course(&semester_id, "CHM101".to_string(), 2.0, Grade::C, SCALE)
        .expect("add course");

    assert!(!existing_ids.contains(&new_id));
}
