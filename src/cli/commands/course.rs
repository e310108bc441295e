//! Course command handler

use crate::args::CourseSubcommand;
use crate::commands::{load_gradebook, save_gradebook};
use gradetrack::config::Config;
use gradetrack::core::models::{Grade, Semester};
use logger::info;

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, config: &Config) {
    match subcommand {
        CourseSubcommand::Add {
            semester,
            name,
            credits,
            grade,
        } => handle_add(&semester, &name, credits, &grade, config),
        CourseSubcommand::Remove { semester, course } => handle_remove(&semester, &course, config),
        CourseSubcommand::List { semester } => handle_list(semester.as_deref(), config),
    }
}

fn handle_add(semester_id: &str, name: &str, credits: f64, grade: &str, config: &Config) {
    let grade: Grade = match grade.parse() {
        Ok(grade) => grade,
        Err(e) => {
            eprintln!("✗ {e}");
            eprintln!("  Valid grades: A, A-, B+, B, B-, C+, C, C-, D+, D, F");
            std::process::exit(1);
        }
    };

    let mut book = load_gradebook(config);
    let scale = config.grading_scale();
    match book.add_course(semester_id, name.to_string(), credits, grade, scale) {
        Ok(id) => {
            save_gradebook(&book, config);
            info!("Added course '{name}' ({id}) to semester {semester_id}");
            println!("✓ Added course '{name}' ({id}) to semester {semester_id}");
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_remove(semester_id: &str, course_id: &str, config: &Config) {
    let mut book = load_gradebook(config);
    let scale = config.grading_scale();
    if !book.remove_course(semester_id, course_id, scale) {
        eprintln!("✗ No course '{course_id}' in semester '{semester_id}'");
        std::process::exit(1);
    }
    save_gradebook(&book, config);
    println!("✓ Removed course {course_id} from semester {semester_id}");
}

fn handle_list(semester_id: Option<&str>, config: &Config) {
    let book = load_gradebook(config);
    let scale = config.grading_scale();

    let semesters: Vec<&Semester> = match semester_id {
        Some(id) => match book.semester(id) {
            Some(semester) => vec![semester],
            None => {
                eprintln!("✗ No semester with id '{id}'");
                std::process::exit(1);
            }
        },
        None => book.semesters.iter().collect(),
    };

    if semesters.iter().all(|s| s.courses.is_empty()) {
        println!("No courses recorded. Add one with `gradetrack course add <SEMESTER> <NAME> <CREDITS> <GRADE>`.");
        return;
    }

    for semester in semesters {
        if semester.courses.is_empty() {
            continue;
        }
        println!("\n=== {} ({}) ===\n", semester.name, semester.id);
        println!("{:<6} {:<20} {:>8} {:>6} {:>7}", "ID", "Name", "Credits", "Grade", "Points");
        for course in &semester.courses {
            println!(
                "{:<6} {:<20} {:>8.1} {:>6} {:>7.1}",
                course.id,
                course.name,
                course.credit_hours,
                course.grade,
                scale.points(course.grade)
            );
        }
    }
}
