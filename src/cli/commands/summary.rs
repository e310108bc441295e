//! Summary command handler
//!
//! Prints the full analytics view: CGPA, per-semester trends, subject
//! performance, best/worst courses, and the grade distribution.

use crate::commands::load_gradebook;
use gradetrack::config::Config;
use gradetrack::core::analytics;
use gradetrack::core::projection;

/// Print the academic summary for the whole gradebook
pub fn run(config: &Config) {
    let book = load_gradebook(config);
    let scale = config.grading_scale();

    if book.course_count() == 0 {
        println!("No courses recorded yet. Add semesters and courses to see a summary.");
        return;
    }

    let courses = book.all_courses();
    let cgpa = book.cumulative_gpa(scale);

    println!("\n=== Academic Summary ({scale}-point scale) ===\n");
    println!("CGPA:          {cgpa:.2}");
    println!("Total credits: {:.1}", book.total_credits());
    println!(
        "Semesters:     {} ({} courses)",
        book.semesters.len(),
        book.course_count()
    );

    if let Some(goal) = book.goal {
        let progress = projection::goal_progress(cgpa, goal.target_cgpa);
        if progress.difference > 0.0 {
            println!(
                "Goal:          {:.2} ({:.1}% there, {:.2} to go)",
                goal.target_cgpa, progress.percent, progress.difference
            );
        } else {
            println!(
                "Goal:          {:.2} (reached, ahead by {:.2})",
                goal.target_cgpa, -progress.difference
            );
        }
    }

    if let Some(best) = analytics::best_course(&courses, scale) {
        println!("Best:          {} ({})", best.name, best.grade);
    }
    if let Some(worst) = analytics::worst_course(&courses, scale) {
        println!("Weakest:       {} ({})", worst.name, worst.grade);
    }

    let trends = analytics::semester_trends(&book.semesters, scale);
    if !trends.is_empty() {
        println!("\n--- Semester Trend ---");
        for trend in &trends {
            println!("{:<20} {:>6.2}  ({:.1} credits)", trend.label, trend.gpa, trend.credits);
        }
    }

    let subjects = analytics::subject_performance(&courses, scale);
    if subjects.is_empty() {
        println!("\n--- Subject Performance ---");
        println!("Not enough data yet (a subject needs 2+ courses to appear).");
    } else {
        println!("\n--- Subject Performance ---");
        for subject in &subjects {
            println!(
                "{:<6} {:>6.2}  ({} courses)",
                subject.subject, subject.average, subject.count
            );
        }
    }

    let distribution = analytics::grade_distribution(&courses);
    println!("\n--- Grade Distribution ---");
    for entry in &distribution {
        println!("{:<3} {}", entry.grade, "#".repeat(entry.count));
    }
}
