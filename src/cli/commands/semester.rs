//! Semester command handler

use crate::args::SemesterSubcommand;
use crate::commands::{load_gradebook, save_gradebook};
use gradetrack::config::Config;
use gradetrack::core::gpa;
use logger::info;

/// Dispatch semester subcommands
pub fn run(subcommand: SemesterSubcommand, config: &Config) {
    match subcommand {
        SemesterSubcommand::Add { name } => handle_add(&name, config),
        SemesterSubcommand::Rename { id, name } => handle_rename(&id, &name, config),
        SemesterSubcommand::Remove { id } => handle_remove(&id, config),
        SemesterSubcommand::List => handle_list(config),
    }
}

fn handle_add(name: &str, config: &Config) {
    let mut book = load_gradebook(config);
    let id = book.add_semester(name.to_string());
    save_gradebook(&book, config);
    info!("Added semester '{name}' with id {id}");
    println!("✓ Added semester '{name}' ({id})");
}

fn handle_rename(id: &str, name: &str, config: &Config) {
    let mut book = load_gradebook(config);
    if !book.rename_semester(id, name.to_string()) {
        eprintln!("✗ No semester with id '{id}'");
        std::process::exit(1);
    }
    save_gradebook(&book, config);
    println!("✓ Renamed semester {id} to '{name}'");
}

fn handle_remove(id: &str, config: &Config) {
    let mut book = load_gradebook(config);
    if !book.remove_semester(id) {
        eprintln!("✗ No semester with id '{id}'");
        std::process::exit(1);
    }
    save_gradebook(&book, config);
    println!("✓ Removed semester {id}");
}

fn handle_list(config: &Config) {
    let book = load_gradebook(config);
    if book.semesters.is_empty() {
        println!("No semesters recorded. Add one with `gradetrack semester add <NAME>`.");
        return;
    }

    let scale = config.grading_scale();
    println!("\n=== Semesters ({scale}-point scale) ===\n");
    println!("{:<6} {:<20} {:>6} {:>8} {:>8}", "ID", "Name", "GPA", "Credits", "Courses");
    for semester in &book.semesters {
        // Recompute on display; the stored gpa field is only a cache
        let gpa = gpa::semester_gpa(&semester.courses, scale);
        println!(
            "{:<6} {:<20} {:>6.2} {:>8.1} {:>8}",
            semester.id,
            semester.name,
            gpa,
            semester.total_credits(),
            semester.course_count()
        );
    }
}
