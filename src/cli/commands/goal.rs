//! Goal command handler
//!
//! Classifying a required average as "unreachable" or "already met" happens
//! here; the projection math itself returns the raw value.

use crate::args::GoalSubcommand;
use crate::commands::{load_gradebook, save_gradebook};
use gradetrack::config::Config;
use gradetrack::core::projection;

/// Dispatch goal subcommands
pub fn run(subcommand: GoalSubcommand, config: &Config) {
    match subcommand {
        GoalSubcommand::Set { target } => handle_set(target, config),
        GoalSubcommand::Show => handle_show(config),
        GoalSubcommand::Clear => handle_clear(config),
        GoalSubcommand::Plan { credits } => handle_plan(credits, config),
    }
}

fn handle_set(target: f64, config: &Config) {
    let mut book = load_gradebook(config);
    let scale = config.grading_scale();
    if let Err(e) = book.set_goal(target, scale) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_gradebook(&book, config);
    println!("✓ Goal set to {target:.2} (on the {scale}-point scale)");
}

fn handle_show(config: &Config) {
    let book = load_gradebook(config);
    let Some(goal) = book.goal else {
        println!("No goal set. Set one with `gradetrack goal set <TARGET>`.");
        return;
    };

    let scale = config.grading_scale();
    let cgpa = book.cumulative_gpa(scale);
    let progress = projection::goal_progress(cgpa, goal.target_cgpa);

    println!("\n=== Goal Progress ===\n");
    println!("Target CGPA:  {:.2}", goal.target_cgpa);
    println!("Current CGPA: {cgpa:.2}");
    println!("Progress:     {:.1}%", progress.percent);
    if progress.difference > 0.0 {
        println!("To go:        {:.2}", progress.difference);
    } else {
        println!("✓ Target reached (ahead by {:.2})", -progress.difference);
    }
}

fn handle_clear(config: &Config) {
    let mut book = load_gradebook(config);
    if !book.clear_goal() {
        println!("No goal was set.");
        return;
    }
    save_gradebook(&book, config);
    println!("✓ Goal cleared");
}

fn handle_plan(credits: f64, config: &Config) {
    if !credits.is_finite() || credits <= 0.0 {
        eprintln!("✗ Additional credits must be a positive number (got {credits})");
        std::process::exit(1);
    }

    let book = load_gradebook(config);
    let Some(goal) = book.goal else {
        eprintln!("✗ No goal set. Set one with `gradetrack goal set <TARGET>`.");
        std::process::exit(1);
    };

    let scale = config.grading_scale();
    let cgpa = book.cumulative_gpa(scale);
    let required = projection::required_average(
        cgpa,
        book.total_credits(),
        goal.target_cgpa,
        credits,
    );

    println!("\n=== Goal Plan ===\n");
    println!("Target CGPA:        {:.2}", goal.target_cgpa);
    println!("Current CGPA:       {cgpa:.2} over {:.1} credits", book.total_credits());
    println!("Additional credits: {credits:.1}");

    if required <= 0.0 {
        println!("✓ Already at or above the target; any passing average keeps you there.");
    } else if required > scale.max_cgpa() {
        println!(
            "✗ Not reachable with {credits:.1} more credits: you would need an average of {required:.2}, above the {:.1} maximum.",
            scale.max_cgpa()
        );
    } else {
        println!("Required average:   {required:.2} over the additional credits");
    }
}
