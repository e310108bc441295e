//! What-if command handler
//!
//! Projects the CGPA with hypothetical courses given as NAME:CREDITS:GRADE
//! specs. Nothing is persisted.

use crate::commands::load_gradebook;
use gradetrack::config::Config;
use gradetrack::core::models::{Course, Grade};
use gradetrack::core::projection;

/// Parse a NAME:CREDITS:GRADE spec into a hypothetical course.
///
/// The name may itself contain colons; the last two fields are always
/// credits and grade.
fn parse_spec(spec: &str) -> Result<Course, String> {
    let mut fields = spec.rsplitn(3, ':');
    let (Some(grade), Some(credits), Some(name)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(format!("Invalid course spec '{spec}' (expected NAME:CREDITS:GRADE)"));
    };

    if name.is_empty() {
        return Err(format!("Invalid course spec '{spec}': empty course name"));
    }

    let credit_hours: f64 = credits
        .parse()
        .map_err(|_| format!("Invalid credits '{credits}' in spec '{spec}'"))?;
    if !credit_hours.is_finite() || credit_hours <= 0.0 {
        return Err(format!(
            "Credit hours must be a positive number (got {credit_hours} in spec '{spec}')"
        ));
    }

    let grade: Grade = grade.parse().map_err(|e: String| format!("{e} in spec '{spec}'"))?;

    Ok(Course::hypothetical(name.to_string(), credit_hours, grade))
}

/// Run the what-if projection over the given course specs
pub fn run(specs: &[String], config: &Config) {
    let mut additions = Vec::with_capacity(specs.len());
    for spec in specs {
        match parse_spec(spec) {
            Ok(course) => additions.push(course),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    }

    let book = load_gradebook(config);
    let scale = config.grading_scale();
    let cgpa = book.cumulative_gpa(scale);
    let credits = book.total_credits();

    let added_credits: f64 = additions.iter().map(|c| c.credit_hours).sum();
    let projected = projection::projected_cgpa(cgpa, credits, &additions, scale);

    println!("\n=== What-If Projection ({scale}-point scale) ===\n");
    for course in &additions {
        println!(
            "  + {} ({:.1} credits, {})",
            course.name, course.credit_hours, course.grade
        );
    }
    println!();
    println!("Current CGPA:   {cgpa:.2} over {credits:.1} credits");
    println!(
        "Projected CGPA: {projected:.2} over {:.1} credits ({}{:.2})",
        credits + added_credits,
        if projected >= cgpa { "+" } else { "" },
        projected - cgpa
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_spec() {
        let course = parse_spec("MTH301:3:A").expect("valid spec");
        assert_eq!(course.name, "MTH301");
        assert!((course.credit_hours - 3.0).abs() < f64::EPSILON);
        assert_eq!(course.grade, Grade::A);
    }

    #[test]
    fn parses_fractional_credits_and_minus_grades() {
        let course = parse_spec("PHY101:1.5:B-").expect("valid spec");
        assert!((course.credit_hours - 1.5).abs() < f64::EPSILON);
        assert_eq!(course.grade, Grade::BMinus);
    }

    #[test]
    fn name_may_contain_colons() {
        let course = parse_spec("Lab: Circuits:2:A").expect("valid spec");
        assert_eq!(course.name, "Lab: Circuits");
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!(parse_spec("MTH301").is_err());
        assert!(parse_spec("MTH301:3").is_err());
        assert!(parse_spec(":3:A").is_err());
        assert!(parse_spec("MTH301:abc:A").is_err());
        assert!(parse_spec("MTH301:0:A").is_err());
        assert!(parse_spec("MTH301:-3:A").is_err());
        assert!(parse_spec("MTH301:3:E").is_err());
    }
}
