//! Report command handler

use crate::commands::load_gradebook;
use gradetrack::config::Config;
use gradetrack::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use logger::info;
use std::path::{Path, PathBuf};

/// Generate a report from the gradebook
pub fn run(output: Option<&Path>, format: &str, config: &Config) {
    let format: ReportFormat = match format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e} (expected markdown or html)");
            std::process::exit(1);
        }
    };

    let book = load_gradebook(config);
    if book.course_count() == 0 {
        eprintln!("✗ No courses recorded; nothing to report.");
        std::process::exit(1);
    }

    let output_path = output.map_or_else(|| default_output_path(config, format), Path::to_path_buf);
    if let Some(parent) = output_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            eprintln!("✗ Failed to create reports directory: {}", parent.display());
            std::process::exit(1);
        }
    }

    let scale = config.grading_scale();
    let ctx = ReportContext::new(&book, scale);
    info!("Generating {format} report to {}", output_path.display());

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
    };

    match result {
        Ok(()) => println!("✓ Report generated: {}", output_path.display()),
        Err(e) => {
            eprintln!("✗ Failed to generate report: {e}");
            std::process::exit(1);
        }
    }
}

/// Default output path: `<reports_dir>/report.<ext>`
fn default_output_path(config: &Config, format: ReportFormat) -> PathBuf {
    let reports_dir = if config.paths.reports_dir.is_empty() {
        Config::get_gradetrack_dir().join("reports")
    } else {
        PathBuf::from(&config.paths.reports_dir)
    };
    reports_dir.join(format!("report.{}", format.extension()))
}
