//! Markdown report generator
//!
//! Generates transcript reports in Markdown format. These reports render
//! well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{scale}}", &ctx.scale.to_string());
        output = output.replace("{{semester_count}}", &ctx.semester_count().to_string());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{cgpa}}", &format!("{:.2}", ctx.cgpa()));
        output = output.replace("{{total_credits}}", &format!("{:.1}", ctx.total_credits()));

        let best = ctx
            .best_course()
            .map_or_else(|| "N/A".to_string(), |c| format!("{} ({})", c.name, c.grade));
        let worst = ctx
            .worst_course()
            .map_or_else(|| "N/A".to_string(), |c| format!("{} ({})", c.name, c.grade));
        output = output.replace("{{best_course}}", &best);
        output = output.replace("{{worst_course}}", &worst);

        output = output.replace("{{goal_section}}", &Self::generate_goal_section(ctx));
        output = output.replace("{{trend_table}}", &Self::generate_trend_table(ctx));
        output = output.replace("{{subject_section}}", &Self::generate_subject_section(ctx));
        output = output.replace(
            "{{distribution_table}}",
            &Self::generate_distribution_table(ctx),
        );

        output
    }

    /// Goal progress lines, or a note when no goal is set
    fn generate_goal_section(ctx: &ReportContext) -> String {
        let Some((target, progress)) = ctx.goal_progress() else {
            return "No target CGPA has been set.".to_string();
        };

        let mut section = String::new();
        let _ = writeln!(section, "- Target CGPA: {target:.2}");
        let _ = writeln!(section, "- Progress: {:.2}%", progress.percent);
        let _ = writeln!(
            section,
            "- Difference: {}{:.2}",
            if progress.difference >= 0.0 { "+" } else { "" },
            progress.difference
        );
        if progress.difference <= 0.0 {
            let _ = writeln!(section, "- Status: goal reached");
        }
        section
    }

    /// Per-semester GPA and credit table, preserving stored order
    fn generate_trend_table(ctx: &ReportContext) -> String {
        let trends = ctx.trends();
        if trends.is_empty() {
            return "No semesters recorded.".to_string();
        }

        let mut table = String::from("| Semester | GPA | Credits |\n|---|---|---|\n");
        for trend in trends {
            let _ = writeln!(
                table,
                "| {} | {:.2} | {:.1} |",
                trend.label, trend.gpa, trend.credits
            );
        }
        table
    }

    /// Subject averages table; subjects below the 2-course threshold are
    /// already suppressed by the analytics engine
    fn generate_subject_section(ctx: &ReportContext) -> String {
        let subjects = ctx.subjects();
        if subjects.is_empty() {
            return "Not enough data: subject analytics appear once a subject has 2+ courses."
                .to_string();
        }

        let mut table = String::from("| Subject | Average | Courses |\n|---|---|---|\n");
        for subject in subjects {
            let _ = writeln!(
                table,
                "| {} | {:.2} | {} |",
                subject.subject, subject.average, subject.count
            );
        }
        table
    }

    /// Grade frequency table, descending by count
    fn generate_distribution_table(ctx: &ReportContext) -> String {
        let distribution = ctx.distribution();
        if distribution.is_empty() {
            return "No courses recorded.".to_string();
        }

        let mut table = String::from("| Grade | Courses |\n|---|---|\n");
        for entry in distribution {
            let _ = writeln!(table, "| {} | {} |", entry.grade, entry.count);
        }
        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
