//! HTML report generator
//!
//! Generates transcript reports as self-contained HTML with embedded CSS.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape the HTML-significant characters in user-entered text
    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{scale}}", &ctx.scale.to_string());
        output = output.replace("{{semester_count}}", &ctx.semester_count().to_string());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{cgpa}}", &format!("{:.2}", ctx.cgpa()));
        output = output.replace("{{total_credits}}", &format!("{:.1}", ctx.total_credits()));

        let best = ctx.best_course().map_or_else(
            || "N/A".to_string(),
            |c| format!("{} ({})", Self::escape(&c.name), c.grade),
        );
        let worst = ctx.worst_course().map_or_else(
            || "N/A".to_string(),
            |c| format!("{} ({})", Self::escape(&c.name), c.grade),
        );
        output = output.replace("{{best_course}}", &best);
        output = output.replace("{{worst_course}}", &worst);

        output = output.replace("{{goal_section}}", &Self::generate_goal_html(ctx));
        output = output.replace("{{trend_table}}", &Self::generate_trend_html(ctx));
        output = output.replace("{{subject_section}}", &Self::generate_subject_html(ctx));
        output = output.replace(
            "{{distribution_table}}",
            &Self::generate_distribution_html(ctx),
        );

        output
    }

    /// Goal progress block with a progress bar, or an empty-state note
    fn generate_goal_html(ctx: &ReportContext) -> String {
        let Some((target, progress)) = ctx.goal_progress() else {
            return "<p>No target CGPA has been set.</p>".to_string();
        };

        let mut html = String::new();
        let _ = writeln!(
            html,
            "<p>Target CGPA <strong>{target:.2}</strong> &middot; Progress <strong>{:.2}%</strong> &middot; Difference <strong>{}{:.2}</strong></p>",
            progress.percent,
            if progress.difference >= 0.0 { "+" } else { "" },
            progress.difference
        );
        let _ = writeln!(
            html,
            "<div class=\"progress\"><div style=\"width: {:.2}%\"></div></div>",
            progress.percent
        );
        html
    }

    /// Per-semester GPA table, preserving stored order
    fn generate_trend_html(ctx: &ReportContext) -> String {
        let trends = ctx.trends();
        if trends.is_empty() {
            return "<p>No semesters recorded.</p>".to_string();
        }

        let mut html =
            String::from("<table>\n<tr><th>Semester</th><th>GPA</th><th>Credits</th></tr>\n");
        for trend in trends {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{:.2}</td><td>{:.1}</td></tr>",
                Self::escape(&trend.label),
                trend.gpa,
                trend.credits
            );
        }
        html.push_str("</table>\n");
        html
    }

    /// Subject averages table
    fn generate_subject_html(ctx: &ReportContext) -> String {
        let subjects = ctx.subjects();
        if subjects.is_empty() {
            return "<p>Not enough data: subject analytics appear once a subject has 2+ courses.</p>"
                .to_string();
        }

        let mut html =
            String::from("<table>\n<tr><th>Subject</th><th>Average</th><th>Courses</th></tr>\n");
        for subject in subjects {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{:.2}</td><td>{}</td></tr>",
                Self::escape(&subject.subject),
                subject.average,
                subject.count
            );
        }
        html.push_str("</table>\n");
        html
    }

    /// Grade frequency table, descending by count
    fn generate_distribution_html(ctx: &ReportContext) -> String {
        let distribution = ctx.distribution();
        if distribution.is_empty() {
            return "<p>No courses recorded.</p>".to_string();
        }

        let mut html = String::from("<table>\n<tr><th>Grade</th><th>Courses</th></tr>\n");
        for entry in distribution {
            let _ = writeln!(html, "<tr><td>{}</td><td>{}</td></tr>", entry.grade, entry.count);
        }
        html.push_str("</table>\n");
        html
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
