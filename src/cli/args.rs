//! CLI argument definitions for `GradeTrack`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradetrack::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `scale`, `gradebook_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SemesterSubcommand {
    /// Add a new semester.
    Add {
        /// Display name (e.g., "Fall 2025")
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Rename an existing semester.
    Rename {
        /// Semester id (see `semester list`)
        #[arg(value_name = "ID")]
        id: String,
        /// New display name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Remove a semester and all its courses.
    Remove {
        /// Semester id (see `semester list`)
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List all semesters with their GPAs.
    List,
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a course to a semester.
    Add {
        /// Semester id to add the course to
        #[arg(value_name = "SEMESTER")]
        semester: String,
        /// Course name (e.g., "MTH101")
        #[arg(value_name = "NAME")]
        name: String,
        /// Credit hours (must be positive)
        #[arg(value_name = "CREDITS")]
        credits: f64,
        /// Letter grade (A, A-, B+, B, B-, C+, C, C-, D+, D, F)
        #[arg(value_name = "GRADE")]
        grade: String,
    },
    /// Remove a course from a semester.
    Remove {
        /// Semester id
        #[arg(value_name = "SEMESTER")]
        semester: String,
        /// Course id (see `course list`)
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// List courses, optionally for a single semester.
    List {
        /// Semester id (all semesters when omitted)
        #[arg(value_name = "SEMESTER")]
        semester: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum GoalSubcommand {
    /// Set the target CGPA.
    Set {
        /// Target CGPA (must be within the active grading scale)
        #[arg(value_name = "TARGET")]
        target: f64,
    },
    /// Show progress toward the target CGPA.
    Show,
    /// Clear the target CGPA.
    Clear,
    /// Show the average needed over an additional credit load to reach the target.
    Plan {
        /// Additional credit hours you plan to take
        #[arg(value_name = "CREDITS")]
        credits: f64,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage semesters in the gradebook.
    Semester {
        #[command(subcommand)]
        subcommand: SemesterSubcommand,
    },
    /// Manage courses within semesters.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Show CGPA, trends, subject performance, and the grade distribution.
    Summary,
    /// Manage the CGPA goal and projections toward it.
    Goal {
        #[command(subcommand)]
        subcommand: GoalSubcommand,
    },
    /// Project the CGPA with hypothetical courses (without saving them).
    ///
    /// Each course is given as NAME:CREDITS:GRADE, e.g. MTH301:3:A.
    Whatif {
        /// Hypothetical course specs (NAME:CREDITS:GRADE, supports multiple)
        #[arg(value_name = "COURSES", num_args = 1..)]
        courses: Vec<String>,
    },
    /// Generate an academic report from the gradebook.
    ///
    /// Creates a formatted report with CGPA metrics, goal progress, and analytics.
    Report {
        /// Output file path (optional; defaults to config `reports_dir` with format extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradetrack",
    about = "GradeTrack command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config grading scale (5.0 or 4.0)
    #[arg(long = "config-scale", value_name = "SCALE")]
    pub config_scale: Option<String>,

    /// Override config grading scale (short form)
    #[arg(long = "scale", value_name = "SCALE")]
    pub scale: Option<String>,

    /// Override config gradebook file path
    #[arg(long = "config-gradebook-file", value_name = "PATH")]
    pub config_gradebook_file: Option<PathBuf>,

    /// Override config gradebook file path (short form)
    #[arg(long = "gradebook-file", value_name = "PATH")]
    pub gradebook_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. Short-form flags (e.g., `--scale`) take precedence
    /// over long-form flags (e.g., `--config-scale`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// let overrides = args.to_config_overrides();
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            scale: self.scale.clone().or_else(|| self.config_scale.clone()),
            gradebook_file: self
                .gradebook_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_gradebook_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
