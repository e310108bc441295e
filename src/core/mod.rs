//! Core module: the pure GPA computation engine plus the configuration
//! and persistence boundaries that feed it

pub mod analytics;
pub mod config;
pub mod gpa;
pub mod gradebook;
pub mod models;
pub mod projection;
pub mod report;

/// Returns the current version of the GradeTrack crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
