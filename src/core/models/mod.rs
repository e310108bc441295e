//! Data models for GradeTrack

pub mod course;
pub mod goal;
pub mod grade;
pub mod semester;

pub use course::Course;
pub use goal::Goal;
pub use grade::{Grade, GradingScale};
pub use semester::Semester;
