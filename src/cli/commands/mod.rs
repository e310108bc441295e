//! Command handlers for the `GradeTrack` CLI

pub mod config;
pub mod course;
pub mod goal;
pub mod report;
pub mod semester;
pub mod summary;
pub mod whatif;

use gradetrack::config::Config;
use gradetrack::core::gradebook::GradeBook;
use logger::debug;
use std::path::PathBuf;

/// Resolve the gradebook file path from configuration.
///
/// Falls back to `gradebook.toml` in the gradetrack directory when the
/// config value is empty.
#[must_use]
pub fn gradebook_path(config: &Config) -> PathBuf {
    if config.paths.gradebook_file.is_empty() {
        Config::get_gradetrack_dir().join("gradebook.toml")
    } else {
        PathBuf::from(&config.paths.gradebook_file)
    }
}

/// Load the gradebook, exiting with a message if the file is unreadable.
///
/// A missing file is a first run and yields an empty gradebook.
pub fn load_gradebook(config: &Config) -> GradeBook {
    let path = gradebook_path(config);
    debug!("Loading gradebook from {}", path.display());
    match GradeBook::load(&path) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("✗ Failed to load gradebook from {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

/// Save the gradebook back to its configured path, exiting on failure.
pub fn save_gradebook(book: &GradeBook, config: &Config) {
    let path = gradebook_path(config);
    debug!("Saving gradebook to {}", path.display());
    if let Err(e) = book.save(&path) {
        eprintln!("✗ Failed to save gradebook to {}: {e}", path.display());
        std::process::exit(1);
    }
}
