//! Shared library for GradeTrack
//! Contains the computation core and collaborator boundaries used by the CLI

pub mod core;

pub use self::core::config;
