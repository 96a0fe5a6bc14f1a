//! Input/output: command line, configuration, errors, export, progress and logging

/// Command-line parsing and batch generation
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error type and helpers
pub mod error;
/// PNG export and output naming
pub mod image;
/// Log subscriber installation
pub mod logging;
/// Progress bars
pub mod progress;
