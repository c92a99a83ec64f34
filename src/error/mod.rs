//! Error types and handling for remok
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`name`]: Package name grammar errors
//! - [`source`]: Package listing errors
//! - [`fs`]: File system errors
//! - [`config`]: Configuration errors

pub mod config;
pub mod fs;
pub mod name;
pub mod source;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for remok operations
#[derive(Error, Diagnostic, Debug)]
pub enum RemokError {
    // Package name errors
    #[error("Malformed kernel package name '{name}': {reason}")]
    #[diagnostic(
        code(remok::name::malformed),
        help(
            "Expected linux-<headers|image|modules|modules-extra>-<major>.<minor>.<patch>-<build>[-generic]"
        )
    )]
    MalformedName { name: String, reason: String },

    // Listing errors
    #[error("Failed to list installed packages with '{command}': {reason}")]
    #[diagnostic(
        code(remok::source::listing_failed),
        help("Use --listing <FILE> to read package names from a file instead")
    )]
    ListingFailed { command: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(remok::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(remok::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(remok::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(remok::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(remok::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(remok::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(remok::config::invalid))]
    ConfigInvalid { message: String },
}

impl From<std::io::Error> for RemokError {
    fn from(err: std::io::Error) -> Self {
        RemokError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RemokError {
    fn from(err: serde_yaml::Error) -> Self {
        RemokError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RemokError {
    fn from(err: serde_json::Error) -> Self {
        RemokError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RemokError>;
