//! Error types for netvalidate.
//!
//! This module defines the error types used throughout netvalidate, providing
//! rich error information for debugging and user feedback.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for netvalidate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for netvalidate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Input Errors
    // ========================================================================
    /// The input file could not be read or parsed.
    #[error("Failed to load input file '{path}': {message}")]
    InputLoad {
        /// Path to the input file
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// The input file is empty.
    #[error("The input file '{0}' is empty")]
    InputEmpty(PathBuf),

    /// The input file has none of the recognized scope dictionaries.
    #[error("'{0}' must have at least one 'hosts', 'groups' or 'all' dictionary")]
    InputScopeMissing(PathBuf),

    /// No desired state was produced for the host.
    #[error(
        "No validations were performed as no desired state was generated for host '{0}', \
         check the input file"
    )]
    NoDesiredState(String),

    // ========================================================================
    // Platform Errors
    // ========================================================================
    /// The platform string matched no supported family.
    #[error("Unsupported platform '{0}': expected an ios, nxos or asa family alias")]
    UnsupportedPlatform(String),

    // ========================================================================
    // Report Errors
    // ========================================================================
    /// The report output directory does not exist.
    #[error("The report directory '{0}' does not exist")]
    ReportDirMissing(PathBuf),

    /// An existing report file could not be read back for merging.
    #[error("Failed to read existing report '{path}': {message}")]
    ReportRead {
        /// Path to the report file
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// The report file could not be written.
    #[error("Failed to write report '{path}': {message}")]
    ReportWrite {
        /// Path to the report file
        path: PathBuf,
        /// Error message
        message: String,
    },

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
