//! Error types for `docdeck`
//!
//! This module provides the error hierarchy for manifest loading, document
//! fetching, configuration, and the CLI exit-code mapping. Fetch failures are
//! recoverable by design: the navigation layer converts them into inline
//! error fragments instead of letting them escape to the host page.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `docdeck` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Fetch error (manifest or document could not be retrieved)
    pub const FETCH_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `docdeck` operations.
///
/// Aggregates all domain-specific errors and provides a unified interface
/// for error handling and exit-code mapping.
#[derive(Debug, Error)]
pub enum DocdeckError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Manifest loading error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Document fetch error
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Local host server error
    #[error("server error: {0}")]
    Server(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocdeckError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Manifest(_) | Self::Content(_) => ExitCode::FETCH_ERROR,
            Self::Server(_) => ExitCode::ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the configuration file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// Configuration file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A configuration value failed validation
    #[error("invalid value for {field}: {message}")]
    Invalid {
        /// Field name, e.g. `base_url`
        field: &'static str,
        /// What was wrong with the value
        message: String,
    },
}

// ============================================================================
// Manifest Errors
// ============================================================================

/// Manifest loading errors.
///
/// A failed load is surfaced in place of the sidebar and topic menu; only
/// successful loads are cached, so the next access tries again.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest request could not be completed
    #[error(transparent)]
    Fetch(#[from] ContentError),

    /// The manifest body was not valid JSON
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// Content Errors
// ============================================================================

/// Document fetch errors.
///
/// Never propagated past the content boundary: the renderer converts these
/// into a visible inline fragment naming the path and the message.
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// The document request could not be completed
    #[error("failed to fetch {path}: {message}")]
    Transport {
        /// Relative document path
        path: String,
        /// Transport-level error message
        message: String,
    },

    /// The server answered with a non-success status
    #[error("HTTP {status} fetching {path}")]
    HttpStatus {
        /// Relative document path
        path: String,
        /// HTTP status code
        status: u16,
    },
}

impl ContentError {
    /// The relative path of the document that failed to load.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Transport { path, .. } | Self::HttpStatus { path, .. } => path,
        }
    }
}
