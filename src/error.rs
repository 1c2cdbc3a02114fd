//! Error types for doxbuild
//!
//! Uses `thiserror` for library errors; `anyhow` stays at the binary
//! boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for doxbuild operations
pub type DoxbuildResult<T> = Result<T, DoxbuildError>;

/// Main error type for doxbuild operations
#[derive(Error, Debug)]
pub enum DoxbuildError {
    /// Required input file could not be read (or was empty)
    #[error("cannot read required input {path}: {source}")]
    MissingInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The documentation generator could not be started
    #[error("failed to launch generator '{program}': {source}")]
    GeneratorLaunch {
        program: String,
        source: std::io::Error,
    },

    /// The documentation generator exited with a nonzero status
    #[error("generator '{program}' exited with status {}{}", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()), fmt_stderr(.stderr))]
    GeneratorExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Output alias already exists - a prior build was not cleaned
    #[error("output alias {path} already exists - run 'doxbuild clean' first")]
    AliasConflict { path: PathBuf },

    /// One or more removal targets failed during clean
    #[error("cleanup failed: {}", .failures.join("; "))]
    CleanupFailed { failures: Vec<String> },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DoxbuildError {
    /// Process exit code for this error kind.
    ///
    /// Each failure kind gets a distinct code so CI can tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            DoxbuildError::MissingInput { .. } => 2,
            DoxbuildError::GeneratorLaunch { .. } | DoxbuildError::GeneratorExit { .. } => 3,
            DoxbuildError::AliasConflict { .. } => 4,
            DoxbuildError::CleanupFailed { .. } => 5,
            DoxbuildError::InvalidConfig { .. } | DoxbuildError::Io(_) => 1,
        }
    }
}

fn fmt_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
