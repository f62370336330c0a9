//! Error types and exit codes for fsforge

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for fsforge operations
#[derive(Error, Debug)]
pub enum FsForgeError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid pattern in catalog: {message}")]
    InvalidPattern { message: String },

    #[error("Malformed input rows: {message}")]
    MalformedInput { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FsForgeError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Malformed input rows / JSON error
    /// - 3: Catalog construction failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::MalformedInput { .. } => ExitCode::from(2),
            Self::Json(_) => ExitCode::from(2),
            Self::InvalidPattern { .. } => ExitCode::from(3),
        }
    }
}

/// Result type alias for fsforge operations
pub type Result<T> = std::result::Result<T, FsForgeError>;
