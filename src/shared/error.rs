use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Input validation failures keep status 1 so that existing scripts
/// checking for a plain non-zero failure keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written
    Success = 0,
    /// Project path, yarn.lock or node_modules failed validation
    InvalidInput = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error surfaced from `run()` to the exit code the process should use.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<GathererError>() {
            Some(e) if e.is_input_error() => ExitCode::InvalidInput,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidInput => write!(f, "Invalid Input (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license report generation.
#[derive(Debug, Error)]
pub enum GathererError {
    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("No yarn.lock file found: {path}\n\n💡 Hint: Run `yarn install` in the project, or point at the directory that contains yarn.lock")]
    LockfileNotFound { path: PathBuf },

    #[error("No node_modules directory found: {path}\n\n💡 Hint: Run `yarn install` so that the installed packages are available")]
    NodeModulesNotFound { path: PathBuf },

    #[error("Failed to read yarn.lock file: {path}\nDetails: {details}")]
    LockfileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl GathererError {
    /// Whether the error comes from validating the user-supplied project layout.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GathererError::InvalidProjectPath { .. }
                | GathererError::LockfileNotFound { .. }
                | GathererError::NodeModulesNotFound { .. }
        )
    }
}
