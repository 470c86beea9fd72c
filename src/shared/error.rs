use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report rendered successfully
    Success = 0,
    /// Application error (brew missing, command failure, malformed snapshot, I/O error)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the brewls report.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Variants carrying a `source` keep the underlying cause in the error chain,
/// which `main` prints as `Caused by:` lines.
#[derive(Debug, Error)]
pub enum BrewLsError {
    #[error("Homebrew 'brew' command not found: {details}\n\n💡 Hint: Please ensure Homebrew is installed and `brew` is on your PATH, or set BREWLS_BREW_BIN")]
    BrewNotFound { details: String },

    #[error("Failed to start command: {}", .program.display())]
    CommandSpawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command finished with error: {command} ({status})\nStderr: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to decode brew info JSON output\n\n💡 Hint: Please verify that your Homebrew version supports `brew info --json=v2`")]
    SnapshotDecode {
        #[source]
        source: serde_json::Error,
    },

    /// Validation error for domain value objects
    #[error("Validation error: {message}")]
    Validation { message: String },
}
