//! Error types for the qtuidocmake driver

use thiserror::Error;

/// Exit status for a runtime failure after the arguments parsed cleanly.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status for a usage error, matching the usual argument-parser convention.
pub const EXIT_USAGE: i32 = 2;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UI file not found: {path}")]
    FileNotFound { path: String },

    #[error("UI compiler '{program}' could not be started: {message}")]
    ToolNotFound { program: String, message: String },

    #[error("An error occurred during UI processing: {message}")]
    Compiler { message: String },

    #[error("Preview failed: {message}")]
    Preview { message: String },

    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

pub type Result<T> = std::result::Result<T, DriverError>;

impl DriverError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn tool_not_found(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolNotFound {
            program: program.into(),
            message: message.into(),
        }
    }

    pub fn compiler(message: impl Into<String>) -> Self {
        Self::Compiler {
            message: message.into(),
        }
    }

    pub fn preview(message: impl Into<String>) -> Self {
        Self::Preview {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Process exit status this error maps to at the process boundary.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}
