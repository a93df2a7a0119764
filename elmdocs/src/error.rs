//! Error types for `elmdocs`
//!
//! This module provides the top-level error hierarchy and the exit codes
//! each failure maps to.

use std::path::PathBuf;

use elmdocs_core::SchemaError;
use elmdocs_markdown::DocsError;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `elmdocs` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// Compiler output parsed but contained no modules
    pub const EMPTY_RESULT: i32 = 1;

    /// Compiler output could not be parsed, read or cleaned up
    pub const MALFORMED_OUTPUT: i32 = 2;

    /// I/O error (output not writable, input not readable)
    pub const IO_ERROR: i32 = 3;

    /// The compiler could not be started or exited unsuccessfully
    pub const COMPILER_ERROR: i32 = 4;

    /// Rendering failed (unresolved `@docs` directive)
    pub const RENDER_ERROR: i32 = 5;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `elmdocs` operations.
#[derive(Debug, Error)]
pub enum ElmDocsError {
    /// The project descriptor is missing from the project directory.
    ///
    /// Reported to the user without failing the process.
    #[error(
        "I couldn't find {}. Make sure you are in the correct directory.",
        path.display()
    )]
    MissingPrerequisite {
        /// Expected descriptor location
        path: PathBuf,
    },

    /// Compiler invocation or artifact handling failed
    #[error(transparent)]
    Compiler(#[from] CompilerError),

    /// Docs JSON could not be decoded
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Markdown rendering failed
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// Docs JSON decoded to an empty module list
    #[error("compiler output contains no modules")]
    EmptyResult,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ElmDocsError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingPrerequisite { .. } => ExitCode::SUCCESS,
            Self::Compiler(CompilerError::Spawn { .. } | CompilerError::Failed { .. }) => {
                ExitCode::COMPILER_ERROR
            }
            Self::Compiler(CompilerError::Artifact { .. }) | Self::Schema(_) => {
                ExitCode::MALFORMED_OUTPUT
            }
            Self::Docs(_) => ExitCode::RENDER_ERROR,
            Self::EmptyResult => ExitCode::EMPTY_RESULT,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Compiler Errors
// ============================================================================

/// Failures of the external compiler collaborator.
#[derive(Debug, Error)]
pub enum CompilerError {
    /// The compiler process could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// The compiler exited unsuccessfully
    #[error(
        "{program} failed{}{}",
        code.map_or_else(String::new, |c| format!(" with exit code {c}")),
        if stderr.is_empty() { String::new() } else { format!(": {stderr}") }
    )]
    Failed {
        /// Program that was invoked
        program: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The docs artifact could not be read or removed
    #[error("cannot access docs output {}: {source}", path.display())]
    Artifact {
        /// Artifact location
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type alias for `elmdocs` operations.
pub type Result<T> = std::result::Result<T, ElmDocsError>;

// ============================================================================
// Tests
// ============================================================================
