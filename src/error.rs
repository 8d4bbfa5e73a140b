//! Error types for a single converter attempt.

use std::fmt;
use thiserror::Error;

/// Why a file could not be converted.
///
/// Both reasons are treated the same way by the fallback chain; the tag only
/// tells the caller what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The converter executable could not be found.
    MissingTool,
    /// The converter ran (or could not be spawned) and did not succeed.
    ToolError,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MissingTool => write!(f, "missing tool"),
            FailureReason::ToolError => write!(f, "tool error"),
        }
    }
}

/// Failure of one converter on one file.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("{tool} is not installed or not on PATH")]
    MissingTool { tool: String },

    #[error("{tool} failed to start: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Non-zero exit or killed by a signal. `stderr` is kept for callers but never printed.
    #[error("{tool} exited with {status}")]
    ToolError {
        tool: String,
        status: String,
        stderr: String,
    },
}

impl AttemptError {
    pub fn reason(&self) -> FailureReason {
        match self {
            AttemptError::MissingTool { .. } => FailureReason::MissingTool,
            AttemptError::Spawn { .. } | AttemptError::ToolError { .. } => FailureReason::ToolError,
        }
    }

    /// Name of the converter that produced this error.
    pub fn tool(&self) -> &str {
        match self {
            AttemptError::MissingTool { tool }
            | AttemptError::Spawn { tool, .. }
            | AttemptError::ToolError { tool, .. } => tool,
        }
    }
}
