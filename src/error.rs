//! Typed errors for implicant-replay.
//!
//! Playback itself never fails; these cover loading host data, validating
//! configuration and replaying command scripts.

use thiserror::Error;

/// Top-level error type for implicant-replay operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Error while loading a trace.
    #[error("Trace error: {0}")]
    Trace(#[from] TraceError),

    /// Invalid player configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error during command replay or trace verification.
    #[cfg(feature = "replay")]
    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error while loading a trace.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TraceError {
    /// A step identifier is neither a string nor an integer.
    #[error("Step {step}, role '{role}': identifier must be a string or integer, got: {found}")]
    InvalidIdentifier {
        step: usize,
        role: String,
        found: String,
    },

    /// Failed to parse trace JSON.
    #[error("Failed to parse trace: {0}")]
    Parse(String),
}

/// Invalid player configuration.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A field that must name something is empty.
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Two fields that must differ share a value.
    #[error("Fields '{first}' and '{second}' share the value '{value}'")]
    Conflict {
        first: &'static str,
        second: &'static str,
        value: String,
    },
}

/// Error during command replay or trace verification.
#[cfg(feature = "replay")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReplayError {
    /// Command name not recognized.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Failed to parse a command script.
    #[error("Failed to parse command script: {0}")]
    Parse(String),

    /// A command left the player unchanged.
    #[error("Command {index} ('{command}') had no effect in {mode} mode at cursor {cursor}")]
    Rejected {
        index: usize,
        command: String,
        mode: String,
        cursor: usize,
    },

    /// The trace page could not be entered.
    #[error("Cannot start a simulation: the page has no container or the trace is empty")]
    NotReady,

    /// Page state after an operation differs from the expected state.
    #[error("Page mismatch at cursor {cursor} ({operation}):\n{diff}")]
    Mismatch {
        cursor: usize,
        operation: String,
        diff: String,
    },

    /// A boundary control was in the wrong state.
    #[error("Control '{control}' should be {expected} at cursor {cursor}")]
    Boundary {
        control: String,
        expected: &'static str,
        cursor: usize,
    },
}

/// Result type alias using implicant-replay's Error.
pub type ImplicantResult<T> = std::result::Result<T, Error>;
