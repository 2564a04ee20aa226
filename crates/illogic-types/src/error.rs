// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for Illogic Kernel failures.
///
/// Classification and metric computation are infallible; these errors
/// only surface from construction-time configuration and serialization.
#[derive(Error, Debug)]
pub enum IllogicError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input (sample set, parameters).
    #[error("validation error: {0}")]
    Validation(String),

    /// A custom rule names a fault kind that was never registered.
    #[error("unknown fault kind: {0}")]
    UnknownKind(String),

    /// A custom fault kind collides with a built-in or earlier custom kind.
    #[error("duplicate fault kind: {0}")]
    DuplicateKind(String),

    /// Report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type IllogicResult<T> = Result<T, IllogicError>;
