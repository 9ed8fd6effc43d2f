// ─────────────────────────────────────────────────────────────────────
// Kuramoto Index Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Kuramoto kernel failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KuramotoError {
    /// Input array violates a dimensionality precondition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Numerical error (NaN/Inf in the phase channels).
    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type KuramotoResult<T> = Result<T, KuramotoError>;
