use thiserror::Error;

// ---------------------------------------------------------------------------
// UtilError: top-level rollup
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum UtilError {
    /// A timer-backed helper was created outside of a tokio runtime.
    #[error("No tokio runtime is running. Timing helpers must be created inside a runtime.")]
    NoRuntime,

    #[error("Condition not met after {waited_ms}ms")]
    Timeout { waited_ms: u64 },

    #[error("Invalid regex: {0}")]
    InvalidRegex(String),

    #[error("Cannot pick {requested} distinct items from {available}")]
    NotEnoughItems { requested: usize, available: usize },
}

impl From<regex::Error> for UtilError {
    fn from(e: regex::Error) -> Self {
        Self::InvalidRegex(e.to_string())
    }
}

/// Convenience alias; the default error type is `UtilError`.
pub type Result<T, E = UtilError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
