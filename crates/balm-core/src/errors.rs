/// Engine errors.
///
/// No-match outcomes and empty catalog lookups are ordinary values, not
/// errors; everything here is either a programming-contract violation or
/// bad configuration.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("vector length mismatch: left {left}, right {right}")]
    VectorLengthMismatch { left: usize, right: usize },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
