//! Behavior error type.
//!
//! Two classes of failure exist.  Configuration failures are raised at
//! construction — a behavior with bad parameters is never built, so no
//! partially-valid instance can reach its first update.  Resolution failures
//! are raised *per update* by behaviors that reference other channels, and
//! are recoverable: the instance stays unresolved and the next update
//! retries the lookup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    // ── Configuration failures (construction-time, not retried) ──────────
    #[error("expected {expected} parameters, got {got}")]
    ParamCount { expected: usize, got: usize },

    #[error("missing parameter `{name}` at position {index}")]
    MissingParam { name: &'static str, index: usize },

    #[error("parameter `{name}` at position {index}: expected a number, got `{found}`")]
    NonNumericParam {
        name:  &'static str,
        index: usize,
        found: String,
    },

    #[error("parameter `{name}` at position {index}: expected text, got `{found}`")]
    TextParam {
        name:  &'static str,
        index: usize,
        found: String,
    },

    #[error("jitter range must be >= 0, got {0}")]
    NegativeRange(f64),

    #[error("unknown behavior kind `{0}`")]
    UnknownKind(String),

    // ── Resolution failures (update-time, retried on the next update) ─────
    #[error("channel `{name}` not found")]
    ChannelNotFound { name: String },
}

impl BehaviorError {
    /// `true` for failures a later update may recover from (the referenced
    /// channel can be registered after this behavior was constructed).
    /// Configuration failures are never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BehaviorError::ChannelNotFound { .. })
    }
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
