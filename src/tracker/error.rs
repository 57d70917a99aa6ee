//! Typed errors for the tracker engine.

use thiserror::Error;

/// Errors the tracker can surface to callers. Everything else propagates as
/// an opaque database error via `anyhow`.
#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    /// No goals are set. Not recoverable except by configuring a goal first.
    #[error("no goals configured — set one with `nosh goal set` first")]
    NoGoalsConfigured,

    /// Tolerance outside 0–100, rejected at goal-configuration time.
    #[error("tolerance must be between 0 and 100, got {0}")]
    InvalidTolerance(f64),

    /// Non-positive target, rejected at goal-configuration time.
    #[error("target must be positive, got {0}")]
    InvalidTarget(f64),

    /// A macro key outside calories/protein/carbs/fat.
    #[error("unknown macro key: {0} (expected calories, protein, carbs, or fat)")]
    UnknownMacro(String),
}
