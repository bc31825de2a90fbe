//! Error types for the sweep engine.
//!
//! Two kinds cover every failure mode: a malformed size/probability range,
//! and an input outside the models' domain. Both are raised synchronously at
//! the point of invalid input — the engine is deterministic, so nothing is
//! retried and nothing is swallowed.

use std::error::Error;
use std::fmt;

/// Error raised by grid generation, model evaluation, or threshold detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// Malformed size or probability range (e.g. lower > upper).
    InvalidRange { message: String },
    /// Input outside the models' domain (p outside [0,1], or n = 0).
    Domain { message: String },
}

impl SweepError {
    pub fn invalid_range(message: impl Into<String>) -> Self {
        SweepError::InvalidRange {
            message: message.into(),
        }
    }

    pub fn domain(message: impl Into<String>) -> Self {
        SweepError::Domain {
            message: message.into(),
        }
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::InvalidRange { message } => write!(f, "invalid range: {}", message),
            SweepError::Domain { message } => write!(f, "domain error: {}", message),
        }
    }
}

impl Error for SweepError {}
