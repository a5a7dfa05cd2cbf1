//! Error types carried by railway results.
//!
//! A [`RailwayError`] is a validation failure, not a system fault. A single
//! error carries one message; an aggregate error carries a context message
//! plus the messages of the underlying failures as details.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error carried by a failed railway result.
///
/// `Display` renders only the top-level message; [`RailwayError::details`]
/// exposes the per-field messages of an aggregate for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RailwayError {
    message: String,
    details: Vec<String>,
}

impl RailwayError {
    /// Create an error with a single message and no details.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Create an aggregate error: a context message plus underlying details.
    pub fn aggregate(message: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }

    /// The top-level message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying failure messages, empty for a single error.
    pub fn details(&self) -> &[String] {
        &self.details
    }
}

/// One recorded failure: the error plus the correlation id of the result
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailwayFailure {
    error: RailwayError,
    id: String,
}

impl RailwayFailure {
    pub fn new(error: RailwayError, id: impl Into<String>) -> Self {
        Self {
            error,
            id: id.into(),
        }
    }

    pub fn error(&self) -> &RailwayError {
        &self.error
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render this failure as a detail line of an aggregate error.
    pub(crate) fn detail_line(&self) -> String {
        format!("{}: {}", self.id, self.error.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_message_only() {
        let error = RailwayError::aggregate(
            "Unable to create item.",
            vec!["id: Item id cannot be empty.".into()],
        );
        assert_eq!(error.to_string(), "Unable to create item.");
        assert_eq!(error.details().len(), 1);
    }

    #[test]
    fn test_single_error_has_no_details() {
        let error = RailwayError::new("Count must be positive.");
        assert!(error.details().is_empty());
    }

    #[test]
    fn test_failure_detail_line() {
        let failure = RailwayFailure::new(RailwayError::new("Item cannot be none."), "item");
        assert_eq!(failure.detail_line(), "item: Item cannot be none.");
    }
}
