//! Railway-oriented result type.
//!
//! A [`RailwayResult`] carries either a validated value or a validation
//! error, together with a free-form correlation id that names the parameter
//! or context the result was produced for. Validation steps are composed
//! with [`RailwayResult::check`] and [`RailwayResult::on_success`]; multiple
//! independent validations accumulate into a [`Failures`] collection via
//! [`RailwayResult::unwrap_or_add_to_failures`] so that every field-level
//! problem surfaces in a single aggregate error instead of failing fast.

use crate::error::{RailwayError, RailwayFailure};

/// Discriminant of a [`RailwayResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    Success,
    Failure,
}

/// Outcome of a validation: a value or an error, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RailwayResult<T> {
    Success { value: T, id: String },
    Failure { error: RailwayError, id: String },
}

impl<T> RailwayResult<T> {
    /// Wrap a validated value.
    pub fn success(value: T, id: impl Into<String>) -> Self {
        Self::Success {
            value,
            id: id.into(),
        }
    }

    /// Wrap a validation error.
    pub fn failure(error: RailwayError, id: impl Into<String>) -> Self {
        Self::Failure {
            error,
            id: id.into(),
        }
    }

    pub fn status(&self) -> ResultStatus {
        match self {
            Self::Success { .. } => ResultStatus::Success,
            Self::Failure { .. } => ResultStatus::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The correlation id this result was produced for.
    pub fn id(&self) -> &str {
        match self {
            Self::Success { id, .. } | Self::Failure { id, .. } => id,
        }
    }

    /// The error of a failed result, if any.
    pub fn error(&self) -> Option<&RailwayError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// Extract the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure. This is programmer misuse: callers
    /// unwrap only after confirming success. Expected validation failures
    /// never panic.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success { value, .. } => value,
            Self::Failure { error, id } => {
                panic!("unwrapped a failure railway result (id: {id}): {error}")
            }
        }
    }

    /// Re-validate the success value against a predicate, converting to a
    /// failure with `failure_message` when it does not hold. A failure
    /// passes through unchanged.
    pub fn check(self, predicate: impl FnOnce(&T) -> bool, failure_message: &str) -> Self {
        match self {
            Self::Success { value, id } => {
                if predicate(&value) {
                    Self::Success { value, id }
                } else {
                    Self::Failure {
                        error: RailwayError::new(failure_message),
                        id,
                    }
                }
            }
            failure @ Self::Failure { .. } => failure,
        }
    }

    /// Monadic bind: apply `f` to the success value, or propagate the
    /// failure unchanged. The propagated failure keeps this result's id,
    /// never the inner call's.
    pub fn on_success<U>(self, f: impl FnOnce(T) -> RailwayResult<U>) -> RailwayResult<U> {
        match self {
            Self::Success { value, .. } => f(value),
            Self::Failure { error, id } => RailwayResult::Failure { error, id },
        }
    }

    /// Accumulating unwrap: a success yields its value and leaves the
    /// accumulator untouched; a failure is recorded in `failures` and the
    /// caller-chosen `placeholder` is returned so later validations in the
    /// same scope still run and report their own problems.
    pub fn unwrap_or_add_to_failures(self, failures: &mut Failures, placeholder: T) -> T {
        match self {
            Self::Success { value, .. } => value,
            Self::Failure { error, id } => {
                failures.push(RailwayFailure::new(error, id));
                placeholder
            }
        }
    }
}

/// Lift an optional value into a railway result.
pub trait OptionRailwayExt<T> {
    /// `Some` becomes a success; `None` fails with `failure_message`.
    fn to_result_is_some(self, failure_message: &str, id: &str) -> RailwayResult<T>;
}

impl<T> OptionRailwayExt<T> for Option<T> {
    fn to_result_is_some(self, failure_message: &str, id: &str) -> RailwayResult<T> {
        match self {
            Some(value) => RailwayResult::success(value, id),
            None => RailwayResult::failure(RailwayError::new(failure_message), id),
        }
    }
}

/// Ordered accumulator of validation failures.
///
/// Threaded through multi-field constructors so that every invalid
/// parameter is reported in one aggregate error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failures(Vec<RailwayFailure>);

impl Failures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, failure: RailwayFailure) {
        self.0.push(failure);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RailwayFailure> {
        self.0.iter()
    }

    /// Collapse the recorded failures into one aggregate error whose
    /// message is `context_message` and whose details carry the underlying
    /// failure messages in recording order.
    pub fn into_error(self, context_message: &str) -> RailwayError {
        let mut details = Vec::with_capacity(self.0.len());
        for failure in &self.0 {
            details.push(failure.detail_line());
            for detail in failure.error().details() {
                details.push(detail.clone());
            }
        }
        RailwayError::aggregate(context_message, details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(value: i32) -> RailwayResult<i32> {
        RailwayResult::success(value, "value").check(|v| *v > 0, "Value must be positive.")
    }

    #[test]
    fn test_success_carries_value_and_id() {
        let result = RailwayResult::success(7, "count");
        assert_eq!(result.status(), ResultStatus::Success);
        assert_eq!(result.id(), "count");
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_check_converts_to_failure_with_same_id() {
        let result = positive(-1);
        assert_eq!(result.status(), ResultStatus::Failure);
        assert_eq!(result.id(), "value");
        assert_eq!(
            result.error().map(RailwayError::message),
            Some("Value must be positive.")
        );
    }

    #[test]
    fn test_check_short_circuits_existing_failure() {
        let result = positive(-1).check(|v| *v < 100, "Value must be small.");
        assert_eq!(
            result.error().map(RailwayError::message),
            Some("Value must be positive.")
        );
    }

    #[test]
    #[should_panic(expected = "unwrapped a failure railway result")]
    fn test_unwrap_failure_panics() {
        positive(-1).unwrap();
    }

    #[test]
    fn test_on_success_binds_value() {
        let result = positive(2).on_success(|v| RailwayResult::success(v * 10, "scaled"));
        assert_eq!(result.unwrap(), 20);
    }

    #[test]
    fn test_on_success_propagates_outer_failure_and_id() {
        let result = positive(-1).on_success(|v| RailwayResult::success(v * 10, "scaled"));
        assert_eq!(result.status(), ResultStatus::Failure);
        assert_eq!(result.id(), "value");
    }

    #[test]
    fn test_to_result_is_some() {
        let present = Some(3).to_result_is_some("Value cannot be absent.", "value");
        assert_eq!(present.unwrap(), 3);

        let absent: RailwayResult<i32> =
            None.to_result_is_some("Value cannot be absent.", "value");
        assert_eq!(
            absent.error().map(RailwayError::message),
            Some("Value cannot be absent.")
        );
    }

    #[test]
    fn test_accumulation_collects_all_failures() {
        let mut failures = Failures::new();

        let first = positive(-1).unwrap_or_add_to_failures(&mut failures, 0);
        let second = RailwayResult::success("name", "name")
            .check(|v| !v.is_empty(), "Name cannot be empty.")
            .unwrap_or_add_to_failures(&mut failures, "");
        let third = positive(5).unwrap_or_add_to_failures(&mut failures, 0);

        assert_eq!(first, 0);
        assert_eq!(second, "name");
        assert_eq!(third, 5);
        assert_eq!(failures.len(), 1);

        let error = failures.into_error("Unable to create thing.");
        assert_eq!(error.message(), "Unable to create thing.");
        assert_eq!(error.details(), ["value: Value must be positive."]);
    }

    #[test]
    fn test_aggregate_error_flattens_nested_details() {
        let mut outer = Failures::new();
        let mut inner = Failures::new();
        inner.push(RailwayFailure::new(
            RailwayError::new("Count must be positive."),
            "count",
        ));
        let nested = RailwayResult::<i32>::failure(inner.into_error("Unable to create input."), "input");
        let _ = nested.unwrap_or_add_to_failures(&mut outer, 0);

        let error = outer.into_error("Unable to create recipe.");
        assert_eq!(
            error.details(),
            [
                "input: Unable to create input.".to_string(),
                "count: Count must be positive.".to_string(),
            ]
        );
    }
}
