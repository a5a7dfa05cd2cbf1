//! A recipe input: an item consumed by a recipe, with a count.

use serde::{Deserialize, Serialize};

use craftingtools_shared::{Failures, RailwayResult, ValueObject};

use crate::entities::Item;

/// An item and the number of units a recipe consumes of it.
///
/// Immutable and structurally equal; two inputs are the same only when both
/// item and count match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeInput {
    item: Item,
    count: u32,
}

impl RecipeInput {
    /// The "no input" sentinel: a valid placeholder, an invalid argument.
    pub fn none() -> Self {
        Self {
            item: Item::none(),
            count: 0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.item.is_none()
    }

    /// The item being consumed.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The number of items being consumed.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Factory method validating the raw parameters.
    ///
    /// The item must be a real (non-sentinel) item and the count strictly
    /// positive; both failures are accumulated and reported together.
    pub fn from_parameters(item: Item, count: u32, result_id: Option<&str>) -> RailwayResult<Self> {
        let id = result_id.unwrap_or("input");
        let mut failures = Failures::new();

        let valid_item = item
            .to_valid_result(Some("item"))
            .unwrap_or_add_to_failures(&mut failures, Item::none());

        let valid_count = RailwayResult::success(count, "count")
            .check(|value| *value > 0, "Count must be positive.")
            .unwrap_or_add_to_failures(&mut failures, 0);

        if failures.is_empty() {
            RailwayResult::success(
                Self {
                    item: valid_item,
                    count: valid_count,
                },
                id,
            )
        } else {
            RailwayResult::failure(failures.into_error("Unable to create recipe input."), id)
        }
    }

    /// Wraps the instance in a railway result, rejecting the sentinel.
    pub fn to_valid_result(&self, result_id: Option<&str>) -> RailwayResult<Self> {
        RailwayResult::success(self.clone(), result_id.unwrap_or("input"))
            .check(|value| !value.is_none(), "Recipe input cannot be none.")
    }
}

impl ValueObject for RecipeInput {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ItemId;
    use crate::value_objects::ItemName;
    use craftingtools_shared::{RailwayError, ResultStatus};

    fn item(name: &str) -> Item {
        Item::from_parameters(
            ItemId::new(),
            ItemName::from_parameter(name, None).unwrap(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_from_parameters_valid() {
        let input = RecipeInput::from_parameters(item("Coal"), 3, Some("resultId"));
        assert_eq!(input.status(), ResultStatus::Success);
        assert_eq!(input.id(), "resultId");
        let input = input.unwrap();
        assert_eq!(input.item().name().as_str(), "Coal");
        assert_eq!(input.count(), 3);
    }

    #[test]
    fn test_from_parameters_rejects_none_item() {
        let result = RecipeInput::from_parameters(Item::none(), 5, None);
        assert_eq!(result.status(), ResultStatus::Failure);
        let error = result.error().expect("failure carries an error");
        assert_eq!(error.message(), "Unable to create recipe input.");
        assert_eq!(error.details(), ["item: Item cannot be none."]);
    }

    #[test]
    fn test_from_parameters_rejects_zero_count() {
        let result = RecipeInput::from_parameters(item("Coal"), 0, None);
        let error = result.error().expect("failure carries an error");
        assert_eq!(error.message(), "Unable to create recipe input.");
        assert_eq!(error.details(), ["count: Count must be positive."]);
    }

    #[test]
    fn test_from_parameters_accumulates_both_failures() {
        let result = RecipeInput::from_parameters(Item::none(), 0, None);
        let error = result.error().expect("failure carries an error");
        assert_eq!(error.message(), "Unable to create recipe input.");
        assert_eq!(
            error.details(),
            [
                "item: Item cannot be none.".to_string(),
                "count: Count must be positive.".to_string(),
            ]
        );
    }

    #[test]
    fn test_to_valid_result_rejects_sentinel() {
        let result = RecipeInput::none().to_valid_result(None);
        assert_eq!(
            result.error().map(RailwayError::message),
            Some("Recipe input cannot be none.")
        );
    }

    #[test]
    fn test_structural_equality() {
        let coal = item("Coal");
        let a = RecipeInput::from_parameters(coal.clone(), 2, None).unwrap();
        let b = RecipeInput::from_parameters(coal.clone(), 2, None).unwrap();
        let c = RecipeInput::from_parameters(coal, 3, None).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
