//! A recipe output: the item a recipe produces, with a count.

use serde::{Deserialize, Serialize};

use craftingtools_shared::{Failures, RailwayResult, ValueObject};

use crate::entities::Item;

/// An item and the number of units a recipe produces of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeOutput {
    item: Item,
    count: u32,
}

impl RecipeOutput {
    /// The "no output" sentinel: a valid placeholder, an invalid argument.
    pub fn none() -> Self {
        Self {
            item: Item::none(),
            count: 0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.item.is_none()
    }

    /// The item being produced.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The number of items being produced.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Factory method validating the raw parameters.
    ///
    /// The item must be a real (non-sentinel) item and the count strictly
    /// positive; both failures are accumulated and reported together.
    pub fn from_parameters(item: Item, count: u32, result_id: Option<&str>) -> RailwayResult<Self> {
        let id = result_id.unwrap_or("output");
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
            RailwayResult::failure(failures.into_error("Unable to create recipe output."), id)
        }
    }

    /// Wraps the instance in a railway result, rejecting the sentinel.
    pub fn to_valid_result(&self, result_id: Option<&str>) -> RailwayResult<Self> {
        RailwayResult::success(self.clone(), result_id.unwrap_or("output"))
            .check(|value| !value.is_none(), "Recipe output cannot be none.")
    }
}

impl ValueObject for RecipeOutput {}
