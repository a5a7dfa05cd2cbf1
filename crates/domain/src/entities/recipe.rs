//! Recipe entity - a crafting recipe with its update operations.
//!
//! A recipe is never mutated in place: every "update" validates its
//! preconditions, accumulating recipe-side and argument-side failures
//! before reporting, then either returns the original unchanged (no-op
//! cases) or reconstructs a new instance through the factory so the full
//! set of invariants is re-checked.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use craftingtools_shared::{Failures, RailwayError, RailwayFailure, RailwayResult};

use crate::entities::{Item, Profession};
use crate::ids::RecipeId;
use crate::value_objects::{RecipeInput, RecipeOutput};

/// An immutable crafting recipe: one output produced from a set of inputs
/// by a profession.
///
/// Inputs are unique by item and stored in canonical item-id order, so
/// structural equality is independent of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    id: RecipeId,
    profession: Profession,
    output: RecipeOutput,
    inputs: Vec<RecipeInput>,
}

impl Recipe {
    /// The "no recipe" sentinel.
    pub fn none() -> Self {
        Self {
            id: RecipeId::nil(),
            profession: Profession::none(),
            output: RecipeOutput::none(),
            inputs: Vec::new(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.id.is_nil()
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn profession(&self) -> &Profession {
        &self.profession
    }

    pub fn output(&self) -> &RecipeOutput {
        &self.output
    }

    pub fn inputs(&self) -> &[RecipeInput] {
        &self.inputs
    }

    /// The input consuming the given item, if any.
    pub fn input_for(&self, item: &Item) -> Option<&RecipeInput> {
        self.inputs.iter().find(|input| input.item() == item)
    }

    /// Factory method creating a recipe from the supplied parameters.
    ///
    /// Every parameter is validated and every failure accumulated: nil id,
    /// sentinel profession, sentinel output, each invalid input, and
    /// duplicate items across inputs. Two inputs for the same item are
    /// rejected even when their counts differ.
    pub fn from_parameters(
        id: RecipeId,
        profession: Profession,
        output: RecipeOutput,
        inputs: Vec<RecipeInput>,
        result_id: Option<&str>,
    ) -> RailwayResult<Self> {
        let rid = result_id.unwrap_or("recipe");
        let mut failures = Failures::new();

        let valid_id = RailwayResult::success(id, "id")
            .check(|value| !value.is_nil(), "Recipe id cannot be empty.")
            .unwrap_or_add_to_failures(&mut failures, RecipeId::nil());

        let valid_profession = profession
            .to_valid_result(Some("profession"))
            .unwrap_or_add_to_failures(&mut failures, Profession::none());

        let valid_output = output
            .to_valid_result(Some("output"))
            .unwrap_or_add_to_failures(&mut failures, RecipeOutput::none());

        let mut inputs_ok = true;
        let mut valid_inputs = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.into_iter().enumerate() {
            let before = failures.len();
            let valid = input
                .to_valid_result(Some(&format!("inputs[{index}]")))
                .unwrap_or_add_to_failures(&mut failures, RecipeInput::none());
            inputs_ok &= failures.len() == before;
            valid_inputs.push(valid);
        }

        // Sentinel placeholders would alias each other, so the uniqueness
        // invariant is only meaningful when every input validated.
        if inputs_ok {
            let mut seen = HashSet::new();
            if !valid_inputs.iter().all(|input| seen.insert(input.item().id())) {
                failures.push(RailwayFailure::new(
                    RailwayError::new("Recipe inputs contain duplicate items."),
                    "inputs",
                ));
            }
        }

        if !failures.is_empty() {
            return RailwayResult::failure(failures.into_error("Unable to create recipe."), rid);
        }

        valid_inputs.sort_by_key(|input| input.item().id());

        RailwayResult::success(
            Self {
                id: valid_id,
                profession: valid_profession,
                output: valid_output,
                inputs: valid_inputs,
            },
            rid,
        )
    }

    /// Wraps the instance in a railway result, rejecting the sentinel.
    pub fn to_valid_result(&self, result_id: Option<&str>) -> RailwayResult<Self> {
        RailwayResult::success(self.clone(), result_id.unwrap_or("recipe"))
            .check(|value| !value.is_none(), "Recipe cannot be none.")
    }

    /// Replace the recipe's output.
    ///
    /// Setting an output equal to the current one is an idempotent no-op
    /// returning the original recipe; otherwise the recipe is rebuilt
    /// through the factory.
    pub fn set_output(
        &self,
        output: RecipeOutput,
        result_id: Option<&str>,
    ) -> RailwayResult<Self> {
        let rid = result_id.unwrap_or("recipe");
        let mut failures = Failures::new();

        let valid_recipe = self
            .to_valid_result(Some("recipe"))
            .unwrap_or_add_to_failures(&mut failures, Recipe::none());

        let valid_output = output
            .to_valid_result(Some("output"))
            .unwrap_or_add_to_failures(&mut failures, RecipeOutput::none());

        if !failures.is_empty() {
            return RailwayResult::failure(failures.into_error("Unable to set output."), rid);
        }

        if valid_recipe.output == valid_output {
            return RailwayResult::success(valid_recipe, rid);
        }

        Recipe::from_parameters(
            valid_recipe.id,
            valid_recipe.profession,
            valid_output,
            valid_recipe.inputs,
            Some(rid),
        )
    }

    /// Append an input and rebuild the recipe.
    ///
    /// An input whose item is already consumed by the recipe surfaces as a
    /// duplicate-items failure from the factory invariant.
    pub fn add_input(&self, input: RecipeInput, result_id: Option<&str>) -> RailwayResult<Self> {
        let rid = result_id.unwrap_or("recipe");
        let mut failures = Failures::new();

        let valid_recipe = self
            .to_valid_result(Some("recipe"))
            .unwrap_or_add_to_failures(&mut failures, Recipe::none());

        let valid_input = input
            .to_valid_result(Some("input"))
            .unwrap_or_add_to_failures(&mut failures, RecipeInput::none());

        if !failures.is_empty() {
            return RailwayResult::failure(failures.into_error("Unable to add input."), rid);
        }

        let mut inputs = valid_recipe.inputs;
        inputs.push(valid_input);

        Recipe::from_parameters(
            valid_recipe.id,
            valid_recipe.profession,
            valid_recipe.output,
            inputs,
            Some(rid),
        )
    }

    /// Build a [`RecipeInput`] from raw parts and append it on success.
    pub fn add_input_with(
        &self,
        item: Item,
        count: u32,
        result_id: Option<&str>,
    ) -> RailwayResult<Self> {
        RecipeInput::from_parameters(item, count, result_id)
            .on_success(|input| self.add_input(input, result_id))
    }

    /// Remove every input consuming the given item.
    ///
    /// Deleting an item the recipe does not consume is an idempotent no-op
    /// returning the original recipe.
    pub fn delete_input(&self, item: &Item, result_id: Option<&str>) -> RailwayResult<Self> {
        let rid = result_id.unwrap_or("recipe");
        let mut failures = Failures::new();

        let valid_recipe = self
            .to_valid_result(Some("recipe"))
            .unwrap_or_add_to_failures(&mut failures, Recipe::none());

        let valid_item = item
            .to_valid_result(Some("item"))
            .unwrap_or_add_to_failures(&mut failures, Item::none());

        if !failures.is_empty() {
            return RailwayResult::failure(failures.into_error("Unable to delete input."), rid);
        }

        let remaining: Vec<RecipeInput> = valid_recipe
            .inputs
            .iter()
            .filter(|input| input.item() != &valid_item)
            .cloned()
            .collect();

        if remaining.len() == valid_recipe.inputs.len() {
            return RailwayResult::success(valid_recipe, rid);
        }

        Recipe::from_parameters(
            valid_recipe.id,
            valid_recipe.profession,
            valid_recipe.output,
            remaining,
            Some(rid),
        )
    }

    /// Insert or replace the input for the given input's item.
    ///
    /// If the exact input (same item and count) is already present the
    /// original recipe is returned unchanged; otherwise any same-item input
    /// is replaced and the recipe rebuilt.
    pub fn set_input(&self, input: RecipeInput, result_id: Option<&str>) -> RailwayResult<Self> {
        let rid = result_id.unwrap_or("recipe");
        let mut failures = Failures::new();

        let valid_recipe = self
            .to_valid_result(Some("recipe"))
            .unwrap_or_add_to_failures(&mut failures, Recipe::none());

        let valid_input = input
            .to_valid_result(Some("input"))
            .unwrap_or_add_to_failures(&mut failures, RecipeInput::none());

        if !failures.is_empty() {
            return RailwayResult::failure(failures.into_error("Unable to set input."), rid);
        }

        if valid_recipe.inputs.contains(&valid_input) {
            return RailwayResult::success(valid_recipe, rid);
        }

        let mut inputs: Vec<RecipeInput> = valid_recipe
            .inputs
            .iter()
            .filter(|existing| existing.item() != valid_input.item())
            .cloned()
            .collect();
        inputs.push(valid_input);

        Recipe::from_parameters(
            valid_recipe.id,
            valid_recipe.profession,
            valid_recipe.output,
            inputs,
            Some(rid),
        )
    }
}
