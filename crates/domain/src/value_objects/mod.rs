//! Value objects: immutable, structurally equal building blocks.

mod names;
mod recipe_input;
mod recipe_output;

pub use names::{ItemName, ProfessionName};
pub use recipe_input::RecipeInput;
pub use recipe_output::RecipeOutput;
