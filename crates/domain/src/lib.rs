//! CraftingTools Domain - Immutable crafting entities and their validation.
//!
//! Every entity is constructed through a validating factory returning a
//! [`craftingtools_shared::RailwayResult`]; "updates" are pure operations
//! that re-validate their preconditions and reconstruct a new instance
//! through the factory. Independent field failures are accumulated and
//! reported as one aggregate error per operation.

pub mod entities;
pub mod ids;
pub mod poco;
pub mod repository;
pub mod value_objects;

pub use entities::{Item, Profession, Recipe};
pub use ids::{ItemId, ProfessionId, RecipeId};
pub use poco::ItemPoco;
pub use repository::ProfessionRepository;
pub use value_objects::{ItemName, ProfessionName, RecipeInput, RecipeOutput};
