//! Domain entities: immutable, factory-constructed, sentinel-aware.

mod item;
mod profession;
mod recipe;

pub use item::Item;
pub use profession::Profession;
pub use recipe::Recipe;
