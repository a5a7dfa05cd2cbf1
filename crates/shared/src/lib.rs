//! CraftingTools Shared - Railway result type and supporting contracts.
//!
//! The railway result is the validation backbone of the domain layer:
//! factories validate every raw parameter, accumulate independent failures,
//! and report them as one aggregate error instead of failing fast.

pub mod error;
pub mod railway;
pub mod value_object;

pub use error::{RailwayError, RailwayFailure};
pub use railway::{Failures, OptionRailwayExt, RailwayResult, ResultStatus};
pub use value_object::ValueObject;
