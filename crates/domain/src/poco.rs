//! Transport records crossing the domain boundary.
//!
//! Plain mutable data shapes with optional fields, consumed only by the
//! `from_poco` factories; never used internally.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transport shape for an [`crate::Item`].
///
/// All fields are optional: absence is decided by the factory, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPoco {
    pub id: Option<Uuid>,
    pub name: Option<String>,
}
