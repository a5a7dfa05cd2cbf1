//! Value object contract: equality by value, not identity.

use std::fmt::Debug;

/// Marker trait for value objects.
///
/// Implementors are immutable and compared structurally over their field
/// set; equality and hashing come from derives, never from reference
/// identity.
pub trait ValueObject: Clone + PartialEq + Debug {}
