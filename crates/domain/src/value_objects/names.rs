//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty after trimming
//! - Within length limits
//! - Trimmed of leading/trailing whitespace
//!
//! Unlike the bare `Result`-returning constructors elsewhere in the
//! ecosystem, the factories here return [`RailwayResult`] so callers can
//! feed name failures into the same accumulator as every other parameter.

use std::fmt;

use serde::{Deserialize, Serialize};

use craftingtools_shared::{RailwayError, RailwayResult, ValueObject};

/// Maximum length for name fields
const MAX_NAME_LENGTH: usize = 200;

// ============================================================================
// ItemName
// ============================================================================

/// A validated item name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// Fails when the name is empty after trimming or exceeds
    /// 200 characters.
    pub fn from_parameter(
        value: impl Into<String>,
        result_id: Option<&str>,
    ) -> RailwayResult<Self> {
        let id = result_id.unwrap_or("name");
        let trimmed = value.into().trim().to_string();
        RailwayResult::success(trimmed, id)
            .check(|v| !v.is_empty(), "Item name cannot be empty.")
            .check(
                |v| v.len() <= MAX_NAME_LENGTH,
                "Item name cannot exceed 200 characters.",
            )
            .on_success(|v| RailwayResult::success(Self(v), id))
    }

    /// The unnamed placeholder backing the `Item` sentinel. Not a valid
    /// name for any real item.
    pub(crate) fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = RailwayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // Empty names round-trip so sentinel items survive serde.
        if value.is_empty() {
            return Ok(Self::empty());
        }
        match ItemName::from_parameter(value, None) {
            RailwayResult::Success { value, .. } => Ok(value),
            RailwayResult::Failure { error, .. } => Err(error),
        }
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

// ============================================================================
// ProfessionName
// ============================================================================

/// A validated profession name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfessionName(String);

impl ProfessionName {
    /// Create a new validated profession name.
    ///
    /// Fails when the name is empty after trimming or exceeds
    /// 200 characters.
    pub fn from_parameter(
        value: impl Into<String>,
        result_id: Option<&str>,
    ) -> RailwayResult<Self> {
        let id = result_id.unwrap_or("name");
        let trimmed = value.into().trim().to_string();
        RailwayResult::success(trimmed, id)
            .check(|v| !v.is_empty(), "Profession name cannot be empty.")
            .check(
                |v| v.len() <= MAX_NAME_LENGTH,
                "Profession name cannot exceed 200 characters.",
            )
            .on_success(|v| RailwayResult::success(Self(v), id))
    }

    /// The unnamed placeholder backing the `Profession` sentinel.
    pub(crate) fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ProfessionName {}

impl fmt::Display for ProfessionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProfessionName {
    type Error = RailwayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Ok(Self::empty());
        }
        match ProfessionName::from_parameter(value, None) {
            RailwayResult::Success { value, .. } => Ok(value),
            RailwayResult::Failure { error, .. } => Err(error),
        }
    }
}

impl From<ProfessionName> for String {
    fn from(name: ProfessionName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftingtools_shared::ResultStatus;

    #[test]
    fn test_item_name_valid() {
        let name = ItemName::from_parameter("Iron Ingot", None).unwrap();
        assert_eq!(name.as_str(), "Iron Ingot");
    }

    #[test]
    fn test_item_name_is_trimmed() {
        let name = ItemName::from_parameter("  Iron Ingot  ", None).unwrap();
        assert_eq!(name.as_str(), "Iron Ingot");
    }

    #[test]
    fn test_item_name_rejects_empty_and_whitespace() {
        for value in ["", "   ", "\t\n"] {
            let result = ItemName::from_parameter(value, None);
            assert_eq!(result.status(), ResultStatus::Failure);
            assert_eq!(
                result.error().map(RailwayError::message),
                Some("Item name cannot be empty.")
            );
        }
    }

    #[test]
    fn test_item_name_rejects_over_long() {
        let result = ItemName::from_parameter("x".repeat(201), None);
        assert_eq!(
            result.error().map(RailwayError::message),
            Some("Item name cannot exceed 200 characters.")
        );
    }

    #[test]
    fn test_item_name_default_result_id() {
        let result = ItemName::from_parameter("", None);
        assert_eq!(result.id(), "name");

        let result = ItemName::from_parameter("", Some("poco.name"));
        assert_eq!(result.id(), "poco.name");
    }

    #[test]
    fn test_profession_name_valid() {
        let name = ProfessionName::from_parameter("Blacksmith", None).unwrap();
        assert_eq!(name.as_str(), "Blacksmith");
    }

    #[test]
    fn test_profession_name_rejects_empty() {
        let result = ProfessionName::from_parameter(" ", None);
        assert_eq!(
            result.error().map(RailwayError::message),
            Some("Profession name cannot be empty.")
        );
    }
}
