//! Profession entity - the craft a recipe belongs to.
//!
//! Professions are supplied by the repository port already validated; the
//! factory exists so boundary code can construct them under the same
//! accumulate-then-report rules as every other entity.

use serde::{Deserialize, Serialize};

use craftingtools_shared::{Failures, RailwayResult};

use crate::ids::ProfessionId;
use crate::value_objects::ProfessionName;

/// An immutable crafting profession.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profession {
    id: ProfessionId,
    name: ProfessionName,
}

impl Profession {
    /// The "no profession" sentinel (nil id, unnamed).
    pub fn none() -> Self {
        Self {
            id: ProfessionId::nil(),
            name: ProfessionName::empty(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.id.is_nil()
    }

    pub fn id(&self) -> ProfessionId {
        self.id
    }

    pub fn name(&self) -> &ProfessionName {
        &self.name
    }

    /// Factory method creating a profession from the supplied parameters.
    pub fn from_parameters(
        id: ProfessionId,
        name: ProfessionName,
        result_id: Option<&str>,
    ) -> RailwayResult<Self> {
        let rid = result_id.unwrap_or("profession");
        let mut failures = Failures::new();

        let valid_id = RailwayResult::success(id, "id")
            .check(|value| !value.is_nil(), "Profession id cannot be empty.")
            .unwrap_or_add_to_failures(&mut failures, ProfessionId::nil());

        let valid_name = RailwayResult::success(name, "name")
            .check(|value| !value.is_empty(), "Profession name cannot be empty.")
            .unwrap_or_add_to_failures(&mut failures, ProfessionName::empty());

        if failures.is_empty() {
            RailwayResult::success(
                Self {
                    id: valid_id,
                    name: valid_name,
                },
                rid,
            )
        } else {
            RailwayResult::failure(failures.into_error("Unable to create profession."), rid)
        }
    }

    /// Wraps the instance in a railway result, rejecting the sentinel.
    pub fn to_valid_result(&self, result_id: Option<&str>) -> RailwayResult<Self> {
        RailwayResult::success(self.clone(), result_id.unwrap_or("profession"))
            .check(|value| !value.is_none(), "Profession cannot be none.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftingtools_shared::ResultStatus;

    #[test]
    fn test_from_parameters_valid() {
        let result = Profession::from_parameters(
            ProfessionId::new(),
            ProfessionName::from_parameter("Blacksmith", None).unwrap(),
            None,
        );
        assert_eq!(result.status(), ResultStatus::Success);
        assert_eq!(result.unwrap().name().as_str(), "Blacksmith");
    }

    #[test]
    fn test_from_parameters_nil_id() {
        let result = Profession::from_parameters(
            ProfessionId::nil(),
            ProfessionName::from_parameter("Blacksmith", None).unwrap(),
            None,
        );
        let error = result.error().expect("failure carries an error");
        assert_eq!(error.message(), "Unable to create profession.");
        assert_eq!(error.details(), ["id: Profession id cannot be empty."]);
    }

    #[test]
    fn test_to_valid_result_rejects_sentinel() {
        let result = Profession::none().to_valid_result(None);
        assert_eq!(
            result.error().map(|e| e.message()),
            Some("Profession cannot be none.")
        );
    }
}
