//! Item entity - something a recipe can consume or produce.

use serde::{Deserialize, Serialize};

use craftingtools_shared::{Failures, RailwayResult};

use crate::ids::ItemId;
use crate::poco::ItemPoco;
use crate::value_objects::ItemName;

/// An immutable crafting item.
///
/// Constructed only through the validating factories; an instance either is
/// the [`Item::none`] sentinel or carries a non-nil id and a non-empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: ItemName,
}

impl Item {
    /// The "no item" sentinel (nil id, unnamed).
    ///
    /// A valid placeholder wherever an item slot may be empty, but an
    /// invalid argument to every operation that requires a real item.
    pub fn none() -> Self {
        Self {
            id: ItemId::nil(),
            name: ItemName::empty(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.id.is_nil()
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    /// Factory method creating an item from the supplied parameters.
    ///
    /// Both the nil-id and empty-name failures are accumulated so the
    /// caller sees every invalid field in one aggregate error.
    pub fn from_parameters(
        id: ItemId,
        name: ItemName,
        result_id: Option<&str>,
    ) -> RailwayResult<Self> {
        let rid = result_id.unwrap_or("item");
        let mut failures = Failures::new();

        let valid_id = RailwayResult::success(id, "id")
            .check(|value| !value.is_nil(), "Item id cannot be empty.")
            .unwrap_or_add_to_failures(&mut failures, ItemId::nil());

        let valid_name = RailwayResult::success(name, "name")
            .check(|value| !value.is_empty(), "Item name cannot be empty.")
            .unwrap_or_add_to_failures(&mut failures, ItemName::empty());

        if failures.is_empty() {
            RailwayResult::success(
                Self {
                    id: valid_id,
                    name: valid_name,
                },
                rid,
            )
        } else {
            RailwayResult::failure(failures.into_error("Unable to create item."), rid)
        }
    }

    /// Factory method creating an item from a transport record.
    ///
    /// An absent poco is not an error: it maps to `Success(Item::none())`,
    /// since constructing "nothing" is a legitimate outcome at the
    /// boundary. A present poco goes through the same validation path as
    /// [`Item::from_parameters`]; the name is validated first and an absent
    /// id maps to the nil id, which the factory rejects.
    pub fn from_poco(poco: Option<ItemPoco>, result_id: Option<&str>) -> RailwayResult<Self> {
        let rid = result_id.unwrap_or("poco");
        match poco {
            None => RailwayResult::success(Item::none(), rid),
            Some(poco) => {
                let id = poco.id.map_or(ItemId::nil(), ItemId::from_uuid);
                ItemName::from_parameter(poco.name.unwrap_or_default(), Some("name"))
                    .on_success(|name| Item::from_parameters(id, name, Some(rid)))
            }
        }
    }

    /// Wraps the instance in a railway result, rejecting the sentinel.
    pub fn to_valid_result(&self, result_id: Option<&str>) -> RailwayResult<Self> {
        RailwayResult::success(self.clone(), result_id.unwrap_or("item"))
            .check(|value| !value.is_none(), "Item cannot be none.")
    }
}
