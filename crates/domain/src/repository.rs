//! Repository ports consumed by the domain core.
//!
//! The core treats repositories as already-validated data sources; it
//! defines the contracts and implements none of them.

use crate::entities::Profession;
use crate::ids::ProfessionId;

/// Source of pre-validated professions.
#[cfg_attr(test, mockall::automock)]
pub trait ProfessionRepository {
    /// Look up a single profession by id.
    fn profession_by_id(&self, id: ProfessionId) -> Option<Profession>;

    /// List all known professions.
    fn professions(&self) -> Vec<Profession>;
}
