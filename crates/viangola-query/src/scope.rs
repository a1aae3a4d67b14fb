//! Record scoping
//!
//! Staff read every row of a resource; citizens and companies only read
//! rows they own. This module decides which case applies and turns it into
//! a row filter.

use viangola_plate::Plate;
use viangola_rbac::{Action, Resource, User};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::filter::Filter;

/// Which rows of a resource a user may list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "scope", content = "user_id", rename_all = "snake_case"))]
pub enum RecordScope {
    /// Every row.
    All,
    /// Rows whose `owner_id` is the user.
    OwnedBy(String),
    /// Fines recorded against vehicles the user owns.
    VehiclesOwnedBy(String),
    /// The user's own account row.
    Own(String),
    /// A computed view with no backing table (reports, search), built for
    /// the user from listings that are scoped on their own.
    ComputedFor(String),
}

impl RecordScope {
    /// Row filter for this scope, or `None` when every row is visible or
    /// there is no table to filter (`ComputedFor`).
    ///
    /// `VehiclesOwnedBy` matches fines by plate, so the caller passes the
    /// plates of the user's vehicles (listed first with the `OwnedBy`
    /// scope). Other scopes ignore `owned_plates`.
    ///
    /// # Example
    ///
    /// ```
    /// use viangola_plate::Plate;
    /// use viangola_query::RecordScope;
    ///
    /// let scope = RecordScope::OwnedBy("u-3".into());
    /// assert_eq!(scope.filter(&[]).unwrap().to_string(), "owner_id=eq.u-3");
    ///
    /// let plates = [Plate::parse("LD-35-87-IA").unwrap()];
    /// let fines = RecordScope::VehiclesOwnedBy("u-3".into());
    /// assert_eq!(fines.filter(&plates).unwrap().to_string(), "vehicle_plate=in.(LD3587IA)");
    ///
    /// assert!(RecordScope::All.filter(&[]).is_none());
    /// ```
    pub fn filter(&self, owned_plates: &[Plate]) -> Option<Filter> {
        match self {
            RecordScope::All | RecordScope::ComputedFor(_) => None,
            RecordScope::OwnedBy(user_id) => Some(Filter::eq("owner_id", user_id.as_str())),
            RecordScope::Own(user_id) => Some(Filter::eq("id", user_id.as_str())),
            RecordScope::VehiclesOwnedBy(_) => Some(Filter::is_in(
                "vehicle_plate",
                owned_plates.iter().map(Plate::as_str),
            )),
        }
    }

    /// Check if the scope covers every row.
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, RecordScope::All)
    }
}

/// Decide which rows of `resource` the user may list.
///
/// Returns `None` when the user's role lacks `read` on the resource.
/// Non-staff access to a resource without a table is
/// [`RecordScope::ComputedFor`], never an owner filter on a table that
/// does not exist.
///
/// # Example
///
/// ```
/// use viangola_query::{scope_for, RecordScope};
/// use viangola_rbac::{Resource, Role, User};
///
/// let agent = User::new("u-2", "Agente", "agente@viangola.ao", Role::Agent);
/// assert_eq!(scope_for(&agent, Resource::Vehicles), Some(RecordScope::All));
/// assert_eq!(scope_for(&agent, Resource::Users), None);
///
/// let citizen = User::new("u-3", "Cidadã", "cidadao@viangola.ao", Role::Citizen);
/// assert_eq!(
///     scope_for(&citizen, Resource::Fines),
///     Some(RecordScope::VehiclesOwnedBy("u-3".into()))
/// );
/// ```
pub fn scope_for(user: &User, resource: Resource) -> Option<RecordScope> {
    if !user.role.can(resource, Action::Read) {
        return None;
    }
    if user.role.is_staff() {
        return Some(RecordScope::All);
    }

    let user_id = user.id.clone();
    Some(match resource {
        Resource::Fines => RecordScope::VehiclesOwnedBy(user_id),
        Resource::Profile | Resource::Users => RecordScope::Own(user_id),
        Resource::Vehicles | Resource::Drivers | Resource::Documents | Resource::Fleet => {
            RecordScope::OwnedBy(user_id)
        }
        // No table behind these
        Resource::Reports | Resource::Search => RecordScope::ComputedFor(user_id),
    })
}
