//! Listing order and per-user / per-vehicle lookups.

use viangola_plate::Plate;
use viangola_rbac::{Resource, User};

use crate::filter::{Filter, Order};

/// Sort order for listing `resource`.
///
/// The user directory lists by name; every other table lists the most
/// recently created rows first. A single profile row and resources
/// without a table have no order.
///
/// # Example
///
/// ```
/// use viangola_query::listing_order;
/// use viangola_rbac::Resource;
///
/// assert_eq!(listing_order(Resource::Fines).unwrap().to_string(), "order=created_at.desc");
/// assert_eq!(listing_order(Resource::Users).unwrap().to_string(), "order=name.asc");
/// assert!(listing_order(Resource::Reports).is_none());
/// ```
pub fn listing_order(resource: Resource) -> Option<Order> {
    match resource {
        Resource::Users => Some(Order::asc("name")),
        Resource::Vehicles
        | Resource::Fleet
        | Resource::Drivers
        | Resource::Documents
        | Resource::Fines => Some(Order::newest_first()),
        Resource::Profile | Resource::Reports | Resource::Search => None,
    }
}

/// Rows of the `notifications` table addressed to `user`.
///
/// The same filter selects the rows to list (with
/// [`Order::newest_first`]) and the rows to mark read in bulk.
///
/// # Example
///
/// ```
/// use viangola_query::notifications_for;
/// use viangola_rbac::{Role, User};
///
/// let citizen = User::new("u-3", "Maria", "cidadao@viangola.ao", Role::Citizen);
/// assert_eq!(notifications_for(&citizen).to_string(), "user_id=eq.u-3");
/// ```
pub fn notifications_for(user: &User) -> Filter {
    Filter::eq("user_id", user.id.as_str())
}

/// Documents attached to the vehicle registered as `plate`.
///
/// # Example
///
/// ```
/// use viangola_plate::Plate;
/// use viangola_query::documents_for_vehicle;
///
/// let plate = Plate::parse("LD-35-87-IA").unwrap();
/// assert_eq!(documents_for_vehicle(&plate).to_string(), "vehicle_plate=eq.LD3587IA");
/// ```
pub fn documents_for_vehicle(plate: &Plate) -> Filter {
    Filter::eq("vehicle_plate", plate.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use viangola_rbac::Role;

    #[test]
    fn test_every_table_listing_is_ordered() {
        for resource in Resource::ALL {
            if resource.table().is_none() {
                assert!(listing_order(resource).is_none(), "{resource}");
            }
        }
        for resource in [
            Resource::Vehicles,
            Resource::Fleet,
            Resource::Drivers,
            Resource::Documents,
            Resource::Fines,
        ] {
            assert_eq!(listing_order(resource), Some(Order::newest_first()), "{resource}");
        }
    }

    #[test]
    fn test_user_directory_by_name() {
        assert_eq!(listing_order(Resource::Users), Some(Order::asc("name")));
        assert!(listing_order(Resource::Profile).is_none());
    }

    #[test]
    fn test_notifications_keyed_on_user() {
        let company = User::new("c-12", "Frota Lda", "frota@viangola.ao", Role::Company);
        assert_eq!(
            notifications_for(&company).to_query_pair(),
            ("user_id".to_string(), "eq.c-12".to_string())
        );
    }

    #[test]
    fn test_documents_use_normalized_plate() {
        let plate = Plate::parse("lda-12-00-zz").unwrap();
        assert_eq!(documents_for_vehicle(&plate).to_string(), "vehicle_plate=eq.LDA1200ZZ");
    }
}
