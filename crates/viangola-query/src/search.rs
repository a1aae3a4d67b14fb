//! Free-text search across registry tables.

use viangola_plate::normalize;
use viangola_rbac::Resource;

use crate::filter::{strip_wildcards, Filter};

/// Build the search filter for `resource`.
///
/// Vehicles match on plate, brand, or model; drivers on name or license
/// number; fines on plate, driver name, or infraction type. Plate columns
/// are matched against the normalized term, so `ld-35` finds `LD3587IA`.
///
/// `*` and `%` in the term are ignored. Returns `None` for resources
/// without a search definition, or when the term is blank once they are
/// removed.
///
/// # Example
///
/// ```
/// use viangola_query::search_filter;
/// use viangola_rbac::Resource;
///
/// let filter = search_filter(Resource::Drivers, "silva").unwrap();
/// assert_eq!(
///     filter.to_string(),
///     "or=(name.ilike.*silva*,license_number.ilike.*silva*)"
/// );
/// ```
pub fn search_filter(resource: Resource, term: &str) -> Option<Filter> {
    let term = strip_wildcards(term);
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let plate_term = normalize(term);

    let columns: &[(&str, bool)] = match resource {
        Resource::Vehicles | Resource::Fleet => &[("plate", true), ("brand", false), ("model", false)],
        Resource::Drivers => &[("name", false), ("license_number", false)],
        Resource::Fines => &[("vehicle_plate", true), ("driver_name", false), ("type", false)],
        _ => return None,
    };

    let conditions = columns
        .iter()
        .filter(|(_, is_plate)| !is_plate || !plate_term.is_empty())
        .map(|&(column, is_plate)| {
            Filter::contains(column, if is_plate { plate_term.as_str() } else { term })
        })
        .collect();
    Some(Filter::Or(conditions))
}
