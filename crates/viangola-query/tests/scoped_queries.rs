//! End-to-end composition: user → scope → rendered filters.

use viangola_plate::Plate;
use viangola_query::{
    documents_for_vehicle, listing_order, notifications_for, scope_for, search_filter,
    PendingFineFilter, RecordScope,
};
use viangola_rbac::{authorize, Action, Resource, Role, User};

fn user(id: &str, role: Role) -> User {
    User::new(id, "Teste", "teste@viangola.ao", role)
}

#[test]
fn scope_exists_exactly_when_read_is_allowed() {
    for role in Role::ALL {
        let user = user("u-1", role);
        for resource in Resource::ALL {
            assert_eq!(
                scope_for(&user, resource).is_some(),
                authorize(Some(&user), resource, Action::Read).is_ok(),
                "{role} {resource}"
            );
        }
    }
}

#[test]
fn citizen_fine_listing_goes_through_owned_vehicles() {
    let citizen = user("0b5e", Role::Citizen);

    let vehicles = scope_for(&citizen, Resource::Vehicles).unwrap();
    assert_eq!(vehicles.filter(&[]).unwrap().to_string(), "owner_id=eq.0b5e");

    // Plates as returned by the vehicles query
    let owned: Vec<Plate> = ["LD-35-87-IA", "LDA-12-00-ZZ"]
        .iter()
        .map(|p| Plate::parse(p).unwrap())
        .collect();

    let fines = scope_for(&citizen, Resource::Fines).unwrap();
    assert_eq!(fines, RecordScope::VehiclesOwnedBy("0b5e".into()));
    assert_eq!(
        fines.filter(&owned).unwrap().to_string(),
        "vehicle_plate=in.(LD3587IA,LDA1200ZZ)"
    );
}

#[test]
fn agent_roadside_check() {
    let agent = user("a-7", Role::Agent);
    assert!(authorize(Some(&agent), Resource::Search, Action::Read).is_ok());
    assert!(scope_for(&agent, Resource::Fines).unwrap().is_unrestricted());

    let lookup = PendingFineFilter::new(Some("ld3587ia"), Some("LA-00123")).unwrap();
    assert_eq!(lookup.plate().map(Plate::as_str), Some("LD3587IA"));
    let rendered: Vec<String> = lookup.filters().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "status=eq.pending",
            "or=(vehicle_plate.eq.LD3587IA,driver_license.eq.LA-00123)",
        ]
    );

    let search = search_filter(Resource::Vehicles, "LD-35-87").unwrap();
    assert_eq!(
        search.to_string(),
        "or=(plate.ilike.*LD3587*,brand.ilike.*LD-35-87*,model.ilike.*LD-35-87*)"
    );
}

#[test]
fn citizen_vehicle_listing_newest_first() {
    let citizen = user("0b5e", Role::Citizen);
    let scope = scope_for(&citizen, Resource::Vehicles).unwrap();
    let query: Vec<String> = scope
        .filter(&[])
        .map(|f| f.to_string())
        .into_iter()
        .chain(listing_order(Resource::Vehicles).map(|o| o.to_string()))
        .collect();
    assert_eq!(query, vec!["owner_id=eq.0b5e", "order=created_at.desc"]);
}

#[test]
fn vehicle_detail_documents_and_notifications() {
    let citizen = user("0b5e", Role::Citizen);
    assert_eq!(notifications_for(&citizen).to_string(), "user_id=eq.0b5e");

    let plate = Plate::parse("LD-35-87-IA").unwrap();
    assert_eq!(documents_for_vehicle(&plate).to_string(), "vehicle_plate=eq.LD3587IA");
    assert_eq!(
        listing_order(Resource::Documents).unwrap().to_string(),
        "order=created_at.desc"
    );
}

#[test]
fn company_reports_are_computed_not_filtered() {
    let company = user("c-12", Role::Company);
    let reports = scope_for(&company, Resource::Reports).unwrap();
    assert_eq!(reports, RecordScope::ComputedFor("c-12".into()));
    assert!(reports.filter(&[]).is_none());
    assert!(listing_order(Resource::Reports).is_none());
}

#[test]
fn wildcard_only_search_is_rejected() {
    assert!(search_filter(Resource::Vehicles, "*").is_none());
    assert!(search_filter(Resource::Fines, "%").is_none());
}
