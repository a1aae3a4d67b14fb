//! Cross-checks of the string-level permission API against the typed table.

use viangola_rbac::{has_permission, Action, Resource, Role};

const ACTIONS: [&str; 4] = ["create", "read", "update", "delete"];

#[test]
fn string_and_typed_lookups_agree_everywhere() {
    for role in Role::ALL {
        for resource in Resource::ALL {
            for action in Action::ALL {
                assert_eq!(
                    has_permission(role.as_str(), resource.as_str(), action.as_str()),
                    role.can(resource, action),
                    "{role} {resource} {action}"
                );
            }
        }
    }
}

#[test]
fn unknown_roles_are_denied_everything() {
    for role in [
        "admin", "guest", "operador", "", "operator ", "OPERATOR", "Operator", "Agent", "AGENT",
        "Citizen", "COMPANY",
    ] {
        for resource in Resource::ALL {
            for action in ACTIONS {
                assert!(!has_permission(role, resource.as_str(), action));
            }
        }
    }
}

#[test]
fn only_operators_may_delete() {
    for role in Role::ALL {
        let deletes = Resource::ALL
            .iter()
            .any(|r| role.can(*r, Action::Delete));
        assert_eq!(deletes, role == Role::Operator, "{role}");
    }
}

#[test]
fn agents_are_read_only_except_fines() {
    for resource in Resource::ALL {
        for action in [Action::Create, Action::Update] {
            assert_eq!(
                Role::Agent.can(resource, action),
                resource == Resource::Fines,
                "{resource} {action}"
            );
        }
    }
}

#[test]
fn everyone_reads_fines() {
    for role in Role::ALL {
        assert!(has_permission(role.as_str(), "fines", "read"));
    }
}
