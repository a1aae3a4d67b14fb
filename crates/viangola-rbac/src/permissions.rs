//! # Permissions
//!
//! The fixed role → permission table and the lookups built on it.
//! A permission pairs one resource with the set of actions allowed on it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::actions::{Action, ActionSet};
use crate::resources::Resource;
use crate::roles::Role;

/// A resource together with the actions a role may perform on it.
///
/// # Example
///
/// ```
/// use viangola_rbac::{Action, ActionSet, Permission, Resource};
///
/// let perm = Permission::new(Resource::Fines, ActionSet::READ);
/// assert!(perm.allows(Action::Read));
/// assert!(!perm.allows(Action::Update));
/// assert_eq!(perm.to_string(), "fines:read");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Permission {
    /// The resource this permission applies to.
    pub resource: Resource,
    /// The actions allowed on the resource.
    pub actions: ActionSet,
}

impl Permission {
    /// Create a new permission.
    pub const fn new(resource: Resource, actions: ActionSet) -> Self {
        Self { resource, actions }
    }

    /// Check if this permission allows `action`.
    pub fn allows(&self, action: Action) -> bool {
        self.actions.contains(action)
    }
}

impl std::fmt::Display for Permission {
    /// Renders as `resource:action[,action...]`, e.g. `fines:create,read,update`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.resource)?;
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(action.as_str())?;
        }
        Ok(())
    }
}

const OPERATOR: &[Permission] = &[
    Permission::new(Resource::Vehicles, ActionSet::CRUD),
    Permission::new(Resource::Drivers, ActionSet::CRUD),
    Permission::new(Resource::Documents, ActionSet::CRUD),
    Permission::new(Resource::Fines, ActionSet::CRUD),
    Permission::new(Resource::Users, ActionSet::CRUD),
    Permission::new(Resource::Reports, ActionSet::CRUD),
    Permission::new(Resource::Search, ActionSet::READ),
];

const AGENT: &[Permission] = &[
    Permission::new(Resource::Vehicles, ActionSet::READ),
    Permission::new(Resource::Drivers, ActionSet::READ),
    Permission::new(Resource::Documents, ActionSet::READ),
    Permission::new(Resource::Fines, ActionSet::CRU),
    Permission::new(Resource::Search, ActionSet::READ),
];

const CITIZEN: &[Permission] = &[
    Permission::new(Resource::Vehicles, ActionSet::CRU),
    Permission::new(Resource::Documents, ActionSet::CRU),
    Permission::new(Resource::Fines, ActionSet::READ),
    Permission::new(
        Resource::Profile,
        ActionSet::of(&[Action::Read, Action::Update]),
    ),
];

const COMPANY: &[Permission] = &[
    Permission::new(Resource::Vehicles, ActionSet::CRU),
    Permission::new(Resource::Drivers, ActionSet::CRU),
    Permission::new(Resource::Documents, ActionSet::CRU),
    Permission::new(Resource::Fines, ActionSet::READ),
    Permission::new(Resource::Fleet, ActionSet::CRU),
    Permission::new(Resource::Reports, ActionSet::READ),
];

impl Role {
    /// The role's row of the permission table, in table order.
    ///
    /// Each resource appears at most once per role.
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Operator => OPERATOR,
            Role::Agent => AGENT,
            Role::Citizen => CITIZEN,
            Role::Company => COMPANY,
        }
    }

    /// The role's permission entry for `resource`, if any.
    pub fn permission_for(&self, resource: Resource) -> Option<&'static Permission> {
        self.permissions().iter().find(|p| p.resource == resource)
    }

    /// Check if this role may perform `action` on `resource`.
    ///
    /// # Example
    ///
    /// ```
    /// use viangola_rbac::{Action, Resource, Role};
    ///
    /// assert!(Role::Agent.can(Resource::Fines, Action::Create));
    /// assert!(!Role::Agent.can(Resource::Vehicles, Action::Delete));
    /// ```
    pub fn can(&self, resource: Resource, action: Action) -> bool {
        self.permission_for(resource)
            .is_some_and(|p| p.allows(action))
    }
}

/// Permission row for a role tag; empty for unknown roles.
pub fn permissions_for(role: &str) -> &'static [Permission] {
    Role::parse(role).map_or(&[], |r| r.permissions())
}

/// Check whether `role` may perform `action` on `resource`.
///
/// Unknown roles, resources, or actions are not errors; they simply
/// yield `false`.
///
/// # Example
///
/// ```
/// use viangola_rbac::has_permission;
///
/// assert!(has_permission("operator", "vehicles", "delete"));
/// assert!(!has_permission("agent", "vehicles", "delete"));
/// assert!(!has_permission("citizen", "users", "read"));
/// assert!(!has_permission("mechanic", "vehicles", "read"));
/// ```
pub fn has_permission(role: &str, resource: &str, action: &str) -> bool {
    let Some(role) = Role::parse(role) else {
        tracing::debug!(role, "permission check for unknown role");
        return false;
    };
    let (Some(resource), Some(action)) = (Resource::parse(resource), Action::parse(action)) else {
        return false;
    };
    role.can(resource, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_resource_listed_once_per_role() {
        for role in Role::ALL {
            let mut seen = HashSet::new();
            for perm in role.permissions() {
                assert!(seen.insert(perm.resource), "{role} lists {} twice", perm.resource);
            }
        }
    }

    #[test]
    fn test_operator_row() {
        let row: Vec<String> = Role::Operator.permissions().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            row,
            vec![
                "vehicles:create,read,update,delete",
                "drivers:create,read,update,delete",
                "documents:create,read,update,delete",
                "fines:create,read,update,delete",
                "users:create,read,update,delete",
                "reports:create,read,update,delete",
                "search:read",
            ]
        );
    }

    #[test]
    fn test_agent_row() {
        let row: Vec<String> = Role::Agent.permissions().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            row,
            vec![
                "vehicles:read",
                "drivers:read",
                "documents:read",
                "fines:create,read,update",
                "search:read",
            ]
        );
    }

    #[test]
    fn test_citizen_row() {
        let row: Vec<String> = Role::Citizen.permissions().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            row,
            vec![
                "vehicles:create,read,update",
                "documents:create,read,update",
                "fines:read",
                "profile:read,update",
            ]
        );
    }

    #[test]
    fn test_company_row() {
        let row: Vec<String> = Role::Company.permissions().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            row,
            vec![
                "vehicles:create,read,update",
                "drivers:create,read,update",
                "documents:create,read,update",
                "fines:read",
                "fleet:create,read,update",
                "reports:read",
            ]
        );
    }

    #[test]
    fn test_has_permission_examples() {
        assert!(has_permission("operator", "vehicles", "delete"));
        assert!(!has_permission("agent", "vehicles", "delete"));
        assert!(!has_permission("citizen", "users", "read"));
        assert!(has_permission("agent", "fines", "update"));
        assert!(!has_permission("agent", "fines", "delete"));
        assert!(has_permission("company", "fleet", "create"));
        assert!(!has_permission("citizen", "fleet", "read"));
    }

    #[test]
    fn test_has_permission_unknown_inputs() {
        assert!(!has_permission("admin", "vehicles", "read"));
        assert!(!has_permission("", "vehicles", "read"));
        assert!(!has_permission("operator", "agents", "read"));
        assert!(!has_permission("operator", "vehicles", "manage"));
        assert!(!has_permission("operator", "Vehicles", "read"));
    }

    #[test]
    fn test_role_tags_are_case_sensitive() {
        for role in ["OPERATOR", "Operator", "AGENT", "Citizen"] {
            assert!(!has_permission(role, "vehicles", "read"), "{role}");
        }
        assert!(!has_permission("OPERATOR", "vehicles", "delete"));
        assert!(permissions_for("Company").is_empty());
    }

    #[test]
    fn test_update_does_not_imply_read() {
        // No implication between actions: the table is the only source.
        for role in Role::ALL {
            for perm in role.permissions() {
                for action in Action::ALL {
                    assert_eq!(role.can(perm.resource, action), perm.actions.contains(action));
                }
            }
        }
    }

    #[test]
    fn test_permissions_for_unknown_role_is_empty() {
        assert!(permissions_for("guest").is_empty());
        assert_eq!(permissions_for("agent").len(), 5);
    }
}
