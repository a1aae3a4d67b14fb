//! Signed-in users and the permission guard used on write paths.

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::error::{AccessError, AccessResult};
use crate::permissions::Permission;
use crate::resources::Resource;
use crate::roles::Role;

/// A registry user.
///
/// Permissions are not stored on the user; they are always read from the
/// role's table row, so a user can never hold grants its role lacks.
///
/// # Example
///
/// ```
/// use viangola_rbac::{Role, User};
///
/// let agent = User::new("u-2", "João Silva Santos", "agente@viangola.ao", Role::Agent)
///     .with_badge("AG001234");
/// assert!(agent.has_permission("fines", "create"));
/// assert!(!agent.has_permission("users", "read"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    /// Backend user ID.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Role, fixed at creation.
    pub role: Role,
    /// Service badge number (operators and agents).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub badge: Option<String>,
    /// Company name (company accounts).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub company: Option<String>,
    /// Profile photo URL.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub photo: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Last successful login.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user with the current time as `created_at`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            badge: None,
            company: None,
            photo: None,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    /// Set the service badge number.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Set the company name.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// The user's effective permissions (its role's table row).
    pub fn permissions(&self) -> &'static [Permission] {
        self.role.permissions()
    }

    /// Check a permission by resource and action tag.
    pub fn has_permission(&self, resource: &str, action: &str) -> bool {
        match (Resource::parse(resource), Action::parse(action)) {
            (Some(resource), Some(action)) => self.role.can(resource, action),
            _ => false,
        }
    }
}

/// Check a permission for an optional signed-in user.
///
/// No user means no permission.
pub fn user_has_permission(user: Option<&User>, resource: &str, action: &str) -> bool {
    user.is_some_and(|u| u.has_permission(resource, action))
}

/// Require that `user` may perform `action` on `resource`.
///
/// # Errors
///
/// - [`AccessError::Unauthenticated`] when `user` is `None`
/// - [`AccessError::Forbidden`] when the role's table row denies the action
///
/// # Example
///
/// ```
/// use viangola_rbac::{authorize, AccessError, Action, Resource, Role, User};
///
/// let citizen = User::new("u-3", "Maria João Ferreira", "cidadao@viangola.ao", Role::Citizen);
/// assert!(authorize(Some(&citizen), Resource::Vehicles, Action::Create).is_ok());
/// assert!(matches!(
///     authorize(Some(&citizen), Resource::Users, Action::Read),
///     Err(AccessError::Forbidden { .. })
/// ));
/// assert_eq!(
///     authorize(None, Resource::Vehicles, Action::Read),
///     Err(AccessError::Unauthenticated)
/// );
/// ```
pub fn authorize(user: Option<&User>, resource: Resource, action: Action) -> AccessResult<()> {
    let user = user.ok_or(AccessError::Unauthenticated)?;
    if user.role.can(resource, action) {
        return Ok(());
    }

    tracing::debug!(
        user_id = %user.id,
        role = %user.role,
        resource = %resource,
        action = %action,
        "Permission denied"
    );
    Err(AccessError::Forbidden {
        role: user.role,
        resource,
        action,
    })
}
