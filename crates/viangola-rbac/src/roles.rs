//! User roles
//!
//! This module defines the four registry roles. Roles are not
//! hierarchical: each one carries its own fixed row in the permission
//! table (see [`crate::permissions`]).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// User role in the registry.
///
/// A role is assigned when the user record is created and never changes
/// through application logic.
///
/// - **Operator**: back-office staff with full control of records and users
/// - **Agent**: traffic agent; reads records and issues fines
/// - **Citizen**: private owner managing their own vehicles and documents
/// - **Company**: fleet owner managing vehicles, drivers, and documents
///
/// # Examples
///
/// ```
/// use viangola_rbac::Role;
///
/// assert_eq!(Role::parse("agent"), Some(Role::Agent));
/// assert!(Role::Agent.is_staff());
/// assert!(!Role::Company.is_staff());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    /// Back-office operator
    Operator,

    /// Traffic agent
    Agent,

    /// Private citizen
    Citizen,

    /// Company / fleet owner
    Company,
}

impl Role {
    /// Every role.
    pub const ALL: [Role; 4] = [Role::Operator, Role::Agent, Role::Citizen, Role::Company];

    /// Check if this role belongs to registry staff.
    ///
    /// Staff see every record of a resource they can read; other roles
    /// only see records they own.
    ///
    /// # Returns
    ///
    /// `true` for Operator and Agent roles
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Operator | Self::Agent)
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - Exact lowercase role tag, as stored on the user record
    ///
    /// # Returns
    ///
    /// `Some(Role)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use viangola_rbac::Role;
    ///
    /// assert_eq!(Role::parse("operator"), Some(Role::Operator));
    /// assert_eq!(Role::parse("company"), Some(Role::Company));
    /// assert_eq!(Role::parse("COMPANY"), None);
    /// assert_eq!(Role::parse("admin"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "operator" => Some(Self::Operator),
            "agent" => Some(Self::Agent),
            "citizen" => Some(Self::Citizen),
            "company" => Some(Self::Company),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Agent => "agent",
            Self::Citizen => "citizen",
            Self::Company => "company",
        }
    }

    /// Get the Portuguese display label used in the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use viangola_rbac::Role;
    ///
    /// assert_eq!(Role::Citizen.display_name(), "Cidadão");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Operator => "Operador",
            Self::Agent => "Agente",
            Self::Citizen => "Cidadão",
            Self::Company => "Empresa",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
