//! # Resources
//!
//! Functional areas of the registry that are subject to access control.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resource types that can have permissions assigned.
///
/// Resources map onto the registry's screens and backend tables:
/// - **Records**: Vehicles, Drivers, Documents, Fines
/// - **Administration**: Users, Reports
/// - **Per-role areas**: Search (agents and operators), Profile
///   (citizens), Fleet (companies)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Resource {
    /// Registered vehicles.
    Vehicles,
    /// Drivers and their driving licenses.
    Drivers,
    /// Vehicle and driver documents (insurance, inspection, ...).
    Documents,
    /// Traffic fines.
    Fines,
    /// User accounts.
    Users,
    /// Aggregated reports.
    Reports,
    /// Cross-record search used during roadside checks.
    Search,
    /// The signed-in citizen's own profile.
    Profile,
    /// A company's vehicle fleet.
    Fleet,
}

impl Resource {
    /// Every resource, in declaration order.
    pub const ALL: [Resource; 9] = [
        Resource::Vehicles,
        Resource::Drivers,
        Resource::Documents,
        Resource::Fines,
        Resource::Users,
        Resource::Reports,
        Resource::Search,
        Resource::Profile,
        Resource::Fleet,
    ];

    /// Get the string representation of the resource.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Vehicles => "vehicles",
            Resource::Drivers => "drivers",
            Resource::Documents => "documents",
            Resource::Fines => "fines",
            Resource::Users => "users",
            Resource::Reports => "reports",
            Resource::Search => "search",
            Resource::Profile => "profile",
            Resource::Fleet => "fleet",
        }
    }

    /// Parse resource from its exact lowercase tag.
    ///
    /// # Example
    ///
    /// ```
    /// use viangola_rbac::resources::Resource;
    ///
    /// assert_eq!(Resource::parse("fines"), Some(Resource::Fines));
    /// assert_eq!(Resource::parse("agents"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// Backend table holding this resource's rows, if it is table-backed.
    ///
    /// `Search` spans several tables and `Reports` is computed, so neither
    /// has one.
    pub fn table(&self) -> Option<&'static str> {
        match self {
            Resource::Vehicles | Resource::Fleet => Some("vehicles"),
            Resource::Drivers => Some("drivers"),
            Resource::Documents => Some("documents"),
            Resource::Fines => Some("fines"),
            Resource::Users | Resource::Profile => Some("users"),
            Resource::Reports | Resource::Search => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
