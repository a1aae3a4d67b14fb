//! # Viangola RBAC (Role-Based Access Control)
//!
//! This crate provides the access model for the Viangola vehicle, driver,
//! and fine registry.
//!
//! ## Overview
//!
//! The viangola-rbac crate handles:
//! - **Roles**: Operator, Agent, Citizen, Company
//! - **Resources**: Functional areas (vehicles, fines, fleet, ...)
//! - **Actions**: Create, Read, Update, Delete
//! - **Permissions**: Resource + set of Actions, fixed per role
//!
//! ## Architecture
//!
//! ```text
//! Role ──→ [Permission] ──→ (Resource, {Action})
//!
//! Examples:
//!   agent:   "fines:create,read,update"
//!   citizen: "profile:read,update"
//! ```
//!
//! The table is compiled in. There are no dynamic grants and no action
//! implications: `update` does not imply `read`.
//!
//! ## Usage
//!
//! ```rust
//! use viangola_rbac::{has_permission, Action, Resource, Role};
//!
//! // String form, as used by UI gating
//! assert!(has_permission("operator", "vehicles", "delete"));
//! assert!(!has_permission("agent", "vehicles", "delete"));
//!
//! // Typed form
//! assert!(Role::Company.can(Resource::Fleet, Action::Create));
//! ```

pub mod actions;
pub mod error;
pub mod permissions;
pub mod resources;
pub mod roles;
pub mod user;

// Re-export main types for convenience
pub use actions::{Action, ActionSet};
pub use error::{AccessError, AccessResult};
pub use permissions::{has_permission, permissions_for, Permission};
pub use resources::Resource;
pub use roles::Role;
pub use user::{authorize, user_has_permission, User};
