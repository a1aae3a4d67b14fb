//! # Viangola Query
//!
//! Composition of role-scoped row filters for the registry backend.
//!
//! ## Overview
//!
//! - **Scope**: which rows of a resource a user may list
//!   (everything for staff, owned rows for citizens and companies)
//! - **Fines**: pending-fine lookup by plate and/or driving license
//! - **Search**: free-text search across vehicles, drivers, and fines
//! - **Records**: listing order, notifications, and documents of a vehicle
//! - **Filter**: the PostgREST rendering shared by all of the above
//!
//! ## Usage
//!
//! ```rust
//! use viangola_query::{scope_for, PendingFineFilter};
//! use viangola_rbac::{Resource, Role, User};
//!
//! let citizen = User::new("u-3", "Maria", "cidadao@viangola.ao", Role::Citizen);
//! let scope = scope_for(&citizen, Resource::Vehicles).unwrap();
//! assert_eq!(scope.filter(&[]).unwrap().to_string(), "owner_id=eq.u-3");
//!
//! let lookup = PendingFineFilter::new(Some("LD-35-87-IA"), None).unwrap();
//! assert_eq!(lookup.filters().len(), 2);
//! ```

pub mod error;
pub mod filter;
pub mod fines;
pub mod records;
pub mod scope;
pub mod search;

// Re-export main types for convenience
pub use error::{QueryError, QueryResult};
pub use filter::{Filter, Op, Order};
pub use fines::PendingFineFilter;
pub use records::{documents_for_vehicle, listing_order, notifications_for};
pub use scope::{scope_for, RecordScope};
pub use search::search_filter;
