//! # Viangola Plates
//!
//! Normalization, input masking, and validation of Angolan vehicle
//! registration plates.
//!
//! ## Forms
//!
//! ```text
//! Short:  LD-35-87-IA     LD  + 2 digits + 2 digits + 2 letters
//! Long:   LDA-35-87-IA    LDA + 2 digits + 2 digits + 2 letters
//! ```
//!
//! Hyphens are presentation only. Stored and compared plates are the
//! normalized form (`LD3587IA`).
//!
//! ## Usage
//!
//! ```rust
//! use viangola_plate::{format, normalize, validate, Plate};
//!
//! // Input masking, one keystroke at a time
//! assert_eq!(format("LD35"), "LD-35");
//! assert_eq!(format("LD3587IA"), "LD-35-87-IA");
//!
//! // Validation before persisting
//! assert!(validate("LD-35-87-IA"));
//! assert_eq!(normalize("ld-35-87-ia"), "LD3587IA");
//!
//! // Typed value for the write path
//! let plate: Plate = "lda-35-87-ia".parse().unwrap();
//! assert_eq!(plate.as_str(), "LDA3587IA");
//! assert_eq!(plate.to_string(), "LDA-35-87-IA");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod error;
pub mod format;
pub mod plate;

// Re-export main types for convenience
pub use error::{PlateError, PlateResult};
pub use format::{format, normalize, validate, PlateForm};
pub use plate::Plate;
