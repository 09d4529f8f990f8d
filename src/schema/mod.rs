//! Property schemas and lenient validation.
//!
//! This module provides the typed schema model and the validator used for
//! form values and whole documents.
//!
//! # Key Types
//!
//! - [`Schema`] - Ordered, name-unique set of property definitions
//! - [`PropertyDefinition`] - A single typed field with optional constraints
//! - [`ValueConstraints`] - Bounds, integrality and closed value sets
//!
//! # Examples
//!
//! ```rust
//! use asset_attributes::schema::{PropertyDefinition, PropertyKind, Schema, ValueConstraints};
//! use asset_attributes::Document;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = Schema::new(vec![
//!     PropertyDefinition::new("speed", PropertyKind::Number)
//!         .with_constraints(ValueConstraints::range(Some(0.0), Some(10.0)).with_integer(true)),
//! ])?;
//!
//! let document = Document::from_value(json!({"speed": 12})).unwrap();
//! let errors = schema.validate_document(&document);
//! assert_eq!(errors[0].to_string(), "value for 'speed' must be ≤ 10");
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use types::{PropertyDefinition, PropertyKind, Schema, ValueConstraints};
pub use validation::{validate_document, validate_value};
