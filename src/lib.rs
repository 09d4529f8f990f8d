//! Schema-driven generation and validation of JSON-LD asset descriptions.
//!
//! Users describe an asset (e.g. an automated guided vehicle) against a
//! schema of typed properties. The library generates canonical JSON-LD
//! documents from entered values, extracts JSON-LD from foreign text or
//! HTML, restricts untrusted documents to what the schema admits, and
//! reports constraint violations.
//!
//! # Core Components
//!
//! - [`Schema`] - Ordered, name-unique property definitions with lenient validation
//! - [`DocumentGenerator`] - Builds documents from [`FormValues`]
//! - [`extract_document`] - Reads a document or batch from text or markup
//! - [`project`] - Strict admission of untrusted fields
//! - [`ValidationSession`] - Stateful extraction, projection and validation flow
//! - [`storage::Workspace`] - Typed persistence over a pluggable key/value store
//!
//! # Quick Start
//!
//! ```rust
//! use asset_attributes::schema::{PropertyDefinition, PropertyKind, Schema, ValueConstraints};
//! use asset_attributes::{DocumentGenerator, FormValue, FormValues};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = Schema::new(vec![
//!     PropertyDefinition::new("payload", PropertyKind::Number)
//!         .with_unit("kg")
//!         .with_constraints(ValueConstraints::range(Some(0.0), Some(2000.0))),
//! ])?;
//!
//! let mut values = FormValues::new();
//! values.insert("payload".to_string(), FormValue::from("800"));
//!
//! let document = DocumentGenerator::default().generate(&schema, &values);
//! assert!(schema.validate_document(&document).is_empty());
//! # Ok(())
//! # }
//! ```

pub mod attribute_list;
pub mod batch;
pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod generator;
pub mod projection;
pub mod schema;
pub mod session;
pub mod storage;

// Re-export commonly used types for convenience
pub use attribute_list::{AttributeList, AttributeLists};
pub use batch::{Export, prepare_export, validate_batch};
pub use catalog::{ClassCatalog, DEFAULT_CLASS, PropertyCatalog};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use document::{Document, FormValue, FormValues, Payload};
pub use error::{
    EngineError, EngineResult, ExtractionError, SchemaError, ValidationError, ValidationReport,
    Violation,
};
pub use extract::extract_document;
pub use fetch::{FetchError, RemoteFetcher};
pub use generator::DocumentGenerator;
pub use projection::{project, project_payload};
pub use schema::{PropertyDefinition, PropertyKind, Schema, ValueConstraints};
pub use session::{SessionState, ValidationSession};

#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
