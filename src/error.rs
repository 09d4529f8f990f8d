//! Error types for schema, document and extraction operations.
//!
//! Data problems are always returned as values: constraint violations become
//! [`ValidationError`]s, unparseable foreign input becomes an
//! [`ExtractionError`], and transport or persistence problems have their own
//! enums. [`EngineError`] ties them together for callers that work at the
//! orchestration boundary.

use std::fmt;

use crate::fetch::FetchError;
use crate::storage::StorageError;

/// Main error type for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A document failed validation and the requested side effect was blocked
    #[error("Validation failed:\n{0}")]
    ValidationFailed(ValidationReport),

    /// Foreign input could not be turned into a document
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// A schema was structurally unusable
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A remote document could not be fetched
    #[error("Load error: {0}")]
    Fetch(#[from] FetchError),

    /// The persistence collaborator failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Referenced attribute list does not exist
    #[error("Attribute list not found: {id}")]
    AttributeListNotFound { id: String },

    /// Invalid configuration provided
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Invalid request format or parameters
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl EngineError {
    /// Create an attribute list not found error
    pub fn attribute_list_not_found(id: impl Into<String>) -> Self {
        Self::AttributeListNotFound { id: id.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

/// A single rule a field value broke.
///
/// The display strings are the user-facing messages and are stable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    /// Number property received something that does not coerce to a number
    #[error("value for '{field}' must be a number")]
    NotANumber { field: String },

    /// Number below the configured minimum
    #[error("value for '{field}' must be ≥ {min}")]
    BelowMinimum { field: String, min: f64 },

    /// Number above the configured maximum
    #[error("value for '{field}' must be ≤ {max}")]
    AboveMaximum { field: String, max: f64 },

    /// Number with a fractional part where a whole number is required
    #[error("value for '{field}' must be a whole number")]
    NotAWholeNumber { field: String },

    /// Boolean property received something other than true/false
    #[error("value for '{field}' must be true or false")]
    NotABoolean { field: String },

    /// Enum value outside the closed set
    #[error("value for '{field}' must be one of the allowed values: {}", .allowed.join(", "))]
    NotAllowedValue { field: String, allowed: Vec<String> },

    /// List property received a non-sequence
    #[error("value for '{field}' must be a list")]
    NotAList { field: String },

    /// List element outside the closed set
    #[error("value '{element}' for '{field}' is not allowed")]
    NotAllowedElement { field: String, element: String },
}

impl Violation {
    /// Name of the field the violation refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::NotANumber { field }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::NotAWholeNumber { field }
            | Self::NotABoolean { field }
            | Self::NotAllowedValue { field, .. }
            | Self::NotAList { field }
            | Self::NotAllowedElement { field, .. } => field,
        }
    }
}

/// A constraint violation, optionally tagged with its position in a batch.
///
/// `object_index` is 0-based; the rendered message is 1-based
/// (`Object 2: ...` for index 1).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub violation: Violation,
    pub object_index: Option<usize>,
}

impl ValidationError {
    /// Wrap a violation without a batch index.
    pub fn new(violation: Violation) -> Self {
        Self {
            field: violation.field().to_string(),
            violation,
            object_index: None,
        }
    }

    /// Tag the error with the 0-based index of the batch element it came from.
    pub fn at_index(mut self, index: usize) -> Self {
        self.object_index = Some(index);
        self
    }

    /// The user-facing message without the batch prefix.
    pub fn message(&self) -> String {
        self.violation.to_string()
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self::new(violation)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object_index {
            Some(index) => write!(f, "Object {}: {}", index + 1, self.violation),
            None => write!(f, "{}", self.violation),
        }
    }
}

impl std::error::Error for ValidationError {}

/// All errors collected for one validation run, in schema/array order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<Vec<ValidationError>> for ValidationReport {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Failures while turning text or markup into a document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// Markup contained no embedded JSON-LD block
    #[error("no structured block found")]
    NoStructuredBlock,

    /// The literal (or the embedded block's content) is not valid JSON
    #[error("syntax error: {0}")]
    Syntax(#[from] serde_json::Error),

    /// Valid JSON that is neither an object nor an array of objects
    #[error("unsupported document shape: expected an object or an array of objects, got {found}")]
    UnsupportedShape { found: String },
}

impl ExtractionError {
    pub fn unsupported_shape(found: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            found: found.into(),
        }
    }

    /// Whether the failure is a missing block rather than malformed content.
    pub fn is_missing_block(&self) -> bool {
        matches!(self, Self::NoStructuredBlock)
    }
}

/// Structural problems with a schema or catalog edit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Two properties share a name
    #[error("Duplicate property name '{name}'")]
    DuplicateProperty { name: String },

    /// Property name is empty or blank
    #[error("Property name cannot be empty")]
    EmptyPropertyName,

    /// Referenced property is not part of the schema or catalog
    #[error("Unknown property '{name}'")]
    UnknownProperty { name: String },

    /// Attribute list name is empty or blank
    #[error("Attribute list name cannot be empty")]
    EmptyListName,

    /// Class name is empty or blank
    #[error("Class name cannot be empty")]
    EmptyClassName,

    /// Target class name is already in use
    #[error("Class '{name}' already exists")]
    DuplicateClass { name: String },
}

impl SchemaError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateProperty { name: name.into() }
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownProperty { name: name.into() }
    }
}

// Result type aliases for convenience
pub type EngineResult<T> = Result<T, EngineError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type ExtractionResult<T> = Result<T, ExtractionError>;
pub type SchemaResult<T> = Result<T, SchemaError>;
