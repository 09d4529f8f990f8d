//! End-to-end validation flow for foreign documents.
//!
//! A [`ValidationSession`] holds a schema and a loaded document with
//! independent lifetimes:
//!
//! ```text
//! Idle → SchemaLoaded → DocumentLoaded → Valid | Invalid
//! ```
//!
//! Loading a document resets the previous errors. Swapping the schema while
//! a document is loaded re-validates it without discarding it. A document
//! loaded without a usable schema waits in `DocumentLoaded`.

use crate::batch::validate_batch;
use crate::document::Payload;
use crate::error::{EngineError, EngineResult, ValidationError, ValidationReport};
use crate::extract::extract_document;
use crate::fetch::RemoteFetcher;
use crate::projection::project_payload;
use crate::schema::Schema;
use log::{debug, info};
use std::fmt;

/// Where a session is in the validation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    SchemaLoaded,
    DocumentLoaded,
    Valid,
    Invalid,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::SchemaLoaded => "schema loaded",
            SessionState::DocumentLoaded => "document loaded",
            SessionState::Valid => "valid",
            SessionState::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
struct LoadedDocument {
    raw: Payload,
    projected: Option<Payload>,
    reference: Option<String>,
}

/// Stateful driver of extraction, projection and validation.
///
/// # Examples
///
/// ```rust
/// use asset_attributes::schema::{PropertyDefinition, PropertyKind, Schema, ValueConstraints};
/// use asset_attributes::session::{SessionState, ValidationSession};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut session = ValidationSession::new();
/// session.load_schema(Schema::new(vec![
///     PropertyDefinition::new("speed", PropertyKind::Number)
///         .with_constraints(ValueConstraints::range(Some(0.0), Some(10.0))),
/// ])?);
///
/// let state = session.load_document_text(r#"{"speed": 12}"#)?;
/// assert_eq!(state, SessionState::Invalid);
/// assert_eq!(session.errors()[0].to_string(), "value for 'speed' must be ≤ 10");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ValidationSession {
    schema: Option<Schema>,
    document: Option<LoadedDocument>,
    errors: Vec<ValidationError>,
    load_error: Option<String>,
    state: SessionState,
}

impl Default for ValidationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationSession {
    pub fn new() -> Self {
        Self {
            schema: None,
            document: None,
            errors: Vec::new(),
            load_error: None,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// The document as extracted, before projection.
    pub fn payload(&self) -> Option<&Payload> {
        self.document.as_ref().map(|document| &document.raw)
    }

    /// The document restricted to what the schema admits. `None` until both
    /// a document and a non-empty schema are loaded.
    pub fn projected(&self) -> Option<&Payload> {
        self.document
            .as_ref()
            .and_then(|document| document.projected.as_ref())
    }

    /// Reference the current document was fetched from, if any.
    pub fn reference(&self) -> Option<&str> {
        self.document
            .as_ref()
            .and_then(|document| document.reference.as_deref())
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn report(&self) -> ValidationReport {
        ValidationReport::new(self.errors.clone())
    }

    /// Cause of the last failed document load.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// The reference of a remotely loaded document that passed validation.
    ///
    /// Only such documents may be handed on for indexing.
    pub fn indexable_reference(&self) -> Option<&str> {
        match self.state {
            SessionState::Valid => self.reference(),
            _ => None,
        }
    }

    /// Install or swap the schema. A loaded document is re-validated.
    pub fn load_schema(&mut self, schema: Schema) -> SessionState {
        info!("Loaded schema with {} properties", schema.len());
        self.schema = Some(schema);
        self.evaluate()
    }

    /// Remove the schema, keeping any loaded document.
    pub fn clear_schema(&mut self) -> SessionState {
        self.schema = None;
        self.evaluate()
    }

    /// Extract a document from local text and validate it.
    ///
    /// # Errors
    ///
    /// Extraction failures are returned and also kept as [`load_error`];
    /// the previous document is discarded either way.
    ///
    /// [`load_error`]: Self::load_error
    pub fn load_document_text(&mut self, text: &str) -> EngineResult<SessionState> {
        self.load(text, None)
    }

    /// Fetch a document by reference and feed it through the same pipeline
    /// as local text. Transport failures are load errors, not validation
    /// errors.
    pub async fn load_document_from<F>(
        &mut self,
        reference: &str,
        fetcher: &F,
    ) -> EngineResult<SessionState>
    where
        F: RemoteFetcher,
    {
        debug!("Fetching document from {}", reference);
        match fetcher.fetch_text(reference).await {
            Ok(text) => self.load(&text, Some(reference.trim().to_string())),
            Err(e) => Err(self.fail_load(e.into())),
        }
    }

    /// Drop the loaded document and its errors.
    pub fn clear_document(&mut self) -> SessionState {
        self.document = None;
        self.load_error = None;
        self.evaluate()
    }

    /// Re-run projection and validation against the current schema.
    pub fn revalidate(&mut self) -> SessionState {
        self.evaluate()
    }

    fn load(&mut self, text: &str, reference: Option<String>) -> EngineResult<SessionState> {
        self.errors.clear();
        self.load_error = None;

        match extract_document(text) {
            Ok(raw) => {
                info!(
                    "Loaded {} document(s){}",
                    raw.len(),
                    reference
                        .as_deref()
                        .map(|r| format!(" from {}", r))
                        .unwrap_or_default()
                );
                self.document = Some(LoadedDocument {
                    raw,
                    projected: None,
                    reference,
                });
                Ok(self.evaluate())
            }
            Err(e) => Err(self.fail_load(e.into())),
        }
    }

    fn fail_load(&mut self, error: EngineError) -> EngineError {
        info!("Document load failed: {}", error);
        self.document = None;
        self.errors.clear();
        self.load_error = Some(error.to_string());
        self.evaluate();
        error
    }

    fn evaluate(&mut self) -> SessionState {
        let schema = self.schema.as_ref().filter(|schema| !schema.is_empty());

        let state = match (schema, self.document.as_mut()) {
            (None, None) if self.schema.is_some() => SessionState::SchemaLoaded,
            (None, None) => SessionState::Idle,
            (Some(_), None) => SessionState::SchemaLoaded,
            (None, Some(document)) => {
                document.projected = None;
                self.errors.clear();
                SessionState::DocumentLoaded
            }
            (Some(schema), Some(document)) => {
                document.projected = Some(project_payload(schema, &document.raw));
                self.errors = validate_batch(schema, &document.raw);
                if self.errors.is_empty() {
                    SessionState::Valid
                } else {
                    SessionState::Invalid
                }
            }
        };

        if state != self.state {
            info!("Validation session: {} -> {}", self.state, state);
        }
        self.state = state;
        state
    }
}
