//! Batch validation and export orchestration.
//!
//! Composes generation, validation and projection for whole payloads.
//! Errors from a batch carry the 0-based index of the document they belong
//! to and are ordered by document, then by schema.

use crate::config::EngineConfig;
use crate::document::{FormValues, Payload};
use crate::error::{EngineError, EngineResult, ValidationError, ValidationReport};
use crate::extract::JSON_LD_MEDIA_TYPE;
use crate::generator::DocumentGenerator;
use crate::schema::Schema;
use log::info;

/// Validate a single document or every document of a batch.
///
/// Batch errors are tagged with the element index; single-document errors
/// carry no index.
pub fn validate_batch(schema: &Schema, payload: &Payload) -> Vec<ValidationError> {
    match payload {
        Payload::Single(document) => schema.validate_document(document),
        Payload::Batch(documents) => documents
            .iter()
            .enumerate()
            .flat_map(|(index, document)| {
                schema
                    .validate_document(document)
                    .into_iter()
                    .map(move |error| error.at_index(index))
            })
            .collect(),
    }
}

/// A validated document ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub media_type: &'static str,
    pub content: String,
}

/// Generate a document from form values and render it for export.
///
/// The document is validated against the same schema first; any error
/// blocks the export and is returned in full.
pub fn prepare_export(
    config: &EngineConfig,
    schema: &Schema,
    values: &FormValues,
    file_name: Option<&str>,
) -> EngineResult<Export> {
    let document = DocumentGenerator::new(config.clone()).generate(schema, values);
    let errors = schema.validate_document(&document);
    if !errors.is_empty() {
        return Err(EngineError::ValidationFailed(ValidationReport::new(errors)));
    }

    let file_name = config.file_name_or_default(file_name).to_string();
    info!("Exporting document with {} entries as '{}'", document.len(), file_name);

    Ok(Export {
        file_name,
        media_type: JSON_LD_MEDIA_TYPE,
        content: document.to_json_pretty()?,
    })
}
