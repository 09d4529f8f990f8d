//! Strict projection of foreign documents onto a schema.
//!
//! Projection decides which fields of an untrusted document are admitted at
//! all. Unlike lenient validation it performs no coercion: a Number field
//! must already be a JSON number, a Boolean a JSON boolean, and so on.
//! Rejected and undeclared fields are dropped silently; metadata keys are
//! copied verbatim.

use crate::document::{Document, Payload, is_metadata_key};
use crate::schema::validation::is_member;
use crate::schema::{PropertyDefinition, PropertyKind, Schema};
use log::debug;
use serde_json::Value;

/// Whether a value is admitted for a property under the strict check.
pub fn admits(property: &PropertyDefinition, value: &Value) -> bool {
    let constraints = property.constraints();
    match property.kind {
        PropertyKind::Number => {
            let Some(number) = value.as_f64() else {
                return false;
            };
            constraints.min.is_none_or(|min| number >= min)
                && constraints.max.is_none_or(|max| number <= max)
                && (!constraints.requires_integer() || number.fract() == 0.0)
        }
        PropertyKind::Boolean => value.is_boolean(),
        PropertyKind::Text => value.is_string(),
        PropertyKind::Enum => match constraints.allowed_values() {
            Some(allowed) => is_member(value, allowed),
            None => value.is_string(),
        },
        PropertyKind::List => {
            let Some(items) = value.as_array() else {
                return false;
            };
            match constraints.allowed_values() {
                Some(allowed) => items.iter().all(|item| is_member(item, allowed)),
                None => items.iter().all(Value::is_string),
            }
        }
    }
}

/// Restrict a document to metadata plus schema fields that pass [`admits`].
///
/// Key order of the input document is preserved.
pub fn project(schema: &Schema, document: &Document) -> Document {
    let mut projected = Document::new();

    for (key, value) in document {
        if is_metadata_key(key) {
            projected.insert(key.clone(), value.clone());
            continue;
        }
        match schema.get(key) {
            Some(property) if admits(property, value) => {
                projected.insert(key.clone(), value.clone());
            }
            Some(_) => debug!("Dropping '{}': value not admitted by schema", key),
            None => debug!("Dropping '{}': not declared in schema", key),
        }
    }

    projected
}

/// Apply [`project`] to a single document or to every document of a batch.
pub fn project_payload(schema: &Schema, payload: &Payload) -> Payload {
    match payload {
        Payload::Single(document) => Payload::Single(project(schema, document)),
        Payload::Batch(documents) => Payload::Batch(
            documents
                .iter()
                .map(|document| project(schema, document))
                .collect(),
        ),
    }
}
