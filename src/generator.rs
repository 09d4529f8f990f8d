//! Document generation from a schema and user-entered values.
//!
//! The generator coerces on a best-effort basis and never rejects input:
//! a value that cannot be coerced is carried through as entered so that the
//! subsequent [`Schema::validate_document`] run reports it. Fields without a
//! usable value are omitted entirely.

use crate::config::EngineConfig;
use crate::document::{Document, FormValue, FormValues};
use crate::schema::{PropertyDefinition, PropertyKind, Schema};
use log::debug;
use serde_json::{Number, Value};

/// Builds canonical JSON-LD documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentGenerator {
    config: EngineConfig,
}

impl DocumentGenerator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate a document: `@context` and `@type` first, then one key per
    /// property with a usable value, in schema order.
    pub fn generate(&self, schema: &Schema, values: &FormValues) -> Document {
        let mut document = Document::new();
        document.insert("@context", Value::String(self.config.context.clone()));
        document.insert("@type", Value::String(self.config.type_tag.clone()));

        for property in schema {
            let Some(raw) = values.get(&property.name) else {
                continue;
            };
            match convert(property, raw) {
                Some(value) => {
                    document.insert(property.name.clone(), value);
                }
                None => debug!("Omitting '{}': no usable value", property.name),
            }
        }

        document
    }
}

/// Convert one raw form value for a property, `None` meaning "omit".
fn convert(property: &PropertyDefinition, raw: &FormValue) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }

    match (property.kind, raw) {
        (PropertyKind::Number, FormValue::Text(text)) => Some(number_or_text(text)),
        (PropertyKind::Boolean, FormValue::Text(text)) => match text.as_str() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        (PropertyKind::Boolean, FormValue::List(_)) => None,
        (_, FormValue::Text(text)) => Some(Value::String(text.clone())),
        (_, FormValue::List(items)) => Some(Value::Array(
            items.iter().cloned().map(Value::String).collect(),
        )),
    }
}

fn number_or_text(text: &str) -> Value {
    text.trim()
        .parse::<f64>()
        .ok()
        .and_then(json_number)
        .unwrap_or_else(|| Value::String(text.to_string()))
}

/// Whole numbers are written as JSON integers, everything else as floats.
fn json_number(number: f64) -> Option<Value> {
    if !number.is_finite() {
        return None;
    }
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        return Some(Value::Number(Number::from(number as i64)));
    }
    Number::from_f64(number).map(Value::Number)
}
