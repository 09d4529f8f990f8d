//! Lenient validation of values and documents against a schema.
//!
//! This is the check behind form editing and document reports: absent or
//! empty values always pass, numeric strings are coerced, and every
//! violation is reported rather than only the first. Strict admission of
//! foreign fields lives in [`crate::projection`] and is deliberately a
//! separate code path.

use super::types::{PropertyDefinition, PropertyKind, Schema};
use crate::document::Document;
use crate::error::{ValidationError, ValidationResult, Violation};
use serde_json::Value;

impl PropertyDefinition {
    /// Check a raw value against this property's kind and constraints.
    ///
    /// Rules are evaluated in a fixed order per kind and stop at the first
    /// failure.
    pub fn validate_value(&self, value: &Value) -> ValidationResult<()> {
        if is_absent(value) {
            return Ok(());
        }

        let constraints = self.constraints();
        let field = || self.name.clone();

        match self.kind {
            PropertyKind::Number => {
                let number = coerce_number(value).ok_or_else(|| Violation::NotANumber {
                    field: field(),
                })?;
                if let Some(min) = constraints.min {
                    if number < min {
                        return Err(Violation::BelowMinimum {
                            field: field(),
                            min,
                        }
                        .into());
                    }
                }
                if let Some(max) = constraints.max {
                    if number > max {
                        return Err(Violation::AboveMaximum {
                            field: field(),
                            max,
                        }
                        .into());
                    }
                }
                if constraints.requires_integer() && number.fract() != 0.0 {
                    return Err(Violation::NotAWholeNumber { field: field() }.into());
                }
            }
            PropertyKind::Boolean => {
                let accepted = match value {
                    Value::Bool(_) => true,
                    Value::String(text) => text == "true" || text == "false",
                    _ => false,
                };
                if !accepted {
                    return Err(Violation::NotABoolean { field: field() }.into());
                }
            }
            PropertyKind::Enum => {
                let Some(allowed) = constraints.allowed_values() else {
                    return Ok(());
                };
                if !is_member(value, allowed) {
                    return Err(Violation::NotAllowedValue {
                        field: field(),
                        allowed: allowed.to_vec(),
                    }
                    .into());
                }
            }
            PropertyKind::List => {
                let Some(allowed) = constraints.allowed_values() else {
                    return Ok(());
                };
                let items = value
                    .as_array()
                    .ok_or_else(|| Violation::NotAList { field: field() })?;
                if let Some(offending) = items.iter().find(|item| !is_member(item, allowed)) {
                    return Err(Violation::NotAllowedElement {
                        field: field(),
                        element: display_element(offending),
                    }
                    .into());
                }
            }
            PropertyKind::Text => {}
        }

        Ok(())
    }
}

impl Schema {
    /// Validate every schema property present in the document.
    ///
    /// Properties missing from the document are skipped; metadata keys and
    /// undeclared fields are ignored. Errors come back in schema order and
    /// an empty vector means the document is valid.
    pub fn validate_document(&self, document: &Document) -> Vec<ValidationError> {
        self.iter()
            .filter_map(|property| {
                let value = document.get(&property.name)?;
                property.validate_value(value).err()
            })
            .collect()
    }
}

/// Free-function form of [`PropertyDefinition::validate_value`].
pub fn validate_value(property: &PropertyDefinition, value: &Value) -> ValidationResult<()> {
    property.validate_value(value)
}

/// Free-function form of [`Schema::validate_document`].
pub fn validate_document(schema: &Schema, document: &Document) -> Vec<ValidationError> {
    schema.validate_document(document)
}

/// `null` and the empty string count as "no value".
///
/// `0` and `false` are present values.
pub(crate) fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Numbers pass through, strings are parsed after trimming; anything else,
/// and non-finite results, are not numbers.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

pub(crate) fn is_member(value: &Value, allowed: &[String]) -> bool {
    value
        .as_str()
        .is_some_and(|text| allowed.iter().any(|candidate| candidate == text))
}

fn display_element(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
