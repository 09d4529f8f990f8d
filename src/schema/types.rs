//! Core schema type definitions for asset attributes.
//!
//! A [`Schema`] is an ordered, name-unique sequence of
//! [`PropertyDefinition`]s. Each definition names a field, gives it one of
//! five [`PropertyKind`]s, and optionally narrows the accepted values with
//! [`ValueConstraints`].

use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The closed set of value kinds a property can have.
///
/// `Enumeration` is accepted as an alias of `Enum` on input and always
/// written back as `Enum`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Numeric value, optionally bounded and/or integral
    Number,
    /// Free text
    Text,
    /// `true` or `false`
    Boolean,
    /// Sequence of strings, optionally drawn from a closed set
    List,
    /// Single string drawn from a closed set
    #[serde(alias = "Enumeration")]
    Enum,
}

impl PropertyKind {
    /// Whether a constraint editor makes sense for this kind.
    pub fn accepts_constraints(self) -> bool {
        matches!(self, Self::Number | Self::Enum | Self::List)
    }

    /// Name used in the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Text => "Text",
            Self::Boolean => "Boolean",
            Self::List => "List",
            Self::Enum => "Enum",
        }
    }
}

impl Default for PropertyKind {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific value rules.
///
/// Only the fields relevant to the owning property's kind are consulted:
/// `min`/`max`/`integer` for Number, `enum_values` for Enum and List.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl ValueConstraints {
    /// Numeric range constraint.
    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Closed value set for Enum and List properties.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enum_values: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Require whole numbers.
    pub fn with_integer(mut self, integer: bool) -> Self {
        self.integer = Some(integer);
        self
    }

    pub fn requires_integer(&self) -> bool {
        self.integer.unwrap_or(false)
    }

    /// The configured closed set, or `None` when absent or empty.
    ///
    /// An empty set means the constraint has not been configured yet and
    /// every value is accepted.
    pub fn allowed_values(&self) -> Option<&[String]> {
        match &self.enum_values {
            Some(values) if !values.is_empty() => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none()
            && self.max.is_none()
            && self.integer.is_none()
            && self.enum_values.is_none()
    }
}

/// Definition of a single typed property.
///
/// `name` is the stable key used in documents. The remaining descriptive
/// fields come from the property catalog and never affect validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Stable field key
    pub name: String,
    /// Display name
    #[serde(default)]
    pub label: String,
    /// Value kind
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    /// Display unit, not used in validation
    #[serde(default)]
    pub unit: String,
    /// Optional kind-specific constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_constraints: Option<ValueConstraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grouping class in the catalog (e.g. "Dimensions")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl PropertyDefinition {
    /// Create a definition with the given name and kind.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_constraints(mut self, constraints: ValueConstraints) -> Self {
        self.value_constraints = Some(constraints);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Constraints, or an empty set when none are attached.
    pub fn constraints(&self) -> ValueConstraints {
        self.value_constraints.clone().unwrap_or_default()
    }

    /// Human-readable summary of the accepted values.
    pub fn constraint_summary(&self) -> String {
        let c = self.value_constraints.as_ref();
        match self.kind {
            PropertyKind::Number => {
                let (min, max) = (c.and_then(|c| c.min), c.and_then(|c| c.max));
                let mut text = match (min, max) {
                    (Some(min), Some(max)) => format!("{} to {}", min, max),
                    (Some(min), None) => format!("≥ {}", min),
                    (None, Some(max)) => format!("≤ {}", max),
                    (None, None) => String::new(),
                };
                if c.is_some_and(ValueConstraints::requires_integer) {
                    text = if text.is_empty() {
                        "integer".to_string()
                    } else {
                        format!("{} (integer)", text)
                    };
                }
                if text.is_empty() { "any".to_string() } else { text }
            }
            PropertyKind::Boolean => "true / false".to_string(),
            PropertyKind::Enum | PropertyKind::List => c
                .and_then(ValueConstraints::allowed_values)
                .map(|values| values.join(", "))
                .unwrap_or_else(|| "any".to_string()),
            PropertyKind::Text => "any".to_string(),
        }
    }
}

/// Ordered, name-unique sequence of property definitions.
///
/// Uniqueness is enforced on construction and on deserialization, so a
/// `Schema` value is always usable by the validator as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<PropertyDefinition>", into = "Vec<PropertyDefinition>")]
pub struct Schema {
    properties: Vec<PropertyDefinition>,
}

impl Schema {
    /// Build a schema, rejecting duplicate or empty names.
    pub fn new(properties: Vec<PropertyDefinition>) -> SchemaResult<Self> {
        let mut seen = HashSet::new();
        for property in &properties {
            if property.name.trim().is_empty() {
                return Err(SchemaError::EmptyPropertyName);
            }
            if !seen.insert(property.name.as_str()) {
                return Err(SchemaError::duplicate(&property.name));
            }
        }
        Ok(Self { properties })
    }

    /// Parse the JSON wire format (an array of property definitions).
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Render the JSON wire format.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn properties(&self) -> &[PropertyDefinition] {
        &self.properties
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyDefinition> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }

    /// Append a property, keeping names unique.
    pub fn push(&mut self, property: PropertyDefinition) -> SchemaResult<()> {
        if property.name.trim().is_empty() {
            return Err(SchemaError::EmptyPropertyName);
        }
        if self.contains(&property.name) {
            return Err(SchemaError::duplicate(&property.name));
        }
        self.properties.push(property);
        Ok(())
    }

    /// Remove a property by name, returning it when present.
    pub fn remove(&mut self, name: &str) -> Option<PropertyDefinition> {
        let index = self.properties.iter().position(|p| p.name == name)?;
        Some(self.properties.remove(index))
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }

    /// Replace the constraints of a property.
    pub fn set_constraints(&mut self, name: &str, constraints: ValueConstraints) -> SchemaResult<()> {
        let property = self
            .properties
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| SchemaError::unknown(name))?;
        property.value_constraints = Some(constraints);
        Ok(())
    }

    /// Copy of the schema ordered by property name.
    pub fn sorted_by_name(&self) -> Self {
        let mut properties = self.properties.clone();
        properties.sort_by(|a, b| a.name.cmp(&b.name));
        Self { properties }
    }

    pub(crate) fn properties_mut(&mut self) -> &mut [PropertyDefinition] {
        &mut self.properties
    }
}

impl TryFrom<Vec<PropertyDefinition>> for Schema {
    type Error = SchemaError;

    fn try_from(properties: Vec<PropertyDefinition>) -> Result<Self, Self::Error> {
        Self::new(properties)
    }
}

impl From<Schema> for Vec<PropertyDefinition> {
    fn from(schema: Schema) -> Self {
        schema.properties
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a PropertyDefinition;
    type IntoIter = std::slice::Iter<'a, PropertyDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
