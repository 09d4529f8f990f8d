//! Fluent builders for schemas and form values.

use asset_attributes::schema::{PropertyDefinition, PropertyKind, Schema, ValueConstraints};
use asset_attributes::{FormValue, FormValues};

/// Builder for schemas with a fluent API
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    properties: Vec<PropertyDefinition>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(self, name: &str, min: Option<f64>, max: Option<f64>) -> Self {
        self.property(
            PropertyDefinition::new(name, PropertyKind::Number)
                .with_constraints(ValueConstraints::range(min, max)),
        )
    }

    pub fn integer(self, name: &str, min: Option<f64>, max: Option<f64>) -> Self {
        self.property(
            PropertyDefinition::new(name, PropertyKind::Number)
                .with_constraints(ValueConstraints::range(min, max).with_integer(true)),
        )
    }

    pub fn text(self, name: &str) -> Self {
        self.property(PropertyDefinition::new(name, PropertyKind::Text))
    }

    pub fn boolean(self, name: &str) -> Self {
        self.property(PropertyDefinition::new(name, PropertyKind::Boolean))
    }

    pub fn enumeration(self, name: &str, values: &[&str]) -> Self {
        self.property(
            PropertyDefinition::new(name, PropertyKind::Enum)
                .with_constraints(ValueConstraints::one_of(values.iter().copied())),
        )
    }

    pub fn list(self, name: &str, values: &[&str]) -> Self {
        let property = PropertyDefinition::new(name, PropertyKind::List);
        if values.is_empty() {
            self.property(property)
        } else {
            self.property(
                property.with_constraints(ValueConstraints::one_of(values.iter().copied())),
            )
        }
    }

    pub fn property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    pub fn build(self) -> Schema {
        Schema::new(self.properties).expect("builder schemas have unique names")
    }
}

/// Builder for form values
#[derive(Debug, Clone, Default)]
pub struct FormValuesBuilder {
    values: FormValues,
}

impl FormValuesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), FormValue::from(value));
        self
    }

    pub fn list(mut self, name: &str, items: &[&str]) -> Self {
        self.values.insert(
            name.to_string(),
            FormValue::List(items.iter().map(|s| s.to_string()).collect()),
        );
        self
    }

    pub fn build(self) -> FormValues {
        self.values
    }
}
