//! The property catalog schemas are assembled from.
//!
//! A catalog is a name-unique collection of [`PropertyDefinition`]s that
//! users extend and edit. Definitions are copied out of the catalog into
//! attribute lists; editing the catalog afterwards only reaches those lists
//! through an explicit [`AttributeLists::sync_with_catalog`].
//!
//! Classes group catalog properties. A [`ClassCatalog`] persists the classes
//! users created explicitly, so a class can exist before any property is
//! assigned to it. Properties without a class belong to [`DEFAULT_CLASS`].
//!
//! [`AttributeLists::sync_with_catalog`]: crate::attribute_list::AttributeLists::sync_with_catalog

use crate::error::{SchemaError, SchemaResult};
use crate::schema::{PropertyDefinition, Schema, embedded};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Class of every property that names none.
pub const DEFAULT_CLASS: &str = "FTF";

static BUILTIN: LazyLock<Schema> = LazyLock::new(|| {
    Schema::from_json(embedded::vehicle_properties())
        .expect("embedded vehicle catalog is a valid schema")
        .sorted_by_name()
});

/// Editable, name-unique catalog of property definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyCatalog {
    properties: Schema,
}

impl PropertyCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in vehicle property set, sorted by name.
    pub fn builtin() -> Self {
        Self {
            properties: BUILTIN.clone(),
        }
    }

    /// Insert or replace a definition by name.
    ///
    /// When `previous_name` is given and differs from the definition's name
    /// the entry under the previous name is removed, which is how a property
    /// is renamed. Replacing keeps the entry's position.
    pub fn upsert(
        &mut self,
        definition: PropertyDefinition,
        previous_name: Option<&str>,
    ) -> SchemaResult<()> {
        if definition.name.trim().is_empty() {
            return Err(SchemaError::EmptyPropertyName);
        }

        if let Some(previous) = previous_name.filter(|previous| *previous != definition.name) {
            if self.properties.remove(previous).is_some() {
                info!("Renamed catalog property '{}' to '{}'", previous, definition.name);
            }
        }

        match self
            .properties
            .properties_mut()
            .iter_mut()
            .find(|existing| existing.name == definition.name)
        {
            Some(existing) => *existing = definition,
            None => self.properties.push(definition)?,
        }
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyDefinition> {
        self.properties.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains(name)
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

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.names()
    }

    /// Distinct non-empty classes, in first-seen order.
    pub fn classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = Vec::new();
        for class in self.iter().filter_map(|p| p.class.as_deref()) {
            if !class.is_empty() && !classes.contains(&class) {
                classes.push(class);
            }
        }
        classes
    }

    /// Definitions grouped by class. Unclassified definitions are grouped
    /// under the empty string.
    pub fn grouped_by_class(&self) -> BTreeMap<&str, Vec<&PropertyDefinition>> {
        let mut groups: BTreeMap<&str, Vec<&PropertyDefinition>> = BTreeMap::new();
        for property in self.iter() {
            groups
                .entry(property.class.as_deref().unwrap_or(""))
                .or_default()
                .push(property);
        }
        groups
    }

    /// Move every property whose class is `from` into `to`. Unclassified
    /// properties count as [`DEFAULT_CLASS`]. Returns how many moved.
    pub fn reassign_class(&mut self, from: &str, to: &str) -> usize {
        if from == to {
            return 0;
        }
        let mut moved = 0;
        for property in self.properties.properties_mut() {
            if effective_class(property) == from {
                property.class = Some(to.to_string());
                moved += 1;
            }
        }
        moved
    }

    /// View the catalog as a schema.
    pub fn as_schema(&self) -> &Schema {
        &self.properties
    }
}

fn effective_class(property: &PropertyDefinition) -> &str {
    property
        .class
        .as_deref()
        .filter(|class| !class.is_empty())
        .unwrap_or(DEFAULT_CLASS)
}

/// User-created classes, persisted apart from the properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassCatalog {
    classes: Vec<String>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }

    /// Every class in use: the stored ones, the ones catalog properties
    /// name, and [`DEFAULT_CLASS`]. Sorted and distinct.
    pub fn known_classes<'a>(&'a self, catalog: &'a PropertyCatalog) -> Vec<&'a str> {
        let mut known: BTreeSet<&str> = catalog.iter().map(effective_class).collect();
        known.extend(self.iter());
        known.insert(DEFAULT_CLASS);
        known.into_iter().collect()
    }

    /// Store a new class. The name is trimmed; returns `Ok(false)` when the
    /// class is already stored.
    pub fn add_class(&mut self, name: &str) -> SchemaResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SchemaError::EmptyClassName);
        }
        if self.contains(name) {
            return Ok(false);
        }
        self.classes.push(name.to_string());
        info!("Added class '{}'", name);
        Ok(true)
    }

    /// Rename a class and move its catalog properties along. The new name
    /// is trimmed and must not be a known class. Returns how many
    /// properties moved.
    pub fn rename_class(
        &mut self,
        old: &str,
        new: &str,
        catalog: &mut PropertyCatalog,
    ) -> SchemaResult<usize> {
        let new = new.trim();
        if new.is_empty() {
            return Err(SchemaError::EmptyClassName);
        }
        if self.known_classes(catalog).contains(&new) {
            return Err(SchemaError::DuplicateClass {
                name: new.to_string(),
            });
        }

        for class in self.classes.iter_mut().filter(|class| *class == old) {
            *class = new.to_string();
        }
        let moved = catalog.reassign_class(old, new);
        info!("Renamed class '{}' to '{}' ({} properties)", old, new, moved);
        Ok(moved)
    }

    /// Drop a class. Its catalog properties fall back to
    /// [`DEFAULT_CLASS`]; returns how many moved.
    pub fn remove_class(&mut self, name: &str, catalog: &mut PropertyCatalog) -> usize {
        self.classes.retain(|class| class != name);
        let moved = catalog.reassign_class(name, DEFAULT_CLASS);
        info!("Removed class '{}' ({} properties moved to {})", name, moved, DEFAULT_CLASS);
        moved
    }
}

impl From<Schema> for PropertyCatalog {
    fn from(properties: Schema) -> Self {
        Self { properties }
    }
}

impl<'a> IntoIterator for &'a PropertyCatalog {
    type Item = &'a PropertyDefinition;
    type IntoIter = std::slice::Iter<'a, PropertyDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Schema {
    /// Add a catalog property by name, without constraints.
    ///
    /// Returns `Ok(false)` when the schema already holds the property.
    pub fn add_from_catalog(&mut self, name: &str, catalog: &PropertyCatalog) -> SchemaResult<bool> {
        if self.contains(name) {
            return Ok(false);
        }
        let mut property = catalog
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::unknown(name))?;
        property.value_constraints = None;
        self.push(property)?;
        Ok(true)
    }

    /// Add every catalog property not yet in the schema. Returns how many
    /// were added.
    pub fn add_all_from_catalog(&mut self, catalog: &PropertyCatalog) -> usize {
        let mut added = 0;
        for property in catalog {
            if !self.contains(&property.name) {
                let mut property = property.clone();
                property.value_constraints = None;
                if self.push(property).is_ok() {
                    added += 1;
                }
            }
        }
        added
    }
}
