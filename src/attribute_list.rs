//! Named attribute lists assembled from the property catalog.
//!
//! An attribute list is a user-named [`Schema`]. Lists flagged as templates
//! can seed new lists. The built-in template (id [`BUILTIN_TEMPLATE_ID`]) is
//! derived from the embedded vehicle catalog and cannot be edited or deleted.

use crate::catalog::PropertyCatalog;
use crate::error::{EngineError, EngineResult, SchemaError};
use crate::schema::Schema;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Id of the read-only built-in template.
pub const BUILTIN_TEMPLATE_ID: &str = "ftf";

/// A named schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeList {
    pub id: String,
    pub name: String,
    pub properties: Schema,
    #[serde(default)]
    pub is_template: bool,
    pub created_at: DateTime<Utc>,
}

impl AttributeList {
    /// Create a list with a fresh id.
    pub fn new(name: impl Into<String>, properties: Schema) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            properties,
            is_template: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.id == BUILTIN_TEMPLATE_ID
    }
}

/// The collection of attribute lists of a workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeLists {
    lists: Vec<AttributeList>,
}

impl AttributeLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection holding only the built-in template.
    pub fn with_builtin_template() -> Self {
        let mut lists = Self::new();
        lists.ensure_builtin_template();
        lists
    }

    /// Insert the built-in template when missing, e.g. after loading lists
    /// saved without it.
    pub fn ensure_builtin_template(&mut self) {
        if self.get(BUILTIN_TEMPLATE_ID).is_some() {
            return;
        }
        let catalog = PropertyCatalog::builtin();
        self.lists.insert(
            0,
            AttributeList {
                id: BUILTIN_TEMPLATE_ID.to_string(),
                name: "FTF (built-in)".to_string(),
                properties: catalog.as_schema().clone(),
                is_template: true,
                created_at: Utc::now(),
            },
        );
    }

    /// Create a new list, optionally seeded from a template.
    ///
    /// The new list's properties are sorted by name.
    pub fn create(&mut self, name: &str, template_id: Option<&str>) -> EngineResult<&AttributeList> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SchemaError::EmptyListName.into());
        }

        let properties = match template_id {
            Some(id) => self
                .get(id)
                .ok_or_else(|| EngineError::attribute_list_not_found(id))?
                .properties
                .sorted_by_name(),
            None => Schema::default(),
        };

        let list = AttributeList::new(name, properties);
        info!("Created attribute list '{}' ({})", list.name, list.id);
        self.lists.push(list);
        Ok(&self.lists[self.lists.len() - 1])
    }

    /// Delete a list by id.
    pub fn delete(&mut self, id: &str) -> EngineResult<AttributeList> {
        let index = self.editable_index(id)?;
        let removed = self.lists.remove(index);
        info!("Deleted attribute list '{}' ({})", removed.name, removed.id);
        Ok(removed)
    }

    /// Flag or unflag a list as a template.
    pub fn set_template(&mut self, id: &str, is_template: bool) -> EngineResult<()> {
        let index = self.editable_index(id)?;
        self.lists[index].is_template = is_template;
        Ok(())
    }

    /// Replace the properties of a list.
    pub fn replace_properties(&mut self, id: &str, properties: Schema) -> EngineResult<()> {
        let index = self.editable_index(id)?;
        self.lists[index].properties = properties;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&AttributeList> {
        self.lists.iter().find(|list| list.id == id)
    }

    pub fn templates(&self) -> impl Iterator<Item = &AttributeList> {
        self.lists.iter().filter(|list| list.is_template)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeList> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Refresh every editable list's definitions from the catalog by name.
    ///
    /// A list keeps its own constraints for a property unless the catalog
    /// entry defines constraints. Properties missing from the catalog are
    /// left untouched.
    pub fn sync_with_catalog(&mut self, catalog: &PropertyCatalog) {
        for list in self.lists.iter_mut().filter(|list| !list.is_builtin()) {
            for property in list.properties.properties_mut() {
                let Some(entry) = catalog.get(&property.name) else {
                    continue;
                };
                let constraints = entry
                    .value_constraints
                    .clone()
                    .or_else(|| property.value_constraints.take());
                *property = entry.clone();
                property.value_constraints = constraints;
            }
        }
    }

    /// Rename a property across every editable list. A list already holding
    /// `new_name` drops the old entry instead. Returns the number of lists
    /// changed.
    pub fn rename_property(&mut self, old_name: &str, new_name: &str) -> EngineResult<usize> {
        if new_name.trim().is_empty() {
            return Err(SchemaError::EmptyPropertyName.into());
        }
        if old_name == new_name {
            return Ok(0);
        }

        let mut changed = 0;
        for list in self.lists.iter_mut().filter(|list| !list.is_builtin()) {
            if !list.properties.contains(old_name) {
                continue;
            }
            if list.properties.contains(new_name) {
                list.properties.remove(old_name);
            } else if let Some(property) = list
                .properties
                .properties_mut()
                .iter_mut()
                .find(|p| p.name == old_name)
            {
                property.name = new_name.to_string();
            }
            changed += 1;
        }

        if changed > 0 {
            info!(
                "Renamed property '{}' to '{}' in {} attribute list(s)",
                old_name, new_name, changed
            );
        }
        Ok(changed)
    }

    /// Index of an editable list, rejecting the built-in template.
    fn editable_index(&self, id: &str) -> EngineResult<usize> {
        let index = self
            .lists
            .iter()
            .position(|list| list.id == id)
            .ok_or_else(|| EngineError::attribute_list_not_found(id))?;
        if self.lists[index].is_builtin() {
            return Err(EngineError::invalid_request(
                "the built-in template cannot be modified",
            ));
        }
        Ok(index)
    }
}

impl<'a> IntoIterator for &'a AttributeLists {
    type Item = &'a AttributeList;
    type IntoIter = std::slice::Iter<'a, AttributeList>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
