//! Typed persistence of an editing session on top of a [`StorageProvider`].
//!
//! Loading is tolerant: a key that was never written loads as an empty
//! value, and stored data that cannot be read back is logged and also
//! loads as empty. Saving propagates every failure.

use crate::attribute_list::AttributeLists;
use crate::catalog::{ClassCatalog, PropertyCatalog};
use crate::document::FormValues;
use crate::error::{EngineError, EngineResult};
use crate::schema::Schema;
use crate::storage::{StorageError, StorageKey, StorageProvider};
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

const GENERATOR_NAMESPACE: &str = "generator";
const CATALOG_NAMESPACE: &str = "catalog";
const SCHEMAS_NAMESPACE: &str = "schemas";

/// Typed load/save of the generator's schema and values, the property and
/// class catalogs, and the attribute lists.
#[derive(Debug, Clone)]
pub struct Workspace<S> {
    storage: S,
}

impl<S: StorageProvider> Workspace<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    pub fn schema_key() -> StorageKey {
        StorageKey::new(GENERATOR_NAMESPACE, "schema")
    }

    pub fn form_values_key() -> StorageKey {
        StorageKey::new(GENERATOR_NAMESPACE, "values")
    }

    pub fn property_catalog_key() -> StorageKey {
        StorageKey::new(CATALOG_NAMESPACE, "customProperties")
    }

    pub fn classes_key() -> StorageKey {
        StorageKey::new(CATALOG_NAMESPACE, "customClasses")
    }

    pub fn attribute_lists_key() -> StorageKey {
        StorageKey::new(SCHEMAS_NAMESPACE, "attributeLists")
    }

    /// The active schema of the generator, empty when none was saved.
    pub async fn load_schema(&self) -> EngineResult<Schema> {
        self.load_or_default(Self::schema_key()).await
    }

    pub async fn save_schema(&self, schema: &Schema) -> EngineResult<()> {
        self.save(Self::schema_key(), schema).await
    }

    /// The user's custom property catalog, empty when none was saved.
    pub async fn load_property_catalog(&self) -> EngineResult<PropertyCatalog> {
        self.load_or_default(Self::property_catalog_key()).await
    }

    pub async fn save_property_catalog(&self, catalog: &PropertyCatalog) -> EngineResult<()> {
        self.save(Self::property_catalog_key(), catalog).await
    }

    /// User-created classes, empty when none were saved.
    pub async fn load_classes(&self) -> EngineResult<ClassCatalog> {
        self.load_or_default(Self::classes_key()).await
    }

    pub async fn save_classes(&self, classes: &ClassCatalog) -> EngineResult<()> {
        self.save(Self::classes_key(), classes).await
    }

    /// Saved attribute lists. The built-in template is always present in
    /// the result, whether or not it was stored.
    pub async fn load_attribute_lists(&self) -> EngineResult<AttributeLists> {
        let mut lists: AttributeLists = self.load_or_default(Self::attribute_lists_key()).await?;
        lists.ensure_builtin_template();
        Ok(lists)
    }

    pub async fn save_attribute_lists(&self, lists: &AttributeLists) -> EngineResult<()> {
        self.save(Self::attribute_lists_key(), lists).await
    }

    /// Last-entered form values, empty when none were saved.
    pub async fn load_form_values(&self) -> EngineResult<FormValues> {
        self.load_or_default(Self::form_values_key()).await
    }

    pub async fn save_form_values(&self, values: &FormValues) -> EngineResult<()> {
        self.save(Self::form_values_key(), values).await
    }

    async fn load_or_default<T>(&self, key: StorageKey) -> EngineResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let stored = match self.storage.get(key.clone()).await.map_err(Into::<StorageError>::into) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("Nothing stored at {}, loading empty value", key);
                return Ok(T::default());
            }
            Err(StorageError::DataCorruption { details, .. }) => {
                warn!("Ignoring unreadable data at {}: {}", key, details);
                return Ok(T::default());
            }
            Err(e) => return Err(EngineError::Storage(e)),
        };

        match serde_json::from_value(stored) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Ignoring malformed data at {}: {}", key, e);
                Ok(T::default())
            }
        }
    }

    async fn save<T>(&self, key: StorageKey, value: &T) -> EngineResult<()>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_value(value)?;
        self.storage
            .put(key.clone(), data)
            .await
            .map_err(|e| EngineError::Storage(e.into()))?;
        info!("Saved {}", key);
        Ok(())
    }
}
