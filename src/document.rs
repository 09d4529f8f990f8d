//! Structured documents and user-entered form values.
//!
//! A [`Document`] is a JSON object: field name to value, plus passthrough
//! metadata keys starting with `@` (`@context`, `@type`, ...). A
//! [`Payload`] is what extraction yields: one document or a batch.
//! [`FormValues`] is the raw input the generator consumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Prefix marking document-level metadata keys.
pub const METADATA_PREFIX: char = '@';

/// Whether a key is a passthrough metadata key.
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// A single structured document.
///
/// Keys keep insertion order, so metadata written first stays first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap a JSON value, returning it back when it is not an object.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Metadata entries (`@`-prefixed keys) in document order.
    pub fn metadata(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter().filter(|(key, _)| is_metadata_key(key))
    }

    /// Data entries (non-metadata keys) in document order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter().filter(|(key, _)| !is_metadata_key(key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        document.into_value()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of extraction: a single document or a batch of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Single(Document),
    Batch(Vec<Document>),
}

impl Payload {
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Number of documents carried.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(documents) => documents.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All documents in order.
    pub fn documents(&self) -> Vec<&Document> {
        match self {
            Self::Single(document) => vec![document],
            Self::Batch(documents) => documents.iter().collect(),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Single(document) => document.into_value(),
            Self::Batch(documents) => {
                Value::Array(documents.into_iter().map(Document::into_value).collect())
            }
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Document> for Payload {
    fn from(document: Document) -> Self {
        Self::Single(document)
    }
}

impl From<Vec<Document>> for Payload {
    fn from(documents: Vec<Document>) -> Self {
        Self::Batch(documents)
    }
}

/// A raw value entered for one property: a scalar text or a list of texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    List(Vec<String>),
}

impl FormValue {
    /// Empty text and empty lists carry no usable value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Toggle membership of an item, turning a scalar into a list.
    pub fn toggle(&mut self, item: &str, checked: bool) {
        let mut items = self.as_list().map(<[String]>::to_vec).unwrap_or_default();
        if checked {
            items.push(item.to_string());
        } else {
            items.retain(|existing| existing != item);
        }
        *self = Self::List(items);
    }
}

impl From<&str> for FormValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FormValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// User-entered values keyed by property name.
pub type FormValues = HashMap<String, FormValue>;
