//! Caller-supplied field collections
//!
//! `FieldValues` carries the partial data handed to both builders. Insertion
//! order is significant: it determines placeholder numbering in the emitted
//! fragment and the order of the bound values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered collection of external field name / value pairs
///
/// Keys are unique; inserting a key twice replaces the value but keeps the
/// original position. Values are `serde_json::Value`, matching what upstream
/// request validation hands the data-access layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(IndexMap<String, serde_json::Value>);

impl FieldValues {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, chainable
    ///
    /// # Example
    /// ```
    /// use pg_fragments::FieldValues;
    ///
    /// let data = FieldValues::new()
    ///     .set("firstName", "user")
    ///     .set("age", 32);
    /// assert_eq!(data.len(), 2);
    /// ```
    pub fn set(mut self, field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Add a field in place
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Look up a field's value
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl From<IndexMap<String, serde_json::Value>> for FieldValues {
    fn from(map: IndexMap<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}
