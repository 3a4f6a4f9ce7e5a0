//! Immutable per-entity configuration tables
//!
//! Both tables are constructed once at process start (one per entity type)
//! and passed explicitly into the builder calls. Neither can be mutated after
//! construction, so they are freely shared across request-handling tasks.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::sql::sanitize::validate_identifier;

/// Maps external field names to database column names
///
/// Names absent from the table fall back to the external name unchanged; the
/// update builder quotes whatever it resolves, so the fallback never widens
/// the injection surface. Which fields are admitted at all is upstream schema
/// validation's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTranslation(HashMap<String, String>);

impl NameTranslation {
    /// Create an empty translation table (every field name used verbatim)
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an external field name to a column name, chainable
    ///
    /// # Panics
    ///
    /// Panics if `column` is not a valid SQL identifier. Translation tables
    /// are programmer-owned configuration, so this fails at startup rather
    /// than threading a config error through every call site.
    ///
    /// # Example
    /// ```
    /// use pg_fragments::NameTranslation;
    ///
    /// let translation = NameTranslation::new()
    ///     .map("firstName", "first_name")
    ///     .map("lastName", "last_name");
    /// assert_eq!(translation.resolve("firstName"), "first_name");
    /// assert_eq!(translation.resolve("email"), "email");
    /// ```
    pub fn map(mut self, external: impl Into<String>, column: impl Into<String>) -> Self {
        let column = column.into();
        if let Err(e) = validate_identifier(&column) {
            panic!("invalid column name in translation table: {}", e);
        }
        self.0.insert(external.into(), column);
        self
    }

    /// Resolve an external field name to its column name
    ///
    /// Falls back to the external name when no entry exists.
    pub fn resolve<'a>(&'a self, external: &'a str) -> &'a str {
        self.0.get(external).map(String::as_str).unwrap_or(external)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The SQL comparison emitted for a whitelisted filter key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// `"column" = $n`
    Eq,
    /// `"column" ILIKE $n`; the bound value is wrapped in `%` wildcards.
    /// The wrapping happens only in the value list, never in the fragment.
    Contains,
    /// `"column" >= $n`
    Gte,
    /// `"column" <= $n`
    Lte,
    /// `"column" = $n`, emitted only when the filter value is truthy.
    ///
    /// A falsy value (`null`, `false`, numeric zero, empty string) omits the
    /// condition entirely instead of emitting `= false`, so the key means
    /// "has the property" rather than "the flag is exactly this".
    EqIfTruthy,
}

/// A single whitelist entry: the column to compare and how to compare it
///
/// The column is defined per entry, not derived from the external key, so
/// several keys may target the same column (e.g. a min/max pair).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    /// Database column the condition targets
    pub column: String,
    /// Comparison to emit
    pub comparison: Comparison,
}

/// Whitelist of recognized filter keys for one entity type
///
/// Any key outside the whitelist is rejected by the filter builder. Adding a
/// filterable field is a data change here, not a code change in the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSpec(IndexMap<String, FilterRule>);

impl FilterSpec {
    /// Create an empty whitelist (every filter key rejected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitelist a filter key, chainable
    ///
    /// # Panics
    ///
    /// Panics if `column` is not a valid SQL identifier, for the same reason
    /// as [`NameTranslation::map`].
    ///
    /// # Example
    /// ```
    /// use pg_fragments::{Comparison, FilterSpec};
    ///
    /// let spec = FilterSpec::new()
    ///     .filter("name", "name", Comparison::Contains)
    ///     .filter("minEmployees", "num_employees", Comparison::Gte)
    ///     .filter("maxEmployees", "num_employees", Comparison::Lte);
    /// assert_eq!(spec.len(), 3);
    /// ```
    pub fn filter(
        mut self,
        key: impl Into<String>,
        column: impl Into<String>,
        comparison: Comparison,
    ) -> Self {
        let column = column.into();
        if let Err(e) = validate_identifier(&column) {
            panic!("invalid column name in filter spec: {}", e);
        }
        self.0.insert(key.into(), FilterRule { column, comparison });
        self
    }

    /// Look up the rule for an external filter key
    pub fn rule(&self, key: &str) -> Option<&FilterRule> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
