//! SET-clause building for partial UPDATE statements

use crate::config::NameTranslation;
use crate::error::{FragmentError, Result};
use crate::fragment::QueryFragment;
use crate::sql::sanitize::quote_identifier;
use crate::types::FieldValues;

/// Build a parameterized `SET` clause from a partial set of fields
///
/// For each entry of `data`, in insertion order, the column name is resolved
/// through `translation` (falling back to the external field name) and a
/// `"<column>"=$<n>` condition is emitted with a 1-based placeholder. The
/// conditions are joined with `", "` and the values are returned in the same
/// order; values are never interpolated into the fragment string.
///
/// Which fields are allowed is not checked here: the same function serves
/// every entity type through a different translation table, and field
/// admission belongs to upstream schema validation.
///
/// # Errors
/// Returns [`FragmentError::NoUpdatableFields`] when `data` is empty. An
/// empty `SET` clause is never emitted.
///
/// # Example
/// ```
/// use pg_fragments::{FieldValues, NameTranslation, build_update_fragment};
///
/// let data = FieldValues::new()
///     .set("firstName", "user")
///     .set("lastName", "one");
/// let translation = NameTranslation::new()
///     .map("firstName", "first_name")
///     .map("lastName", "last_name");
///
/// let fragment = build_update_fragment(&data, &translation).unwrap();
/// assert_eq!(fragment.sql(), r#""first_name"=$1, "last_name"=$2"#);
/// ```
pub fn build_update_fragment(
    data: &FieldValues,
    translation: &NameTranslation,
) -> Result<QueryFragment> {
    if data.is_empty() {
        return Err(FragmentError::NoUpdatableFields);
    }

    let mut assignments = Vec::with_capacity(data.len());
    let mut values = Vec::with_capacity(data.len());

    for (idx, (field, value)) in data.iter().enumerate() {
        let column = translation.resolve(field);
        assignments.push(format!("{}=${}", quote_identifier(column), idx + 1));
        values.push(value.clone());
    }

    Ok(QueryFragment::new(assignments.join(", "), values))
}
