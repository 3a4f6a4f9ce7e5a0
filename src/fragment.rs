//! Query fragment output type
//!
//! A fragment is a partial SQL clause, not a complete statement. The caller
//! formats it into a statement template and binds the values positionally.

use sqlx::postgres::PgArguments;
use sqlx::query::Query;

/// A partial SQL clause with positional placeholders and the values they bind
///
/// The fragment string contains `$1..$n` with no gaps or repeats, and
/// `values[i]` is bound to `$(i + 1)`. Only the builders construct fragments,
/// so that correspondence holds for every non-error return.
///
/// # Example
/// ```
/// use pg_fragments::{FieldValues, NameTranslation, build_update_fragment};
///
/// let data = FieldValues::new().set("firstName", "user");
/// let translation = NameTranslation::new().map("firstName", "first_name");
/// let fragment = build_update_fragment(&data, &translation).unwrap();
///
/// let sql = format!(
///     "UPDATE users SET {} WHERE username = ${}",
///     fragment.sql(),
///     fragment.next_placeholder(),
/// );
/// assert_eq!(sql, r#"UPDATE users SET "first_name"=$1 WHERE username = $2"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFragment {
    sql: String,
    values: Vec<serde_json::Value>,
}

impl QueryFragment {
    pub(crate) fn new(sql: String, values: Vec<serde_json::Value>) -> Self {
        Self { sql, values }
    }

    /// The clause body, e.g. `"first_name"=$1, "last_name"=$2`
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bind values, in placeholder order
    pub fn values(&self) -> &[serde_json::Value] {
        &self.values
    }

    /// Whether the fragment contains no conditions
    ///
    /// An empty filter fragment means "no filtering"; the caller should omit
    /// the `WHERE` keyword entirely.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// The next free placeholder number
    ///
    /// Use this when appending further conditions to the statement template,
    /// e.g. `WHERE id = $<next>`.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    /// Deconstruct into the clause string and value list
    pub fn into_parts(self) -> (String, Vec<serde_json::Value>) {
        (self.sql, self.values)
    }

    /// Bind this fragment's values, in order, onto an sqlx Postgres query
    ///
    /// Values are bound by their JSON type: strings as text, integers as
    /// `BIGINT`, other numbers as `DOUBLE PRECISION`, booleans as `BOOLEAN`,
    /// null as SQL `NULL`, and arrays/objects as `JSONB`.
    pub fn bind_to<'q>(
        &'q self,
        mut query: Query<'q, sqlx::Postgres, PgArguments>,
    ) -> Query<'q, sqlx::Postgres, PgArguments> {
        for value in &self.values {
            query = bind_json(query, value);
        }
        query
    }
}

fn bind_json<'q>(
    query: Query<'q, sqlx::Postgres, PgArguments>,
    value: &'q serde_json::Value,
) -> Query<'q, sqlx::Postgres, PgArguments> {
    match value {
        serde_json::Value::Null => query.bind(None::<String>),
        serde_json::Value::Bool(b) => query.bind(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else if let Some(f) = n.as_f64() {
                query.bind(f)
            } else {
                query.bind(value)
            }
        }
        serde_json::Value::String(s) => query.bind(s.as_str()),
        other => query.bind(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_placeholder() {
        let fragment = QueryFragment::new(
            "\"a\"=$1, \"b\"=$2".to_string(),
            vec![serde_json::json!(1), serde_json::json!(2)],
        );
        assert_eq!(fragment.next_placeholder(), 3);
    }

    #[test]
    fn test_empty_fragment() {
        let fragment = QueryFragment::default();
        assert!(fragment.is_empty());
        assert_eq!(fragment.next_placeholder(), 1);
        assert_eq!(fragment.values(), &[] as &[serde_json::Value]);
    }

    #[test]
    fn test_into_parts() {
        let fragment =
            QueryFragment::new("\"x\" = $1".to_string(), vec![serde_json::json!("v")]);
        let (sql, values) = fragment.into_parts();
        assert_eq!(sql, "\"x\" = $1");
        assert_eq!(values, vec![serde_json::json!("v")]);
    }
}
