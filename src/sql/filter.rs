//! WHERE-clause building for whitelisted filters

use crate::config::{Comparison, FilterSpec};
use crate::error::{FragmentError, Result};
use crate::fragment::QueryFragment;
use crate::sql::sanitize::quote_identifier;
use crate::types::FieldValues;

/// Build a parameterized `WHERE` clause body from caller-supplied filters
///
/// Every key of `params` must appear in `spec`; the rule for the key decides
/// the target column and the comparison to emit. Conditions are numbered in
/// the insertion order of `params` and joined with `" AND "`.
///
/// Empty `params` yields an empty fragment with no values, meaning "no
/// filtering" — the caller omits the `WHERE` keyword. This is deliberately
/// asymmetric with [`build_update_fragment`](crate::build_update_fragment):
/// updating nothing is meaningless, filtering by nothing is not.
///
/// # Errors
/// Returns [`FragmentError::UnknownFilterKey`] for any key absent from the
/// whitelist. Unrecognized keys never pass through, so external input can
/// only ever control bound values, not statement structure.
///
/// # Example
/// ```
/// use pg_fragments::{Comparison, FieldValues, FilterSpec, build_filter_fragment};
///
/// let spec = FilterSpec::new()
///     .filter("comp_name", "comp_name", Comparison::Contains)
///     .filter("minEmployees", "num_employees", Comparison::Gte)
///     .filter("maxEmployees", "num_employees", Comparison::Lte);
///
/// let params = FieldValues::new()
///     .set("comp_name", "nex")
///     .set("minEmployees", 10);
///
/// let fragment = build_filter_fragment(&params, &spec).unwrap();
/// assert_eq!(
///     fragment.sql(),
///     r#""comp_name" ILIKE $1 AND "num_employees" >= $2"#
/// );
/// ```
pub fn build_filter_fragment(params: &FieldValues, spec: &FilterSpec) -> Result<QueryFragment> {
    let mut conditions = Vec::with_capacity(params.len());
    let mut values = Vec::with_capacity(params.len());

    for (key, value) in params.iter() {
        let rule = spec
            .rule(key)
            .ok_or_else(|| FragmentError::unknown_key(key))?;

        let column = quote_identifier(&rule.column);
        let placeholder = values.len() + 1;

        match rule.comparison {
            Comparison::Eq => {
                conditions.push(format!("{} = ${}", column, placeholder));
                values.push(value.clone());
            }
            Comparison::Contains => {
                conditions.push(format!("{} ILIKE ${}", column, placeholder));
                values.push(serde_json::Value::String(format!(
                    "%{}%",
                    match_text(value)
                )));
            }
            Comparison::Gte => {
                conditions.push(format!("{} >= ${}", column, placeholder));
                values.push(value.clone());
            }
            Comparison::Lte => {
                conditions.push(format!("{} <= ${}", column, placeholder));
                values.push(value.clone());
            }
            Comparison::EqIfTruthy => {
                // Falsy means "don't filter on this", not "= false"; the
                // skipped key consumes no placeholder.
                if is_truthy(value) {
                    conditions.push(format!("{} = ${}", column, placeholder));
                    values.push(value.clone());
                }
            }
        }
    }

    Ok(QueryFragment::new(conditions.join(" AND "), values))
}

/// Text rendition of a filter value for substring matching
fn match_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn company_spec() -> FilterSpec {
        FilterSpec::new()
            .filter("comp_name", "comp_name", Comparison::Contains)
            .filter("minEmployees", "num_employees", Comparison::Gte)
            .filter("maxEmployees", "num_employees", Comparison::Lte)
    }

    fn job_spec() -> FilterSpec {
        FilterSpec::new()
            .filter("title", "title", Comparison::Contains)
            .filter("minSalary", "salary", Comparison::Gte)
            .filter("hasEquity", "has_equity", Comparison::EqIfTruthy)
            .filter("companyHandle", "company_handle", Comparison::Eq)
    }

    #[test]
    fn test_all_three_company_filters() {
        let params = FieldValues::new()
            .set("comp_name", "nex")
            .set("minEmployees", 10)
            .set("maxEmployees", 200);

        let fragment = build_filter_fragment(&params, &company_spec()).unwrap();

        assert_eq!(
            fragment.sql(),
            r#""comp_name" ILIKE $1 AND "num_employees" >= $2 AND "num_employees" <= $3"#
        );
        assert_eq!(
            fragment.values(),
            &[json!("%nex%"), json!(10), json!(200)]
        );
    }

    #[test]
    fn test_empty_params_means_no_filtering() {
        let fragment = build_filter_fragment(&FieldValues::new(), &company_spec()).unwrap();

        assert!(fragment.is_empty());
        assert_eq!(fragment.sql(), "");
        assert_eq!(fragment.values(), &[] as &[serde_json::Value]);

        // Holds for any spec, including an empty one
        let fragment = build_filter_fragment(&FieldValues::new(), &FilterSpec::new()).unwrap();
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let params = FieldValues::new().set("invalid", "x");

        let err = build_filter_fragment(&params, &company_spec()).unwrap_err();
        assert_eq!(err, FragmentError::UnknownFilterKey("invalid".to_string()));
    }

    #[test]
    fn test_unknown_key_rejected_among_valid_keys() {
        let params = FieldValues::new()
            .set("minEmployees", 1)
            .set("numEmployees", 5)
            .set("maxEmployees", 10);

        let err = build_filter_fragment(&params, &company_spec()).unwrap_err();
        assert_eq!(
            err,
            FragmentError::UnknownFilterKey("numEmployees".to_string())
        );
    }

    #[test]
    fn test_equality_filter() {
        let params = FieldValues::new().set("companyHandle", "anderson-arias-morrow");

        let fragment = build_filter_fragment(&params, &job_spec()).unwrap();

        assert_eq!(fragment.sql(), r#""company_handle" = $1"#);
        assert_eq!(fragment.values(), &[json!("anderson-arias-morrow")]);
    }

    #[test]
    fn test_truthy_flag_emits_condition() {
        let params = FieldValues::new().set("hasEquity", true);

        let fragment = build_filter_fragment(&params, &job_spec()).unwrap();

        assert_eq!(fragment.sql(), r#""has_equity" = $1"#);
        assert_eq!(fragment.values(), &[json!(true)]);
    }

    #[test]
    fn test_falsy_flag_is_omitted_entirely() {
        let params = FieldValues::new().set("hasEquity", false);

        let fragment = build_filter_fragment(&params, &job_spec()).unwrap();

        assert!(fragment.is_empty());
        assert_eq!(fragment.values(), &[] as &[serde_json::Value]);
    }

    #[test]
    fn test_skipped_flag_does_not_leave_a_placeholder_gap() {
        let params = FieldValues::new()
            .set("title", "engineer")
            .set("hasEquity", false)
            .set("minSalary", 90_000);

        let fragment = build_filter_fragment(&params, &job_spec()).unwrap();

        // $2 follows $1 directly; the skipped flag consumed nothing
        assert_eq!(
            fragment.sql(),
            r#""title" ILIKE $1 AND "salary" >= $2"#
        );
        assert_eq!(fragment.values(), &[json!("%engineer%"), json!(90_000)]);
        assert_eq!(fragment.next_placeholder(), 3);
    }

    #[test]
    fn test_contains_wraps_only_the_value() {
        let params = FieldValues::new().set("comp_name", "50% off");

        let fragment = build_filter_fragment(&params, &company_spec()).unwrap();

        // Wildcards land in the value list, never in the fragment string
        assert_eq!(fragment.sql(), r#""comp_name" ILIKE $1"#);
        assert_eq!(fragment.values(), &[json!("%50% off%")]);
    }

    #[test]
    fn test_contains_with_non_string_value() {
        let params = FieldValues::new().set("comp_name", 3);

        let fragment = build_filter_fragment(&params, &company_spec()).unwrap();

        assert_eq!(fragment.values(), &[json!("%3%")]);
    }

    #[test]
    fn test_conditions_follow_param_order_not_spec_order() {
        let params = FieldValues::new()
            .set("maxEmployees", 200)
            .set("comp_name", "net");

        let fragment = build_filter_fragment(&params, &company_spec()).unwrap();

        assert_eq!(
            fragment.sql(),
            r#""num_employees" <= $1 AND "comp_name" ILIKE $2"#
        );
        assert_eq!(fragment.values(), &[json!(200), json!("%net%")]);
    }
}
