//! SQL identifier quoting and validation
//!
//! Column names reach the builders from configuration, never from request
//! values, but they are still quoted defensively so reserved words and odd
//! spellings cannot change statement structure.

use regex::Regex;

/// Quote a SQL identifier for safe use in a statement
///
/// Wraps the identifier in double quotes and doubles any embedded quotes.
///
/// # Example
/// ```
/// use pg_fragments::quote_identifier;
///
/// assert_eq!(quote_identifier("first_name"), "\"first_name\"");
/// assert_eq!(quote_identifier("order"), "\"order\"");
/// ```
pub fn quote_identifier(identifier: &str) -> String {
    let escaped = identifier.replace('"', "\"\"");
    format!("\"{}\"", escaped)
}

/// Validate a column name from configuration
///
/// Rules:
/// - Must start with a lowercase letter
/// - Can only contain lowercase letters, numbers, and underscores
///
/// Reserved words are allowed here; [`quote_identifier`] neutralizes them.
///
/// # Example
/// ```
/// use pg_fragments::validate_identifier;
///
/// assert!(validate_identifier("num_employees").is_ok());
/// assert!(validate_identifier("num employees").is_err());
/// ```
pub fn validate_identifier(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Identifier cannot be empty".to_string());
    }

    let re = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();
    if !re.is_match(name) {
        return Err(format!(
            "Identifier '{}' is invalid. Must start with a lowercase letter and contain only lowercase letters, numbers, and underscores.",
            name
        ));
    }

    Ok(())
}
