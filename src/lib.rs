//! # pg-fragments
//!
//! A parameterized SQL fragment builder for partially-specified data.
//!
//! This crate turns an arbitrary subset of named fields into safe clause
//! fragments for PostgreSQL: a `SET` clause for partial updates and a `WHERE`
//! clause for whitelisted filters. External field names are translated to
//! column names through immutable per-entity tables, and every value travels
//! in a parallel bind list — never in the fragment string itself.
//!
//! ## Features
//!
//! - **Partial updates**: any subset of updatable fields becomes
//!   `"col"=$1, ...` plus an ordered value list; an empty subset is rejected
//! - **Whitelisted filters**: filter keys map declaratively to a column and a
//!   comparison (`=`, `ILIKE`, `>=`, `<=`, truthy-gated `=`); unknown keys
//!   are rejected outright
//! - **Injection safety**: identifiers are quoted, values only ever bind to
//!   positional placeholders, and placeholder numbering always matches the
//!   value list position-for-position
//! - **Pure builders**: no I/O, no shared mutable state; configuration tables
//!   are built once and shared freely across tasks
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_fragments::{
//!     Comparison, FieldValues, FilterSpec, NameTranslation,
//!     build_filter_fragment, build_update_fragment,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Built once per entity type, at startup
//!     let translation = NameTranslation::new()
//!         .map("firstName", "first_name")
//!         .map("lastName", "last_name");
//!     let spec = FilterSpec::new()
//!         .filter("comp_name", "comp_name", Comparison::Contains)
//!         .filter("minEmployees", "num_employees", Comparison::Gte)
//!         .filter("maxEmployees", "num_employees", Comparison::Lte);
//!
//!     // Partial update
//!     let data = FieldValues::new()
//!         .set("firstName", "user")
//!         .set("lastName", "one");
//!     let set = build_update_fragment(&data, &translation)?;
//!     assert_eq!(set.sql(), r#""first_name"=$1, "last_name"=$2"#);
//!
//!     let sql = format!(
//!         "UPDATE users SET {} WHERE username = ${}",
//!         set.sql(),
//!         set.next_placeholder(),
//!     );
//!     assert_eq!(
//!         sql,
//!         r#"UPDATE users SET "first_name"=$1, "last_name"=$2 WHERE username = $3"#
//!     );
//!
//!     // Filtered read
//!     let params = FieldValues::new()
//!         .set("comp_name", "nex")
//!         .set("minEmployees", 10);
//!     let filter = build_filter_fragment(&params, &spec)?;
//!     assert_eq!(
//!         filter.sql(),
//!         r#""comp_name" ILIKE $1 AND "num_employees" >= $2"#
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Execution
//!
//! The fragments compose into complete statements owned by the caller; the
//! value list binds positionally, e.g. via [`QueryFragment::bind_to`] for
//! sqlx. An empty filter fragment means "no filtering" and the caller should
//! omit the `WHERE` keyword; an empty update is an error by design.

pub mod config;
pub mod error;
pub mod fragment;
pub mod sql;
pub mod types;

// Re-export main types for convenience
pub use config::{Comparison, FilterRule, FilterSpec, NameTranslation};
pub use error::{FragmentError, Result};
pub use fragment::QueryFragment;
pub use sql::filter::build_filter_fragment;
pub use sql::sanitize::{quote_identifier, validate_identifier};
pub use sql::update::build_update_fragment;
pub use types::FieldValues;
