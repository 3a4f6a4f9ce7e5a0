//! SQL fragment assembly
//!
//! Clause builders and the identifier utilities they share.

pub mod filter;
pub mod sanitize;
pub mod update;

pub use filter::build_filter_fragment;
pub use sanitize::{quote_identifier, validate_identifier};
pub use update::build_update_fragment;
