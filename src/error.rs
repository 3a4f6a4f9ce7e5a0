//! Error types for fragment building

use thiserror::Error;

/// Errors that can occur while building a query fragment
///
/// Both variants describe bad caller input. They are deterministic for a
/// given input, so retrying without changing the input can never succeed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FragmentError {
    /// The update builder received an empty field set. An empty `SET` clause
    /// is syntactically invalid, so this is rejected outright.
    #[error("no fields to update")]
    NoUpdatableFields,

    /// A filter key was not present in the whitelist. Unrecognized keys are
    /// never passed through: external input may only control SQL values,
    /// never SQL structure.
    #[error("unknown filter key: {0}")]
    UnknownFilterKey(String),
}

impl FragmentError {
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownFilterKey(key.into())
    }
}

pub type Result<T> = std::result::Result<T, FragmentError>;
