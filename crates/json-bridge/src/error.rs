use thiserror::Error;

use crate::node::Node;

/// Failures raised while reading, building or encoding a JSON tree.
///
/// A missing key on a primitive getter is not an error (the caller's default
/// is returned), and neither is an array element of an unrelated kind being
/// skipped by [`JsonArray::build_list`](crate::JsonArray::build_list).
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("malformed json document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a json object at the top level, found {found}")]
    NotAnObject { found: &'static str },
    #[error("{key:?} holds {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{key:?} holds an invalid value: {reason}")]
    InvalidValue { key: String, reason: String },
    #[error("no array stored under {key:?}")]
    MissingArray { key: String },
    #[error("container is nested inside itself")]
    CyclicStructure,
}

impl JsonError {
    pub(crate) fn type_mismatch(
        key: impl Into<String>,
        expected: &'static str,
        found: &Node,
    ) -> Self {
        JsonError::TypeMismatch {
            key: key.into(),
            expected,
            found: found.kind_name(),
        }
    }

    /// For [`JsonDeserialize`](crate::JsonDeserialize) impls whose field has
    /// the right kind but a value they cannot accept.
    pub fn invalid_value(key: impl Into<String>, reason: impl ToString) -> Self {
        JsonError::InvalidValue {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JsonError>;
