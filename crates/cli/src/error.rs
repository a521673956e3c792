// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for configuration handling.

use thiserror::Error;

/// Errors raised while turning configuration into a filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A recognized option holds a value of the wrong shape.
    #[error("invalid configuration: `{option}` must be {expected}, got {found}")]
    InvalidConfiguration {
        option: &'static str,
        expected: &'static str,
        found: String,
    },

    /// An in-memory configuration document could not be deserialized.
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

impl FilterError {
    pub(crate) fn invalid(
        option: &'static str,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        Self::InvalidConfiguration {
            option,
            expected,
            found: describe(found),
        }
    }
}

/// Short JSON type name used in error messages.
fn describe(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => format!("boolean {b}"),
        serde_json::Value::Number(n) => format!("number {n}"),
        serde_json::Value::String(s) => format!("string {s:?}"),
        serde_json::Value::Array(_) => "an array containing non-strings".to_string(),
        serde_json::Value::Object(_) => "an object".to_string(),
    }
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, FilterError>;
