// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter configuration.
//!
//! A [`FilterConfig`] is either built directly, deserialized from an
//! in-memory TOML/JSON document, or read through a [`ConfigAccessor`]
//! that answers option lookups by name.

pub mod defaults;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FilterError, Result};
use defaults::option;

/// Spec file patterns: a single pattern or an ordered list.
///
/// The distinction matters: only `Single("**/*.*")` counts as the
/// unmodified default (see [`TestFiles::is_default`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestFiles {
    Single(String),
    List(Vec<String>),
}

impl Default for TestFiles {
    fn default() -> Self {
        Self::Single(defaults::TEST_FILES.to_string())
    }
}

impl TestFiles {
    /// Interpret a raw option value.
    ///
    /// Accepts a string or an array of strings; anything else is an
    /// [`FilterError::InvalidConfiguration`].
    pub fn from_value(value: &Value) -> Result<Self> {
        const EXPECTED: &str = "a string or an array of strings";

        match value {
            Value::String(pattern) => Ok(Self::Single(pattern.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(String::from))
                .collect::<Option<Vec<_>>>()
                .map(Self::List)
                .ok_or_else(|| FilterError::invalid(option::TEST_FILES, EXPECTED, value)),
            other => Err(FilterError::invalid(option::TEST_FILES, EXPECTED, other)),
        }
    }

    /// True only for the single default wildcard string.
    ///
    /// Compared before normalization, so `List(["**/*.*"])` is a custom
    /// configuration while `Single("**/*.*")` is not.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Single(pattern) if pattern == defaults::TEST_FILES)
    }

    /// Patterns as an ordered slice (a single pattern becomes one element).
    pub fn patterns(&self) -> &[String] {
        match self {
            Self::Single(pattern) => std::slice::from_ref(pattern),
            Self::List(patterns) => patterns,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Single(pattern) => Value::String(pattern.clone()),
            Self::List(patterns) => {
                Value::Array(patterns.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

/// Read-only configuration snapshot consumed by the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FilterConfig {
    /// Path prefix of the integration folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_folder: Option<String>,

    /// Spec file pattern(s).
    pub test_files: TestFiles,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_integration_folder(mut self, folder: impl Into<String>) -> Self {
        self.integration_folder = Some(folder.into());
        self
    }

    pub fn with_test_files(mut self, test_files: TestFiles) -> Self {
        self.test_files = test_files;
        self
    }

    /// Build a config by querying an accessor for each recognized option.
    ///
    /// Missing or null `testFiles` resolves to the default wildcard;
    /// missing or null `integrationFolder` stays unset.
    pub fn from_accessor<A: ConfigAccessor + ?Sized>(accessor: &A) -> Result<Self> {
        let test_files = match accessor.option(option::TEST_FILES) {
            None | Some(Value::Null) => TestFiles::default(),
            Some(value) => TestFiles::from_value(&value)?,
        };

        let integration_folder = match accessor.option(option::INTEGRATION_FOLDER) {
            None | Some(Value::Null) => None,
            Some(Value::String(folder)) => Some(folder),
            Some(other) => {
                return Err(FilterError::invalid(option::INTEGRATION_FOLDER, "a string", &other));
            }
        };

        Ok(Self {
            integration_folder,
            test_files,
        })
    }

    /// Parse a TOML document such as:
    ///
    /// ```toml
    /// integrationFolder = "cypress/integration"
    /// testFiles = ["**/*spec.js", "smoke.js"]
    /// ```
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilterError::Parse(e.to_string()))
    }

    /// Parse a JSON object with the same keys as [`FilterConfig::parse_toml`].
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| FilterError::Parse(e.to_string()))
    }
}

/// Looks up configuration options by name.
///
/// Implemented for [`FilterConfig`], JSON objects, and plain closures so
/// callers can hand over whatever configuration source they already have.
pub trait ConfigAccessor {
    fn option(&self, name: &str) -> Option<Value>;
}

impl ConfigAccessor for FilterConfig {
    fn option(&self, name: &str) -> Option<Value> {
        match name {
            option::INTEGRATION_FOLDER => self.integration_folder.clone().map(Value::String),
            option::TEST_FILES => Some(self.test_files.to_value()),
            _ => None,
        }
    }
}

impl ConfigAccessor for serde_json::Map<String, Value> {
    fn option(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<F> ConfigAccessor for F
where
    F: Fn(&str) -> Option<Value>,
{
    fn option(&self, name: &str) -> Option<Value> {
        self(name)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
