// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values and option names for configuration.

/// Option names understood by [`super::ConfigAccessor`] implementations.
pub mod option {
    /// Root folder of the integration (spec) files.
    pub const INTEGRATION_FOLDER: &str = "integrationFolder";

    /// Glob pattern(s) identifying spec files.
    pub const TEST_FILES: &str = "testFiles";
}

/// Default `testFiles` value: matches every file with an extension.
///
/// When the configuration still holds this exact string, pattern
/// classification would remove all coverage, so filtering falls back
/// to the integration folder instead.
pub const TEST_FILES: &str = "**/*.*";
