//! Import options.

use serde::{Deserialize, Serialize};

/// How a `createdAt` value that cannot be read as a date is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// Reject the import with `ImportError::InvalidDate`.
    Strict,
    /// Log a warning and use the current time instead.
    Lenient,
}

impl Default for DatePolicy {
    fn default() -> Self {
        Self::Strict
    }
}

/// Options shared by both importers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    pub date_policy: DatePolicy,
}
