//! Parser configuration.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What a scan does with a line that has the context shape but corrupt
/// fields.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScanPolicy {
    /// Report the corrupt line as a parse failure and stop scanning.
    #[default]
    FailFast,
    /// Log the corrupt line and keep looking for a later one.
    SkipInvalid,
}

/// Errors encountered while parsing a [`ScanPolicy`] from text.
pub type ScanPolicyParseError = strum::ParseError;

/// Knobs for [`ContextParser`](crate::ContextParser).
///
/// Deserializes from an embedding tool's configuration; missing keys take
/// their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParserOptions {
    scan_policy: ScanPolicy,
}

impl ParserOptions {
    /// Returns options with the given scan policy.
    #[must_use]
    pub const fn with_scan_policy(mut self, scan_policy: ScanPolicy) -> Self {
        self.scan_policy = scan_policy;
        self
    }

    /// Policy applied to corrupt context lines while scanning.
    #[must_use]
    pub const fn scan_policy(&self) -> ScanPolicy {
        self.scan_policy
    }
}
