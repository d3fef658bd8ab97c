//! Daemon versions and grammar selection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::defaults::LEGACY_FORMAT_THRESHOLD;
use crate::grammar::GrammarGeneration;

/// A daemon version such as `8.7`, `8.10.2`, or `8.8-rc-1`.
///
/// Only the numeric base takes part in ordering; any qualifier after `-` or
/// `+` is kept, together with its separator, for display but ignored by
/// [`Self::base_cmp`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolVersion {
    major: u32,
    minor: u32,
    patch: u32,
    qualifier: Option<(char, String)>,
}

impl ToolVersion {
    /// Creates a version without qualifier.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: None,
        }
    }

    /// Major component.
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Minor component.
    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Patch component; zero when the version had none.
    #[must_use]
    pub const fn patch(&self) -> u32 {
        self.patch
    }

    /// Qualifier such as `rc-1`, if present.
    #[must_use]
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_ref().map(|(_, qualifier)| qualifier.as_str())
    }

    /// Returns the version stripped of its qualifier.
    #[must_use]
    pub const fn base_version(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }

    /// Compares numeric bases, ignoring qualifiers.
    #[must_use]
    pub fn base_cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch != 0 {
            write!(f, ".{}", self.patch)?;
        }
        if let Some((separator, qualifier)) = &self.qualifier {
            write!(f, "{separator}{qualifier}")?;
        }
        Ok(())
    }
}

/// Errors raised while parsing a [`ToolVersion`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid daemon version '{input}': {reason}")]
pub struct VersionParseError {
    input: String,
    reason: &'static str,
}

impl VersionParseError {
    const fn new(input: String, reason: &'static str) -> Self {
        Self { input, reason }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for ToolVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = s.chars().find(|c| matches!(c, '-' | '+'));
        let (base, qualifier) = separator
            .and_then(|sep| s.split_once(sep).map(|(head, tail)| (sep, head, tail)))
            .map_or((s, None), |(sep, head, tail)| {
                (head, Some((sep, tail.to_owned())))
            });
        let components = base
            .split('.')
            .map(str::parse::<u32>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| VersionParseError::new(s.to_owned(), "components must be numeric"))?;
        let (major, minor, patch) = match components.as_slice() {
            [major, minor] => (*major, *minor, 0),
            [major, minor, patch] => (*major, *minor, *patch),
            _ => {
                return Err(VersionParseError::new(
                    s.to_owned(),
                    "expected MAJOR.MINOR or MAJOR.MINOR.PATCH",
                ));
            }
        };
        Ok(Self {
            major,
            minor,
            patch,
            qualifier,
        })
    }
}

/// Picks the grammar generation a daemon of `version` wrote.
///
/// Versions whose base is at or below 8.7 wrote legacy lines; later versions
/// wrote current lines.
#[must_use]
pub fn select_generation(version: &ToolVersion) -> GrammarGeneration {
    match version.base_cmp(&LEGACY_FORMAT_THRESHOLD) {
        Ordering::Less | Ordering::Equal => GrammarGeneration::Legacy,
        Ordering::Greater => GrammarGeneration::Current,
    }
}

impl GrammarGeneration {
    /// Picks the generation a daemon of `version` wrote.
    #[must_use]
    pub fn for_version(version: &ToolVersion) -> Self {
        select_generation(version)
    }
}
