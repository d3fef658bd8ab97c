//! Java language version tags.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A Java feature release such as `8`, `11`, or `17`.
///
/// The daemon prints the bare feature release.  Older launchers used the
/// `1.N` spelling for releases up to 8, which is accepted when parsing and
/// normalised to `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct JavaLanguageVersion(NonZeroU32);

impl JavaLanguageVersion {
    /// Java 8, the release older context lines implicitly describe.
    pub const JAVA_8: Self = Self(NonZeroU32::MIN.saturating_add(7));

    /// Creates a version tag, returning `None` for release zero.
    #[must_use]
    pub const fn of(feature_release: u32) -> Option<Self> {
        match NonZeroU32::new(feature_release) {
            Some(release) => Some(Self(release)),
            None => None,
        }
    }

    /// Returns the numeric feature release.
    #[must_use]
    pub const fn feature_release(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for JavaLanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised when a Java version token cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JavaVersionParseError {
    /// The token was not a decimal release number.
    #[error("'{token}' is not a Java language version")]
    NotANumber {
        /// The rejected token.
        token: String,
    },
    /// Release zero does not exist.
    #[error("Java language version must be positive")]
    Zero,
}

impl FromStr for JavaLanguageVersion {
    type Err = JavaVersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let release = s
            .strip_prefix("1.")
            .filter(|rest| !rest.is_empty())
            .unwrap_or(s);
        let number = release
            .parse::<u32>()
            .map_err(|_| JavaVersionParseError::NotANumber {
                token: s.to_owned(),
            })?;
        Self::of(number).ok_or(JavaVersionParseError::Zero)
    }
}
