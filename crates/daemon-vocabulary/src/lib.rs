//! Closed vocabularies recorded in a daemon's startup context line.
//!
//! The daemon prints a handful of enumerated values when it announces its
//! context: the JVM vendor, the native-services mode, and the scheduling
//! priority, alongside the Java language version it runs on.  This crate owns
//! those vocabularies and nothing else: each type converts a textual token
//! into exactly one value or reports that the token is not recognised.
//!
//! # Core types
//!
//! - [`JvmVendor`]: known JVM distributors
//! - [`NativeServicesMode`]: whether native integrations were enabled
//! - [`DaemonPriority`]: the daemon process scheduling priority
//! - [`JavaLanguageVersion`]: the Java feature release tag
//!
//! # Example
//!
//! ```
//! use daemon_vocabulary::{DaemonPriority, JavaLanguageVersion, JvmVendor};
//!
//! let vendor: JvmVendor = "ADOPTIUM".parse().expect("known vendor");
//! assert_eq!(vendor, JvmVendor::Adoptium);
//!
//! let version: JavaLanguageVersion = "1.8".parse().expect("legacy spelling");
//! assert_eq!(version.feature_release(), 8);
//!
//! assert_eq!(DaemonPriority::default(), DaemonPriority::Normal);
//! ```

mod java_version;
mod native_services;
mod priority;
mod vendor;

pub use java_version::{JavaLanguageVersion, JavaVersionParseError};
pub use native_services::NativeServicesMode;
pub use priority::DaemonPriority;
pub use vendor::JvmVendor;

/// Errors encountered while parsing a vocabulary token.
pub type VocabularyParseError = strum::ParseError;

#[cfg(test)]
mod tests;
