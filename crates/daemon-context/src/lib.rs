//! Recovers a daemon's launch context from the log text it wrote at startup.
//!
//! A daemon announces itself with a single `DefaultDaemonContext[...]` line
//! listing its identity, Java runtime, registry directory, process id, idle
//! timeout, and JVM options.  The shape of that line changed once: daemons up
//! to and including version 8.7 omit the Java version and vendor.  This crate
//! selects the grammar for the daemon version, finds the context line, and
//! decodes every field into a typed [`DaemonContext`].
//!
//! # Core types
//!
//! - [`DaemonContext`]: the decoded launch context
//! - [`GrammarGeneration`] and [`Grammar`]: the two context line shapes
//! - [`ToolVersion`]: the daemon version used to pick a grammar
//! - [`LineSource`], [`DaemonLogFile`], [`InMemoryLines`]: text to scan
//! - [`ContextParser`] and [`ParserOptions`]: the parsing entry points
//! - [`ContextError`] and [`DecodeError`]: failure reporting
//!
//! # Example
//!
//! ```
//! use daemon_context::{ToolVersion, parse_from_str};
//! use daemon_vocabulary::JvmVendor;
//!
//! let line = "DefaultDaemonContext[uid=abc,javaHome=/jdk,javaVersion=17,\
//!     javaVendor=ADOPTIUM,daemonRegistryDir=/reg,pid=123,idleTimeout=10000,\
//!     daemonOpts=-Xmx1g,-Xms512m]";
//! let version: ToolVersion = "8.10".parse()?;
//! let context = parse_from_str(line, &version)?;
//!
//! assert_eq!(context.uid(), Some("abc"));
//! assert_eq!(context.java_vendor(), JvmVendor::Adoptium);
//! assert_eq!(context.jvm_options(), ["-Xmx1g", "-Xms512m"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod context;
pub mod decode;
pub mod defaults;
mod error;
mod grammar;
mod matcher;
mod options;
mod parser;
mod source;
mod version;

pub use context::DaemonContext;
pub use error::{ContextError, DecodeError, ParseFailureReason};
pub use grammar::{
    CURRENT_GRAMMAR, Field, Grammar, GrammarGeneration, LEGACY_GRAMMAR, Presence, Separator,
    Slot, ValueShape,
};
pub use matcher::{RawCaptures, match_text};
pub use options::{ParserOptions, ScanPolicy, ScanPolicyParseError};
pub use parser::{ContextParser, PARSER_TARGET, parse_from_source, parse_from_str};
pub use source::{DaemonLogFile, InMemoryLines, LineSource, Lines};
pub use version::{ToolVersion, VersionParseError, select_generation};

#[cfg(test)]
mod tests;
