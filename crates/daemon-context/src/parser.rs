//! Entry points tying grammar selection, matching, and decoding together.

use tracing::{debug, warn};

use crate::context::DaemonContext;
use crate::decode;
use crate::defaults::{
    DEFAULT_NATIVE_SERVICES_MODE, DEFAULT_PRIORITY, LEGACY_JAVA_VENDOR, LEGACY_JAVA_VERSION,
};
use crate::error::{ContextError, DecodeError, ParseFailureReason};
use crate::grammar::{Field, GrammarGeneration};
use crate::matcher::{RawCaptures, match_text};
use crate::options::{ParserOptions, ScanPolicy};
use crate::source::LineSource;
use crate::version::ToolVersion;

/// Tracing target for parser events.
pub const PARSER_TARGET: &str = "daemon_context::parser";

/// Parses daemon contexts under a fixed set of [`ParserOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextParser {
    options: ParserOptions,
}

impl ContextParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser applies.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `source` as a whole, as written by a daemon of `version`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::ParseFailure`] carrying `source` when the text
    /// does not align with the grammar or a field fails to decode.
    pub fn parse_str(
        &self,
        source: &str,
        version: &ToolVersion,
    ) -> Result<DaemonContext, ContextError> {
        self.parse_str_with(source, GrammarGeneration::for_version(version))
    }

    /// Parses `source` as a whole with an already selected generation.
    ///
    /// # Errors
    ///
    /// As for [`Self::parse_str`].
    pub fn parse_str_with(
        &self,
        source: &str,
        generation: GrammarGeneration,
    ) -> Result<DaemonContext, ContextError> {
        debug!(
            target: PARSER_TARGET,
            %generation,
            source_bytes = source.len(),
            "parsing daemon context text"
        );
        let captures = match_text(generation.grammar(), source).ok_or_else(|| {
            ContextError::parse_failure(source, ParseFailureReason::NoMatch(generation))
        })?;
        decode_context(&captures).map_err(|error| ContextError::parse_failure(source, error))
    }

    /// Scans `source` for the first context line written by a daemon of
    /// `version`.
    ///
    /// Returns `Ok(None)` when no line has the context shape.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::SourceUnavailable`] when the source cannot be
    /// opened or read, and [`ContextError::ParseFailure`] for a context line
    /// with corrupt fields unless the scan policy skips such lines.
    pub fn parse_source<S>(
        &self,
        source: &S,
        version: &ToolVersion,
    ) -> Result<Option<DaemonContext>, ContextError>
    where
        S: LineSource + ?Sized,
    {
        self.parse_source_with(source, GrammarGeneration::for_version(version))
    }

    /// Scans `source` with an already selected generation.
    ///
    /// # Errors
    ///
    /// As for [`Self::parse_source`].
    pub fn parse_source_with<S>(
        &self,
        source: &S,
        generation: GrammarGeneration,
    ) -> Result<Option<DaemonContext>, ContextError>
    where
        S: LineSource + ?Sized,
    {
        let grammar = generation.grammar();
        let unavailable = |error| ContextError::SourceUnavailable {
            source_name: source.describe(),
            source: error,
        };
        let lines = source.lines().map_err(unavailable)?;

        for (index, read) in lines.enumerate() {
            let line = read.map_err(unavailable)?;
            let Some(captures) = match_text(grammar, &line) else {
                continue;
            };
            match decode_context(&captures) {
                Ok(context) => {
                    debug!(
                        target: PARSER_TARGET,
                        %generation,
                        line_number = index + 1,
                        source = %source.describe(),
                        "found daemon context"
                    );
                    return Ok(Some(context));
                }
                Err(error) => self.reject_line(&line, index, error)?,
            }
        }

        debug!(
            target: PARSER_TARGET,
            %generation,
            source = %source.describe(),
            "no daemon context line found"
        );
        Ok(None)
    }

    fn reject_line(
        &self,
        line: &str,
        index: usize,
        error: DecodeError,
    ) -> Result<(), ContextError> {
        match self.options.scan_policy() {
            ScanPolicy::FailFast => Err(ContextError::parse_failure(line, error)),
            ScanPolicy::SkipInvalid => {
                warn!(
                    target: PARSER_TARGET,
                    line_number = index + 1,
                    %error,
                    "skipping corrupt daemon context line"
                );
                Ok(())
            }
        }
    }
}

/// Parses `source` as a whole with the default options.
///
/// # Errors
///
/// See [`ContextParser::parse_str`].
pub fn parse_from_str(source: &str, version: &ToolVersion) -> Result<DaemonContext, ContextError> {
    ContextParser::default().parse_str(source, version)
}

/// Scans `source` for a context line with the default options.
///
/// # Errors
///
/// See [`ContextParser::parse_source`].
pub fn parse_from_source<S>(
    source: &S,
    version: &ToolVersion,
) -> Result<Option<DaemonContext>, ContextError>
where
    S: LineSource + ?Sized,
{
    ContextParser::default().parse_source(source, version)
}

fn required<'t>(captures: &RawCaptures<'t>, field: Field) -> Result<&'t str, DecodeError> {
    captures
        .get(field)
        .ok_or_else(|| DecodeError::malformed(field, "", "required slot was not captured"))
}

fn decode_context(captures: &RawCaptures<'_>) -> Result<DaemonContext, DecodeError> {
    let (java_version, java_vendor) = match captures.generation() {
        GrammarGeneration::Legacy => (LEGACY_JAVA_VERSION, LEGACY_JAVA_VENDOR),
        GrammarGeneration::Current => (
            decode::java_version(Field::JavaVersion, required(captures, Field::JavaVersion)?)?,
            decode::vocabulary(Field::JavaVendor, required(captures, Field::JavaVendor)?)?,
        ),
    };

    Ok(DaemonContext {
        uid: decode::identity(captures.get(Field::Uid)),
        java_home: decode::path(required(captures, Field::JavaHome)?),
        java_version,
        java_vendor,
        daemon_registry_dir: decode::path(required(captures, Field::DaemonRegistryDir)?),
        pid: decode::nullable_integer(Field::Pid, required(captures, Field::Pid)?)?,
        idle_timeout_millis: decode::alternate_base_integer(
            Field::IdleTimeout,
            required(captures, Field::IdleTimeout)?,
        )?,
        jvm_options: decode::delimited_list(required(captures, Field::DaemonOpts)?),
        instrumentation_agent_applied: decode::boolean(
            captures.get(Field::ApplyInstrumentationAgent),
        ),
        native_services_mode: decode::vocabulary_or(
            Field::NativeServicesMode,
            captures.get(Field::NativeServicesMode),
            DEFAULT_NATIVE_SERVICES_MODE,
        )?,
        priority: decode::vocabulary_or(
            Field::Priority,
            captures.get(Field::Priority),
            DEFAULT_PRIORITY,
        )?,
    })
}
