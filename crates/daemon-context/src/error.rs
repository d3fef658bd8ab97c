//! Error types for context decoding and parsing.

use std::io;

use daemon_vocabulary::VocabularyParseError;
use thiserror::Error;

use crate::grammar::{Field, GrammarGeneration};

/// A slot aligned with its grammar but its token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// A required token could not be converted to its target type.
    #[error("malformed {field} value '{token}': {reason}")]
    MalformedField {
        /// The field being decoded.
        field: Field,
        /// The offending token.
        token: String,
        /// Why the token was rejected.
        reason: String,
    },
    /// A vocabulary token is not a recognised member.
    #[error("unknown {field} value '{token}'")]
    UnknownEnumValue {
        /// The field being decoded.
        field: Field,
        /// The unrecognised token.
        token: String,
        /// The vocabulary's rejection.
        #[source]
        source: VocabularyParseError,
    },
}

impl DecodeError {
    pub(crate) fn malformed(field: Field, token: &str, reason: impl Into<String>) -> Self {
        Self::MalformedField {
            field,
            token: token.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown(field: Field, token: &str, source: VocabularyParseError) -> Self {
        Self::UnknownEnumValue {
            field,
            token: token.to_owned(),
            source,
        }
    }

    /// The field whose token was rejected.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::MalformedField { field, .. } | Self::UnknownEnumValue { field, .. } => *field,
        }
    }
}

/// Why a piece of source text could not be turned into a context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseFailureReason {
    /// The text does not have the shape of the selected grammar.
    #[error("text does not align with the {0} daemon context grammar")]
    NoMatch(GrammarGeneration),
    /// The text aligned but one of its fields is corrupt.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failures surfaced by the parsing entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContextError {
    /// The source text could not be parsed into a context.
    #[error("unable to parse DefaultDaemonContext from source: [{source_text}]")]
    ParseFailure {
        /// The text that failed to parse.
        source_text: String,
        /// The underlying cause.
        #[source]
        reason: ParseFailureReason,
    },
    /// The line source could not be opened or read.
    #[error("unable to parse DefaultDaemonContext from source: [{source_name}]")]
    SourceUnavailable {
        /// Description of the source, usually a file path.
        source_name: String,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl ContextError {
    pub(crate) fn parse_failure(source_text: &str, reason: impl Into<ParseFailureReason>) -> Self {
        Self::ParseFailure {
            source_text: source_text.to_owned(),
            reason: reason.into(),
        }
    }

    /// Returns the parse failure cause, if this is a parse failure.
    #[must_use]
    pub const fn reason(&self) -> Option<&ParseFailureReason> {
        match self {
            Self::ParseFailure { reason, .. } => Some(reason),
            Self::SourceUnavailable { .. } => None,
        }
    }
}
