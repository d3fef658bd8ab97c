//! Field decoders turning captured tokens into typed values.
//!
//! Each decoder handles one semantic type.  Decoders that take an
//! `Option<&str>` accept absent optional slots and apply the field's default;
//! the others are only ever handed tokens from required slots.

use std::str::FromStr;

use camino::Utf8PathBuf;
use daemon_vocabulary::{JavaLanguageVersion, VocabularyParseError};

use crate::defaults::{NULL_SENTINEL, OPTION_DELIMITER};
use crate::error::DecodeError;
use crate::grammar::Field;

/// Copies the token verbatim into a path.  No existence check is made.
#[must_use]
pub fn path(token: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(token)
}

/// Parses a signed decimal integer.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedField`] when the token is not a decimal
/// integer that fits in 64 bits.
pub fn required_integer(field: Field, token: &str) -> Result<i64, DecodeError> {
    token
        .parse::<i64>()
        .map_err(|error| DecodeError::malformed(field, token, error.to_string()))
}

/// Parses a 32-bit integer that may carry a base prefix.
///
/// Accepts an optional sign followed by `0x`, `0X`, or `#` for hexadecimal,
/// a leading `0` for octal, or plain decimal digits.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedField`] on empty digits, a misplaced sign,
/// digits outside the radix, or overflow.
pub fn alternate_base_integer(field: Field, token: &str) -> Result<i32, DecodeError> {
    let (negative, unsigned) = token.strip_prefix('-').map_or_else(
        || (false, token.strip_prefix('+').unwrap_or(token)),
        |rest| (true, rest),
    );
    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() {
        return Err(DecodeError::malformed(field, token, "no digits"));
    }
    if digits.starts_with(['-', '+']) {
        return Err(DecodeError::malformed(
            field,
            token,
            "sign character in wrong position",
        ));
    }
    let magnitude = i64::from_str_radix(digits, radix)
        .map_err(|error| DecodeError::malformed(field, token, error.to_string()))?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value)
        .map_err(|_| DecodeError::malformed(field, token, "value out of range for 32 bits"))
}

fn split_radix(unsigned: &str) -> (u32, &str) {
    if let Some(hex) = ["0x", "0X", "#"]
        .iter()
        .find_map(|prefix| unsigned.strip_prefix(*prefix))
    {
        return (16, hex);
    }
    match unsigned.strip_prefix('0') {
        Some(octal) if !octal.is_empty() => (8, octal),
        _ => (10, unsigned),
    }
}

/// Decodes an integer that the daemon prints as `null` when unknown.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedField`] for any other non-integer token.
pub fn nullable_integer(field: Field, token: &str) -> Result<Option<i64>, DecodeError> {
    if token == NULL_SENTINEL {
        return Ok(None);
    }
    required_integer(field, token).map(Some)
}

/// Case-insensitive `true`; anything else, including absence, is `false`.
#[must_use]
pub fn boolean(token: Option<&str>) -> bool {
    token.is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

/// Looks up a required vocabulary token.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownEnumValue`] when the token is not a member.
pub fn vocabulary<T>(field: Field, token: &str) -> Result<T, DecodeError>
where
    T: FromStr<Err = VocabularyParseError>,
{
    token
        .parse::<T>()
        .map_err(|source| DecodeError::unknown(field, token, source))
}

/// Looks up an optional vocabulary token, yielding `default` when absent.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownEnumValue`] when a present token is not a
/// member.
pub fn vocabulary_or<T>(
    field: Field,
    token: Option<&str>,
    default: T,
) -> Result<T, DecodeError>
where
    T: FromStr<Err = VocabularyParseError>,
{
    token.map_or(Ok(default), |value| vocabulary(field, value))
}

/// Parses a Java feature release tag.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedField`] for non-numeric tokens and for
/// release zero.
pub fn java_version(field: Field, token: &str) -> Result<JavaLanguageVersion, DecodeError> {
    token
        .parse::<JavaLanguageVersion>()
        .map_err(|error| DecodeError::malformed(field, token, error.to_string()))
}

/// Splits the options token on commas, keeping order and empty segments.
///
/// An empty token holds no options at all.
#[must_use]
pub fn delimited_list(token: &str) -> Vec<String> {
    if token.is_empty() {
        return Vec::new();
    }
    token.split(OPTION_DELIMITER).map(str::to_owned).collect()
}

/// Decodes the optional identity slot.
///
/// The captured value excludes the `uid=` key and is kept as written.
#[must_use]
pub fn identity(token: Option<&str>) -> Option<String> {
    token.map(str::to_owned)
}
