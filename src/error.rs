//! # Error Types
//!
//! This module defines the error types produced while decoding NMEA sentences.
//!
//! None of these errors escape [`NmeaParser::parse`](crate::NmeaParser::parse): a failed
//! decode is routed to the failure handler instead. They are visible through the
//! lower-level [`decode`](crate::decode) function and in `debug` log records.

use nom::error::{ErrorKind, FromExternalError, ParseError};
use std::fmt::{self, Debug, Display};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
#[derive(Debug, PartialEq)]
pub enum Error<I, E> {
    /// The provided input contains non-ASCII characters.
    NonAscii,

    /// The checksum of the sentence did not match its body.
    ///
    /// Only produced when the parser runs with
    /// [`ChecksumMode::Verify`](crate::ChecksumMode::Verify).
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// A field did not match its grammar (wrong width, non-digit, failed literal, ...).
    ParsingError(E),

    /// The sentence code is not one of the supported sentence types.
    ///
    /// Contains the input starting at the unrecognized code.
    UnrecognizedMessage(I),

    /// A field was well-formed but its value is not allowed in this position.
    ///
    /// Latitude followed by `E`/`W`, a satellite count above 12, an hour of 24, ...
    InvalidField(I),
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

impl<I, E> Display for Error<I, E>
where
    I: Debug + Display,
    E: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonAscii => write!(f, "sentence contains non-ASCII characters"),
            Error::ChecksumMismatch { expected, found } => write!(
                f,
                "checksum mismatch: calculated {expected:02X}, found {found:02X}"
            ),
            Error::ParsingError(e) => write!(f, "malformed sentence: {e:?}"),
            Error::UnrecognizedMessage(i) => write!(f, "unrecognized sentence type at {i:?}"),
            Error::InvalidField(i) => write!(f, "invalid field value at {i:?}"),
        }
    }
}

impl<I, E> std::error::Error for Error<I, E>
where
    I: Debug + Display,
    E: Debug,
{
}

/// Builds a recoverable [`Error::InvalidField`] pointing at `input`.
pub(crate) fn invalid_field(input: &str) -> nom::Err<Error<&str, nom::error::Error<&str>>> {
    nom::Err::Error(Error::InvalidField(input))
}
