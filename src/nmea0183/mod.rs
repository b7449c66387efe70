//! # NMEA 0183 Framing
//!
//! Everything around the sentence content: the `$` start delimiter, the optional line
//! ending, and (when asked for) checksum verification. The framed content is handed to
//! [`NmeaSentence::parser`].
//!
//! It handles the standard NMEA 0183 format: `$TTSSS,D1,D2,...,Dn*CC\r\n`
//!
//! The framing is configurable to handle variations in:
//! - Checksum handling (extracted only, or verified)
//! - Line ending requirements (optional, required or forbidden)

use log::{debug, trace};
use nom::{
    Err, Finish, Parser,
    bytes::complete::take_until,
    character::complete::char,
    error::{ErrorKind, ParseError},
};

use crate::{
    Error, IResult,
    nmea_content::{NmeaSentence, Parsable, parse},
};

/// Defines how the framing treats the `*CC` checksum.
///
/// `CC` is a two-digit hexadecimal value holding the XOR of all bytes between the `$` and
/// the `*`. Every supported sentence carries one; the digits are always decoded and stored
/// in the record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    #[default]
    /// The checksum digits are extracted as a value and never compared.
    Extract,

    /// The checksum is recomputed from the sentence body and must match.
    ///
    /// A mismatch is reported as [`Error::ChecksumMismatch`].
    Verify,
}

/// Defines how the framing handles line endings.
///
/// NMEA 0183 sentences end with a carriage return and line feed (`\r\n`) on the wire,
/// but lines read from files or sockets often have them stripped already.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    #[default]
    /// At most one `\r` followed by at most one `\n` is stripped from the end.
    ///
    /// Accepts `\r\n`, `\r`, `\n` or nothing.
    Optional,

    /// The line must end with `\r\n`.
    ///
    /// Use this mode when parsing raw serial port data.
    Required,

    /// The line must not contain `\r` or `\n`.
    ///
    /// Use this mode when the line endings have already been removed and a stray one
    /// means corrupted input.
    Forbidden,
}

/// Framing settings shared by [`decode`], [`dispatch`] and
/// [`NmeaParser`](crate::NmeaParser).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub checksum_mode: ChecksumMode,
    pub line_ending_mode: LineEndingMode,
}

/// Result of submitting one line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<'a> {
    /// The line held a supported, well-formed sentence.
    Decoded(NmeaSentence),
    /// The line could not be decoded. Holds the original line, unmodified.
    Failed(&'a str),
}

/// Decodes one line into a sentence.
///
/// The whole line must be consumed: anything after the checksum (other than a line ending
/// allowed by `config`) is an error.
///
/// # Examples
///
/// ```rust
/// use nmea0183_router::{ChecksumMode, Config, Error, decode, nmea_content::NmeaSentence};
///
/// let line = "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39\r\n";
/// let sentence = decode(line, Config::default()).unwrap();
/// assert!(matches!(sentence, NmeaSentence::Gsa(_)));
///
/// let config = Config {
///     checksum_mode: ChecksumMode::Verify,
///     ..Config::default()
/// };
/// let result = decode("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*38", config);
/// assert_eq!(
///     result,
///     Err(Error::ChecksumMismatch {
///         expected: 0x39,
///         found: 0x38
///     })
/// );
/// ```
pub fn decode(
    line: &str,
    config: Config,
) -> Result<NmeaSentence, Error<&str, nom::error::Error<&str>>> {
    framing(config)
        .parse(line)
        .finish()
        .map(|(_, sentence)| sentence)
}

/// Decodes one line and reports the outcome as a value.
///
/// Decoded sentences are logged at `trace` level, failures with their diagnostic at
/// `debug` level.
///
/// ```rust
/// use nmea0183_router::{Config, ParseOutcome, dispatch};
///
/// let outcome = dispatch("$GPGGA,bad,data*00", Config::default());
/// assert_eq!(outcome, ParseOutcome::Failed("$GPGGA,bad,data*00"));
/// ```
pub fn dispatch(line: &str, config: Config) -> ParseOutcome<'_> {
    match decode(line, config) {
        Ok(sentence) => {
            trace!("decoded {} sentence", sentence.sentence_type());
            ParseOutcome::Decoded(sentence)
        }
        Err(e) => {
            debug!("failed to decode {line:?}: {e}");
            ParseOutcome::Failed(line)
        }
    }
}

/// Builds the framing parser for the given configuration.
///
/// The returned parser will:
/// * Validate that the input is ASCII-only
/// * Expect the sentence to start with `$`
/// * Strip or check the line ending
/// * Verify the checksum, in [`ChecksumMode::Verify`]
/// * Decode the remaining content with [`NmeaSentence::parser`]
fn framing(config: Config) -> impl FnMut(&str) -> IResult<&str, NmeaSentence> {
    move |i: &str| {
        if !i.is_ascii() {
            return Err(Err::Error(Error::NonAscii));
        }

        let (i, _) = char('$').parse(i)?;
        let (content, _) = crlf(config.line_ending_mode).parse(i)?;

        if config.checksum_mode == ChecksumMode::Verify {
            verify_checksum(content)?;
        }

        NmeaSentence::parser(content)
    }
}

/// Strips or checks the line ending according to `le`.
///
/// The remaining input is the line without its ending.
///
/// * [`LineEndingMode::Optional`]: strips one `\n`, then one `\r`, when present
/// * [`LineEndingMode::Required`]: fails unless the line ends with `\r\n`
/// * [`LineEndingMode::Forbidden`]: fails if the line contains `\r` or `\n`
fn crlf<'a, E: ParseError<&'a str>>(
    le: LineEndingMode,
) -> impl Fn(&'a str) -> nom::IResult<&'a str, (), E> {
    move |i: &'a str| {
        let data = match le {
            LineEndingMode::Optional => {
                let i = i.strip_suffix('\n').unwrap_or(i);
                i.strip_suffix('\r').unwrap_or(i)
            }
            LineEndingMode::Required => match i.strip_suffix("\r\n") {
                Some(data) => data,
                None => return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf))),
            },
            LineEndingMode::Forbidden => {
                if i.contains(['\r', '\n']) {
                    return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)));
                }
                i
            }
        };

        Ok((data, ()))
    }
}

/// Recomputes the checksum of sentence content and compares it with its `*CC` digits.
///
/// `content` is the sentence without the leading `$` and without a line ending. On success
/// the content is returned unchanged, together with the checksum value.
///
/// ```rust
/// use nmea0183_router::{Error, verify_checksum};
///
/// assert_eq!(
///     verify_checksum("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25"),
///     Ok(("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25", 0x25))
/// );
///
/// assert_eq!(
///     verify_checksum("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*26"),
///     Err(nom::Err::Error(Error::ChecksumMismatch {
///         expected: 0x25,
///         found: 0x26
///     }))
/// );
/// ```
pub fn verify_checksum(content: &str) -> IResult<&str, u8> {
    let (cc, data) = take_until("*").parse(content)?;
    let (_, found) = parse::checksum(cc)?;
    let expected = checksum(data);

    if expected != found {
        return Err(Err::Error(Error::ChecksumMismatch { expected, found }));
    }

    Ok((content, found))
}

/// Calculates the NMEA 0183 checksum for the given sentence body.
///
/// The checksum is the XOR of all bytes between the `$` prefix and the `*` delimiter,
/// excluding both.
///
/// ```rust
/// use nmea0183_router::checksum;
///
/// assert_eq!(checksum("GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1"), 0x39);
/// assert_eq!(checksum(""), 0);
/// ```
pub fn checksum(data: &str) -> u8 {
    data.as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}
