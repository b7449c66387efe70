//! # Parsing Utilities
//!
//! Field-level parsers shared by every sentence grammar: fixed-width and free-width
//! unsigned integers, reals, optional fields, and a combinator that insists on complete
//! consumption of its input.
//!
//! Every parser here either succeeds with a value and the remaining input, or fails
//! without consuming anything.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    bytes::complete::{take_while_m_n, take_while1},
    character,
    error::{ErrorKind, ParseError},
};

use crate::{Error, IResult, error::invalid_field};

type FieldError<'a> = Error<&'a str, nom::error::Error<&'a str>>;

/// Parses exactly `width` digits in the given `radix`.
///
/// Fails if fewer than `width` digits are available, or if a non-digit shows up before
/// `width` digits have been read. A value that does not fit `T` is an
/// [`Error::InvalidField`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_router::{IResult, parsing::fixed_uint};
/// use nom::Parser;
///
/// let result: IResult<_, u8> = fixed_uint(10, 2).parse("123519");
/// assert_eq!(result, Ok(("3519", 12)));
///
/// let result: IResult<_, u8> = fixed_uint(16, 2).parse("4F");
/// assert_eq!(result, Ok(("", 0x4F)));
///
/// let result: IResult<_, u8> = fixed_uint(10, 2).parse("1,");
/// assert!(result.is_err());
/// ```
pub fn fixed_uint<'a, T>(
    radix: u32,
    width: usize,
) -> impl Parser<&'a str, Output = T, Error = FieldError<'a>>
where
    T: TryFrom<u32>,
{
    move |i: &'a str| -> IResult<&'a str, T> {
        let (rest, digits) = take_while_m_n(width, width, |c: char| c.is_digit(radix)).parse(i)?;
        let value = u32::from_str_radix(digits, radix)
            .map_err(|_| Err::Error(FieldError::from_error_kind(i, ErrorKind::Digit)))?;
        let value = T::try_from(value).map_err(|_| invalid_field(i))?;

        Ok((rest, value))
    }
}

/// Parses one or more decimal digits, of any width.
///
/// ```rust
/// use nmea0183_router::{IResult, parsing::uint};
/// use nom::Parser;
///
/// let result: IResult<_, u16> = uint().parse("120,38");
/// assert_eq!(result, Ok((",38", 120)));
/// ```
pub fn uint<'a, T>() -> impl Parser<&'a str, Output = T, Error = FieldError<'a>>
where
    T: TryFrom<u32>,
{
    move |i: &'a str| -> IResult<&'a str, T> {
        let (rest, value) = character::complete::u32::<_, FieldError<'a>>.parse(i)?;
        let value = T::try_from(value).map_err(|_| invalid_field(i))?;

        Ok((rest, value))
    }
}

/// Parses an optionally signed decimal number with an optional fractional part.
///
/// Accepts `12`, `12.`, `12.50`, `.5`, `-21.3`. Exponents, `inf` and `nan` are not part of
/// the NMEA field syntax and are rejected.
///
/// ```rust
/// use nmea0183_router::{IResult, parsing::real};
///
/// let result: IResult<_, _> = real("-21.3,M");
/// assert_eq!(result, Ok((",M", -21.3)));
/// ```
pub fn real(i: &str) -> IResult<&str, f32> {
    let (rest, text) =
        take_while1(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.')).parse(i)?;

    // `f32::from_str` rejects a lone sign or dot, a second dot, and a sign past the start.
    let value = text
        .parse::<f32>()
        .map_err(|_| Err::Error(FieldError::from_error_kind(i, ErrorKind::Float)))?;

    Ok((rest, value))
}

/// Wraps a field parser so that an empty field yields `None`.
///
/// A field is empty when the input is exhausted or starts with a field separator (`,`) or
/// the checksum delimiter (`*`). Nothing is consumed in that case. A non-empty field must
/// be accepted by `parser`: `abc` where a number is expected is an error, not `None`.
///
/// ```rust
/// use nmea0183_router::{IResult, parsing::{optional, real}};
/// use nom::Parser;
///
/// let result: IResult<_, _> = optional(real).parse(",M");
/// assert_eq!(result, Ok((",M", None)));
///
/// let result: IResult<_, _> = optional(real).parse("4.2,M");
/// assert_eq!(result, Ok((",M", Some(4.2))));
///
/// let result: IResult<_, _> = optional(real).parse("x,M");
/// assert!(result.is_err());
/// ```
pub fn optional<'a, O, P>(mut parser: P) -> impl Parser<&'a str, Output = Option<O>, Error = FieldError<'a>>
where
    P: Parser<&'a str, Output = O, Error = FieldError<'a>>,
{
    move |i: &'a str| -> IResult<&'a str, Option<O>> {
        if is_empty_field(i) {
            return Ok((i, None));
        }

        parser.parse(i).map(|(i, value)| (i, Some(value)))
    }
}

fn is_empty_field(i: &str) -> bool {
    matches!(i.chars().next(), None | Some(',') | Some('*'))
}

/// Ensures that the parser consumes all input.
///
/// # Arguments
///
/// * `f` - The parser to run
/// * `e` - Error kind to return if input is not fully consumed
///
/// # Examples
///
/// ```rust
/// use nmea0183_router::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// // Parse all 3 bytes
/// let mut parser = consumed(take(3u8), ErrorKind::Eof);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This would fail because not all input is consumed
/// let result = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}
