//! Composite field parsers: time, date, coordinates, and the pieces every sentence shares.

use nom::{
    Parser,
    character::complete::char,
    sequence::{preceded, terminated},
};

use crate::{
    Error, IResult,
    error::invalid_field,
    nmea_content::{
        CalendarDate, Direction, Latitude, LatitudeHemisphere, Longitude, LongitudeHemisphere,
        Parsable, Position2D, TimeOfDay,
    },
    parsing::{fixed_uint, real},
};

/// Parses a value followed by its unit letter, `x.x,M`.
///
/// The unit is required and is not part of the output.
pub fn with_unit<'a, O, P>(
    parser: P,
    unit: char,
) -> impl Parser<&'a str, Output = O, Error = Error<&'a str, nom::error::Error<&'a str>>>
where
    P: Parser<&'a str, Output = O, Error = Error<&'a str, nom::error::Error<&'a str>>>,
{
    terminated(parser, (char(','), char(unit)))
}

/// Parses the checksum tail, `*hh`.
pub fn checksum(i: &str) -> IResult<&str, u8> {
    preceded(char('*'), fixed_uint(16, 2)).parse(i)
}

/// Parses `hhmmss.ss`.
pub fn time_of_day(i: &str) -> IResult<&str, TimeOfDay> {
    let (rest, (hours, minutes, seconds)) =
        (fixed_uint(10, 2), fixed_uint(10, 2), real).parse(i)?;

    if hours > 23 || minutes > 59 || seconds.is_sign_negative() {
        return Err(invalid_field(i));
    }

    Ok((
        rest,
        TimeOfDay {
            hours,
            minutes,
            seconds,
        },
    ))
}

/// Parses `ddmmyy`.
pub fn calendar_date(i: &str) -> IResult<&str, CalendarDate> {
    let (rest, (day, month, year)) =
        (fixed_uint(10, 2), fixed_uint(10, 2), fixed_uint(10, 2)).parse(i)?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(invalid_field(i));
    }

    Ok((rest, CalendarDate { day, month, year }))
}

/// Minutes of arc, in `[0, 60)`. A value of `60` belongs to the next degree and is an
/// [`Error::InvalidField`].
fn arc_minutes(i: &str) -> IResult<&str, f32> {
    let (rest, minutes) = real(i)?;

    if !(0.0..60.0).contains(&minutes) {
        return Err(invalid_field(i));
    }

    Ok((rest, minutes))
}

/// Parses `ddmm.mm,a` where `a` is `N` or `S`.
///
/// Minutes must be below 60. A valid direction for the wrong axis (`E`, `W`) is an
/// [`Error::InvalidField`].
pub fn latitude(i: &str) -> IResult<&str, Latitude> {
    let (i, degrees) = fixed_uint(10, 2).parse(i)?;
    let (i, minutes) = arc_minutes(i)?;
    let (i, _) = char(',').parse(i)?;
    let (rest, direction) = Direction::parser(i)?;
    let hemisphere = LatitudeHemisphere::try_from(direction).map_err(|_| invalid_field(i))?;

    Ok((
        rest,
        Latitude {
            degrees,
            minutes,
            hemisphere,
        },
    ))
}

/// Parses `dddmm.mm,a` where `a` is `E` or `W`.
///
/// Minutes must be below 60. A valid direction for the wrong axis (`N`, `S`) is an
/// [`Error::InvalidField`].
pub fn longitude(i: &str) -> IResult<&str, Longitude> {
    let (i, degrees) = fixed_uint(10, 3).parse(i)?;
    let (i, minutes) = arc_minutes(i)?;
    let (i, _) = char(',').parse(i)?;
    let (rest, direction) = Direction::parser(i)?;
    let hemisphere = LongitudeHemisphere::try_from(direction).map_err(|_| invalid_field(i))?;

    Ok((
        rest,
        Longitude {
            degrees,
            minutes,
            hemisphere,
        },
    ))
}

/// Parses `ddmm.mm,a,dddmm.mm,a`.
pub fn position_2d(i: &str) -> IResult<&str, Position2D> {
    let (i, latitude) = latitude(i)?;
    let (i, _) = char(',').parse(i)?;
    let (i, longitude) = longitude(i)?;

    Ok((
        i,
        Position2D {
            latitude,
            longitude,
        },
    ))
}
