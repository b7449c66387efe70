//! # NMEA Content
//!
//! Strongly-typed records for the supported NMEA 0183 sentences, the field types they are
//! built from, and the grammars that decode them.
//!
//! The records only mirror what is on the wire: coordinates stay in degrees and minutes,
//! years stay two-digit, and GSV pages are not merged.

pub mod parse;
mod sentences;

pub use sentences::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::IResult;

/// A trait for types that can be parsed from a string input.
///
/// This trait defines a single method `parser` that takes a string slice
/// and returns an `IResult` containing the remaining input and the parsed value.
///
/// It is implemented by every sentence record, by the [`NmeaSentence`] enum, and by every
/// single-character code table ([`FixQuality`], [`Direction`], ...).
pub trait Parsable: Sized {
    /// Parses the input and returns a result.
    ///
    /// # Returns
    ///
    /// Returns an [`IResult`] containing:
    /// - On success: A tuple of `(remaining_input, parsed_value)`.
    /// - On failure: An [`Error`](crate::Error) indicating the parsing error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmea0183_router::nmea_content::{NmeaSentence, Parsable};
    ///
    /// // Sentence content after the `$`, including talker ID and sentence type
    /// let content = "GPGLL,4916.45,N,12311.12,W,225444,A,A*1D";
    /// let result = NmeaSentence::parser(content);
    /// assert!(result.is_ok());
    /// ```
    fn parser(input: &str) -> IResult<&str, Self>;
}

/// Declares an enum whose variants are selected by a single wire character.
///
/// The generated [`Parsable`] implementation accepts exactly one of the listed codes; any
/// other character is an error. `Display` writes the wire code back.
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The character that encodes this value on the wire.
            pub const fn code(self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }

        impl Parsable for $name {
            fn parser(i: &str) -> IResult<&str, Self> {
                nom::Parser::parse(
                    &mut nom::branch::alt(($(
                        nom::Parser::map(nom::character::complete::char($char), |_| Self::$variant),
                    )*)),
                    i,
                )
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

symbol_table! {
    /// Compass direction of a coordinate, as written after the coordinate value.
    ///
    /// Latitude only accepts [`North`](Direction::North) and [`South`](Direction::South),
    /// longitude only [`East`](Direction::East) and [`West`](Direction::West).
    pub enum Direction {
        /// N - North
        'N' => North,
        /// S - South
        'S' => South,
        /// E - East
        'E' => East,
        /// W - West
        'W' => West,
    }
}

symbol_table! {
    /// Quality of the GPS fix
    pub enum FixQuality {
        /// 0 - Fix not available
        '0' => Invalid,
        /// 1 - GPS fix
        '1' => GpsFix,
        /// 2 - Differential GPS fix
        '2' => DgpsFix,
        /// 3 - PPS fix
        '3' => PpsFix,
        /// 4 - Real Time Kinematic
        '4' => RealTimeKinematic,
        /// 5 - Float RTK
        '5' => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        '6' => DeadReckoning,
        /// 7 - Manual input mode
        '7' => ManualInputMode,
        /// 8 - Simulation mode
        '8' => SimulationMode,
    }
}

symbol_table! {
    /// Data status
    pub enum DataStatus {
        /// A - Active
        'A' => Active,
        /// V - Void
        'V' => Invalid,
    }
}

symbol_table! {
    /// Positioning system mode indicator
    pub enum FixMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential mode
        'D' => Differential,
        /// E - Estimated (dead reckoning) mode
        'E' => Estimated,
        /// M - Manual input mode
        'M' => Manual,
        /// N - Data not valid
        'N' => Invalid,
    }
}

symbol_table! {
    /// GSA selection mode
    pub enum GsaMode {
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual,
        /// A - Automatic, 2D/3D
        'A' => Automatic,
    }
}

symbol_table! {
    /// GSA fix type
    pub enum GsaFixType {
        /// 1 - No fix
        '1' => Unavailable,
        /// 2 - 2D fix
        '2' => TwoD,
        /// 3 - 3D fix
        '3' => ThreeD,
    }
}

symbol_table! {
    /// Direction of the magnetic variation in [`Rmc`]
    pub enum MagneticVariationDirection {
        /// E - East
        'E' => East,
        /// W - West
        'W' => West,
    }
}

/// Hemisphere of a [`Latitude`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatitudeHemisphere {
    North,
    South,
}

/// Hemisphere of a [`Longitude`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongitudeHemisphere {
    East,
    West,
}

impl TryFrom<Direction> for LatitudeHemisphere {
    type Error = Direction;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::North => Ok(Self::North),
            Direction::South => Ok(Self::South),
            other => Err(other),
        }
    }
}

impl TryFrom<Direction> for LongitudeHemisphere {
    type Error = Direction;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::East => Ok(Self::East),
            Direction::West => Ok(Self::West),
            other => Err(other),
        }
    }
}

impl From<LatitudeHemisphere> for Direction {
    fn from(hemisphere: LatitudeHemisphere) -> Self {
        match hemisphere {
            LatitudeHemisphere::North => Direction::North,
            LatitudeHemisphere::South => Direction::South,
        }
    }
}

impl From<LongitudeHemisphere> for Direction {
    fn from(hemisphere: LongitudeHemisphere) -> Self {
        match hemisphere {
            LongitudeHemisphere::East => Direction::East,
            LongitudeHemisphere::West => Direction::West,
        }
    }
}

impl std::fmt::Display for LatitudeHemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Direction::from(*self))
    }
}

impl std::fmt::Display for LongitudeHemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Direction::from(*self))
    }
}

/// UTC time of day, `hhmmss.ss` on the wire.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfDay {
    /// Hours, 0-23
    pub hours: u8,
    /// Minutes, 0-59
    pub minutes: u8,
    /// Seconds, including any fractional part
    pub seconds: f32,
}

/// UTC date, `ddmmyy` on the wire.
///
/// The year carries no century. Resolving it is up to the caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    /// Day of month, 1-31
    pub day: u8,
    /// Month, 1-12
    pub month: u8,
    /// Two-digit year, 0-99
    pub year: u8,
}

/// Latitude as degrees and decimal minutes, `ddmm.mm,a` on the wire.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude {
    pub degrees: u8,
    pub minutes: f32,
    pub hemisphere: LatitudeHemisphere,
}

/// Longitude as degrees and decimal minutes, `dddmm.mm,a` on the wire.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude {
    pub degrees: u16,
    pub minutes: f32,
    pub hemisphere: LongitudeHemisphere,
}

/// A latitude/longitude pair.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position2D {
    pub latitude: Latitude,
    pub longitude: Longitude,
}

#[cfg(feature = "time")]
impl TimeOfDay {
    /// Converts to a [`time::Time`], keeping millisecond precision.
    ///
    /// Returns `None` for values `time` cannot represent (a leap second, for instance).
    pub fn to_time(&self) -> Option<time::Time> {
        let whole = self.seconds.trunc();
        let millis = ((self.seconds - whole) * 1000.0).round().min(999.0);

        time::Time::from_hms_milli(self.hours, self.minutes, whole as u8, millis as u16).ok()
    }
}

#[cfg(feature = "time")]
impl CalendarDate {
    /// Converts to a [`time::Date`] in the given century.
    ///
    /// `century` is the number of whole centuries, so `20` puts a year of `94` in 2094 and
    /// `19` puts it in 1994.
    pub fn to_date(&self, century: i32) -> Option<time::Date> {
        let month = time::Month::try_from(self.month).ok()?;
        let year = century.checked_mul(100)?.checked_add(i32::from(self.year))?;

        time::Date::from_calendar_date(year, month, self.day).ok()
    }
}
