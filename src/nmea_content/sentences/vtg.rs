use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        FixMode, Parsable,
        parse::{checksum, with_unit},
    },
    parsing::{optional, real},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// Both courses may be empty, but their unit letters are always present. Both speeds are
/// required.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Vtg {
    /// Course over ground in degrees true
    pub course_over_ground_true: Option<f32>,
    /// Course over ground in degrees magnetic
    pub course_over_ground_magnetic: Option<f32>,
    /// Speed over ground in knots
    pub ground_speed_knots: f32,
    /// Speed over ground in kilometers per hour
    pub ground_speed_kmph: f32,
    /// Mode indicator
    pub fix_mode: FixMode,
    pub checksum: u8,
}

impl Parsable for Vtg {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, course_over_ground_true) = with_unit(optional(real), 'T').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, course_over_ground_magnetic) = with_unit(optional(real), 'M').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, ground_speed_knots) = with_unit(real, 'N').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, ground_speed_kmph) = with_unit(real, 'K').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, fix_mode) = FixMode::parser(i)?;
        let (i, checksum) = checksum(i)?;

        Ok((
            i,
            Self {
                course_over_ground_true,
                course_over_ground_magnetic,
                ground_speed_knots,
                ground_speed_kmph,
                fix_mode,
                checksum,
            },
        ))
    }
}
