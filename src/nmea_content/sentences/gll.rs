use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        DataStatus, FixMode, Parsable, Position2D, TimeOfDay,
        parse::{checksum, position_2d, time_of_day},
    },
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gll {
    /// Latitude and longitude
    pub position: Position2D,
    /// Fix time in UTC
    pub time: TimeOfDay,
    /// Status
    pub data_status: DataStatus,
    /// Mode indicator
    pub fix_mode: FixMode,
    pub checksum: u8,
}

impl Parsable for Gll {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, position) = position_2d(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, time) = time_of_day(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, data_status) = DataStatus::parser(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, fix_mode) = FixMode::parser(i)?;
        let (i, checksum) = checksum(i)?;

        Ok((
            i,
            Self {
                position,
                time,
                data_status,
                fix_mode,
                checksum,
            },
        ))
    }
}
