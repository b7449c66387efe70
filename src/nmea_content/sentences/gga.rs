use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    error::invalid_field,
    nmea_content::{
        FixQuality, Parsable, Position2D, TimeOfDay,
        parse::{checksum, position_2d, time_of_day, with_unit},
    },
    parsing::{optional, real, uint},
};

/// Highest satellite count a GGA sentence may report.
const MAX_SATELLITES_TRACKED: u8 = 12;

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gga {
    /// Fix time in UTC
    pub time: TimeOfDay,
    /// Latitude and longitude
    pub position: Position2D,
    /// GPS Quality Indicator
    pub fix_quality: FixQuality,
    /// Number of satellites being tracked, 0-12
    pub satellites_tracked: u8,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Altitude above/below mean sea level (geoid) in meters
    pub msl_altitude: f32,
    /// Height of the geoid (mean sea level) above the WGS-84 ellipsoid in meters
    pub geoid_separation: f32,
    /// Seconds since the last DGPS update, empty when DGPS is not used
    pub time_since_dgps_update: Option<f32>,
    /// Differential reference station ID
    pub dgps_station_id: Option<u16>,
    pub checksum: u8,
}

fn satellites_tracked(i: &str) -> IResult<&str, u8> {
    let (rest, count) = uint().parse(i)?;

    if count > MAX_SATELLITES_TRACKED {
        return Err(invalid_field(i));
    }

    Ok((rest, count))
}

impl Parsable for Gga {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, time) = time_of_day(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, position) = position_2d(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, fix_quality) = FixQuality::parser(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, satellites_tracked) = satellites_tracked(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, hdop) = real(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, msl_altitude) = with_unit(real, 'M').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, geoid_separation) = with_unit(real, 'M').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, time_since_dgps_update) = optional(real).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, dgps_station_id) = optional(uint()).parse(i)?;
        let (i, checksum) = checksum(i)?;

        Ok((
            i,
            Self {
                time,
                position,
                fix_quality,
                satellites_tracked,
                hdop,
                msl_altitude,
                geoid_separation,
                time_since_dgps_update,
                dgps_station_id,
                checksum,
            },
        ))
    }
}
