use nom::{Parser, character::complete::char, multi::fill, sequence::terminated};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{GsaFixType, GsaMode, Parsable, parse::checksum},
    parsing::{fixed_uint, optional, real},
};

/// Number of PRN slots a GSA sentence always carries.
pub const GSA_SATELLITE_SLOTS: usize = 12;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Fields 3 to 14 are PRN slots. Empty slots are dropped, so `satellites` holds only
/// the PRNs actually present, in wire order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gsa {
    /// Selection mode
    pub mode: GsaMode,
    /// Fix type
    pub fix_type: GsaFixType,
    /// PRN numbers of the satellites used in the fix, up to 12
    pub satellites: heapless::Vec<u8, GSA_SATELLITE_SLOTS>,
    /// Position Dilution of Precision
    pub pdop: f32,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Vertical Dilution of Precision
    pub vdop: f32,
    pub checksum: u8,
}

impl Parsable for Gsa {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, mode) = GsaMode::parser(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, fix_type) = GsaFixType::parser(i)?;
        let (i, _) = char(',').parse(i)?;

        let mut slots: [Option<u8>; GSA_SATELLITE_SLOTS] = [None; GSA_SATELLITE_SLOTS];
        let (i, _) = fill(
            terminated(optional(fixed_uint(10, 2)), char(',')),
            &mut slots,
        )
        .parse(i)?;

        let (i, pdop) = real(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, hdop) = real(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, vdop) = real(i)?;
        let (i, checksum) = checksum(i)?;

        Ok((
            i,
            Self {
                mode,
                fix_type,
                satellites: slots.into_iter().flatten().collect(),
                pdop,
                hdop,
                vdop,
                checksum,
            },
        ))
    }
}
