use nom::{
    Parser,
    character::complete::char,
    multi::many_m_n,
    sequence::preceded,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Parsable, parse::checksum},
    parsing::{optional, uint},
};

/// Most satellites a single GSV sentence can describe.
pub const GSV_MAX_SATELLITES: usize = 4;

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Each sentence is one page of a group. Pages are not merged: `satellites` only holds
/// the 1 to 4 entries of this page, whatever `satellites_in_view` says.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gsv {
    /// Total number of GSV sentences in this group
    pub number_of_messages: u8,
    /// Sentence number of this GSV message within the group
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellite information
    pub satellites: heapless::Vec<SatelliteInView, GSV_MAX_SATELLITES>,
    pub checksum: u8,
}

/// Satellite information used in [`Gsv`] sentences
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SatelliteInView {
    /// Satellite PRN number
    pub id: u8,
    /// Elevation in degrees
    pub elevation: u8,
    /// Azimuth in degrees, true north
    pub azimuth: u16,
    /// Signal to noise ratio in dB, empty when not tracking
    pub snr: Option<u8>,
}

impl Parsable for SatelliteInView {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, id) = uint().parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, elevation) = uint().parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, azimuth) = uint().parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, snr) = optional(uint()).parse(i)?;

        Ok((
            i,
            Self {
                id,
                elevation,
                azimuth,
                snr,
            },
        ))
    }
}

impl Parsable for Gsv {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, number_of_messages) = uint().parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, message_number) = uint().parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, satellites_in_view) = uint().parse(i)?;
        let (i, satellites) = many_m_n(
            1,
            GSV_MAX_SATELLITES,
            preceded(char(','), SatelliteInView::parser),
        )
        .parse(i)?;
        let (i, checksum) = checksum(i)?;

        Ok((
            i,
            Self {
                number_of_messages,
                message_number,
                satellites_in_view,
                satellites: satellites.into_iter().collect(),
                checksum,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsv_parsing() {
        let (rest, gsv) =
            Gsv::parser("2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75").unwrap();

        assert_eq!(rest, "");
        assert_eq!(gsv.number_of_messages, 2);
        assert_eq!(gsv.message_number, 1);
        assert_eq!(gsv.satellites_in_view, 8);
        assert_eq!(gsv.satellites.len(), 4);
        assert_eq!(
            gsv.satellites[0],
            SatelliteInView {
                id: 1,
                elevation: 40,
                azimuth: 83,
                snr: Some(46)
            }
        );
        assert_eq!(
            gsv.satellites[3],
            SatelliteInView {
                id: 14,
                elevation: 22,
                azimuth: 228,
                snr: Some(45)
            }
        );
        assert_eq!(gsv.checksum, 0x75);
    }

    #[test]
    fn test_gsv_entry_counts() {
        let cases = [
            ("1,1,01,05,45,120,38*4B", 1),
            ("1,1,02,05,45,120,,06,30,040,12*4B", 2),
            ("1,1,03,01,60,150,45,02,30,090,,03,70,270,50*4B", 3),
            (
                "1,1,04,01,60,150,45,02,30,090,30,03,70,270,50,04,10,010,*4B",
                4,
            ),
        ];

        for (input, expected) in cases {
            let (_, gsv) = Gsv::parser(input).unwrap();
            assert_eq!(gsv.satellites.len(), expected, "Failed: {input:?}");
        }
    }

    #[test]
    fn test_gsv_snr_is_optional() {
        let (_, gsv) = Gsv::parser("1,1,01,05,45,120,*4B").unwrap();
        assert_eq!(gsv.satellites[0].snr, None);
    }

    #[test]
    fn test_gsv_rejects_malformed() {
        let cases = [
            // no entries
            "1,1,00*4B",
            // five entries
            "2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45,15,10,100,20*75",
            // missing SNR separator
            "1,1,01,05,45,120*4B",
            // empty elevation
            "1,1,01,05,,120,38*4B",
            // non-numeric SNR
            "1,1,01,05,45,120,XX*4B",
            // trailing separator after the last entry
            "1,1,01,05,45,120,38,*4B",
        ];

        for &input in &cases {
            let result = Gsv::parser(input);
            assert!(result.is_err(), "Parsed {input:?}: {result:?}");
        }
    }
}
