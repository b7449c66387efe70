use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        CalendarDate, DataStatus, FixMode, MagneticVariationDirection, Parsable, Position2D,
        TimeOfDay,
        parse::{calendar_date, checksum, position_2d, time_of_day},
    },
    parsing::{optional, real},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// Course over ground, magnetic variation and its direction may each be left empty
/// independently of one another.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Rmc {
    /// Fix time in UTC
    pub time: TimeOfDay,
    /// Status
    pub data_status: DataStatus,
    /// Latitude and longitude
    pub position: Position2D,
    /// Speed over ground in knots
    pub speed_over_ground: f32,
    /// Course over ground in degrees true
    pub course_over_ground: Option<f32>,
    /// Fix date in UTC
    pub date: CalendarDate,
    /// Magnetic variation in degrees
    pub magnetic_variation: Option<f32>,
    pub magnetic_variation_direction: Option<MagneticVariationDirection>,
    /// Mode indicator
    pub fix_mode: FixMode,
    pub checksum: u8,
}

impl Parsable for Rmc {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, time) = time_of_day(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, data_status) = DataStatus::parser(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, position) = position_2d(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, speed_over_ground) = real(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, course_over_ground) = optional(real).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, date) = calendar_date(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, magnetic_variation) = optional(real).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, magnetic_variation_direction) =
            optional(MagneticVariationDirection::parser).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, fix_mode) = FixMode::parser(i)?;
        let (i, checksum) = checksum(i)?;

        Ok((
            i,
            Self {
                time,
                data_status,
                position,
                speed_over_ground,
                course_over_ground,
                date,
                magnetic_variation,
                magnetic_variation_direction,
                fix_mode,
                checksum,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::{LatitudeHemisphere, LongitudeHemisphere};

    #[test]
    fn test_rmc_parsing() {
        let (rest, rmc) =
            Rmc::parser("123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A*6A")
                .unwrap();

        assert_eq!(rest, "");
        assert_eq!(
            rmc.time,
            TimeOfDay {
                hours: 12,
                minutes: 35,
                seconds: 19.0
            }
        );
        assert_eq!(rmc.data_status, DataStatus::Active);
        assert_eq!(rmc.position.latitude.degrees, 48);
        assert_eq!(rmc.position.latitude.hemisphere, LatitudeHemisphere::North);
        assert_eq!(rmc.position.longitude.degrees, 11);
        assert_eq!(rmc.position.longitude.hemisphere, LongitudeHemisphere::East);
        assert_eq!(rmc.speed_over_ground, 22.4);
        assert_eq!(rmc.course_over_ground, Some(84.4));
        assert_eq!(
            rmc.date,
            CalendarDate {
                day: 23,
                month: 3,
                year: 94
            }
        );
        assert_eq!(rmc.magnetic_variation, Some(3.1));
        assert_eq!(
            rmc.magnetic_variation_direction,
            Some(MagneticVariationDirection::West)
        );
        assert_eq!(rmc.fix_mode, FixMode::Autonomous);
        assert_eq!(rmc.checksum, 0x6A);
    }

    #[test]
    fn test_rmc_independent_optionals() {
        let cases = [
            (",230394,,", None, None, None),
            ("084.4,230394,,", Some(84.4), None, None),
            (",230394,003.1,", None, Some(3.1), None),
            (
                ",230394,,E",
                None,
                None,
                Some(MagneticVariationDirection::East),
            ),
        ];

        for (input, course, variation, direction) in cases {
            let i = format!("123519,V,4807.038,S,01131.000,W,0.0,{input},N*00");

            let (_, rmc) = Rmc::parser(&i).unwrap();
            assert_eq!(rmc.data_status, DataStatus::Invalid, "Failed: {input:?}");
            assert_eq!(rmc.course_over_ground, course, "Failed: {input:?}");
            assert_eq!(rmc.magnetic_variation, variation, "Failed: {input:?}");
            assert_eq!(
                rmc.magnetic_variation_direction, direction,
                "Failed: {input:?}"
            );
            assert_eq!(rmc.fix_mode, FixMode::Invalid);
        }
    }

    #[test]
    fn test_rmc_rejects_malformed() {
        let cases = [
            // empty speed
            "123519,A,4807.038,N,01131.000,E,,084.4,230394,003.1,W,A*6A",
            // empty date
            "123519,A,4807.038,N,01131.000,E,022.4,084.4,,003.1,W,A*6A",
            // short date
            "123519,A,4807.038,N,01131.000,E,022.4,084.4,23039,003.1,W,A*6A",
            // variation direction is not E/W
            "123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,N,A*6A",
            // unknown status
            "123519,X,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A*6A",
            // missing mode indicator
            "123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
            // month 13
            "123519,A,4807.038,N,01131.000,E,022.4,084.4,231394,003.1,W,A*6A",
        ];

        for &input in &cases {
            let result = Rmc::parser(input);
            assert!(result.is_err(), "Parsed {input:?}: {result:?}");
        }
    }
}
