mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod vtg;

pub use gga::Gga;
pub use gll::Gll;
pub use gsa::{GSA_SATELLITE_SLOTS, Gsa};
pub use gsv::{GSV_MAX_SATELLITES, Gsv, SatelliteInView};
pub use rmc::Rmc;
pub use vtg::Vtg;

use nom::{
    Parser,
    bytes::complete::{take, take_while_m_n},
    character::complete::char,
    error::ErrorKind,
    sequence::terminated,
};

use crate::{Error, IResult, nmea_content::Parsable, parsing::consumed};

/// One decoded sentence of any supported type.
///
/// [`NmeaSentence::parser`] takes the sentence content after the `$`: a two-letter talker
/// ID, the three-letter sentence type, and the comma-separated fields up to and including
/// the `*hh` checksum. The talker ID is checked for shape and then discarded. Any input left
/// over once the sentence grammar has finished is an error.
///
/// ```rust
/// use nmea0183_router::nmea_content::{FixQuality, NmeaSentence, Parsable};
///
/// let (_, sentence) =
///     NmeaSentence::parser("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")
///         .unwrap();
///
/// match sentence {
///     NmeaSentence::Gga(gga) => {
///         assert_eq!(gga.fix_quality, FixQuality::GpsFix);
///         assert_eq!(gga.satellites_tracked, 8);
///     }
///     other => panic!("expected GGA, got {}", other.sentence_type()),
/// }
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant        | Sentence Type                              |
/// |----------------|--------------------------------------------|
/// | Gga([`Gga`])   | Global Positioning System Fix Data         |
/// | Gll([`Gll`])   | Geographic Position - Latitude/Longitude   |
/// | Gsa([`Gsa`])   | GPS DOP and active satellites              |
/// | Gsv([`Gsv`])   | Satellites in View                         |
/// | Rmc([`Rmc`])   | Recommended Minimum Navigation Information |
/// | Vtg([`Vtg`])   | Track made good and Ground speed           |
///
/// ```rust
/// use nmea0183_router::{Error, nmea_content::{NmeaSentence, Parsable}};
///
/// // Unsupported sentence type
/// let result = NmeaSentence::parser("GPZDA,201530.00,04,07,2002,00,00*60");
/// assert_eq!(result, Err(nom::Err::Error(Error::UnrecognizedMessage("ZDA,201530.00,04,07,2002,00,00*60"))));
///
/// // Trailing data after the checksum
/// let result = NmeaSentence::parser("GPGLL,4916.45,N,12311.12,W,225444,A,A*1D,extra");
/// assert!(result.is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Global Positioning System Fix Data
    Gga(Gga),
    /// Geographic Position - Latitude/Longitude
    Gll(Gll),
    /// GPS DOP and active satellites
    Gsa(Gsa),
    /// Satellites in View
    Gsv(Gsv),
    /// Recommended Minimum Navigation Information
    Rmc(Rmc),
    /// Track made good and Ground speed
    Vtg(Vtg),
}

impl NmeaSentence {
    /// The three-letter sentence type, `"GGA"`, `"GSV"`, ...
    pub const fn sentence_type(&self) -> &'static str {
        match self {
            NmeaSentence::Gga(_) => "GGA",
            NmeaSentence::Gll(_) => "GLL",
            NmeaSentence::Gsa(_) => "GSA",
            NmeaSentence::Gsv(_) => "GSV",
            NmeaSentence::Rmc(_) => "RMC",
            NmeaSentence::Vtg(_) => "VTG",
        }
    }

    /// The checksum value carried by the sentence, as written on the wire.
    pub const fn checksum(&self) -> u8 {
        match self {
            NmeaSentence::Gga(gga) => gga.checksum,
            NmeaSentence::Gll(gll) => gll.checksum,
            NmeaSentence::Gsa(gsa) => gsa.checksum,
            NmeaSentence::Gsv(gsv) => gsv.checksum,
            NmeaSentence::Rmc(rmc) => rmc.checksum,
            NmeaSentence::Vtg(vtg) => vtg.checksum,
        }
    }
}

fn talker_id(i: &str) -> IResult<&str, &str> {
    take_while_m_n(2, 2, |c: char| c.is_ascii_uppercase()).parse(i)
}

impl Parsable for NmeaSentence {
    fn parser(i: &str) -> IResult<&str, Self> {
        let (i, _talker_id) = talker_id(i)?;
        let msg = i;
        let (i, sentence_type) = terminated(take(3u8), char(',')).parse(i)?;

        // Arms are tried in this order; the codes never overlap.
        let (i, sentence) = match sentence_type {
            "GGA" => Gga::parser.map(Self::Gga).parse(i)?,
            "GLL" => Gll::parser.map(Self::Gll).parse(i)?,
            "GSA" => Gsa::parser.map(Self::Gsa).parse(i)?,
            "GSV" => Gsv::parser.map(Self::Gsv).parse(i)?,
            "RMC" => Rmc::parser.map(Self::Rmc).parse(i)?,
            "VTG" => Vtg::parser.map(Self::Vtg).parse(i)?,
            _ => return Err(nom::Err::Error(Error::UnrecognizedMessage(msg))),
        };

        let (i, _) = consumed(take(0u8), ErrorKind::Eof).parse(i)?;
        Ok((i, sentence))
    }
}
