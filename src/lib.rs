//! # NMEA 0183 Router
//!
//! This library decodes NMEA 0183 GPS sentences of the form
//! `$TTSSS,D1,D2,...,Dn*CC\r\n` into strongly-typed records and routes each record to a
//! handler registered for its sentence type.
//!
//! Supported sentence types: GGA, GLL, GSA, GSV, RMC and VTG. Any other line, and any line
//! that does not match its grammar exactly, goes to the failure handler.
//!
//! The framing is configurable to handle:
//! - Checksum extraction only, or verification against the sentence body
//! - Optional, required or forbidden CRLF line endings
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_router::{NmeaParser, nmea_content::{Gll, Rmc}};
//!
//! let mut positions = Vec::new();
//! let mut speeds = Vec::new();
//! let mut rejected = Vec::new();
//!
//! {
//!     let mut parser = NmeaParser::new();
//!     parser.set_handler(|gll: Gll| positions.push(gll.position));
//!     parser.set_handler(|rmc: Rmc| speeds.push(rmc.speed_over_ground));
//!     parser.set_failure_handler(|line| rejected.push(line.to_owned()));
//!
//!     parser.parse("$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C\r\n");
//!     parser.parse("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A*07\r\n");
//!     parser.parse("$GPZDA,201530.00,04,07,2002,00,00*60\r\n");
//! }
//!
//! assert_eq!(positions.len(), 1);
//! assert_eq!(speeds.len(), 1);
//! assert_eq!(rejected.len(), 1);
//! ```
//!
//! Without handlers, [`dispatch`] returns the outcome directly and [`decode`] returns the
//! diagnostic of a failed line:
//!
//! ```rust
//! use nmea0183_router::{Config, Error, decode};
//!
//! let result = decode("$GPGGA,123519,4807.038,E,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47", Config::default());
//! assert!(matches!(result, Err(Error::InvalidField(_))));
//! ```

mod callbacks;
pub mod error;
mod nmea0183;
pub mod nmea_content;
pub mod parsing;

pub use callbacks::*;
pub use error::{Error, IResult};
pub use nmea0183::*;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
