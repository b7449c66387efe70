use std::cell::{Cell, RefCell};

use log::LevelFilter;
use nmea0183_router::{
    ChecksumMode, Config, LineEndingMode, NmeaParser, ParseOutcome, dispatch,
    nmea_content::{
        DataStatus, FixMode, FixQuality, Gga, Gll, Gsa, Gsv, LatitudeHemisphere,
        LongitudeHemisphere, NmeaSentence, Rmc, Vtg,
    },
};

fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

#[test]
fn test_gga_scenario() {
    init_logger();

    let received = RefCell::new(Vec::new());
    let mut parser = NmeaParser::new();
    parser.set_handler(|gga: Gga| received.borrow_mut().push(gga));
    parser.parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47");

    let received = received.borrow();
    assert_eq!(received.len(), 1);

    let gga = &received[0];
    assert_eq!(
        (gga.time.hours, gga.time.minutes, gga.time.seconds),
        (12, 35, 19.0)
    );
    assert_eq!(gga.position.latitude.degrees, 48);
    assert_eq!(gga.position.latitude.minutes, 7.038);
    assert_eq!(gga.position.latitude.hemisphere, LatitudeHemisphere::North);
    assert_eq!(gga.position.longitude.degrees, 11);
    assert_eq!(gga.position.longitude.minutes, 31.0);
    assert_eq!(gga.position.longitude.hemisphere, LongitudeHemisphere::East);
    assert_eq!(gga.fix_quality, FixQuality::GpsFix);
    assert_eq!(gga.satellites_tracked, 8);
    assert_eq!(gga.hdop, 0.9);
    assert_eq!(gga.msl_altitude, 545.4);
    assert_eq!(gga.geoid_separation, 46.9);
    assert!(gga.time_since_dgps_update.is_none());
    assert!(gga.dgps_station_id.is_none());
    assert_eq!(gga.checksum, 0x47);
}

#[test]
fn test_gsa_scenario() {
    init_logger();

    let received = RefCell::new(None);
    let mut parser = NmeaParser::new();
    parser.set_handler(|gsa: Gsa| *received.borrow_mut() = Some(gsa));
    parser.parse("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39");

    let gsa = received.borrow_mut().take().unwrap();
    assert_eq!(gsa.satellites.as_slice(), &[4, 5, 9, 12, 24]);
    assert_eq!((gsa.pdop, gsa.hdop, gsa.vdop), (2.5, 1.3, 2.1));
    assert_eq!(gsa.checksum, 0x39);
}

#[test]
fn test_malformed_scenario() {
    init_logger();

    let gga_calls = Cell::new(0);
    let failures = RefCell::new(Vec::new());

    let mut parser = NmeaParser::new();
    parser.set_handler(|_: Gga| gga_calls.set(gga_calls.get() + 1));
    parser.set_failure_handler(|line| failures.borrow_mut().push(line.to_owned()));
    parser.parse("$GPGGA,bad,data*00");

    assert_eq!(gga_calls.get(), 0);
    assert_eq!(*failures.borrow(), ["$GPGGA,bad,data*00"]);
    assert_eq!(
        dispatch("$GPGGA,bad,data*00", Config::default()),
        ParseOutcome::Failed("$GPGGA,bad,data*00")
    );
}

#[test]
fn test_unregistered_handlers_scenario() {
    init_logger();

    let mut parser = NmeaParser::new();
    parser.parse("$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C");
}

#[test]
fn test_every_sentence_type_reaches_its_handler() {
    init_logger();

    let gll = RefCell::new(None);
    let gsv = RefCell::new(None);
    let rmc = RefCell::new(None);
    let vtg = RefCell::new(None);

    let mut parser = NmeaParser::builder()
        .checksum_mode(ChecksumMode::Verify)
        .line_ending_mode(LineEndingMode::Required)
        .build();
    parser.set_handler(|s: Gll| *gll.borrow_mut() = Some(s));
    parser.set_handler(|s: Gsv| *gsv.borrow_mut() = Some(s));
    parser.set_handler(|s: Rmc| *rmc.borrow_mut() = Some(s));
    parser.set_handler(|s: Vtg| *vtg.borrow_mut() = Some(s));
    parser.set_failure_handler(|line| panic!("unexpected failure for {line:?}"));

    parser.parse("$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C\r\n");
    parser.parse("$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75\r\n");
    parser.parse("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A*07\r\n");
    parser.parse("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25\r\n");

    let gll = gll.borrow_mut().take().unwrap();
    assert_eq!(gll.data_status, DataStatus::Active);
    assert_eq!(gll.position.longitude.hemisphere, LongitudeHemisphere::West);

    let gsv = gsv.borrow_mut().take().unwrap();
    assert_eq!(gsv.satellites.len(), 4);
    assert_eq!(gsv.satellites[1].azimuth, 308);

    let rmc = rmc.borrow_mut().take().unwrap();
    assert_eq!(rmc.speed_over_ground, 22.4);
    assert_eq!((rmc.date.day, rmc.date.month, rmc.date.year), (23, 3, 94));

    let vtg = vtg.borrow_mut().take().unwrap();
    assert_eq!(vtg.ground_speed_kmph, 10.2);
    assert_eq!(vtg.fix_mode, FixMode::Autonomous);
}

#[test]
fn test_decoding_is_idempotent() {
    let lines = [
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
        "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C",
        "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
        "$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75",
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A*07",
        "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25",
    ];

    for line in lines {
        let first = dispatch(line, Config::default());
        let second = dispatch(line, Config::default());
        assert!(matches!(first, ParseOutcome::Decoded(_)), "Failed: {line:?}");
        assert_eq!(first, second, "Failed: {line:?}");
    }
}

#[test]
fn test_wrong_hemisphere_fails_whole_sentence() {
    let lines = [
        "$GPGLL,4916.45,E,12311.12,W,225444,A,A*5C",
        "$GPGLL,4916.45,W,12311.12,W,225444,A,A*5C",
        "$GPGLL,4916.45,N,12311.12,N,225444,A,A*5C",
        "$GPGLL,4916.45,N,12311.12,S,225444,A,A*5C",
    ];

    for line in lines {
        assert_eq!(
            dispatch(line, Config::default()),
            ParseOutcome::Failed(line)
        );
    }
}

#[test]
fn test_fixed_width_fields_reject_short_or_non_digit() {
    let lines = [
        // hours
        "$GPGLL,4916.45,N,12311.12,W,2,A,A*5C",
        "$GPGLL,4916.45,N,12311.12,W,2x5444,A,A*5C",
        // latitude degrees
        "$GPGLL,4,N,12311.12,W,225444,A,A*5C",
        "$GPGLL,x916.45,N,12311.12,W,225444,A,A*5C",
        // longitude degrees
        "$GPGLL,4916.45,N,12,W,225444,A,A*5C",
        "$GPGLL,4916.45,N,1x311.12,W,225444,A,A*5C",
        // checksum
        "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5",
        "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5X",
        // date
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,2303,003.1,W,A*07",
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,23039x,003.1,W,A*07",
        // GSA PRN
        "$GPGSA,A,3,4,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
        "$GPGSA,A,3,0x,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
    ];

    for line in lines {
        assert_eq!(
            dispatch(line, Config::default()),
            ParseOutcome::Failed(line),
            "Decoded {line:?}"
        );
    }
}

#[test]
fn test_gsv_entry_bounds() {
    let accepted = [
        "$GPGSV,1,1,01,05,45,120,38*4B",
        "$GPGSV,1,1,04,01,60,150,45,02,30,090,30,03,70,270,50,04,10,010,*4B",
    ];
    let rejected = [
        "$GPGSV,1,1,00*4B",
        "$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45,15,10,100,20*75",
    ];

    for line in accepted {
        assert!(
            matches!(
                dispatch(line, Config::default()),
                ParseOutcome::Decoded(NmeaSentence::Gsv(_))
            ),
            "Failed: {line:?}"
        );
    }

    for line in rejected {
        assert_eq!(dispatch(line, Config::default()), ParseOutcome::Failed(line));
    }
}
