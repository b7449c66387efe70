use std::cell::Cell;

use log::LevelFilter;
use nmea0183_router::{
    ChecksumMode, NmeaParser,
    nmea_content::{Gga, Gll, Gsa, Gsv, Rmc, Vtg},
};

const LOG: &str = "\
$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r
$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39\r
$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75\r
$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A*07\r
$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25\r
$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C\r
$GPGLL,4916.45,N,12311.12,W,225444,A,A*1D\r
$GPZDA,201530.00,04,07,2002,00,00*60\r
$GPGGA,bad,data*00\r
";

fn main() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Trace)
        .try_init();

    let failures = Cell::new(0);

    let mut parser = NmeaParser::builder()
        .checksum_mode(ChecksumMode::Verify)
        .build();

    parser.set_handler(|gga: Gga| {
        println!(
            "GGA {:02}:{:02}:{:05.2} {:?}, {} satellites, {} m",
            gga.time.hours,
            gga.time.minutes,
            gga.time.seconds,
            gga.fix_quality,
            gga.satellites_tracked,
            gga.msl_altitude
        );
    });
    parser.set_handler(|gll: Gll| {
        let lat = gll.position.latitude;
        let lon = gll.position.longitude;
        println!(
            "GLL {}°{}' {:?}, {}°{}' {:?}",
            lat.degrees, lat.minutes, lat.hemisphere, lon.degrees, lon.minutes, lon.hemisphere
        );
    });
    parser.set_handler(|gsa: Gsa| {
        println!(
            "GSA {} fix using {:?}, PDOP {}",
            gsa.fix_type, gsa.satellites, gsa.pdop
        );
    });
    parser.set_handler(|gsv: Gsv| {
        println!(
            "GSV page {}/{}, {} in view",
            gsv.message_number, gsv.number_of_messages, gsv.satellites_in_view
        );
        for sat in &gsv.satellites {
            println!(
                "    PRN {:>2} el {:>2} az {:>3} snr {:?}",
                sat.id, sat.elevation, sat.azimuth, sat.snr
            );
        }
    });
    parser.set_handler(|rmc: Rmc| {
        println!(
            "RMC {:02}/{:02}/{:02} {} kn, course {:?}",
            rmc.date.day, rmc.date.month, rmc.date.year, rmc.speed_over_ground, rmc.course_over_ground
        );
    });
    parser.set_handler(|vtg: Vtg| {
        println!("VTG {} km/h", vtg.ground_speed_kmph);
    });
    parser.set_failure_handler(|line| {
        failures.set(failures.get() + 1);
        println!("rejected {:?}", line.trim_end());
    });

    for line in LOG.split_inclusive('\n') {
        parser.parse(line);
    }

    println!("{} lines rejected", failures.get());
}
