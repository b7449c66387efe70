use nom::Err;

use crate::{
    Error,
    nmea0183::{checksum, verify_checksum},
};

#[test]
fn test_checksum_values() {
    let cases = [
        ("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,", 0x47),
        ("GPGLL,4916.45,N,12311.12,W,225444,A,A", 0x5C),
        ("GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A", 0x07),
        ("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A", 0x25),
        ("", 0x00),
    ];

    for (data, expected) in cases {
        assert_eq!(checksum(data), expected, "Failed: {data:?}");
    }
}

#[test]
fn test_verify_checksum_ok() {
    let content = "GPGLL,4916.45,N,12311.12,W,225444,A,A*5C";
    assert_eq!(verify_checksum(content), Ok((content, 0x5C)));

    // lowercase hex digits are accepted
    let content = "GPGLL,4916.45,N,12311.12,W,225444,A,A*5c";
    assert_eq!(verify_checksum(content), Ok((content, 0x5C)));
}

#[test]
fn test_verify_checksum_mismatch() {
    let res = verify_checksum("GPGLL,4916.45,N,12311.12,W,225444,A,A*1D");
    assert_eq!(
        res,
        Err(Err::Error(Error::ChecksumMismatch {
            expected: 0x5C,
            found: 0x1D
        }))
    );
}

#[test]
fn test_verify_checksum_malformed() {
    let cases = [
        // no delimiter
        "GPGLL,4916.45,N,12311.12,W,225444,A,A",
        // one digit
        "GPGLL,4916.45,N,12311.12,W,225444,A,A*5",
        // not hex
        "GPGLL,4916.45,N,12311.12,W,225444,A,A*ZZ",
    ];

    for &i in &cases {
        let res = verify_checksum(i);
        assert!(res.is_err(), "Parsed {i:?}: {res:?}");
        assert!(
            !matches!(res, Err(Err::Error(Error::ChecksumMismatch { .. }))),
            "Failed: {i:?}"
        );
    }
}
