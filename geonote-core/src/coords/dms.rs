//! Degrees/minutes/seconds values.

use std::fmt;
use std::str::FromStr;

use super::{Axis, Hemisphere, parse};
use crate::error::GeoNoteError;

/// A coordinate in DMS notation. The sign lives only in `hemisphere`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub hemisphere: Hemisphere,
}

impl Dms {
    /// Convert a signed decimal value. Seconds are rounded, and a rounded
    /// 60″ carries into the minutes (and 60′ into the degrees), so the result
    /// always has minutes and seconds in 0..=59.
    ///
    /// No range check is done: a latitude of 200 gives `200°0'0"N`.
    pub fn from_decimal(value: f64, axis: Axis) -> Self {
        let absolute = value.abs();
        let degrees = absolute.floor();
        let minutes_float = (absolute - degrees) * 60.0;
        let minutes = minutes_float.floor();
        let seconds = ((minutes_float - minutes) * 60.0).round();

        let mut dms = Dms {
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            hemisphere: Hemisphere::for_value(value, axis),
        };
        dms.carry();
        dms
    }

    fn carry(&mut self) {
        if self.seconds >= 60 {
            self.seconds -= 60;
            self.minutes += 1;
        }
        if self.minutes >= 60 {
            self.minutes -= 60;
            self.degrees = self.degrees.saturating_add(1);
        }
    }

    /// Signed decimal degrees. Out-of-range minutes or seconds are not clamped.
    pub fn to_decimal(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0;
        magnitude * self.hemisphere.sign()
    }

    pub fn axis(&self) -> Axis {
        self.hemisphere.axis()
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{}'{}\"{}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

impl FromStr for Dms {
    type Err = GeoNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_dms(s).ok_or_else(|| GeoNoteError::InvalidCoordinate(s.trim().to_string()))
    }
}

/// Format a signed decimal value as canonical DMS text, e.g. `41°17'28"N`.
pub fn decimal_to_dms(value: f64, axis: Axis) -> String {
    Dms::from_decimal(value, axis).to_string()
}

/// Parse loose DMS text (`41°17'28"N`, `41 17 28 n`, ...) into signed decimal
/// degrees. Returns `None` when the text holds no `D M S H` sequence.
pub fn dms_to_decimal(text: &str) -> Option<f64> {
    parse::parse_dms(text).map(|dms| dms.to_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARCSECOND: f64 = 1.0 / 3600.0;

    #[test]
    fn tashkent_latitude_to_dms() {
        assert_eq!(decimal_to_dms(41.291111, Axis::Latitude), "41°17'28\"N");
    }

    #[test]
    fn tashkent_longitude_to_dms() {
        assert_eq!(decimal_to_dms(69.240556, Axis::Longitude), "69°14'26\"E");
    }

    #[test]
    fn negative_values_use_south_and_west() {
        assert_eq!(decimal_to_dms(-33.8688, Axis::Latitude), "33°52'8\"S");
        assert_eq!(decimal_to_dms(-74.006, Axis::Longitude), "74°0'22\"W");
    }

    #[test]
    fn output_has_no_minus_sign_or_padding() {
        let text = decimal_to_dms(-5.5, Axis::Latitude);
        assert_eq!(text, "5°30'0\"S");
        assert!(!text.contains('-'));
    }

    #[test]
    fn rounded_seconds_carry_into_minutes_and_degrees() {
        assert_eq!(decimal_to_dms(0.99999, Axis::Latitude), "1°0'0\"N");
        // 10°29'59.64" rounds to 10°30'0"
        assert_eq!(decimal_to_dms(10.49999, Axis::Longitude), "10°30'0\"E");
    }

    #[test]
    fn out_of_range_values_are_still_formatted() {
        assert_eq!(decimal_to_dms(200.0, Axis::Latitude), "200°0'0\"N");
    }

    #[test]
    fn parser_tolerates_delimiter_styles() {
        let symbols = dms_to_decimal("41°17'28\"N").unwrap();
        let spaces = dms_to_decimal("41 17 28 N").unwrap();
        let lowercase = dms_to_decimal("41°17'28\"n").unwrap();
        let mixed = dms_to_decimal("41° 17 28\" N").unwrap();

        assert!((symbols - 41.29111).abs() < 0.0001);
        assert_eq!(symbols, spaces);
        assert_eq!(symbols, lowercase);
        assert_eq!(symbols, mixed);
    }

    #[test]
    fn parser_negates_south_and_west() {
        let lat = dms_to_decimal("33°52'8\"S").unwrap();
        let lng = dms_to_decimal("74 0 22 w").unwrap();
        assert!(lat < 0.0);
        assert!(lng < 0.0);
        assert!((lng + 74.006111).abs() < 0.0001);
    }

    #[test]
    fn parser_rejects_malformed_text() {
        assert_eq!(dms_to_decimal("not a coordinate"), None);
        assert_eq!(dms_to_decimal("41 17 N"), None);
        assert_eq!(dms_to_decimal(""), None);
    }

    #[test]
    fn parser_does_not_clamp() {
        let value = dms_to_decimal("200 75 0 N").unwrap();
        assert!((value - 201.25).abs() < 1e-9);
    }

    #[test]
    fn from_str_reports_the_input() {
        let err = "41 17 N".parse::<Dms>().unwrap_err();
        assert!(err.to_string().contains("41 17 N"));
        assert!(err.to_string().contains("41°17'28\"N"));
    }

    #[test]
    fn round_trip_within_one_arcsecond() {
        let mut value = -90.0;
        while value <= 90.0 {
            let back = dms_to_decimal(&decimal_to_dms(value, Axis::Latitude)).unwrap();
            assert!(
                (back - value).abs() <= ARCSECOND,
                "latitude {} came back as {}",
                value,
                back
            );
            value += 0.3217;
        }

        let mut value = -180.0;
        while value <= 180.0 {
            let back = dms_to_decimal(&decimal_to_dms(value, Axis::Longitude)).unwrap();
            assert!(
                (back - value).abs() <= ARCSECOND,
                "longitude {} came back as {}",
                value,
                back
            );
            value += 0.7341;
        }
    }

    #[test]
    fn hemisphere_matches_sign() {
        for value in [0.0, 0.5, 12.25, 89.9999] {
            assert!(decimal_to_dms(value, Axis::Latitude).ends_with('N'));
            assert!(decimal_to_dms(-value - 0.1, Axis::Latitude).ends_with('S'));
            assert!(decimal_to_dms(value, Axis::Longitude).ends_with('E'));
            assert!(decimal_to_dms(-value - 0.1, Axis::Longitude).ends_with('W'));
        }
    }

    #[test]
    fn dms_knows_its_axis() {
        let dms: Dms = "69 14 26 E".parse().unwrap();
        assert_eq!(dms.axis(), Axis::Longitude);
        assert_eq!(dms.to_string(), "69°14'26\"E");
    }
}
