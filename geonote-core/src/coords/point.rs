//! Location points as entered on the map form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Axis, Dms, decimal_to_dms};
use crate::constants::DEFAULT_MAP_CENTER;
use crate::error::{GeoNoteError, GeoNoteResult};

/// The two ways a coordinate pair can be typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateFormat {
    #[default]
    Decimal,
    Dms,
}

impl CoordinateFormat {
    /// The other format (what the form's toggle button switches to).
    pub fn toggled(self) -> Self {
        match self {
            CoordinateFormat::Decimal => CoordinateFormat::Dms,
            CoordinateFormat::Dms => CoordinateFormat::Decimal,
        }
    }
}

impl FromStr for CoordinateFormat {
    type Err = GeoNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "decimal" | "dd" => Ok(CoordinateFormat::Decimal),
            "dms" => Ok(CoordinateFormat::Dms),
            _ => Err(GeoNoteError::UnknownValue {
                kind: "coordinate format",
                value: s.to_string(),
                expected: "decimal or dms",
            }),
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateFormat::Decimal => write!(f, "decimal"),
            CoordinateFormat::Dms => write!(f, "dms"),
        }
    }
}

/// A latitude/longitude pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LocationPoint {
            latitude,
            longitude,
        }
    }

    /// Read a pair typed in the given format.
    pub fn parse(latitude: &str, longitude: &str, format: CoordinateFormat) -> GeoNoteResult<Self> {
        let read = |text: &str| -> GeoNoteResult<f64> {
            let value = match format {
                CoordinateFormat::Decimal => parse_decimal(text),
                CoordinateFormat::Dms => text.parse::<Dms>().ok().map(|dms| dms.to_decimal()),
            };
            value.ok_or_else(|| GeoNoteError::InvalidCoordinate(text.trim().to_string()))
        };

        Ok(LocationPoint {
            latitude: read(latitude)?,
            longitude: read(longitude)?,
        })
    }

    /// Render as (latitude, longitude) text in the given format.
    pub fn render(&self, format: CoordinateFormat) -> (String, String) {
        match format {
            CoordinateFormat::Decimal => (format_decimal(self.latitude), format_decimal(self.longitude)),
            CoordinateFormat::Dms => (
                decimal_to_dms(self.latitude, Axis::Latitude),
                decimal_to_dms(self.longitude, Axis::Longitude),
            ),
        }
    }
}

impl fmt::Display for LocationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat, lng) = self.render(CoordinateFormat::Dms);
        write!(f, "{}, {}", lat, lng)
    }
}

/// Decimal degrees with six fractional digits, as stored by the form.
pub fn format_decimal(value: f64) -> String {
    format!("{:.6}", value)
}

/// Parse decimal-degree text. Non-finite values are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert a typed pair from one format to the other, re-rendering it.
pub fn convert_pair(
    latitude: &str,
    longitude: &str,
    from: CoordinateFormat,
    to: CoordinateFormat,
) -> GeoNoteResult<(String, String)> {
    let point = LocationPoint::parse(latitude, longitude, from)?;
    Ok(point.render(to))
}

/// Centre of a set of points (plain mean). With no points, the default
/// project location is used.
pub fn map_center(points: &[LocationPoint]) -> LocationPoint {
    if points.is_empty() {
        let (latitude, longitude) = DEFAULT_MAP_CENTER;
        return LocationPoint::new(latitude, longitude);
    }

    let count = points.len() as f64;
    let latitude = points.iter().map(|p| p.latitude).sum::<f64>() / count;
    let longitude = points.iter().map(|p| p.longitude).sum::<f64>() / count;

    LocationPoint::new(latitude, longitude)
}
