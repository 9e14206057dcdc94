//! Geographic coordinate transcoding.
//!
//! Converts a single axis value between signed decimal degrees and
//! degrees/minutes/seconds with a hemisphere letter (DMS).

mod dms;
mod parse;
mod point;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoNoteError;

pub use dms::{Dms, decimal_to_dms, dms_to_decimal};
pub use point::{CoordinateFormat, LocationPoint, convert_pair, format_decimal, map_center, parse_decimal};

/// Which axis a coordinate value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl FromStr for Axis {
    type Err = GeoNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lat" | "latitude" => Ok(Axis::Latitude),
            "lng" | "lon" | "long" | "longitude" => Ok(Axis::Longitude),
            _ => Err(GeoNoteError::UnknownValue {
                kind: "axis",
                value: s.to_string(),
                expected: "lat or lng",
            }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Hemisphere letter carrying the sign of a DMS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Hemisphere for a signed value on the given axis. Zero counts as positive.
    pub fn for_value(value: f64, axis: Axis) -> Self {
        let positive = value >= 0.0;
        match (axis, positive) {
            (Axis::Latitude, true) => Hemisphere::North,
            (Axis::Latitude, false) => Hemisphere::South,
            (Axis::Longitude, true) => Hemisphere::East,
            (Axis::Longitude, false) => Hemisphere::West,
        }
    }

    /// Parse a hemisphere letter, case-insensitive.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// +1.0 for N/E, -1.0 for S/W.
    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Hemisphere::North | Hemisphere::South => Axis::Latitude,
            Hemisphere::East | Hemisphere::West => Axis::Longitude,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
