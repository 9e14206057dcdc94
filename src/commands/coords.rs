use anyhow::{Context, Result};
use geonote_core::config::GeoNoteConfig;
use geonote_core::coords::{
    Axis, CoordinateFormat, Dms, LocationPoint, convert_pair, decimal_to_dms, format_decimal,
    map_center, parse_decimal,
};
use owo_colors::OwoColorize;

use crate::render::render_point;

pub fn dms(value: f64, axis: Axis) -> Result<()> {
    if !value.is_finite() {
        anyhow::bail!("Not a number: {}", value);
    }

    println!("{}", decimal_to_dms(value, axis));
    Ok(())
}

pub fn decimal(text: &str) -> Result<()> {
    let dms: Dms = text.parse()?;

    println!("{}", format_decimal(dms.to_decimal()));
    Ok(())
}

pub fn convert(
    latitude: &str,
    longitude: &str,
    from: Option<CoordinateFormat>,
    to: Option<CoordinateFormat>,
) -> Result<()> {
    let from = match from {
        Some(format) => format,
        None => {
            GeoNoteConfig::load()
                .context("Failed to load config")?
                .coordinates
                .default_format
        }
    };
    let to = to.unwrap_or_else(|| from.toggled());

    let (lat, lng) = convert_pair(latitude, longitude, from, to)?;

    println!("{} {}", "Latitude: ".dimmed(), lat);
    println!("{} {}", "Longitude:".dimmed(), lng);
    Ok(())
}

pub fn center(points: &[String]) -> Result<()> {
    let points = points
        .iter()
        .map(|p| parse_point(p))
        .collect::<Result<Vec<_>>>()?;

    if points.is_empty() {
        println!("{}", "No points given, using the default project location".dimmed());
    }

    println!("{}", render_point(&map_center(&points)));
    Ok(())
}

/// Parse "lat,lng" in decimal degrees.
fn parse_point(text: &str) -> Result<LocationPoint> {
    let (lat, lng) = text
        .split_once(',')
        .with_context(|| format!("Expected \"lat,lng\", got \"{}\"", text))?;

    let latitude = parse_decimal(lat).with_context(|| format!("Invalid latitude: \"{}\"", lat.trim()))?;
    let longitude =
        parse_decimal(lng).with_context(|| format!("Invalid longitude: \"{}\"", lng.trim()))?;

    Ok(LocationPoint::new(latitude, longitude))
}
