//! Terminal rendering for geonote-core types.
//!
//! Extension traits that add colored output to core types using owo_colors.

use chrono::Duration;
use geonote_core::calendar::EventWindow;
use geonote_core::calendar::ics::ExportedEvent;
use geonote_core::coords::{CoordinateFormat, LocationPoint};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

/// "1h 30m" style duration, or the raw seconds if it is negative.
fn human_duration(duration: Duration) -> String {
    match duration.to_std() {
        Ok(d) => humantime::format_duration(d).to_string(),
        Err(_) => format!("{}s", duration.num_seconds()),
    }
}

fn format_range(start: chrono::DateTime<chrono::Utc>, end: chrono::DateTime<chrono::Utc>) -> String {
    let end_format = if start.date_naive() == end.date_naive() {
        "%H:%M"
    } else {
        "%Y-%m-%d %H:%M"
    };

    format!(
        "{} → {} UTC",
        start.format("%Y-%m-%d %H:%M"),
        end.format(end_format)
    )
}

impl Render for EventWindow {
    fn render(&self) -> String {
        let range = format_range(self.start, self.end);
        let length = format!("({})", human_duration(self.duration()));
        format!("{} {}", range, length.dimmed())
    }
}

impl Render for ExportedEvent {
    fn render(&self) -> String {
        let mut lines = vec![
            self.summary.bold().to_string(),
            format!(
                "  {} {}",
                format_range(self.start, self.end),
                format!("({})", human_duration(self.duration())).dimmed()
            ),
        ];

        if let Some(location) = &self.location {
            lines.push(format!("  {} {}", "Where:".dimmed(), location));
        }
        if let Some(description) = &self.description {
            lines.push(format!("  {} {}", "Notes:".dimmed(), description));
        }
        lines.push(format!("  {} {}", "UID:  ".dimmed(), self.uid));

        lines.join("\n")
    }
}

/// Decimal pair followed by the DMS form, dimmed.
pub fn render_point(point: &LocationPoint) -> String {
    let (lat, lng) = point.render(CoordinateFormat::Decimal);
    let (lat_dms, lng_dms) = point.render(CoordinateFormat::Dms);
    format!(
        "{}, {} {}",
        lat,
        lng,
        format!("({} {})", lat_dms, lng_dms).dimmed()
    )
}
