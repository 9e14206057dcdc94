//! Read an exported payload back with the icalendar crate's parser.

use chrono::{DateTime, Duration, Utc};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use tracing::debug;

/// The fields of a VEVENT this tool writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedEvent {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ExportedEvent {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Parse ICS content into its first VEVENT.
///
/// TEXT values come back unescaped. Returns `None` when the payload is not a
/// calendar, has no VEVENT, or lacks UID, DTSTART or DTEND. Only UTC start
/// and end times are accepted.
pub fn parse_exported(content: &str) -> Option<ExportedEvent> {
    let unfolded = unfold(content);

    let calendar = match read_calendar(&unfolded) {
        Ok(calendar) => calendar,
        Err(err) => {
            debug!(%err, "payload is not a readable calendar");
            return None;
        }
    };
    let vevent = calendar.components.iter().find(|c| c.name == "VEVENT")?;

    let uid = vevent.find_prop("UID")?.val.to_string();
    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_default();
    let description = non_empty_prop(vevent, "DESCRIPTION");
    let location = non_empty_prop(vevent, "LOCATION");

    let start = utc_prop(vevent, "DTSTART")?;
    let end = utc_prop(vevent, "DTEND")?;

    Some(ExportedEvent {
        uid,
        summary,
        description,
        location,
        start,
        end,
    })
}

/// An empty value (`DESCRIPTION:` for a meeting without notes) reads as `None`.
fn non_empty_prop(component: &Component, name: &str) -> Option<String> {
    component
        .find_prop(name)
        .map(|p| p.val.to_string())
        .filter(|v| !v.is_empty())
}

fn utc_prop(component: &Component, name: &str) -> Option<DateTime<Utc>> {
    match DatePerhapsTime::try_from(component.find_prop(name)?).ok()? {
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => Some(dt),
        other => {
            debug!(name, ?other, "expected a UTC date-time");
            None
        }
    }
}
