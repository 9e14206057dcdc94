//! One-shot export of a meeting into every calendar artifact.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::ics::build_ics_payload;
use super::{
    CalendarEvent, EventWindow, ProviderLinks, build_provider_links, encode_component,
    resolve_event_window_at,
};
use crate::config::CalendarSettings;
use crate::constants::DEFAULT_FILE_STEM;

pub const ICS_MIME_TYPE: &str = "text/calendar";

/// Links, payload and download data for one meeting, all built from the
/// same window.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarExport {
    pub window: EventWindow,
    pub links: ProviderLinks,
    pub ics: String,
    pub data_uri: String,
    pub filename: String,
}

/// Wrap a payload as a `data:` URI suitable for a download link.
pub fn ics_data_uri(payload: &str) -> String {
    format!("data:{};charset=utf8,{}", ICS_MIME_TYPE, encode_component(payload))
}

/// Download filename: every character outside `[A-Za-z0-9]` becomes `_`.
pub fn ics_filename(title: Option<&str>) -> String {
    let stem = title.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_FILE_STEM);
    let safe: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    format!("{}.ics", safe)
}

pub fn export_event(event: &CalendarEvent, settings: &CalendarSettings) -> CalendarExport {
    export_event_at(event, settings, Utc::now())
}

/// Export against a fixed clock. `now` is both the fallback start and DTSTAMP.
pub fn export_event_at(
    event: &CalendarEvent,
    settings: &CalendarSettings,
    now: DateTime<Utc>,
) -> CalendarExport {
    let window = resolve_event_window_at(event.start.as_ref(), settings.duration_or_default(), now);
    let links = build_provider_links(event, &window, settings);
    let ics = build_ics_payload(event, &window, settings, now);
    let data_uri = ics_data_uri(&ics);
    let filename = ics_filename(event.title.as_deref());

    info!(
        summary = event.summary(settings),
        start = %window.start,
        fallback = window.used_fallback(),
        "meeting exported"
    );

    CalendarExport {
        window,
        links,
        ics,
        data_uri,
        filename,
    }
}
