//! Calendar export for meetings.
//!
//! A meeting is turned into a Google Calendar link, an Outlook link and an
//! .ics payload. All three are derived from one [`EventWindow`], so they can
//! never disagree about when the meeting happens.

mod export;
pub mod ics;
mod links;
mod window;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::CalendarSettings;

pub use export::{CalendarExport, ICS_MIME_TYPE, export_event, export_event_at, ics_data_uri, ics_filename};
pub use links::{ProviderLinks, build_provider_links, encode_component};
pub use window::{
    EventWindow, StartOrigin, UTC_BASIC_FORMAT, format_utc_basic, parse_start,
    resolve_event_window, resolve_event_window_at,
};

/// A meeting as supplied by the caller. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Used as the event body when there is no description
    pub notes: Option<String>,
    pub location: Option<String>,
    pub start: Option<RawStart>,
    /// Meeting id, used for the UID
    pub identifier: Option<String>,
}

/// Whatever the caller has for a start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawStart {
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    Instant(DateTime<Utc>),
    /// Free text, e.g. "2025-03-01T10:00" from a form field
    Text(String),
}

impl From<&str> for RawStart {
    fn from(text: &str) -> Self {
        RawStart::Text(text.to_string())
    }
}

impl From<String> for RawStart {
    fn from(text: String) -> Self {
        RawStart::Text(text)
    }
}

impl From<DateTime<Utc>> for RawStart {
    fn from(instant: DateTime<Utc>) -> Self {
        RawStart::Instant(instant)
    }
}

impl From<i64> for RawStart {
    fn from(millis: i64) -> Self {
        RawStart::EpochMillis(millis)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>) -> Self {
        CalendarEvent {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_start(mut self, start: impl Into<RawStart>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Title, or the configured placeholder when empty.
    pub fn summary<'a>(&'a self, settings: &'a CalendarSettings) -> &'a str {
        non_empty(&self.title).unwrap_or(&settings.default_title)
    }

    /// Description, falling back to notes, falling back to "".
    pub fn details(&self) -> &str {
        non_empty(&self.description)
            .or_else(|| non_empty(&self.notes))
            .unwrap_or("")
    }

    pub fn location_text(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// `{identifier}@{domain}`, with the configured local part when there is no id.
    pub fn uid(&self, settings: &CalendarSettings) -> String {
        let local = non_empty(&self.identifier).unwrap_or(&settings.default_uid);
        format!("{}@{}", local, settings.app_domain)
    }
}
