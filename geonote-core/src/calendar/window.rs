//! The normalized time window shared by every export artifact.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use super::RawStart;
use crate::constants::DEFAULT_DURATION_SECS;

/// `YYYYMMDDTHHMMSSZ`, used by Google links and DTSTART/DTEND.
pub const UTC_BASIC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Naive forms a form field may hold. They are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%SZ",
];

/// Where the window's start came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartOrigin {
    /// Parsed from the caller's input
    Parsed,
    /// Input missing or invalid, the current time was used
    Fallback,
}

/// Start and end of an exported event, in whole UTC seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub origin: StartOrigin,
}

impl EventWindow {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn used_fallback(&self) -> bool {
        self.origin == StartOrigin::Fallback
    }
}

/// Instants whose year needs more than four digits cannot be written as
/// `YYYYMMDDTHHMMSSZ`.
fn is_formattable(instant: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&instant.year())
}

/// Parse a raw start into an instant, or `None` if it is not usable.
pub fn parse_start(raw: &RawStart) -> Option<DateTime<Utc>> {
    let instant = match raw {
        RawStart::Instant(dt) => Some(*dt),
        RawStart::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms),
        RawStart::Text(text) => parse_start_text(text),
    }?;

    is_formattable(&instant).then_some(instant)
}

fn parse_start_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    // Date only: midnight UTC
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Resolve the event window against the current clock.
pub fn resolve_event_window(raw: Option<&RawStart>, duration: Duration) -> EventWindow {
    resolve_event_window_at(raw, duration, Utc::now())
}

/// Resolve the event window. Never fails: a missing or unusable start is
/// replaced with `now`, and a duration that is not positive, or that would
/// push the end past year 9999, with one hour.
pub fn resolve_event_window_at(
    raw: Option<&RawStart>,
    duration: Duration,
    now: DateTime<Utc>,
) -> EventWindow {
    let duration = if duration > Duration::zero() {
        duration
    } else {
        warn!(?duration, "non-positive event duration, using one hour");
        Duration::seconds(DEFAULT_DURATION_SECS)
    };

    match raw.and_then(parse_start) {
        Some(start) => {
            let start = start.trunc_subsecs(0);
            if let Some(end) = fit_end(start, duration) {
                debug!(%start, "meeting start parsed");
                return EventWindow {
                    start,
                    end,
                    origin: StartOrigin::Parsed,
                };
            }
            warn!(%start, "no room for the event before year 9999, using current time");
        }
        None => warn!(?raw, "meeting start time missing or invalid, using current time"),
    }

    let start = now.trunc_subsecs(0);
    EventWindow {
        start,
        end: fit_end(start, duration).unwrap_or(start),
        origin: StartOrigin::Fallback,
    }
}

/// `start + duration`, or `start` plus one hour when that end cannot be
/// written. `None` if neither fits.
fn fit_end(start: DateTime<Utc>, duration: Duration) -> Option<DateTime<Utc>> {
    let end_after = |d: Duration| start.checked_add_signed(d).filter(is_formattable);

    end_after(duration).or_else(|| {
        warn!(?duration, %start, "event end out of range, using one hour");
        end_after(Duration::seconds(DEFAULT_DURATION_SECS))
    })
}

/// Format an instant as `YYYYMMDDTHHMMSSZ`. An instant that cannot be
/// written that way is replaced with the current time, so the output is
/// always a well-formed timestamp.
pub fn format_utc_basic(instant: DateTime<Utc>) -> String {
    let instant = if is_formattable(&instant) {
        instant
    } else {
        warn!(%instant, "timestamp out of range, using current time");
        Utc::now()
    };

    instant.format(UTC_BASIC_FORMAT).to_string()
}
