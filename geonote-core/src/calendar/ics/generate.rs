//! ICS payload generation.
//!
//! Each content line goes through [`icalendar::Property`], which escapes TEXT
//! values and folds at 75 octets. Lines are written one by one so the
//! property order stays fixed.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use icalendar::Property;

use crate::calendar::{CalendarEvent, EventWindow, format_utc_basic};
use crate::config::CalendarSettings;

/// Build a VCALENDAR with one VEVENT for the meeting.
///
/// `dtstamp` is the moment of generation. UID, DTSTAMP, DTSTART, DTEND and
/// SUMMARY are always present.
pub fn build_ics_payload(
    event: &CalendarEvent,
    window: &EventWindow,
    settings: &CalendarSettings,
    dtstamp: DateTime<Utc>,
) -> String {
    let properties = [
        Property::new("BEGIN", "VCALENDAR"),
        Property::new("VERSION", "2.0"),
        Property::new("PRODID", format!("-//{}//EN", settings.product_name)),
        Property::new("BEGIN", "VEVENT"),
        text_property("UID", &event.uid(settings)),
        Property::new("DTSTAMP", format_utc_basic(dtstamp)),
        Property::new("DTSTART", format_utc_basic(window.start)),
        Property::new("DTEND", format_utc_basic(window.end)),
        text_property("SUMMARY", event.summary(settings)),
        text_property("DESCRIPTION", event.details()),
        text_property("LOCATION", event.location_text()),
        Property::new("END", "VEVENT"),
        Property::new("END", "VCALENDAR"),
    ];

    properties
        .into_iter()
        .map(|property| {
            let line: Result<String, _> = property.try_into();
            // Writing into a String cannot fail.
            line.unwrap_or_default()
        })
        .collect()
}

fn text_property(key: &str, value: &str) -> Property {
    Property::new(key, normalize_line_breaks(value))
}

/// Turn CRLF and a lone CR into LF. The TEXT escaper only knows LF.
pub fn normalize_line_breaks(value: &str) -> Cow<'_, str> {
    if !value.contains('\r') {
        return Cow::Borrowed(value);
    }

    Cow::Owned(value.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{RawStart, resolve_event_window_at};
    use chrono::{Duration, NaiveDateTime, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 15, 0).unwrap()
    }

    fn payload_for(event: &CalendarEvent) -> String {
        let window = resolve_event_window_at(event.start.as_ref(), Duration::hours(1), now());
        build_ics_payload(event, &window, &CalendarSettings::default(), now())
    }

    fn kickoff() -> CalendarEvent {
        CalendarEvent::new("Kickoff")
            .with_location("Tashkent")
            .with_start(RawStart::from("2025-03-01T10:00:00Z"))
    }

    fn field<'a>(ics: &'a str, name: &str) -> &'a str {
        let prefix = format!("{}:", name);
        ics.lines()
            .find_map(|l| l.strip_prefix(prefix.as_str()))
            .unwrap_or_else(|| panic!("Missing {} in:\n{}", name, ics))
    }

    fn parse_basic(value: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%SZ")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn kickoff_payload_is_exact() {
        let ics = payload_for(&kickoff());
        let expected = "BEGIN:VCALENDAR\r\n\
                        VERSION:2.0\r\n\
                        PRODID:-//GeoNote//EN\r\n\
                        BEGIN:VEVENT\r\n\
                        UID:meeting@geonote.app\r\n\
                        DTSTAMP:20261018T091500Z\r\n\
                        DTSTART:20250301T100000Z\r\n\
                        DTEND:20250301T110000Z\r\n\
                        SUMMARY:Kickoff\r\n\
                        DESCRIPTION:\r\n\
                        LOCATION:Tashkent\r\n\
                        END:VEVENT\r\n\
                        END:VCALENDAR\r\n";
        assert_eq!(ics, expected);
    }

    #[test]
    fn dtend_minus_dtstart_is_one_hour() {
        let ics = payload_for(&kickoff());
        let start = parse_basic(field(&ics, "DTSTART"));
        let end = parse_basic(field(&ics, "DTEND"));
        assert_eq!((end - start).num_seconds(), 3600);
    }

    #[test]
    fn fallback_payload_has_all_required_fields() {
        let mut event = CalendarEvent::default();
        event.start = Some(RawStart::from("31/02/2025 25:00"));
        let ics = payload_for(&event);

        assert_eq!(field(&ics, "UID"), "meeting@geonote.app");
        assert_eq!(field(&ics, "SUMMARY"), "Meeting");
        assert_eq!(field(&ics, "DTSTART"), "20261018T091500Z");
        assert_eq!(field(&ics, "DTEND"), "20261018T101500Z");
        assert!(!field(&ics, "DTSTAMP").is_empty());
    }

    #[test]
    fn identifier_goes_into_uid() {
        let mut event = kickoff();
        event.identifier = Some("abc123".to_string());
        assert_eq!(field(&payload_for(&event), "UID"), "abc123@geonote.app");
    }

    #[test]
    fn text_fields_are_escaped() {
        let mut event = kickoff();
        event.title = Some("Kickoff; phase 1, north".to_string());
        event.description = Some("Line one\nLine two\\three".to_string());

        let ics = payload_for(&event);
        assert_eq!(field(&ics, "SUMMARY"), "Kickoff\\; phase 1\\, north");
        assert_eq!(field(&ics, "DESCRIPTION"), "Line one\\nLine two\\\\three");
    }

    #[test]
    fn line_breaks_are_normalized_before_escaping() {
        assert_eq!(normalize_line_breaks("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert!(matches!(normalize_line_breaks("plain"), Cow::Borrowed("plain")));

        let mut event = kickoff();
        event.description = Some("one\r\ntwo\rthree".to_string());
        assert_eq!(field(&payload_for(&event), "DESCRIPTION"), "one\\ntwo\\nthree");
    }

    #[test]
    fn long_lines_are_folded() {
        let mut event = kickoff();
        event.description = Some("Стратиграфия ".repeat(12));

        let ics = payload_for(&event);
        for line in ics.split("\r\n") {
            assert!(line.len() <= 75, "Line too long ({}): {}", line.len(), line);
        }

        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("DESCRIPTION:{}", "Стратиграфия ".repeat(12))));
    }

    #[test]
    fn every_line_ends_with_crlf() {
        let ics = payload_for(&kickoff());
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert_eq!(ics.matches('\n').count(), ics.matches("\r\n").count());
    }

    #[test]
    fn custom_product_and_domain() {
        let settings = CalendarSettings {
            product_name: "FieldOps".to_string(),
            app_domain: "example.org".to_string(),
            ..CalendarSettings::default()
        };
        let event = kickoff();
        let window = resolve_event_window_at(event.start.as_ref(), Duration::hours(1), now());
        let ics = build_ics_payload(&event, &window, &settings, now());

        assert_eq!(field(&ics, "PRODID"), "-//FieldOps//EN");
        assert_eq!(field(&ics, "UID"), "meeting@example.org");
    }
}
