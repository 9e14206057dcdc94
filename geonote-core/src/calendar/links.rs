//! "Add to calendar" deep links.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use super::{CalendarEvent, EventWindow, format_utc_basic};
use crate::config::CalendarSettings;

/// Everything except what `encodeURIComponent` leaves alone:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const GOOGLE_RENDER_URL: &str = "https://calendar.google.com/calendar/render";
const OUTLOOK_COMPOSE_URL: &str = "https://outlook.live.com/calendar/0/deeplink/compose";

/// Percent-encode a value for use inside a query string.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Links that open a pre-filled "new event" view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderLinks {
    pub google: String,
    pub outlook: String,
}

pub fn build_provider_links(
    event: &CalendarEvent,
    window: &EventWindow,
    settings: &CalendarSettings,
) -> ProviderLinks {
    let title = encode_component(event.summary(settings));
    let details = encode_component(event.details());
    let location = encode_component(event.location_text());
    let start = format_utc_basic(window.start);
    let end = format_utc_basic(window.end);

    ProviderLinks {
        google: format!(
            "{GOOGLE_RENDER_URL}?action=TEMPLATE&text={title}&dates={start}/{end}&details={details}&location={location}"
        ),
        outlook: format!(
            "{OUTLOOK_COMPOSE_URL}?subject={title}&startdt={start}&enddt={end}&body={details}&location={location}"
        ),
    }
}
