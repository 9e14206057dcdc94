//! Defaults shared by the library and the CLI.

/// Product name written into PRODID.
pub const PRODUCT_NAME: &str = "GeoNote";

/// Domain appended to every exported UID.
pub const APP_DOMAIN: &str = "geonote.app";

/// Title used when a meeting has none.
pub const DEFAULT_TITLE: &str = "Meeting";

/// UID local part used when a meeting has no identifier.
pub const DEFAULT_UID: &str = "meeting";

/// Length of an exported event.
pub const DEFAULT_DURATION: &str = "1h";

pub const DEFAULT_DURATION_SECS: i64 = 3600;

/// Longest accepted event, in days.
pub const MAX_DURATION_DAYS: i64 = 366;

/// Map centre used when a project has no location points (Tashkent).
pub const DEFAULT_MAP_CENTER: (f64, f64) = (41.291111, 69.240556);

/// File stem for exported .ics files when a meeting has no title.
pub const DEFAULT_FILE_STEM: &str = "meeting";
