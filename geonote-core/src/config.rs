//! GeoNote configuration.

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{
    APP_DOMAIN, DEFAULT_DURATION, DEFAULT_DURATION_SECS, DEFAULT_TITLE, DEFAULT_UID,
    MAX_DURATION_DAYS, PRODUCT_NAME,
};
use crate::coords::CoordinateFormat;
use crate::error::{GeoNoteError, GeoNoteResult};

/// Configuration at ~/.config/geonote/config.toml
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoNoteConfig {
    #[serde(default)]
    pub calendar: CalendarSettings,

    #[serde(default)]
    pub coordinates: CoordinateSettings,
}

/// Settings for calendar export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// Written into PRODID as `-//{product_name}//EN`
    pub product_name: String,
    /// UID domain, `{identifier}@{app_domain}`
    pub app_domain: String,
    /// SUMMARY and link title when the meeting has no title
    pub default_title: String,
    /// UID local part when the meeting has no identifier
    pub default_uid: String,
    /// Event length as a humantime duration ("1h", "90m")
    pub default_duration: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        CalendarSettings {
            product_name: PRODUCT_NAME.to_string(),
            app_domain: APP_DOMAIN.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            default_uid: DEFAULT_UID.to_string(),
            default_duration: DEFAULT_DURATION.to_string(),
        }
    }
}

impl CalendarSettings {
    /// The configured event length.
    pub fn duration(&self) -> GeoNoteResult<Duration> {
        parse_duration(&self.default_duration)
    }

    /// The configured event length, or one hour if it does not parse.
    /// Export never fails because of a bad setting.
    pub fn duration_or_default(&self) -> Duration {
        self.duration().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to the default event duration");
            Duration::seconds(DEFAULT_DURATION_SECS)
        })
    }
}

/// Settings for the coordinate tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinateSettings {
    /// Format coordinates are typed in unless told otherwise
    pub default_format: CoordinateFormat,
}

/// Parse a humantime duration ("30m", "1h 30m") into a positive chrono Duration
/// of at most [`MAX_DURATION_DAYS`].
pub fn parse_duration(input: &str) -> GeoNoteResult<Duration> {
    let invalid = || GeoNoteError::InvalidDuration(input.to_string());

    let std_dur = humantime::parse_duration(input.trim()).map_err(|_| invalid())?;
    let duration = Duration::from_std(std_dur).map_err(|_| invalid())?;

    if duration <= Duration::zero() {
        return Err(invalid());
    }
    if duration > Duration::days(MAX_DURATION_DAYS) {
        return Err(GeoNoteError::DurationTooLong(
            input.to_string(),
            MAX_DURATION_DAYS,
        ));
    }

    Ok(duration)
}

impl GeoNoteConfig {
    pub fn config_path() -> GeoNoteResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GeoNoteError::Config("Could not determine config directory".into()))?
            .join("geonote");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/geonote/config.toml, or defaults if it does not exist.
    pub fn load() -> GeoNoteResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> GeoNoteResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: GeoNoteConfig = toml::from_str(&content)
            .map_err(|e| GeoNoteError::Config(format!("{}: {}", path.display(), e)))?;

        // Surface a bad duration at load time rather than at export time.
        config.calendar.duration()?;

        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GeoNoteResult<()> {
        let contents = format!(
            "\
# GeoNote configuration

[calendar]
# Name written into exported .ics files:
# product_name = \"{}\"

# Domain used for event UIDs:
# app_domain = \"{}\"

# Title for meetings without one:
# default_title = \"{}\"

# UID local part for meetings without an id:
# default_uid = \"{}\"

# Length of exported events:
# default_duration = \"{}\"

[coordinates]
# Format coordinates are typed in (decimal or dms):
# default_format = \"decimal\"
",
            PRODUCT_NAME, APP_DOMAIN, DEFAULT_TITLE, DEFAULT_UID, DEFAULT_DURATION
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GeoNoteError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GeoNoteError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeoNoteConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.calendar, CalendarSettings::default());
        assert_eq!(config.coordinates.default_format, CoordinateFormat::Decimal);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[calendar]\ndefault_duration = \"90m\"\n\n[coordinates]\ndefault_format = \"dms\"\n",
        )
        .unwrap();

        let config = GeoNoteConfig::load_from(&path).unwrap();
        assert_eq!(config.calendar.duration().unwrap(), Duration::minutes(90));
        assert_eq!(config.calendar.product_name, "GeoNote");
        assert_eq!(config.coordinates.default_format, CoordinateFormat::Dms);
    }

    #[test]
    fn bad_duration_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[calendar]\ndefault_duration = \"soon\"\n").unwrap();

        let err = GeoNoteConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, GeoNoteError::InvalidDuration(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[calendar\n").unwrap();

        let err = GeoNoteConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, GeoNoteError::Config(_)));
    }

    #[test]
    fn default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        GeoNoteConfig::create_default_config(&path).unwrap();

        let config = GeoNoteConfig::load_from(&path).unwrap();
        assert_eq!(config.calendar, CalendarSettings::default());
    }

    #[test]
    fn default_config_file_lists_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        GeoNoteConfig::create_default_config(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        for key in [
            "product_name",
            "app_domain",
            "default_title",
            "default_uid",
            "default_duration",
            "default_format",
        ] {
            assert!(contents.contains(&format!("# {} = ", key)), "missing {}", key);
        }
    }

    #[test]
    fn parse_duration_accepts_humantime() {
        assert_eq!(parse_duration("1h").unwrap(), Duration::hours(1));
        assert_eq!(parse_duration("1h 30m").unwrap(), Duration::minutes(90));
    }

    #[test]
    fn parse_duration_rejects_zero_and_garbage() {
        assert!(parse_duration("0s").is_err());
        assert!(parse_duration("later").is_err());
    }

    #[test]
    fn parse_duration_rejects_durations_longer_than_a_year() {
        assert_eq!(parse_duration("366days").unwrap(), Duration::days(366));
        assert!(matches!(
            parse_duration("367days"),
            Err(GeoNoteError::DurationTooLong(_, 366))
        ));
        assert!(parse_duration("9000years").is_err());
        assert!(parse_duration("300000years").is_err());
    }

    #[test]
    fn oversized_duration_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[calendar]\ndefault_duration = \"300000years\"\n").unwrap();

        assert!(matches!(
            GeoNoteConfig::load_from(&path),
            Err(GeoNoteError::DurationTooLong(..))
        ));
    }

    #[test]
    fn bad_duration_setting_falls_back_to_one_hour() {
        let settings = CalendarSettings {
            default_duration: "whenever".to_string(),
            ..CalendarSettings::default()
        };
        assert_eq!(settings.duration_or_default(), Duration::hours(1));
    }
}
