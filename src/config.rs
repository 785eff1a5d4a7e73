use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use fasli_net::{NOMINATIM_URL, SUNRISE_SUNSET_URL};
use fasli_schedule::DEFAULT_MONTHS;

/// Top-level fasli configuration. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FasliConfig {
    /// Schedule settings.
    #[serde(default)]
    pub schedule: ScheduleToml,

    /// Defaults applied to resolved locations.
    #[serde(default)]
    pub location: LocationToml,

    /// Geocoding settings and the local gazetteer.
    #[serde(default)]
    pub geocoder: GeocoderToml,

    /// Sunrise source settings.
    #[serde(default)]
    pub sunrise: SunriseToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    #[serde(default = "default_months")]
    pub months: u32,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            months: default_months(),
        }
    }
}

fn default_months() -> u32 {
    DEFAULT_MONTHS
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    /// Civil offset such as `"+05:30"` for places that carry none.
    #[serde(default)]
    pub utc_offset: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeocoderToml {
    /// Query Nominatim for places missing from the gazetteer.
    #[serde(default = "default_true")]
    pub remote: bool,
    #[serde(default = "default_geocoder_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub places: Vec<PlaceToml>,
}

impl Default for GeocoderToml {
    fn default() -> Self {
        Self {
            remote: true,
            url: default_geocoder_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            places: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceToml {
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub utc_offset: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SunriseToml {
    /// `"approximate"` or `"remote"`.
    #[serde(default = "default_sunrise_source")]
    pub source: String,
    #[serde(default = "default_sunrise_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SunriseToml {
    fn default() -> Self {
        Self {
            source: default_sunrise_source(),
            url: default_sunrise_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_geocoder_url() -> String {
    NOMINATIM_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_user_agent() -> String {
    fasli_net::DEFAULT_USER_AGENT.to_string()
}
fn default_sunrise_source() -> String {
    "approximate".to_string()
}
fn default_sunrise_url() -> String {
    SUNRISE_SUNSET_URL.to_string()
}

/// Loads the config at `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<FasliConfig> {
    let Some(path) = path else {
        return Ok(FasliConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_gives_defaults() {
        let config: FasliConfig = toml::from_str("").unwrap();
        assert_eq!(config.schedule.months, 12);
        assert!(config.geocoder.remote);
        assert_eq!(config.geocoder.url, NOMINATIM_URL);
        assert_eq!(config.geocoder.timeout_secs, 10);
        assert!(config.geocoder.places.is_empty());
        assert_eq!(config.sunrise.source, "approximate");
        assert_eq!(config.location.utc_offset, None);
    }

    #[test]
    fn full_document() {
        let config: FasliConfig = toml::from_str(
            r#"
            [schedule]
            months = 6

            [location]
            utc_offset = "+05:30"

            [geocoder]
            remote = false
            timeout_secs = 3
            user_agent = "memorial-planner/2.0"

            [[geocoder.places]]
            city = "Mumbai"
            region = "Maharashtra"
            latitude = 19.076
            longitude = 72.8777
            utc_offset = "+05:30"

            [[geocoder.places]]
            city = "Navsari"
            latitude = 20.95
            longitude = 72.92

            [sunrise]
            source = "remote"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.schedule.months, 6);
        assert_eq!(config.location.utc_offset.as_deref(), Some("+05:30"));
        assert!(!config.geocoder.remote);
        assert_eq!(config.geocoder.places.len(), 2);
        assert_eq!(config.geocoder.places[1].region, None);
        assert_eq!(config.sunrise.source, "remote");
        assert_eq!(config.sunrise.url, SUNRISE_SUNSET_URL);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<FasliConfig, _> = toml::from_str("[schedule]\nweeks = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[schedule]\nmonths = 24").unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.schedule.months, 24);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }

    #[test]
    fn no_path_uses_defaults() {
        let config = load(None).unwrap();
        assert_eq!(config.schedule.months, DEFAULT_MONTHS);
    }
}
