//! sunrise-sunset.org JSON API client.

use chrono::{DateTime, Datelike, NaiveDate};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info_span};

use fasli_solar::{GeoLocation, Sunrise, SunriseError, SunriseProvider};

use crate::config::ClientConfig;
use crate::error::NetError;

/// Public sunrise-sunset.org endpoint.
pub const SUNRISE_SUNSET_URL: &str = "https://api.sunrise-sunset.org/json";

/// The API reports days without a sunrise as the Unix epoch.
const NO_EVENT_YEAR: i32 = 1970;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    results: Option<ApiResults>,
}

#[derive(Debug, Deserialize)]
struct ApiResults {
    sunrise: String,
    #[serde(default)]
    day_length: i64,
}

/// Sunrise provider backed by the sunrise-sunset.org API.
///
/// Requests use `formatted=0`, so times come back as UTC RFC 3339.
#[derive(Debug, Clone)]
pub struct SunriseSunsetClient {
    client: Client,
    url: String,
}

impl SunriseSunsetClient {
    /// Creates a client for `url` (normally [`SUNRISE_SUNSET_URL`]).
    ///
    /// # Errors
    ///
    /// Returns [`NetError::Request`] when the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, config: &ClientConfig) -> Result<Self, NetError> {
        Ok(Self {
            client: config.build_client()?,
            url: url.into(),
        })
    }

    /// Endpoint this client queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch(&self, location: &GeoLocation, date: NaiveDate) -> Result<String, NetError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("lat", location.latitude_deg().to_string()),
                ("lng", location.longitude_deg().to_string()),
                ("date", date.format("%Y-%m-%d").to_string()),
                ("formatted", "0".to_string()),
            ])
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

impl SunriseProvider for SunriseSunsetClient {
    fn sunrise(&self, location: &GeoLocation, date: NaiveDate) -> Result<Sunrise, SunriseError> {
        let _span = info_span!("sunrise_sunset", %date).entered();
        let body = self.fetch(location, date)?;
        parse_sunrise_response(&body)
    }
}

/// Decodes a `formatted=0` response body.
///
/// # Errors
///
/// Returns [`SunriseError::TimeServiceUnavailable`] when the status field
/// is not `OK` or the body cannot be decoded.
pub fn parse_sunrise_response(body: &str) -> Result<Sunrise, SunriseError> {
    let response: ApiResponse = serde_json::from_str(body).map_err(NetError::from)?;
    if response.status != "OK" {
        return Err(SunriseError::TimeServiceUnavailable {
            reason: format!("service status {}", response.status),
        });
    }
    let results = response
        .results
        .ok_or_else(|| SunriseError::TimeServiceUnavailable {
            reason: "missing results".to_string(),
        })?;

    let instant = DateTime::parse_from_rfc3339(&results.sunrise).map_err(|e| {
        SunriseError::TimeServiceUnavailable {
            reason: format!("sunrise '{}': {e}", results.sunrise),
        }
    })?;
    let utc = instant.naive_utc();

    let sunrise = if utc.year() == NO_EVENT_YEAR {
        if results.day_length == 0 {
            Sunrise::NeverRises
        } else {
            Sunrise::NeverSets
        }
    } else {
        Sunrise::At(utc)
    };
    debug!(?sunrise, "sunrise from service");
    Ok(sunrise)
}
