//! OpenStreetMap Nominatim search client.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info_span};

use fasli_solar::{GeoError, GeoLocation, Geocoder, Place};

use crate::config::ClientConfig;
use crate::error::NetError;

/// Public Nominatim search endpoint.
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// One hit of a `format=json` search.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Geocoder backed by the Nominatim search API.
///
/// Sends one request per lookup and takes the best-ranked hit.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    url: String,
}

impl NominatimGeocoder {
    /// Creates a client for `url` (normally [`NOMINATIM_URL`]).
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

    fn search(&self, query: &str) -> Result<String, NetError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
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

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, place: &Place) -> Result<GeoLocation, GeoError> {
        let query = place.query();
        let _span = info_span!("nominatim", query = %query).entered();
        if place.is_empty() {
            return Err(GeoError::LocationNotFound { query });
        }
        let body = self.search(&query)?;
        parse_search_response(&body, &query)
    }
}

/// Decodes a Nominatim `format=json` body into the first hit's coordinates.
///
/// # Errors
///
/// - [`GeoError::LocationNotFound`] for an empty result list.
/// - [`GeoError::ServiceUnavailable`] for malformed JSON or coordinates.
pub fn parse_search_response(body: &str, query: &str) -> Result<GeoLocation, GeoError> {
    let hits: Vec<SearchHit> = serde_json::from_str(body).map_err(NetError::from)?;
    let Some(hit) = hits.into_iter().next() else {
        debug!(query, "no search results");
        return Err(GeoError::LocationNotFound {
            query: query.to_string(),
        });
    };

    let parse = |field: &str, value: &str| {
        value.trim().parse::<f64>().map_err(|e| NetError::Decode {
            reason: format!("{field} '{value}': {e}"),
        })
    };
    let latitude = parse("lat", &hit.lat)?;
    let longitude = parse("lon", &hit.lon)?;
    debug!(
        query,
        latitude,
        longitude,
        name = hit.display_name.as_deref().unwrap_or(""),
        "geocoded"
    );
    GeoLocation::new(latitude, longitude)
}
