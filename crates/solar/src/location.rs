//! Places as typed by a user and the coordinates they resolve to.

use std::fmt;

use chrono::{FixedOffset, Offset, Utc};

use crate::error::GeoError;

/// Seconds of clock offset per degree of longitude under mean solar time.
const SECONDS_PER_DEGREE: f64 = 240.0;

/// A point on the Earth's surface with an optional civil UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    longitude_deg: f64,
    /// Civil offset from UTC, when known.
    utc_offset: Option<FixedOffset>,
}

impl GeoLocation {
    /// Creates a location, validating coordinate ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidCoordinates`] for non-finite or
    /// out-of-range values.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, GeoError> {
        let valid = latitude_deg.is_finite()
            && longitude_deg.is_finite()
            && (-90.0..=90.0).contains(&latitude_deg)
            && (-180.0..=180.0).contains(&longitude_deg);
        if !valid {
            return Err(GeoError::InvalidCoordinates {
                latitude: latitude_deg,
                longitude: longitude_deg,
            });
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            utc_offset: None,
        })
    }

    /// Attaches a civil UTC offset.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Attaches a civil UTC offset unless one is already set.
    pub fn or_utc_offset(mut self, offset: Option<FixedOffset>) -> Self {
        if self.utc_offset.is_none() {
            self.utc_offset = offset;
        }
        self
    }

    /// Latitude in degrees.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// The configured civil offset, if any.
    pub fn configured_offset(&self) -> Option<FixedOffset> {
        self.utc_offset
    }

    /// Offset used to turn UTC instants into local wall-clock time.
    ///
    /// Falls back to local mean solar time (`longitude / 15` hours) when no
    /// civil offset is configured.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset.unwrap_or_else(|| {
            let seconds = (self.longitude_deg * SECONDS_PER_DEGREE).round() as i32;
            FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
        })
    }
}

/// Parses a `+HH:MM` / `-HH:MM` offset string.
///
/// # Errors
///
/// Returns [`GeoError::InvalidUtcOffset`] when the string is not an offset.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, GeoError> {
    value
        .trim()
        .parse::<FixedOffset>()
        .map_err(|_| GeoError::InvalidUtcOffset {
            value: value.to_string(),
        })
}

/// A free-text place such as `"Mumbai, Maharashtra"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Place {
    city: String,
    region: Option<String>,
}

impl Place {
    /// Creates a place from its parts. Both are trimmed; an empty region is
    /// dropped.
    pub fn new(city: impl Into<String>, region: Option<String>) -> Self {
        let city = city.into().trim().to_string();
        let region = region
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        Self { city, region }
    }

    /// Splits `"City, Region"` on the first comma.
    ///
    /// ```
    /// use fasli_solar::Place;
    ///
    /// let p = Place::parse("Mumbai, Maharashtra, India");
    /// assert_eq!(p.city(), "Mumbai");
    /// assert_eq!(p.region(), Some("Maharashtra, India"));
    /// ```
    pub fn parse(text: &str) -> Self {
        match text.split_once(',') {
            Some((city, region)) => Self::new(city, Some(region.to_string())),
            None => Self::new(text, None),
        }
    }

    /// City part.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Region part, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// True when there is nothing to look up.
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.region.is_none()
    }

    /// Free-text query suitable for a search API.
    pub fn query(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) if self.city.is_empty() => write!(f, "{region}"),
            Some(region) => write!(f, "{}, {region}", self.city),
            None => write!(f, "{}", self.city),
        }
    }
}
