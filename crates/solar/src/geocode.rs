//! Place → coordinates resolution.

use tracing::debug;

use crate::error::GeoError;
use crate::location::{GeoLocation, Place};

/// Resolves a free-text place to coordinates.
pub trait Geocoder: Send + Sync {
    /// Looks up `place`.
    ///
    /// Implementations return [`GeoError::LocationNotFound`] when nothing
    /// matches, including for an empty place.
    fn geocode(&self, place: &Place) -> Result<GeoLocation, GeoError>;
}

impl<T: Geocoder + ?Sized> Geocoder for Box<T> {
    fn geocode(&self, place: &Place) -> Result<GeoLocation, GeoError> {
        (**self).geocode(place)
    }
}

/// Fixed gazetteer of known places.
///
/// Matching is case-insensitive on the city. When both the entry and the
/// query carry a region, the regions must match too.
///
/// # Example
///
/// ```
/// use fasli_solar::{GeoLocation, Geocoder, Place, StaticGeocoder};
///
/// let gazetteer = StaticGeocoder::new()
///     .with_place(Place::parse("Navsari, Gujarat"), GeoLocation::new(20.95, 72.92).unwrap());
///
/// assert!(gazetteer.geocode(&Place::parse("navsari")).is_ok());
/// assert!(gazetteer.geocode(&Place::parse("Navsari, Kerala")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    entries: Vec<(Place, GeoLocation)>,
}

impl StaticGeocoder {
    /// Creates an empty gazetteer.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a place.
    pub fn with_place(mut self, place: Place, location: GeoLocation) -> Self {
        self.entries.push((place, location));
        self
    }

    /// Number of known places.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no places are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn matches(entry: &Place, query: &Place) -> bool {
        if !entry.city().eq_ignore_ascii_case(query.city()) {
            return false;
        }
        match (entry.region(), query.region()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => true,
        }
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, place: &Place) -> Result<GeoLocation, GeoError> {
        if place.is_empty() {
            return Err(GeoError::LocationNotFound {
                query: place.query(),
            });
        }
        let found = self
            .entries
            .iter()
            .find(|(entry, _)| Self::matches(entry, place))
            .map(|(_, location)| *location);
        debug!(place = %place, found = found.is_some(), "static geocoder lookup");
        found.ok_or_else(|| GeoError::LocationNotFound {
            query: place.query(),
        })
    }
}

/// Tries `first`, then `second` when `first` has no match.
///
/// Any other error from `first` is returned as is.
#[derive(Debug, Clone)]
pub struct LayeredGeocoder<A, B> {
    first: A,
    second: B,
}

impl<A, B> LayeredGeocoder<A, B> {
    /// Layers `second` underneath `first`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Geocoder, B: Geocoder> Geocoder for LayeredGeocoder<A, B> {
    fn geocode(&self, place: &Place) -> Result<GeoLocation, GeoError> {
        match self.first.geocode(place) {
            Err(GeoError::LocationNotFound { .. }) => self.second.geocode(place),
            other => other,
        }
    }
}
