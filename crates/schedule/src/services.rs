//! External collaborators used to place a death instant on the right day.

use chrono::FixedOffset;
use fasli_solar::{ApproximateSunrise, Geocoder, StaticGeocoder, SunriseProvider};

static NO_PLACES: StaticGeocoder = StaticGeocoder::new();
static LOCAL_SUNRISE: ApproximateSunrise = ApproximateSunrise;

/// Geocoder and sunrise provider injected into schedule generation.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    /// Resolves places to coordinates.
    pub geocoder: &'a dyn Geocoder,
    /// Computes or fetches sunrise times.
    pub sunrise: &'a dyn SunriseProvider,
    /// Civil offset assumed for locations that carry none.
    pub default_offset: Option<FixedOffset>,
}

impl<'a> Services<'a> {
    /// Services with no default UTC offset.
    pub fn new(geocoder: &'a dyn Geocoder, sunrise: &'a dyn SunriseProvider) -> Self {
        Self {
            geocoder,
            sunrise,
            default_offset: None,
        }
    }

    /// Sets the offset assumed for locations without one.
    pub fn with_default_offset(mut self, offset: Option<FixedOffset>) -> Self {
        self.default_offset = offset;
        self
    }
}

impl Services<'static> {
    /// No known places and the local sunrise approximation.
    ///
    /// Any place lookup fails with `LocationNotFound`.
    pub fn offline() -> Self {
        Self::new(&NO_PLACES, &LOCAL_SUNRISE)
    }
}

impl std::fmt::Debug for Services<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("default_offset", &self.default_offset)
            .finish_non_exhaustive()
    }
}
