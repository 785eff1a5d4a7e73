//! Sunrise providers.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::SunriseError;
use crate::location::GeoLocation;
use crate::sunrise::{Sunrise, approximate_sunrise};

/// Source of sunrise times for a location and local date.
pub trait SunriseProvider: Send + Sync {
    /// Returns the sunrise on local date `date` at `location`.
    fn sunrise(&self, location: &GeoLocation, date: NaiveDate) -> Result<Sunrise, SunriseError>;
}

impl<T: SunriseProvider + ?Sized> SunriseProvider for Box<T> {
    fn sunrise(&self, location: &GeoLocation, date: NaiveDate) -> Result<Sunrise, SunriseError> {
        (**self).sunrise(location, date)
    }
}

/// Local astronomical approximation; never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateSunrise;

impl SunriseProvider for ApproximateSunrise {
    fn sunrise(&self, location: &GeoLocation, date: NaiveDate) -> Result<Sunrise, SunriseError> {
        approximate_sunrise(location, date)
    }
}

/// Wraps a primary provider and answers with [`ApproximateSunrise`]
/// whenever the primary fails.
#[derive(Debug, Clone)]
pub struct FallbackSunrise<P> {
    primary: P,
    fallback: ApproximateSunrise,
}

impl<P> FallbackSunrise<P> {
    /// Wraps `primary`.
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            fallback: ApproximateSunrise,
        }
    }

    /// The wrapped provider.
    pub fn primary(&self) -> &P {
        &self.primary
    }
}

impl<P: SunriseProvider> SunriseProvider for FallbackSunrise<P> {
    fn sunrise(&self, location: &GeoLocation, date: NaiveDate) -> Result<Sunrise, SunriseError> {
        match self.primary.sunrise(location, date) {
            Ok(sunrise) => Ok(sunrise),
            Err(e) => {
                warn!(error = %e, %date, "sunrise service failed, using local approximation");
                self.fallback.sunrise(location, date)
            }
        }
    }
}

/// Local wall-clock sunrise at `location` on `date`, or `None` when the sun
/// does not rise or set that day.
///
/// # Errors
///
/// Propagates the provider's [`SunriseError`].
pub fn local_sunrise(
    provider: &dyn SunriseProvider,
    location: &GeoLocation,
    date: NaiveDate,
) -> Result<Option<NaiveDateTime>, SunriseError> {
    let sunrise = provider.sunrise(location, date)?;
    let local = sunrise.local_time(location.utc_offset());
    debug!(%date, ?sunrise, local = ?local, "resolved local sunrise");
    Ok(local)
}
