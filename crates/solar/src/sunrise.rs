//! Approximate sunrise from latitude, longitude and day of year.
//!
//! The model ignores atmospheric refraction, the equation of time and
//! observer elevation, so results can be several minutes off. That is
//! enough to decide which side of dawn a given instant falls on except in
//! the last few minutes before sunrise.
//!
//! ```text
//! decl     = -23.45 * cos(360/365 * (doy + 10))
//! cos H    = -tan(lat) * tan(decl)
//! noon_utc = 12h - lon / 15
//! sunrise  = noon_utc - H / 15
//! ```

use std::f64::consts::PI;

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::SunriseError;
use crate::location::GeoLocation;

/// Axial tilt used by the declination approximation, in degrees.
const OBLIQUITY_DEG: f64 = 23.45;

/// Days from the December solstice to January 1.
const SOLSTICE_SHIFT: f64 = 10.0;

const DEGREES_PER_HOUR: f64 = 15.0;

/// Outcome of a sunrise query for one local date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sunrise {
    /// Sunrise at the given UTC instant.
    At(NaiveDateTime),
    /// The sun stays below the horizon all day (polar night).
    NeverRises,
    /// The sun stays above the horizon all day (midnight sun).
    NeverSets,
}

impl Sunrise {
    /// The UTC instant, if the sun rises at all.
    pub fn utc(&self) -> Option<NaiveDateTime> {
        match self {
            Sunrise::At(t) => Some(*t),
            Sunrise::NeverRises | Sunrise::NeverSets => None,
        }
    }

    /// Sunrise as local wall-clock time under `offset`.
    pub fn local_time(&self, offset: FixedOffset) -> Option<NaiveDateTime> {
        let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        self.utc().and_then(|t| t.checked_add_signed(shift))
    }
}

/// Solar declination in degrees for a 1-based day of year.
pub fn declination_deg(day_of_year: u32) -> f64 {
    let angle = 2.0 * PI / 365.0 * (f64::from(day_of_year) + SOLSTICE_SHIFT);
    -OBLIQUITY_DEG * angle.cos()
}

/// Computes the approximate sunrise at `location` on the local date `date`.
///
/// # Errors
///
/// Returns [`SunriseError::OutOfRange`] when the resulting instant cannot
/// be represented.
pub fn approximate_sunrise(
    location: &GeoLocation,
    date: NaiveDate,
) -> Result<Sunrise, SunriseError> {
    let decl = declination_deg(date.ordinal()).to_radians();
    let lat = location.latitude_deg().to_radians();
    let cos_h = -lat.tan() * decl.tan();

    if cos_h > 1.0 {
        return Ok(Sunrise::NeverRises);
    }
    if cos_h < -1.0 {
        return Ok(Sunrise::NeverSets);
    }

    let hour_angle_deg = cos_h.acos().to_degrees();
    let noon_utc = 12.0 - location.longitude_deg() / DEGREES_PER_HOUR;
    let sunrise_hours = noon_utc - hour_angle_deg / DEGREES_PER_HOUR;

    let millis = (sunrise_hours * 3_600_000.0).round() as i64;
    let midnight = date.and_time(NaiveTime::MIN);
    let instant = TimeDelta::try_milliseconds(millis)
        .and_then(|delta| midnight.checked_add_signed(delta))
        .ok_or(SunriseError::OutOfRange { date })?;

    tracing::trace!(
        %date,
        latitude = location.latitude_deg(),
        longitude = location.longitude_deg(),
        sunrise_utc = %instant,
        "approximate sunrise"
    );
    Ok(Sunrise::At(instant))
}
