//! Schedule generation and instant conversion.

use chrono::{Days, Months, NaiveDate, NaiveDateTime};
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use fasli_calendar::{Month, ZoroastrianDate, convert};
use fasli_solar::{EffectiveDay, Place, effective_day, local_sunrise};

use crate::ceremony::Ceremony;
use crate::error::ScheduleError;
use crate::event::{CeremonyEvent, Schedule};
use crate::notes::notes_for;
use crate::services::Services;

/// Monthly recurrences generated when the caller does not say otherwise.
pub const DEFAULT_MONTHS: u32 = 12;

/// Upper bound on monthly recurrences, one thousand years.
pub const MAX_MONTHS: u32 = 12_000;

/// Resolves the effective day of a local instant, geocoding `place` and
/// comparing against its sunrise when one is given.
///
/// # Errors
///
/// - [`ScheduleError::LocationNotFound`] when the place has no match.
/// - [`ScheduleError::Geocoding`] / [`ScheduleError::TimeServiceUnavailable`]
///   when a collaborator fails.
pub fn resolve_effective_day(
    instant: NaiveDateTime,
    place: Option<&Place>,
    services: &Services<'_>,
) -> Result<EffectiveDay, ScheduleError> {
    let Some(place) = place else {
        return Ok(effective_day(instant, None));
    };
    let location = services
        .geocoder
        .geocode(place)?
        .or_utc_offset(services.default_offset);
    let sunrise = local_sunrise(services.sunrise, &location, instant.date())?;
    let effective = effective_day(instant, sunrise);
    debug!(
        place = %place,
        latitude = location.latitude_deg(),
        longitude = location.longitude_deg(),
        sunrise = ?sunrise,
        shifted = effective.shifted,
        "sunrise boundary"
    );
    Ok(effective)
}

/// Converts a local instant to its Fasli date, honouring the dawn day
/// boundary when a place is supplied.
///
/// # Errors
///
/// See [`resolve_effective_day`]. Calendar failures surface as
/// [`ScheduleError::Calendar`].
pub fn convert_to_zoroastrian_date(
    instant: NaiveDateTime,
    place: Option<&Place>,
    services: &Services<'_>,
) -> Result<ZoroastrianDate, ScheduleError> {
    let effective = resolve_effective_day(instant, place, services)?;
    Ok(convert(effective.date)?)
}

/// Generates the memorial schedule for a death at local time `death`.
///
/// Resolves the sunrise boundary through `services` when `place` is given,
/// then delegates to [`schedule_from_sunrise`]. A failed lookup produces no
/// partial schedule.
///
/// # Errors
///
/// - [`ScheduleError::LocationNotFound`] when the place has no match.
/// - [`ScheduleError::InvalidMonths`] when `months` exceeds [`MAX_MONTHS`].
/// - [`ScheduleError::DateOutOfRange`] when a ceremony date overflows.
pub fn generate_schedule(
    death: NaiveDateTime,
    place: Option<&Place>,
    months: u32,
    services: &Services<'_>,
) -> Result<Schedule, ScheduleError> {
    let _span = info_span!("generate_schedule", %death, months).entered();
    let effective = resolve_effective_day(death, place, services)?;
    build(death, effective, months)
}

/// Generates the memorial schedule from an already resolved local sunrise.
///
/// Performs no I/O. With `local_sunrise = None` the death date is used as
/// is. After a death on a Gatha day, monthly recurrences that land in the
/// following Farvardin are left out.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fasli_schedule::{Ceremony, schedule_from_sunrise};
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let schedule = schedule_from_sunrise(
///     day.and_hms_opt(2, 0, 0).unwrap(),
///     day.and_hms_opt(6, 0, 0),
///     12,
/// )
/// .unwrap();
///
/// let sachkar = schedule.event(Ceremony::Sachkar).unwrap();
/// assert_eq!(sachkar.gregorian(), NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidMonths`] when `months` exceeds
/// [`MAX_MONTHS`] and [`ScheduleError::DateOutOfRange`] when a ceremony
/// date overflows.
pub fn schedule_from_sunrise(
    death: NaiveDateTime,
    local_sunrise: Option<NaiveDateTime>,
    months: u32,
) -> Result<Schedule, ScheduleError> {
    build(death, effective_day(death, local_sunrise), months)
}

fn plan(start: NaiveDate, months: u32) -> Result<Vec<(Ceremony, NaiveDate)>, ScheduleError> {
    if months > MAX_MONTHS {
        return Err(ScheduleError::InvalidMonths {
            months,
            max: MAX_MONTHS,
        });
    }
    let out_of_range = || ScheduleError::DateOutOfRange { from: start };

    let mut plan = Vec::with_capacity(Ceremony::FIXED.len() + months as usize);
    for ceremony in Ceremony::FIXED {
        let day = ceremony.fixed_day().unwrap_or(1);
        let date = start
            .checked_add_days(Days::new(u64::from(day - 1)))
            .ok_or_else(out_of_range)?;
        plan.push((ceremony, date));
    }
    for i in 1..=months {
        let date = start
            .checked_add_months(Months::new(i))
            .ok_or_else(out_of_range)?;
        plan.push((Ceremony::Masiso(i), date));
    }
    Ok(plan)
}

/// A Gatha-day death has no monthly observance in the Farvardin after it.
fn skips_farvardin(death: &ZoroastrianDate, event: &CeremonyEvent) -> bool {
    let date = event.zoroastrian();
    death.is_gatha_day()
        && event.ceremony().is_monthly()
        && date.month() == Some(Month::Farvardin)
        && date.year() == death.year() + 1
}

fn build(
    death: NaiveDateTime,
    effective: EffectiveDay,
    months: u32,
) -> Result<Schedule, ScheduleError> {
    let death_date = convert(effective.date)?;
    let plan = plan(effective.date, months)?;

    let mut events = plan
        .into_par_iter()
        .map(|(ceremony, date)| -> Result<CeremonyEvent, ScheduleError> {
            Ok(CeremonyEvent::new(ceremony, convert(date)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let planned = events.len();
    events.retain(|e| !skips_farvardin(&death_date, e));
    if events.len() < planned {
        debug!(skipped = planned - events.len(), "monthly observances skipped in Farvardin");
    }
    events.sort_by_key(CeremonyEvent::gregorian);

    let notes = notes_for(&death_date, &effective, death.date());
    info!(
        effective_day = %effective.date,
        death_date = %death_date,
        n_events = events.len(),
        n_notes = notes.len(),
        "schedule generated"
    );

    Ok(Schedule {
        death,
        effective,
        death_date,
        events,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixed_offsets_from_day_one() {
        let start = ymd(2025, 6, 15);
        let plan = plan(start, 0).unwrap();
        let offsets: Vec<i64> = plan
            .iter()
            .map(|(_, d)| d.signed_duration_since(start).num_days())
            .collect();
        assert_eq!(offsets, vec![0, 2, 3, 9, 29, 364]);
    }

    #[test]
    fn monthly_uses_calendar_months() {
        let plan = plan(ymd(2025, 1, 31), 3).unwrap();
        let monthly: Vec<NaiveDate> = plan
            .iter()
            .filter(|(c, _)| c.is_monthly())
            .map(|(_, d)| *d)
            .collect();
        assert_eq!(
            monthly,
            vec![ymd(2025, 2, 28), ymd(2025, 3, 31), ymd(2025, 4, 30)]
        );
    }

    #[test]
    fn overflow_is_reported() {
        let err = plan(NaiveDate::MAX, 1).unwrap_err();
        assert!(matches!(err, ScheduleError::DateOutOfRange { .. }));
    }

    #[test]
    fn month_count_is_bounded() {
        let err = plan(ymd(2025, 6, 15), MAX_MONTHS + 1).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidMonths {
                months: MAX_MONTHS + 1,
                max: MAX_MONTHS
            }
        );
        assert_eq!(plan(ymd(2025, 6, 15), MAX_MONTHS).unwrap().len(), 6 + 12_000);
    }

    #[test]
    fn events_sorted_with_fixed_first_on_ties() {
        // From Feb 1 the first Masiso (Mar 1) precedes Siroza (Mar 2).
        let death = ymd(2025, 2, 1).and_hms_opt(12, 0, 0).unwrap();
        let schedule = schedule_from_sunrise(death, None, 12).unwrap();
        let dates: Vec<NaiveDate> = schedule.events().iter().map(|e| e.gregorian()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);

        let masiso = schedule.event(Ceremony::Masiso(1)).unwrap();
        let siroza = schedule.event(Ceremony::Siroza).unwrap();
        assert!(masiso.gregorian() < siroza.gregorian());
    }

    #[test]
    fn offline_services_reject_places() {
        let services = Services::offline();
        let instant = ymd(2025, 6, 15).and_hms_opt(10, 0, 0).unwrap();
        let err = generate_schedule(instant, Some(&Place::parse("Mumbai")), 12, &services)
            .unwrap_err();
        assert!(err.is_user_error());
    }
}
