//! Ceremony events and the assembled schedule.

use chrono::{NaiveDate, NaiveDateTime};
use fasli_calendar::ZoroastrianDate;
use fasli_solar::EffectiveDay;

use crate::ceremony::Ceremony;
use crate::notes::ScheduleNote;

/// A ceremony paired with the day it is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CeremonyEvent {
    ceremony: Ceremony,
    date: ZoroastrianDate,
}

impl CeremonyEvent {
    pub(crate) fn new(ceremony: Ceremony, date: ZoroastrianDate) -> Self {
        Self { ceremony, date }
    }

    /// Which ceremony.
    pub fn ceremony(&self) -> Ceremony {
        self.ceremony
    }

    /// Gregorian date of observance.
    pub fn gregorian(&self) -> NaiveDate {
        self.date.gregorian()
    }

    /// Resolved Fasli date of observance.
    pub fn zoroastrian(&self) -> ZoroastrianDate {
        self.date
    }
}

/// Memorial schedule for one death.
///
/// Events are in chronological order. On equal dates fixed ceremonies come
/// before monthly ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub(crate) death: NaiveDateTime,
    pub(crate) effective: EffectiveDay,
    pub(crate) death_date: ZoroastrianDate,
    pub(crate) events: Vec<CeremonyEvent>,
    pub(crate) notes: Vec<ScheduleNote>,
}

impl Schedule {
    /// The death instant as supplied, in local wall-clock time.
    pub fn death(&self) -> NaiveDateTime {
        self.death
    }

    /// Effective death day after the sunrise boundary.
    pub fn effective_day(&self) -> EffectiveDay {
        self.effective
    }

    /// Fasli date of the effective death day.
    pub fn death_date(&self) -> ZoroastrianDate {
        self.death_date
    }

    /// All ceremonies, sorted by Gregorian date.
    pub fn events(&self) -> &[CeremonyEvent] {
        &self.events
    }

    /// Remarks on edge conditions of the death date.
    pub fn notes(&self) -> &[ScheduleNote] {
        &self.notes
    }

    /// Looks up the event for `ceremony`.
    pub fn event(&self, ceremony: Ceremony) -> Option<&CeremonyEvent> {
        self.events.iter().find(|e| e.ceremony == ceremony)
    }

    /// Monthly recurrences only, in order.
    pub fn monthly(&self) -> impl Iterator<Item = &CeremonyEvent> {
        self.events.iter().filter(|e| e.ceremony.is_monthly())
    }
}
