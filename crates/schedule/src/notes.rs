//! Special-case notes attached to a schedule.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use fasli_calendar::{GathaDay, Month, ZoroastrianDate};
use fasli_solar::EffectiveDay;

/// A human-readable remark about an edge condition of the death date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleNote {
    /// Death on a Gatha day: Farvardin has no monthly observance.
    FarvardinRecurrenceSkipped,
    /// Death on a Gatha day: monthly observances start in the second month.
    RecurrenceFromSecondMonth,
    /// Death on a Gatha day: the anniversary is kept on that Gatha day.
    AnnualOnSameGathaDay {
        /// The Gatha day of death.
        gatha: GathaDay,
    },
    /// Death on the leap extra day: the anniversary falls on Vahishtoishti
    /// in years without one.
    LeapDayAnnualOnVahishtoishti,
    /// Death in Spendarmed: Siroza is still exactly 30 days later.
    EsfandSirozaThirtyDays,
    /// Death before local sunrise: counted from the previous day.
    SunriseAdjusted {
        /// Local sunrise the death instant was compared against.
        sunrise: NaiveDateTime,
        /// Calendar date of the death instant.
        nominal: NaiveDate,
        /// Day the schedule is counted from.
        effective: NaiveDate,
    },
}

impl fmt::Display for ScheduleNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleNote::FarvardinRecurrenceSkipped => write!(
                f,
                "Death fell on a Gatha day, so there is no monthly observance in {}.",
                Month::Farvardin.name()
            ),
            ScheduleNote::RecurrenceFromSecondMonth => write!(
                f,
                "Monthly observances begin from {}, the second month of the year.",
                Month::Ardibehesht.name()
            ),
            ScheduleNote::AnnualOnSameGathaDay { gatha } => write!(
                f,
                "The annual memorial is kept on {} (Gatha {}) in the following years.",
                gatha.name(),
                gatha.number()
            ),
            ScheduleNote::LeapDayAnnualOnVahishtoishti => write!(
                f,
                "In years without the leap day the annual memorial falls on {}, the last Gatha day.",
                GathaDay::Vahishtoishti.name()
            ),
            ScheduleNote::EsfandSirozaThirtyDays => write!(
                f,
                "Death fell in {}; Siroza is still observed exactly 30 days later.",
                Month::Spendarmed.name()
            ),
            ScheduleNote::SunriseAdjusted {
                sunrise,
                nominal,
                effective,
            } => write!(
                f,
                "Death occurred before local sunrise ({}), so ceremonies are counted from {effective} instead of {nominal}.",
                sunrise.format("%H:%M")
            ),
        }
    }
}

/// Notes for a death whose effective day resolves to `death`.
pub fn notes_for(
    death: &ZoroastrianDate,
    effective: &EffectiveDay,
    nominal: NaiveDate,
) -> Vec<ScheduleNote> {
    let mut notes = Vec::new();

    if effective.shifted {
        if let Some(sunrise) = effective.sunrise {
            notes.push(ScheduleNote::SunriseAdjusted {
                sunrise,
                nominal,
                effective: effective.date,
            });
        }
    }

    if let Some(gatha) = death.gatha() {
        notes.push(ScheduleNote::FarvardinRecurrenceSkipped);
        notes.push(ScheduleNote::RecurrenceFromSecondMonth);
        if gatha.is_leap() {
            notes.push(ScheduleNote::LeapDayAnnualOnVahishtoishti);
        } else {
            notes.push(ScheduleNote::AnnualOnSameGathaDay { gatha });
        }
    } else if death.is_esfand_month() {
        notes.push(ScheduleNote::EsfandSirozaThirtyDays);
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use fasli_calendar::convert;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn unshifted(date: NaiveDate) -> EffectiveDay {
        EffectiveDay {
            date,
            sunrise: None,
            shifted: false,
        }
    }

    #[test]
    fn regular_day_has_no_notes() {
        let day = ymd(2025, 6, 15);
        let z = convert(day).unwrap();
        assert!(notes_for(&z, &unshifted(day), day).is_empty());
    }

    #[test]
    fn gatha_day_notes() {
        let day = ymd(2025, 3, 17);
        let z = convert(day).unwrap();
        let notes = notes_for(&z, &unshifted(day), day);
        assert_eq!(
            notes,
            vec![
                ScheduleNote::FarvardinRecurrenceSkipped,
                ScheduleNote::RecurrenceFromSecondMonth,
                ScheduleNote::AnnualOnSameGathaDay {
                    gatha: GathaDay::Ushtavaiti
                },
            ]
        );
        assert_eq!(
            notes[2].to_string(),
            "The annual memorial is kept on Ushtavaiti (Gatha 2) in the following years."
        );
    }

    #[test]
    fn leap_day_notes() {
        let day = ymd(2024, 3, 20);
        let z = convert(day).unwrap();
        let notes = notes_for(&z, &unshifted(day), day);
        assert!(notes.contains(&ScheduleNote::FarvardinRecurrenceSkipped));
        assert!(notes.contains(&ScheduleNote::LeapDayAnnualOnVahishtoishti));
        assert!(
            !notes
                .iter()
                .any(|n| matches!(n, ScheduleNote::AnnualOnSameGathaDay { .. }))
        );
    }

    #[test]
    fn esfand_note() {
        let day = ymd(2025, 3, 1);
        let z = convert(day).unwrap();
        let notes = notes_for(&z, &unshifted(day), day);
        assert_eq!(notes, vec![ScheduleNote::EsfandSirozaThirtyDays]);
        assert_eq!(
            notes[0].to_string(),
            "Death fell in Spendarmed; Siroza is still observed exactly 30 days later."
        );
    }

    #[test]
    fn sunrise_note_first() {
        let nominal = ymd(2025, 6, 15);
        let effective = EffectiveDay {
            date: ymd(2025, 6, 14),
            sunrise: Some(nominal.and_hms_opt(6, 0, 0).unwrap()),
            shifted: true,
        };
        let z = convert(effective.date).unwrap();
        let notes = notes_for(&z, &effective, nominal);
        assert_eq!(notes.len(), 1);
        assert_eq!(
            notes[0].to_string(),
            "Death occurred before local sunrise (06:00), so ceremonies are counted from 2025-06-14 instead of 2025-06-15."
        );
    }
}
