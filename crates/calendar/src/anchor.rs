//! Nowruz anchoring and year-number computation.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Gregorian month of Nowruz.
pub const NOWRUZ_MONTH: u32 = 3;

/// Gregorian day of month of Nowruz. Fixed, not astronomical.
pub const NOWRUZ_DAY: u32 = 21;

/// Gregorian year minus this offset gives the Zoroastrian year that starts
/// at that Gregorian year's Nowruz.
pub const EPOCH_OFFSET: i32 = 621;

/// Returns the Nowruz of a Gregorian year.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if March 21 of `gregorian_year` is
/// not representable.
pub fn nowruz(gregorian_year: i32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(gregorian_year, NOWRUZ_MONTH, NOWRUZ_DAY).ok_or(
        CalendarError::OutOfRange {
            year: gregorian_year,
        },
    )
}

/// The Nowruz that starts a Fasli year, with the year's number and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    nowruz: NaiveDate,
    year: i32,
    year_length: u16,
}

impl Anchor {
    /// Builds the anchor for the year starting at Nowruz of `gregorian_year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if this Nowruz or the next one is
    /// not representable.
    pub fn from_gregorian_year(gregorian_year: i32) -> Result<Self, CalendarError> {
        let start = nowruz(gregorian_year)?;
        let next_year = gregorian_year
            .checked_add(1)
            .ok_or(CalendarError::OutOfRange {
                year: gregorian_year,
            })?;
        let next = nowruz(next_year)?;
        // 365 or 366: March 21 to March 21 spans exactly one February.
        let year_length = next.signed_duration_since(start).num_days() as u16;
        Ok(Self {
            nowruz: start,
            year: gregorian_year - EPOCH_OFFSET,
            year_length,
        })
    }

    /// Builds the anchor for a Zoroastrian year number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] for unrepresentable years.
    pub fn from_year(year: i32) -> Result<Self, CalendarError> {
        let gregorian_year = year
            .checked_add(EPOCH_OFFSET)
            .ok_or(CalendarError::OutOfRange { year })?;
        Self::from_gregorian_year(gregorian_year)
    }

    /// Returns the Nowruz that opens the year.
    pub fn nowruz(self) -> NaiveDate {
        self.nowruz
    }

    /// Returns the Zoroastrian year number.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the number of days until the next Nowruz (365 or 366).
    pub fn year_length(self) -> u16 {
        self.year_length
    }

    /// Whether the year carries the leap extra Gatha day.
    pub fn is_leap(self) -> bool {
        self.year_length == 366
    }

    /// Returns the 0-based offset of `date` from this anchor's Nowruz.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OffsetOutOfRange`] if `date` is not inside
    /// this year.
    pub fn day_offset(self, date: NaiveDate) -> Result<u16, CalendarError> {
        let offset = date.signed_duration_since(self.nowruz).num_days();
        if !(0..i64::from(self.year_length)).contains(&offset) {
            return Err(CalendarError::OffsetOutOfRange {
                offset,
                year_length: self.year_length,
            });
        }
        // Cannot truncate: 0 <= offset < 366.
        Ok(offset as u16)
    }
}

/// Resolves the most recent Nowruz on or before `date`.
///
/// Dates on or after March 21 of year Y anchor on Y (`year = Y - 621`);
/// earlier dates anchor on Y - 1.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] only at the edges of the
/// representable date range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fasli_calendar::resolve_anchor;
///
/// let d = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
/// let anchor = resolve_anchor(d).unwrap();
/// assert_eq!(anchor.year(), 1403);
/// assert_eq!(anchor.nowruz(), NaiveDate::from_ymd_opt(2024, 3, 21).unwrap());
/// ```
pub fn resolve_anchor(date: NaiveDate) -> Result<Anchor, CalendarError> {
    let year = date.year();
    let this_year = nowruz(year)?;
    if date >= this_year {
        Anchor::from_gregorian_year(year)
    } else {
        Anchor::from_gregorian_year(year - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn on_nowruz() {
        let a = resolve_anchor(ymd(2025, 3, 21)).unwrap();
        assert_eq!(a.nowruz(), ymd(2025, 3, 21));
        assert_eq!(a.year(), 1404);
        assert_eq!(a.day_offset(ymd(2025, 3, 21)).unwrap(), 0);
    }

    #[test]
    fn day_before_nowruz() {
        let a = resolve_anchor(ymd(2025, 3, 20)).unwrap();
        assert_eq!(a.nowruz(), ymd(2024, 3, 21));
        assert_eq!(a.year(), 1403);
    }

    #[test]
    fn january_uses_previous_year() {
        let a = resolve_anchor(ymd(2025, 1, 1)).unwrap();
        assert_eq!(a.year(), 1403);
    }

    #[test]
    fn december_uses_current_year() {
        let a = resolve_anchor(ymd(2025, 12, 31)).unwrap();
        assert_eq!(a.year(), 1404);
    }

    #[test]
    fn year_length_follows_next_february() {
        // Nowruz 2023 -> Nowruz 2024 spans Feb 29 2024.
        assert_eq!(Anchor::from_gregorian_year(2023).unwrap().year_length(), 366);
        assert!(Anchor::from_gregorian_year(2023).unwrap().is_leap());
        // Nowruz 2024 -> Nowruz 2025 has no leap day.
        assert_eq!(Anchor::from_gregorian_year(2024).unwrap().year_length(), 365);
        // Century rule: 2100 is not a leap year.
        assert_eq!(Anchor::from_gregorian_year(2099).unwrap().year_length(), 365);
        assert_eq!(Anchor::from_gregorian_year(1999).unwrap().year_length(), 366);
    }

    #[test]
    fn from_year_matches_gregorian() {
        let a = Anchor::from_year(1404).unwrap();
        assert_eq!(a.nowruz(), ymd(2025, 3, 21));
    }

    #[test]
    fn day_offset_outside_year() {
        let a = Anchor::from_gregorian_year(2024).unwrap();
        assert_eq!(
            a.day_offset(ymd(2025, 3, 21)).unwrap_err(),
            CalendarError::OffsetOutOfRange {
                offset: 365,
                year_length: 365,
            }
        );
        assert!(a.day_offset(ymd(2024, 3, 20)).is_err());
    }

    #[test]
    fn negative_year() {
        let a = resolve_anchor(ymd(-1, 6, 1)).unwrap();
        assert_eq!(a.year(), -622);
    }

    #[test]
    fn out_of_range() {
        assert!(nowruz(i32::MAX).is_err());
        assert!(Anchor::from_year(i32::MAX).is_err());
    }
}
