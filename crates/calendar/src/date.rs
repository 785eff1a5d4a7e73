//! Fasli date with its Gregorian counterpart.

use chrono::{Days, NaiveDate};

use crate::anchor::{Anchor, resolve_anchor};
use crate::error::CalendarError;
use crate::position::{DayPosition, GathaDay, Month, RozDay};

/// A Gregorian day resolved into the Fasli calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoroastrianDate {
    gregorian: NaiveDate,
    year: i32,
    day_offset: u16,
    position: DayPosition,
}

impl PartialOrd for ZoroastrianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZoroastrianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.gregorian.cmp(&other.gregorian)
    }
}

impl ZoroastrianDate {
    /// Resolves a Gregorian day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] only at the edges of the
    /// representable date range.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let anchor = resolve_anchor(date)?;
        let day_offset = anchor.day_offset(date)?;
        let position = DayPosition::classify(day_offset, anchor.is_leap())?;
        Ok(Self {
            gregorian: date,
            year: anchor.year(),
            day_offset,
            position,
        })
    }

    /// Rebuilds a date from a year number and a position within that year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoLeapDay`] if `position` is the leap extra
    /// day and `year` has 365 days, or [`CalendarError::OutOfRange`] for
    /// unrepresentable years.
    pub fn from_parts(year: i32, position: DayPosition) -> Result<Self, CalendarError> {
        let anchor = Anchor::from_year(year)?;
        if position.is_leap_extra_day() && !anchor.is_leap() {
            return Err(CalendarError::NoLeapDay { year });
        }
        let day_offset = position.day_offset();
        let gregorian = anchor
            .nowruz()
            .checked_add_days(Days::new(u64::from(day_offset)))
            .ok_or(CalendarError::OutOfRange { year })?;
        Ok(Self {
            gregorian,
            year,
            day_offset,
            position,
        })
    }

    /// Creates a date from a year, month number (1..=12) and day (1..=30).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::InvalidDayOfMonth`] for out-of-range parts.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let month = Month::from_number(month)?;
        let day = RozDay::new(day)?;
        Self::from_parts(year, DayPosition::Regular { month, day })
    }

    /// Returns the Gregorian day this date corresponds to.
    pub fn gregorian(self) -> NaiveDate {
        self.gregorian
    }

    /// Returns the Zoroastrian year number.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based offset from the year's Nowruz.
    pub fn day_offset(self) -> u16 {
        self.day_offset
    }

    /// Returns the position within the year.
    pub fn position(self) -> DayPosition {
        self.position
    }

    /// Regular month, or `None` during the Gatha period.
    pub fn month(self) -> Option<Month> {
        self.position.month()
    }

    /// Gatha day, or `None` outside the Gatha period.
    pub fn gatha(self) -> Option<GathaDay> {
        self.position.gatha()
    }

    /// Month name, or `Gatha Days` during the intercalary period.
    pub fn month_name(self) -> &'static str {
        self.position.month_name()
    }

    /// Day of month: 1..=30, or 31..=36 during the Gatha period.
    pub fn day_of_month(self) -> u8 {
        self.position.day_of_month()
    }

    /// Roz name, or Gatha name during the intercalary period.
    pub fn day_name(self) -> &'static str {
        self.position.day_name()
    }

    /// True during the Gatha period.
    pub fn is_gatha_day(self) -> bool {
        self.position.is_gatha_day()
    }

    /// True on the leap extra day.
    pub fn is_leap_extra_day(self) -> bool {
        self.position.is_leap_extra_day()
    }

    /// True in Spendarmed.
    pub fn is_esfand_month(self) -> bool {
        self.position.is_esfand_month()
    }

    /// Returns the following day, crossing into the next year after the
    /// last Gatha day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] at the end of the
    /// representable date range.
    pub fn next(self) -> Result<Self, CalendarError> {
        let tomorrow = self
            .gregorian
            .succ_opt()
            .ok_or(CalendarError::OutOfRange { year: self.year })?;
        Self::from_gregorian(tomorrow)
    }
}

/// Converts a Gregorian day into the Fasli calendar.
///
/// Shorthand for [`ZoroastrianDate::from_gregorian`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fasli_calendar::convert;
///
/// let z = convert(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap();
/// assert_eq!(z.year(), 1404);
/// assert_eq!(z.month_name(), "Khordad");
/// assert_eq!(z.day_of_month(), 27);
/// ```
pub fn convert(date: NaiveDate) -> Result<ZoroastrianDate, CalendarError> {
    ZoroastrianDate::from_gregorian(date)
}
