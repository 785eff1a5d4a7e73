//! Month, roz and Gatha positions within a Fasli year.

use crate::error::CalendarError;
use crate::names::{DAY_NAMES, GATHA_NAMES, GATHA_PERIOD_NAME, LEAP_DAY_NAME, MONTH_NAMES};

/// Number of days in each regular month.
pub const DAYS_PER_MONTH: u16 = 30;

/// Number of regular (non-Gatha) days in a year: 12 months of 30 days.
pub const REGULAR_DAYS: u16 = 12 * DAYS_PER_MONTH;

/// Number of Gatha days in a 365-day year.
pub const GATHA_DAYS: u16 = 5;

/// One of the twelve regular months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Farvardin,
    Ardibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    /// The last regular month (Esfand in the Shamsi calendar).
    Spendarmed,
}

impl Month {
    /// All months in year order.
    pub const ALL: [Month; 12] = [
        Month::Farvardin,
        Month::Ardibehesht,
        Month::Khordad,
        Month::Tir,
        Month::Mordad,
        Month::Shahrivar,
        Month::Mehr,
        Month::Aban,
        Month::Azar,
        Month::Dey,
        Month::Bahman,
        Month::Spendarmed,
    ];

    /// Creates a month from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `number` is not in 1..=12.
    pub fn from_number(number: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&number) {
            return Err(CalendarError::InvalidMonth { month: number });
        }
        Ok(Self::ALL[usize::from(number - 1)])
    }

    /// Returns the 1-based month number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the month's name.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }

    /// Whether this is the last regular month of the year.
    pub fn is_esfand(self) -> bool {
        self == Month::Spendarmed
    }
}

/// Day within a regular month (1..=30), which also selects its roz name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RozDay(u8);

impl RozDay {
    /// Creates a new `RozDay`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDayOfMonth`] if `day` is not in 1..=30.
    pub fn new(day: u8) -> Result<Self, CalendarError> {
        if !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidDayOfMonth { day });
        }
        Ok(Self(day))
    }

    /// Returns the day of month (1..=30).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the roz name. Infallible because the value is validated.
    pub fn name(self) -> &'static str {
        DAY_NAMES[usize::from(self.0 - 1)]
    }
}

/// One of the intercalary days after Spendarmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GathaDay {
    Ahunavaiti,
    Ushtavaiti,
    Spentamainyu,
    Vohukhshathra,
    Vahishtoishti,
    /// Extra day that only exists in a 366-day year.
    Leap,
}

impl GathaDay {
    /// Creates a Gatha day from its 0-based index (5 is the leap day).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidGathaIndex`] if `index` is greater than 5.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        match index {
            0 => Ok(Self::Ahunavaiti),
            1 => Ok(Self::Ushtavaiti),
            2 => Ok(Self::Spentamainyu),
            3 => Ok(Self::Vohukhshathra),
            4 => Ok(Self::Vahishtoishti),
            5 => Ok(Self::Leap),
            _ => Err(CalendarError::InvalidGathaIndex { index }),
        }
    }

    /// Returns the 0-based index (0..=5).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the 1-based position within the Gatha period (1..=6).
    pub fn number(self) -> u8 {
        self.index() + 1
    }

    /// Returns the Gatha day's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Leap => LEAP_DAY_NAME,
            other => GATHA_NAMES[usize::from(other.index())],
        }
    }

    /// Whether this is the leap extra day.
    pub fn is_leap(self) -> bool {
        self == Self::Leap
    }
}

/// Where a day falls within its Fasli year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayPosition {
    /// A day in one of the twelve 30-day months.
    Regular { month: Month, day: RozDay },
    /// One of the intercalary days closing the year.
    Gatha(GathaDay),
}

impl DayPosition {
    /// Classifies a 0-based offset from Nowruz.
    ///
    /// Offsets 0..360 are regular days, 360..365 are the Gatha days and 365
    /// is the leap extra day when `is_leap_year` is set.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OffsetOutOfRange`] for any offset past the
    /// end of the year.
    pub fn classify(day_offset: u16, is_leap_year: bool) -> Result<Self, CalendarError> {
        if day_offset < REGULAR_DAYS {
            let month = Month::ALL[usize::from(day_offset / DAYS_PER_MONTH)];
            // Cannot truncate: the remainder is below 30.
            let day = RozDay((day_offset % DAYS_PER_MONTH) as u8 + 1);
            return Ok(Self::Regular { month, day });
        }
        let gatha_index = day_offset - REGULAR_DAYS;
        if gatha_index < GATHA_DAYS || (gatha_index == GATHA_DAYS && is_leap_year) {
            // Cannot truncate: gatha_index <= 5.
            return GathaDay::from_index(gatha_index as u8).map(Self::Gatha);
        }
        Err(CalendarError::OffsetOutOfRange {
            offset: i64::from(day_offset),
            year_length: REGULAR_DAYS + GATHA_DAYS + u16::from(is_leap_year),
        })
    }

    /// Returns the 0-based offset from Nowruz. Inverse of [`classify`](Self::classify).
    pub fn day_offset(self) -> u16 {
        match self {
            Self::Regular { month, day } => {
                u16::from(month as u8) * DAYS_PER_MONTH + u16::from(day.get()) - 1
            }
            Self::Gatha(g) => REGULAR_DAYS + u16::from(g.index()),
        }
    }

    /// Returns the month, or `None` during the Gatha period.
    pub fn month(self) -> Option<Month> {
        match self {
            Self::Regular { month, .. } => Some(month),
            Self::Gatha(_) => None,
        }
    }

    /// Returns the Gatha day, or `None` for a regular day.
    pub fn gatha(self) -> Option<GathaDay> {
        match self {
            Self::Regular { .. } => None,
            Self::Gatha(g) => Some(g),
        }
    }

    /// Day of month: 1..=30 for regular days, 31..=36 for the Gatha period.
    pub fn day_of_month(self) -> u8 {
        match self {
            Self::Regular { day, .. } => day.get(),
            Self::Gatha(g) => 30 + g.number(),
        }
    }

    /// Month name, or [`GATHA_PERIOD_NAME`] during the Gatha period.
    pub fn month_name(self) -> &'static str {
        self.month().map_or(GATHA_PERIOD_NAME, Month::name)
    }

    /// Roz name or Gatha name of this day.
    pub fn day_name(self) -> &'static str {
        match self {
            Self::Regular { day, .. } => day.name(),
            Self::Gatha(g) => g.name(),
        }
    }

    /// True during the five or six Gatha days.
    pub fn is_gatha_day(self) -> bool {
        matches!(self, Self::Gatha(_))
    }

    /// True on the leap-year sixth Gatha day.
    pub fn is_leap_extra_day(self) -> bool {
        matches!(self, Self::Gatha(GathaDay::Leap))
    }

    /// True in Spendarmed, the twelfth month.
    pub fn is_esfand_month(self) -> bool {
        self.month().is_some_and(Month::is_esfand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_first_day() {
        let pos = DayPosition::classify(0, false).unwrap();
        assert_eq!(pos.month(), Some(Month::Farvardin));
        assert_eq!(pos.day_of_month(), 1);
        assert_eq!(pos.day_name(), "Ahura Mazda");
    }

    #[test]
    fn classify_month_boundary() {
        let last = DayPosition::classify(29, false).unwrap();
        assert_eq!(last.month(), Some(Month::Farvardin));
        assert_eq!(last.day_of_month(), 30);

        let first = DayPosition::classify(30, false).unwrap();
        assert_eq!(first.month(), Some(Month::Ardibehesht));
        assert_eq!(first.day_of_month(), 1);
    }

    #[test]
    fn classify_last_regular_day() {
        let pos = DayPosition::classify(359, false).unwrap();
        assert_eq!(pos.month(), Some(Month::Spendarmed));
        assert_eq!(pos.day_of_month(), 30);
        assert!(pos.is_esfand_month());
        assert!(!pos.is_gatha_day());
    }

    #[test]
    fn classify_gatha() {
        let pos = DayPosition::classify(360, false).unwrap();
        assert_eq!(pos, DayPosition::Gatha(GathaDay::Ahunavaiti));
        assert_eq!(pos.day_of_month(), 31);
        assert_eq!(pos.month_name(), GATHA_PERIOD_NAME);
        assert!(!pos.is_esfand_month());

        let pos = DayPosition::classify(364, false).unwrap();
        assert_eq!(pos, DayPosition::Gatha(GathaDay::Vahishtoishti));
        assert_eq!(pos.day_of_month(), 35);
    }

    #[test]
    fn classify_leap_day() {
        let pos = DayPosition::classify(365, true).unwrap();
        assert!(pos.is_leap_extra_day());
        assert!(pos.is_gatha_day());
        assert_eq!(pos.day_of_month(), 36);
        assert_eq!(pos.day_name(), LEAP_DAY_NAME);
    }

    #[test]
    fn classify_leap_day_in_common_year() {
        assert_eq!(
            DayPosition::classify(365, false).unwrap_err(),
            CalendarError::OffsetOutOfRange {
                offset: 365,
                year_length: 365,
            }
        );
    }

    #[test]
    fn classify_past_leap_day() {
        assert_eq!(
            DayPosition::classify(366, true).unwrap_err(),
            CalendarError::OffsetOutOfRange {
                offset: 366,
                year_length: 366,
            }
        );
    }

    #[test]
    fn offset_roundtrip_leap_year() {
        for offset in 0..366u16 {
            let pos = DayPosition::classify(offset, true).unwrap();
            assert_eq!(pos.day_offset(), offset, "roundtrip failed for {offset}");
        }
    }

    #[test]
    fn month_from_number() {
        assert_eq!(Month::from_number(1).unwrap(), Month::Farvardin);
        assert_eq!(Month::from_number(12).unwrap(), Month::Spendarmed);
        assert_eq!(
            Month::from_number(13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        for m in Month::ALL {
            assert_eq!(Month::from_number(m.number()).unwrap(), m);
        }
    }

    #[test]
    fn roz_day_validation() {
        assert!(RozDay::new(1).is_ok());
        assert!(RozDay::new(30).is_ok());
        assert_eq!(
            RozDay::new(0).unwrap_err(),
            CalendarError::InvalidDayOfMonth { day: 0 }
        );
    }

    #[test]
    fn gatha_from_index() {
        for i in 0..=5u8 {
            assert_eq!(GathaDay::from_index(i).unwrap().index(), i);
        }
        assert!(GathaDay::from_index(6).is_err());
    }
}
