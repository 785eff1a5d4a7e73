//! Error types for the fasli-calendar crate.

/// Error type for all fallible operations in the fasli-calendar crate.
///
/// Every variant is a precondition violation: the caller handed in a value
/// outside the calendar's domain. None of them is worth retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a Gregorian year cannot be represented, so its Nowruz
    /// (or the following one) does not exist as a date.
    #[error("gregorian year {year} is outside the supported date range")]
    OutOfRange {
        /// The Gregorian year whose Nowruz could not be built.
        year: i32,
    },

    /// Returned when a day offset does not fall inside its Fasli year.
    #[error("day offset {offset} is outside a {year_length}-day year")]
    OffsetOutOfRange {
        /// The offending offset from Nowruz (0-based).
        offset: i64,
        /// Number of days in the year the offset was checked against.
        year_length: u16,
    },

    /// Returned when a day-of-month is outside 1..=30.
    #[error("invalid day of month: {day} (must be 1..=30)")]
    InvalidDayOfMonth {
        /// The invalid day that was provided.
        day: u8,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a Gatha index is outside 0..=5.
    #[error("invalid gatha index: {index} (must be 0..=5)")]
    InvalidGathaIndex {
        /// The invalid 0-based index that was provided.
        index: u8,
    },

    /// Returned when the leap extra day is requested for a 365-day year.
    #[error("year {year} has no leap extra day")]
    NoLeapDay {
        /// The Zoroastrian year that was asked for.
        year: i32,
    },
}
