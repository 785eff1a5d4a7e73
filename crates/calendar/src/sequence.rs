//! Whole-year date sequences.

use crate::anchor::Anchor;
use crate::date::ZoroastrianDate;
use crate::error::CalendarError;
use crate::position::DayPosition;

/// Generates every day of a Fasli year, Nowruz first.
///
/// The result has 365 entries, or 366 when the year carries the leap
/// extra day.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] for unrepresentable years.
///
/// # Example
///
/// ```
/// use fasli_calendar::year_sequence;
///
/// let days = year_sequence(1404).unwrap();
/// assert_eq!(days.len(), 365);
/// assert_eq!(days[0].day_name(), "Ahura Mazda");
/// ```
pub fn year_sequence(year: i32) -> Result<Vec<ZoroastrianDate>, CalendarError> {
    let anchor = Anchor::from_year(year)?;
    (0..anchor.year_length())
        .map(|offset| {
            let position = DayPosition::classify(offset, anchor.is_leap())?;
            ZoroastrianDate::from_parts(year, position)
        })
        .collect()
}
