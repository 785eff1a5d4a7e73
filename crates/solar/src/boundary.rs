//! The liturgical day starts at dawn, not at midnight.

use chrono::{NaiveDate, NaiveDateTime};

/// Gregorian day that an instant belongs to once sunrise is taken into
/// account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveDay {
    /// The effective Gregorian day.
    pub date: NaiveDate,
    /// Local sunrise that was compared against, if any.
    pub sunrise: Option<NaiveDateTime>,
    /// True when the instant preceded sunrise and the previous day was taken.
    pub shifted: bool,
}

/// Resolves the effective day of a local instant.
///
/// An instant strictly before `local_sunrise` belongs to the previous
/// Gregorian day. Without a sunrise (no place given, polar night, midnight
/// sun) the calendar date of the instant is used unchanged.
///
/// ```
/// use chrono::NaiveDate;
/// use fasli_solar::effective_day;
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let death = day.and_hms_opt(2, 0, 0).unwrap();
/// let sunrise = day.and_hms_opt(6, 0, 0).unwrap();
///
/// let eff = effective_day(death, Some(sunrise));
/// assert!(eff.shifted);
/// assert_eq!(eff.date, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
/// ```
pub fn effective_day(instant: NaiveDateTime, local_sunrise: Option<NaiveDateTime>) -> EffectiveDay {
    let nominal = instant.date();
    let previous = match local_sunrise {
        Some(sunrise) if instant < sunrise => nominal.pred_opt(),
        _ => None,
    };
    EffectiveDay {
        date: previous.unwrap_or(nominal),
        sunrise: local_sunrise,
        shifted: previous.is_some(),
    }
}
