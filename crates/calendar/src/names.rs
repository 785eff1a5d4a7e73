//! Canonical name tables for months, the roz cycle and the Gatha days.
//!
//! The tables are fixed constants. Transliterations follow the community
//! website's final calculator revision, with the duplicated 29th/30th
//! entries of that revision replaced by the traditional Ashtad and Asman.

use crate::error::CalendarError;

/// Revision tag of the tables below. Bump whenever a transliteration changes.
pub const TABLE_VERSION: u32 = 1;

/// The twelve 30-day months, starting at Nowruz.
pub const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ardibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Spendarmed",
];

/// Display name used in place of a month for the intercalary period.
pub const GATHA_PERIOD_NAME: &str = "Gatha Days";

/// The 30 roz names. Index 0 is day 1 of every month.
#[rustfmt::skip]
pub const DAY_NAMES: [&str; 30] = [
    "Ahura Mazda", "Vohu Mano", "Asha Vahishta", "Khshathra Vairya", "Spenta Armaiti",
    "Haurvatat", "Ameretat", "Dae-pa-Adar", "Adar", "Aban",
    "Khor", "Mah", "Tir", "Gosh", "Dae-pa-Mehr",
    "Mehr", "Srosh", "Rashn", "Farvardin", "Bahram",
    "Ram", "Bad", "Dae-pa-Din", "Din", "Ashishvangh",
    "Ashtad", "Asman", "Zamyad", "Marespand", "Anagran",
];

/// The five Gatha days that close every year.
pub const GATHA_NAMES: [&str; 5] = [
    "Ahunavaiti",
    "Ushtavaiti",
    "Spentamainyu",
    "Vohukhshathra",
    "Vahishtoishti",
];

/// Label of the extra intercalary day of a 366-day year.
pub const LEAP_DAY_NAME: &str = "Vahishtoishti (Leap)";

/// Looks up the roz name for a day of month.
///
/// The name depends only on the day, never on the month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayOfMonth`] if `day_in_month` is not in
/// 1..=30.
pub fn day_name(day_in_month: u8) -> Result<&'static str, CalendarError> {
    if !(1..=30).contains(&day_in_month) {
        return Err(CalendarError::InvalidDayOfMonth { day: day_in_month });
    }
    Ok(DAY_NAMES[usize::from(day_in_month - 1)])
}

/// Looks up the name of a Gatha day by its 0-based index.
///
/// Index 5 is the leap extra day and gets [`LEAP_DAY_NAME`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidGathaIndex`] if `index` is greater than 5.
pub fn gatha_day_name(index: u8) -> Result<&'static str, CalendarError> {
    match index {
        0..=4 => Ok(GATHA_NAMES[usize::from(index)]),
        5 => Ok(LEAP_DAY_NAME),
        _ => Err(CalendarError::InvalidGathaIndex { index }),
    }
}
