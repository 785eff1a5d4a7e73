//! Human-readable rendering of Fasli dates.

use std::fmt;

use crate::date::ZoroastrianDate;

/// Era marker appended to year numbers.
pub const ERA_MARKER: &str = "Z.E.";

/// How much of a date to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Only the roz or Gatha name.
    Short,
    /// Day name, month, day of month and year with era marker.
    #[default]
    Full,
}

impl fmt::Display for ZoroastrianDate {
    /// Renders the full form.
    ///
    /// Regular days: `Asman, Khordad 27, 1404 Z.E.`
    /// Gatha days: `Ushtavaiti (Gatha 2), 1403 Z.E.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.gatha() {
            Some(g) => write!(
                f,
                "{} (Gatha {}), {} {ERA_MARKER}",
                g.name(),
                g.number(),
                self.year()
            ),
            None => write!(
                f,
                "{}, {} {}, {} {ERA_MARKER}",
                self.day_name(),
                self.month_name(),
                self.day_of_month(),
                self.year()
            ),
        }
    }
}

/// Formats a date for display.
pub fn format_display_string(date: &ZoroastrianDate, style: DisplayStyle) -> String {
    match style {
        DisplayStyle::Short => date.day_name().to_string(),
        DisplayStyle::Full => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::convert;
    use chrono::NaiveDate;

    fn z(y: i32, m: u32, d: u32) -> ZoroastrianDate {
        convert(NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn full_regular() {
        assert_eq!(z(2025, 6, 15).to_string(), "Asman, Khordad 27, 1404 Z.E.");
    }

    #[test]
    fn full_gatha() {
        assert_eq!(
            z(2025, 3, 17).to_string(),
            "Ushtavaiti (Gatha 2), 1403 Z.E."
        );
    }

    #[test]
    fn full_leap_day() {
        assert_eq!(
            z(2024, 3, 20).to_string(),
            "Vahishtoishti (Leap) (Gatha 6), 1402 Z.E."
        );
    }

    #[test]
    fn short_is_day_name() {
        let date = z(2025, 3, 21);
        assert_eq!(
            format_display_string(&date, DisplayStyle::Short),
            "Ahura Mazda"
        );
        assert_eq!(
            format_display_string(&date, DisplayStyle::Full),
            "Ahura Mazda, Farvardin 1, 1404 Z.E."
        );
    }
}
