//! The memorial ceremonies observed after a death.

use std::fmt;

/// One memorial observance.
///
/// Fixed ceremonies are counted with the day of death as day 1, so a
/// ceremony on day `n` falls `n - 1` days after the effective death day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ceremony {
    /// Day 1, the day of death.
    Sachkar,
    /// Day 3.
    Uthamna,
    /// Day 4, the dawn after the third night.
    Chahrum,
    /// Day 10.
    Dahum,
    /// Day 30.
    Siroza,
    /// Day 365, the first anniversary.
    Salroz,
    /// The `i`-th monthly recurrence, same Gregorian day-of-month.
    Masiso(u32),
}

impl Ceremony {
    /// Fixed-day ceremonies in calendar order.
    pub const FIXED: [Ceremony; 6] = [
        Ceremony::Sachkar,
        Ceremony::Uthamna,
        Ceremony::Chahrum,
        Ceremony::Dahum,
        Ceremony::Siroza,
        Ceremony::Salroz,
    ];

    /// Day number counted from the day of death (day 1), for fixed
    /// ceremonies.
    pub fn fixed_day(self) -> Option<u32> {
        match self {
            Ceremony::Sachkar => Some(1),
            Ceremony::Uthamna => Some(3),
            Ceremony::Chahrum => Some(4),
            Ceremony::Dahum => Some(10),
            Ceremony::Siroza => Some(30),
            Ceremony::Salroz => Some(365),
            Ceremony::Masiso(_) => None,
        }
    }

    /// Ceremony name without the recurrence number.
    pub fn name(self) -> &'static str {
        match self {
            Ceremony::Sachkar => "Sachkar",
            Ceremony::Uthamna => "Uthamna",
            Ceremony::Chahrum => "Chahrum",
            Ceremony::Dahum => "Dahum",
            Ceremony::Siroza => "Siroza",
            Ceremony::Salroz => "Salroz",
            Ceremony::Masiso(_) => "Masiso",
        }
    }

    /// Short description of the ceremony.
    pub fn description(self) -> &'static str {
        match self {
            Ceremony::Sachkar => "Initial ritual performed shortly after passing",
            Ceremony::Uthamna => "Third day ceremony",
            Ceremony::Chahrum => "Fourth day ceremony for the crossing of the soul",
            Ceremony::Dahum => "Tenth day ceremony",
            Ceremony::Siroza => "Thirtieth day ceremony",
            Ceremony::Salroz => "First anniversary of passing",
            Ceremony::Masiso(_) => "Monthly remembrance on the same day of the month",
        }
    }

    /// Prayers traditionally recited.
    pub fn prayers(self) -> &'static [&'static str] {
        match self {
            Ceremony::Sachkar => &["Sarosh Baj", "Patet Ravaan", "Kardeh Avesta"],
            Ceremony::Uthamna => &["Afringan", "Farokhshi", "Satum"],
            Ceremony::Chahrum => &["Afringan", "Farokhshi", "Satum"],
            Ceremony::Dahum => &["Afringan", "Baj", "Satum"],
            Ceremony::Siroza => &["Afringan", "Farokhshi", "Satum"],
            Ceremony::Salroz => &["Afringan", "Jashan", "Satum"],
            Ceremony::Masiso(_) => &["Afringan", "Farokhshi", "Satum"],
        }
    }

    /// True for the monthly recurrences.
    pub fn is_monthly(self) -> bool {
        matches!(self, Ceremony::Masiso(_))
    }
}

impl fmt::Display for Ceremony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ceremony::Masiso(i) => write!(f, "Masiso {i}"),
            other => f.write_str(other.name()),
        }
    }
}
