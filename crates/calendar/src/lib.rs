//! # fasli-calendar
//!
//! Pure date arithmetic between the Gregorian and the Fasli Zoroastrian
//! calendar: twelve 30-day months from Nowruz (March 21), followed by five
//! Gatha days and, in a 366-day year, one leap extra day.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"resolve_anchor()"| B["Anchor (Nowruz, year)"]
//!     B -->|".day_offset()"| C["offset 0..=365"]
//!     C -->|"DayPosition::classify()"| D["DayPosition"]
//!     D -->|".day_name()"| E["roz / Gatha name"]
//!     A -->|"convert()"| F["ZoroastrianDate"]
//!     F -->|"Display"| G["Asman, Khordad 27, 1404 Z.E."]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use fasli_calendar::{DisplayStyle, convert, format_display_string};
//!
//! let z = convert(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap();
//! assert_eq!(z.to_string(), "Asman, Khordad 27, 1404 Z.E.");
//! assert_eq!(format_display_string(&z, DisplayStyle::Short), "Asman");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `anchor` | Nowruz resolution and year numbers |
//! | `position` | Month / roz / Gatha classification of day offsets |
//! | `names` | Canonical name tables |
//! | `date` | `ZoroastrianDate` value type and conversion |
//! | `format` | Display formatting |
//! | `sequence` | Whole-year sequences |
//! | `error` | Error types |

mod anchor;
mod date;
mod error;
mod format;
mod names;
mod position;
mod sequence;

pub use anchor::{Anchor, EPOCH_OFFSET, NOWRUZ_DAY, NOWRUZ_MONTH, nowruz, resolve_anchor};
pub use date::{ZoroastrianDate, convert};
pub use error::CalendarError;
pub use format::{DisplayStyle, ERA_MARKER, format_display_string};
pub use names::{
    DAY_NAMES, GATHA_NAMES, GATHA_PERIOD_NAME, LEAP_DAY_NAME, MONTH_NAMES, TABLE_VERSION,
    day_name, gatha_day_name,
};
pub use position::{DAYS_PER_MONTH, DayPosition, GATHA_DAYS, GathaDay, Month, REGULAR_DAYS, RozDay};
pub use sequence::year_sequence;
