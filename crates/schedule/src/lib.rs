//! # fasli-schedule
//!
//! Memorial ceremony schedules after a death, each ceremony resolved to its
//! Fasli date, with notes for Gatha, leap-day and Spendarmed deaths.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph TD
//!     A["death instant + Place"] -->|"Geocoder"| B["GeoLocation"]
//!     B -->|"SunriseProvider"| C["local sunrise"]
//!     C -->|"effective_day()"| D["effective death day"]
//!     D -->|"days 1,3,4,10,30,365 + months"| E["ceremony dates"]
//!     E -->|"par_iter convert()"| F["CeremonyEvent list"]
//!     D -->|"notes_for()"| G["ScheduleNote list"]
//!     F --> H["Schedule"]
//!     G --> H
//! ```
//!
//! Network collaborators are injected through [`Services`];
//! [`schedule_from_sunrise`] is the I/O-free core.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `ceremony` | Ceremony identifiers, descriptions and prayers |
//! | `event` | `CeremonyEvent` and `Schedule` |
//! | `notes` | Special-case notes |
//! | `services` | Injected geocoder and sunrise provider |
//! | `generate` | Entry points |
//! | `error` | Error types |

mod ceremony;
mod error;
mod event;
mod generate;
mod notes;
mod services;

pub use ceremony::Ceremony;
pub use error::ScheduleError;
pub use event::{CeremonyEvent, Schedule};
pub use generate::{
    DEFAULT_MONTHS, MAX_MONTHS, convert_to_zoroastrian_date, generate_schedule,
    resolve_effective_day, schedule_from_sunrise,
};
pub use notes::{ScheduleNote, notes_for};
pub use services::Services;
