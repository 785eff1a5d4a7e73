//! # fasli-solar
//!
//! Everything between a place name and the Gregorian day a death is
//! counted from: geocoding behind a trait, an approximate sunrise model,
//! and the dawn day boundary.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Place"] -->|"Geocoder::geocode()"| B["GeoLocation"]
//!     B -->|"SunriseProvider::sunrise()"| C["Sunrise (UTC)"]
//!     C -->|".local_time(offset)"| D["local sunrise"]
//!     D -->|"effective_day()"| E["EffectiveDay"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `location` | `GeoLocation`, `Place`, UTC offset parsing |
//! | `geocode` | `Geocoder` trait, static gazetteer, layering |
//! | `sunrise` | Approximate sunrise model |
//! | `provider` | `SunriseProvider` trait, local and fallback providers |
//! | `boundary` | Dawn day boundary |
//! | `error` | Error types |

mod boundary;
mod error;
mod geocode;
mod location;
mod provider;
mod sunrise;

pub use boundary::{EffectiveDay, effective_day};
pub use error::{GeoError, SunriseError};
pub use geocode::{Geocoder, LayeredGeocoder, StaticGeocoder};
pub use location::{GeoLocation, Place, parse_utc_offset};
pub use provider::{ApproximateSunrise, FallbackSunrise, SunriseProvider, local_sunrise};
pub use sunrise::{Sunrise, approximate_sunrise, declination_deg};
