//! # fasli-net
//!
//! Blocking HTTP implementations of the `fasli-solar` collaborator traits.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Timeout and user agent shared by the clients |
//! | `nominatim` | `Geocoder` over OpenStreetMap Nominatim |
//! | `sunrise_sunset` | `SunriseProvider` over sunrise-sunset.org |
//! | `error` | Error types |
//!
//! Response decoding is exposed as plain functions
//! ([`parse_search_response`], [`parse_sunrise_response`]) so it can be
//! exercised without a network.

mod config;
mod error;
mod nominatim;
mod sunrise_sunset;

pub use config::{ClientConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use error::NetError;
pub use nominatim::{NOMINATIM_URL, NominatimGeocoder, parse_search_response};
pub use sunrise_sunset::{SUNRISE_SUNSET_URL, SunriseSunsetClient, parse_sunrise_response};
