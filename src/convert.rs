//! Pure conversion functions: TOML config structs -> library services.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::FixedOffset;
use tracing::debug;

use fasli_net::{ClientConfig, NominatimGeocoder, SunriseSunsetClient};
use fasli_schedule::Services;
use fasli_solar::{
    ApproximateSunrise, FallbackSunrise, GeoLocation, Geocoder, LayeredGeocoder, Place,
    StaticGeocoder, SunriseProvider, parse_utc_offset,
};

use crate::config::*;

/// Where sunrise times come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunriseSource {
    /// Local approximation only.
    Approximate,
    /// sunrise-sunset.org, falling back to the approximation on failure.
    Remote,
}

/// Parses a sunrise source name into the corresponding enum variant.
pub fn parse_sunrise_source(s: &str) -> Result<SunriseSource> {
    match s.to_lowercase().as_str() {
        "approximate" | "local" => Ok(SunriseSource::Approximate),
        "remote" => Ok(SunriseSource::Remote),
        other => bail!("unknown sunrise source: {other:?}"),
    }
}

/// Parses an optional `+HH:MM` offset.
pub fn parse_offset(value: Option<&str>) -> Result<Option<FixedOffset>> {
    value
        .map(|v| parse_utc_offset(v).with_context(|| format!("invalid utc_offset {v:?}")))
        .transpose()
}

/// Builds the HTTP client settings shared by the remote services.
pub fn build_client_config(timeout_secs: u64, user_agent: &str) -> Result<ClientConfig> {
    if timeout_secs == 0 {
        bail!("timeout_secs must be > 0");
    }
    Ok(ClientConfig::new()
        .with_timeout(Duration::from_secs(timeout_secs))
        .with_user_agent(user_agent))
}

/// Builds the static gazetteer from `[[geocoder.places]]`.
pub fn build_gazetteer(places: &[PlaceToml]) -> Result<StaticGeocoder> {
    let mut gazetteer = StaticGeocoder::new();
    for p in places {
        let mut location = GeoLocation::new(p.latitude, p.longitude)
            .with_context(|| format!("invalid coordinates for place {:?}", p.city))?;
        if let Some(offset) = parse_offset(p.utc_offset.as_deref())? {
            location = location.with_utc_offset(offset);
        }
        gazetteer = gazetteer.with_place(Place::new(p.city.as_str(), p.region.clone()), location);
    }
    Ok(gazetteer)
}

/// Builds the geocoder: gazetteer first, then Nominatim when enabled.
pub fn build_geocoder(g: &GeocoderToml) -> Result<Box<dyn Geocoder>> {
    let gazetteer = build_gazetteer(&g.places)?;
    debug!(places = gazetteer.len(), remote = g.remote, "geocoder configured");
    if !g.remote {
        return Ok(Box::new(gazetteer));
    }
    let client = build_client_config(g.timeout_secs, &g.user_agent)?;
    let remote = NominatimGeocoder::new(g.url.as_str(), &client)
        .context("failed to build geocoding client")?;
    Ok(Box::new(LayeredGeocoder::new(gazetteer, remote)))
}

/// Builds the sunrise provider named by `[sunrise].source`.
pub fn build_sunrise(s: &SunriseToml, user_agent: &str) -> Result<Box<dyn SunriseProvider>> {
    match parse_sunrise_source(&s.source)? {
        SunriseSource::Approximate => Ok(Box::new(ApproximateSunrise)),
        SunriseSource::Remote => {
            let client = build_client_config(s.timeout_secs, user_agent)?;
            let remote = SunriseSunsetClient::new(s.url.as_str(), &client)
                .context("failed to build sunrise client")?;
            Ok(Box::new(FallbackSunrise::new(remote)))
        }
    }
}

/// Owned collaborators built from config; lends out [`Services`].
pub struct ServiceStack {
    geocoder: Box<dyn Geocoder>,
    sunrise: Box<dyn SunriseProvider>,
    default_offset: Option<FixedOffset>,
}

impl ServiceStack {
    /// Builds every collaborator named in `config`.
    pub fn from_config(config: &FasliConfig) -> Result<Self> {
        Ok(Self {
            geocoder: build_geocoder(&config.geocoder)?,
            sunrise: build_sunrise(&config.sunrise, &config.geocoder.user_agent)?,
            default_offset: parse_offset(config.location.utc_offset.as_deref())?,
        })
    }

    /// Borrows the stack as schedule services.
    pub fn services(&self) -> Services<'_> {
        Services::new(self.geocoder.as_ref(), self.sunrise.as_ref())
            .with_default_offset(self.default_offset)
    }
}
