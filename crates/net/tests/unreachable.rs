//! Behaviour against an endpoint that refuses connections.

use std::time::Duration;

use chrono::NaiveDate;
use fasli_net::{ClientConfig, NominatimGeocoder, SunriseSunsetClient};
use fasli_solar::{
    ApproximateSunrise, FallbackSunrise, GeoError, GeoLocation, Geocoder, LayeredGeocoder, Place,
    StaticGeocoder, SunriseError, SunriseProvider,
};

const CLOSED: &str = "http://127.0.0.1:9/";

fn config() -> ClientConfig {
    ClientConfig::new().with_timeout(Duration::from_secs(2))
}

#[test]
fn sunrise_client_reports_unavailable() {
    let client = SunriseSunsetClient::new(CLOSED, &config()).unwrap();
    let loc = GeoLocation::new(19.076, 72.8777).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    assert!(matches!(
        client.sunrise(&loc, date),
        Err(SunriseError::TimeServiceUnavailable { .. })
    ));
}

#[test]
fn fallback_recovers_from_unreachable_service() {
    let client = SunriseSunsetClient::new(CLOSED, &config()).unwrap();
    let provider = FallbackSunrise::new(client);
    let loc = GeoLocation::new(19.076, 72.8777).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    assert_eq!(
        provider.sunrise(&loc, date).unwrap(),
        ApproximateSunrise.sunrise(&loc, date).unwrap()
    );
}

#[test]
fn gazetteer_answers_before_remote() {
    let mumbai = GeoLocation::new(19.076, 72.8777).unwrap();
    let geocoder = LayeredGeocoder::new(
        StaticGeocoder::new().with_place(Place::parse("Mumbai"), mumbai),
        NominatimGeocoder::new(CLOSED, &config()).unwrap(),
    );
    assert_eq!(geocoder.geocode(&Place::parse("Mumbai")).unwrap(), mumbai);
    assert!(matches!(
        geocoder.geocode(&Place::parse("Pune")),
        Err(GeoError::ServiceUnavailable { .. })
    ));
}
