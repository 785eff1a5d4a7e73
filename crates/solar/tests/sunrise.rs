use approx::assert_abs_diff_eq;
use chrono::{NaiveDate, Timelike};
use fasli_solar::{
    ApproximateSunrise, GeoLocation, Sunrise, SunriseProvider, effective_day, local_sunrise,
    parse_utc_offset,
};

fn minutes_of_day(t: chrono::NaiveDateTime) -> f64 {
    f64::from(t.hour() * 60 + t.minute()) + f64::from(t.second()) / 60.0
}

#[test]
fn mumbai_june_sunrise_near_six() {
    let ist = parse_utc_offset("+05:30").unwrap();
    let mumbai = GeoLocation::new(19.076, 72.8777).unwrap().with_utc_offset(ist);
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    let local = local_sunrise(&ApproximateSunrise, &mumbai, date)
        .unwrap()
        .unwrap();
    assert_eq!(local.date(), date);
    // Almanac sunrise is about 06:01 IST; the model lands within minutes.
    assert_abs_diff_eq!(minutes_of_day(local), 361.0, epsilon = 10.0);
}

#[test]
fn northern_days_longer_in_june() {
    let loc = GeoLocation::new(51.5, 0.0).unwrap();
    let june = ApproximateSunrise
        .sunrise(&loc, NaiveDate::from_ymd_opt(2025, 6, 21).unwrap())
        .unwrap()
        .utc()
        .unwrap();
    let december = ApproximateSunrise
        .sunrise(&loc, NaiveDate::from_ymd_opt(2025, 12, 21).unwrap())
        .unwrap()
        .utc()
        .unwrap();
    assert!(minutes_of_day(june) < 4.0 * 60.0);
    assert!(minutes_of_day(december) > 7.5 * 60.0);
}

#[test]
fn predawn_death_counts_toward_previous_day() {
    let loc = GeoLocation::new(0.0, 0.0).unwrap();
    let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let sunrise = local_sunrise(&ApproximateSunrise, &loc, day).unwrap();

    let predawn = effective_day(day.and_hms_opt(2, 0, 0).unwrap(), sunrise);
    assert!(predawn.shifted);
    assert_eq!(predawn.date, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());

    let morning = effective_day(day.and_hms_opt(10, 0, 0).unwrap(), sunrise);
    assert!(!morning.shifted);
    assert_eq!(morning.date, day);
}

#[test]
fn polar_night_never_shifts() {
    let svalbard = GeoLocation::new(78.2, 15.6).unwrap();
    let day = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
    assert_eq!(
        ApproximateSunrise.sunrise(&svalbard, day).unwrap(),
        Sunrise::NeverRises
    );
    let sunrise = local_sunrise(&ApproximateSunrise, &svalbard, day).unwrap();
    let eff = effective_day(day.and_hms_opt(0, 30, 0).unwrap(), sunrise);
    assert!(!eff.shifted);
    assert_eq!(eff.date, day);
}
