//! SPA validation against reference output of the NREL implementation.
//!
//! Tolerances are 5e-4 degrees/hours on values the reference prints to
//! three decimals.

use solar_sampa::spa::{sun_position, HorizonNote};
use solar_sampa::{Instant, Observer, SurfaceOrientation};

const TOLERANCE: f64 = 5e-4;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_year_100_julian_calendar_date() {
    // Proleptic input far before the Gregorian reform, extreme site
    let when = Instant::new(100, 1, 5, 7, 0, 0.0);
    let site = Observer::new(30.0, 90.0, -1000.0, 30.0, -20.0);
    let surface = SurfaceOrientation::new(359.0, 1.0);

    let result = sun_position(&when, &site, &surface, 69.3).unwrap();

    assert_close(result.geometry.incidence, 55.09, "incidence");
    assert_close(result.geometry.zenith, 54.116, "zenith");
    assert_close(result.geometry.azimuth, 194.299, "azimuth");
    assert_close(result.geometry.declination, -22.759, "declination");
    assert_close(result.geometry.hour_angle, 12.533, "hour angle");
    assert_close(result.geometry.right_ascension, 286.957, "right ascension");
    assert_close(result.geometry.elevation, 35.884, "elevation");

    assert_close(result.times.equation_of_time, -9.977, "equation of time");
    assert_close(result.times.transit, 6.164, "transit");
    assert_close(result.times.sunrise, 1.027, "sunrise");
    assert_close(result.times.sunset, 11.304, "sunset");
    assert_eq!(result.times.note, HorizonNote::Normal);

    // Calendar date folds back through the Julian/Gregorian conversion
    assert_eq!(result.date.year, 100);
    assert_eq!(result.date.month, 1);
    assert!((result.date.day - 7.292).abs() < 5e-4);
}

#[test]
fn test_nrel_worked_example_position() {
    // Reda & Andreas worked example: 2003-10-17 12:30:30 MST, Golden CO
    let when = Instant::new(2003, 10, 17, 19, 30, 30.0);
    let site = Observer::new(39.742476, -105.1786, 1830.14, 820.0, 11.0);
    let surface = SurfaceOrientation::new(30.0, -10.0);

    let result = sun_position(&when, &site, &surface, 67.0).unwrap();

    assert!((result.geometry.zenith - 50.11162).abs() < 1e-3);
    assert!((result.geometry.azimuth - 194.34024).abs() < 1e-3);
    assert!((result.geometry.incidence - 25.18700).abs() < 1e-3);
}

#[test]
fn test_horizontal_incidence_equals_zenith() {
    let when = Instant::new(2023, 6, 21, 10, 0, 0.0);
    let site = Observer::new(48.21, 16.37, 190.0, 1000.0, 11.0);

    let result = sun_position(&when, &site, &SurfaceOrientation::horizontal(), 69.0).unwrap();

    assert!((result.geometry.incidence - result.geometry.zenith).abs() < 1e-9);
}

#[test]
fn test_polar_night_and_day_notes() {
    let site = Observer::new(78.0, 15.6, 0.0, 1000.0, -10.0);
    let surface = SurfaceOrientation::horizontal();

    let winter = sun_position(&Instant::new(2023, 12, 21, 12, 0, 0.0), &site, &surface, 69.0)
        .unwrap();
    let summer = sun_position(&Instant::new(2023, 6, 21, 12, 0, 0.0), &site, &surface, 69.0)
        .unwrap();

    assert_eq!(winter.times.note, HorizonNote::AlwaysAboveOrBelowHorizon);
    assert_eq!(summer.times.note, HorizonNote::AlwaysAboveOrBelowHorizon);
    assert_eq!(
        winter.times.note.message(),
        "Sun is always above or below the horizon for that day"
    );
}

#[test]
fn test_equation_of_time_stays_in_range() {
    // EOT never exceeds about ±16.5 minutes over a year
    let site = Observer::new(0.0, 0.0, 0.0, 1013.0, 20.0);
    let surface = SurfaceOrientation::horizontal();
    for day_of_year in 0..36 {
        let when = Instant::new(2023, 1 + day_of_year / 3, 1 + 10 * (day_of_year % 3), 12, 0, 0.0);
        let result = sun_position(&when, &site, &surface, 69.0).unwrap();
        assert!(
            result.times.equation_of_time.abs() < 20.0,
            "EOT {} out of range",
            result.times.equation_of_time
        );
    }
}

#[test]
fn test_rejects_out_of_range_coordinates() {
    let when = Instant::new(2023, 6, 21, 12, 0, 0.0);
    let surface = SurfaceOrientation::horizontal();
    assert!(sun_position(
        &when,
        &Observer::new(91.0, 0.0, 0.0, 1013.0, 20.0),
        &surface,
        69.0
    )
    .is_err());
    assert!(sun_position(
        &when,
        &Observer::new(0.0, 181.0, 0.0, 1013.0, 20.0),
        &surface,
        69.0
    )
    .is_err());
}
