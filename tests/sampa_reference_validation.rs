//! SAMPA validation against reference output for three documented solar
//! eclipses: total (2016 Pacific), partial (2020 Patagonia edge) and no
//! eclipse at all.

use solar_sampa::sampa::{sun_and_moon, EclipseKind, SampaAtmosphere};
use solar_sampa::{Instant, Observer};

const TOLERANCE: f64 = 5e-4;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{what}: expected {expected}, got {actual}"
    );
}

fn assert_irradiance_close(actual: f64, expected: f64, what: &str) {
    // Irradiance chains accumulate more rounding than angles
    assert!(
        (actual - expected).abs() < 5e-3,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_total_eclipse_2016_papua_new_guinea() {
    let when = Instant::new(2016, 3, 9, 1, 58, 19.0);
    let site = Observer::new(10.1, 148.8, 100.0, 1000.0, 25.0);

    let result = sun_and_moon(&when, &site, &SampaAtmosphere::default(), 69.3).unwrap();

    assert_close(result.sun_zenith, 15.082, "sun zenith");
    assert_close(result.sun_azimuth, 163.508, "sun azimuth");
    assert_close(result.moon.zenith, 15.08, "moon zenith");
    assert_close(result.moon.azimuth, 163.488, "moon azimuth");
    assert_close(result.moon.declination, -4.377, "moon declination");
    assert_close(result.moon.hour_angle, 355.746, "moon hour angle");
    assert_close(result.moon.right_ascension, 349.829, "moon right ascension");
    assert_close(result.moon.elevation, 74.92, "moon elevation");

    assert_close(result.eclipse.sun_radius, 0.268, "sun radius");
    assert_close(result.eclipse.moon_radius, 0.281, "moon radius");
    assert_close(result.eclipse.unshaded_area, 0.0, "unshaded area");
    assert_close(result.eclipse.unshaded_percent, 0.0, "unshaded percent");
    assert_eq!(result.eclipse.kind, EclipseKind::Total);
    assert_eq!(result.eclipse.kind.message(), "Total Solar Eclipse");

    let irr = &result.eclipse.irradiance;
    assert_irradiance_close(irr.direct_normal, 1001.167, "direct normal");
    assert_irradiance_close(irr.attenuated_direct_normal, 0.0, "attenuated DNI");
    assert_irradiance_close(irr.global_horizontal, 1062.697, "global horizontal");
    assert_irradiance_close(irr.attenuated_global_horizontal, 81.056, "attenuated GHI");
    assert_irradiance_close(irr.diffuse_horizontal, 96.013, "diffuse horizontal");
    assert_irradiance_close(irr.attenuated_diffuse_horizontal, 81.056, "attenuated DHI");
}

#[test]
fn test_partial_eclipse_2020_patagonia() {
    let when = Instant::new(2020, 12, 14, 16, 19, 0.0);
    let site = Observer::new(-40.3, -67.9, 0.0, 10.0, 0.0);

    let result = sun_and_moon(&when, &site, &SampaAtmosphere::default(), 69.3).unwrap();

    assert_close(result.sun_zenith, 17.116, "sun zenith");
    assert_close(result.sun_azimuth, 5.897, "sun azimuth");
    assert_close(result.moon.zenith, 17.11, "moon zenith");
    assert_close(result.moon.azimuth, 6.01, "moon azimuth");
    assert_close(result.moon.declination, -23.267, "moon declination");
    assert_close(result.moon.hour_angle, 358.078, "moon hour angle");
    assert_close(result.moon.right_ascension, 262.564, "moon right ascension");
    assert_close(result.moon.elevation, 72.89, "moon elevation");

    assert_close(result.eclipse.sun_radius, 0.271, "sun radius");
    assert_close(result.eclipse.moon_radius, 0.278, "moon radius");
    assert_close(result.eclipse.unshaded_area, 0.013, "unshaded area");
    assert_close(result.eclipse.unshaded_percent, 5.582, "unshaded percent");
    assert_eq!(result.eclipse.kind, EclipseKind::Partial);
    assert_eq!(result.eclipse.kind.message(), "Partial Solar Eclipse");

    let irr = &result.eclipse.irradiance;
    assert_irradiance_close(irr.direct_normal, 1123.668, "direct normal");
    assert_irradiance_close(irr.attenuated_direct_normal, 62.718, "attenuated DNI");
    assert_irradiance_close(irr.global_horizontal, 1132.799, "global horizontal");
    assert_irradiance_close(irr.attenuated_global_horizontal, 103.132, "attenuated GHI");
    assert_irradiance_close(irr.diffuse_horizontal, 58.894, "diffuse horizontal");
    assert_irradiance_close(irr.attenuated_diffuse_horizontal, 43.191, "attenuated DHI");
}

#[test]
fn test_no_eclipse_2019_south_pacific() {
    let when = Instant::new(2019, 1, 2, 3, 5, 55.0);
    let site = Observer::new(-23.923, -130.741, -100.0, 2000.0, -10.0);

    let result = sun_and_moon(&when, &site, &SampaAtmosphere::default(), 69.3).unwrap();

    assert_close(result.sun_zenith, 84.636, "sun zenith");
    assert_close(result.sun_azimuth, 247.099, "sun azimuth");
    assert_close(result.moon.zenith, 126.629, "moon zenith");
    assert_close(result.moon.azimuth, 227.878, "moon azimuth");
    assert_close(result.moon.declination, -14.482, "moon declination");
    assert_close(result.moon.hour_angle, 142.065, "moon hour angle");
    assert_close(result.moon.right_ascension, 235.143, "moon right ascension");
    assert_close(result.moon.elevation, -36.629, "moon elevation");

    assert_close(result.eclipse.sun_radius, 0.271, "sun radius");
    assert_close(result.eclipse.moon_radius, 0.252, "moon radius");
    assert_close(result.eclipse.unshaded_area, 0.231, "unshaded area");
    assert_close(result.eclipse.unshaded_percent, 100.0, "unshaded percent");
    assert_eq!(result.eclipse.kind, EclipseKind::NoEclipse);
    assert_eq!(result.eclipse.kind.message(), "No Eclipse");

    // No eclipse: attenuated outputs equal the unattenuated ones
    let irr = &result.eclipse.irradiance;
    assert_irradiance_close(irr.direct_normal, 409.514, "direct normal");
    assert_irradiance_close(irr.attenuated_direct_normal, 409.514, "attenuated DNI");
    assert_irradiance_close(irr.global_horizontal, 61.04, "global horizontal");
    assert_irradiance_close(irr.attenuated_global_horizontal, 61.04, "attenuated GHI");
    assert_irradiance_close(irr.diffuse_horizontal, 22.755, "diffuse horizontal");
    assert_irradiance_close(irr.attenuated_diffuse_horizontal, 22.755, "attenuated DHI");
}

#[test]
fn test_unshaded_percent_bounds_over_eclipse_passage() {
    // Sweep through the 2016 eclipse in 10 minute steps
    let site = Observer::new(10.1, 148.8, 100.0, 1000.0, 25.0);
    for step in 0..18 {
        let when = Instant::new(2016, 3, 9, (step / 6) as u32, ((step % 6) * 10) as u32, 0.0);
        let result = sun_and_moon(&when, &site, &SampaAtmosphere::default(), 69.3).unwrap();
        let sul = result.eclipse.unshaded_percent;
        assert!((0.0..=100.0).contains(&sul), "step {step}: {sul}");
        assert!(result.eclipse.unshaded_area >= 0.0);
    }
}

#[test]
fn test_rejects_out_of_range_coordinates() {
    let when = Instant::new(2016, 3, 9, 1, 58, 19.0);
    let atmosphere = SampaAtmosphere::default();
    assert!(sun_and_moon(
        &when,
        &Observer::new(-91.0, 0.0, 0.0, 1013.0, 20.0),
        &atmosphere,
        69.3
    )
    .is_err());
}
