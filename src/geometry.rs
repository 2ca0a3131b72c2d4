//! Observer-frame geometry shared by the solar and lunar pipelines:
//! apparent sidereal time, the topocentric parallax transform and the
//! refraction correction.

#![allow(clippy::many_single_char_names)]

use crate::math::{
    asin, atan, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees,
    sin, tan,
};
use crate::types::Observer;

/// Earth flattening factor for the observer term of the parallax.
const EARTH_FLATTENING: f64 = 0.996_647_19;

/// Earth equatorial radius in meters.
const EARTH_RADIUS_M: f64 = 6_378_140.0;

/// Elevation threshold below which no refraction correction is applied:
/// sun radius (0.26667°) plus typical horizon refraction (0.5667°).
const REFRACTION_THRESHOLD: f64 = -(0.26667 + 0.5667);

/// A body's position in the observer's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TopocentricBody {
    /// Topocentric right ascension α' in degrees.
    pub right_ascension: f64,
    /// Topocentric declination δ' in degrees.
    pub declination: f64,
    /// Topocentric local hour angle H' in degrees.
    pub hour_angle: f64,
    /// Elevation without refraction e0 in degrees.
    pub elevation_uncorrected: f64,
    /// Refraction-corrected elevation e in degrees.
    pub elevation: f64,
    /// Zenith angle θ in degrees.
    pub zenith: f64,
    /// Astronomers' azimuth Γ in degrees, measured westward from south.
    pub azimuth_from_south: f64,
    /// Azimuth Φ in degrees, measured eastward from north.
    pub azimuth: f64,
}

/// Apparent sidereal time at Greenwich in degrees.
///
/// The mean part is reduced mod 360 before the nutation correction is
/// added, so the result may exceed 360 by a fraction of a degree; callers
/// that need the wrapped value normalize it themselves.
pub(crate) fn apparent_sidereal_time(jd: f64, jc: f64, delta_psi: f64, obliquity: f64) -> f64 {
    let mean = 280.460_618_37 + 360.985_647_366_29 * (jd - 2_451_545.0) + 0.000_387_933 * jc * jc
        - jc * jc * jc / 38_710_000.0;
    normalize_degrees_0_to_360(mean) + delta_psi * cos(degrees_to_radians(obliquity))
}

/// Equatorial horizontal parallax of the sun in degrees, from the
/// Earth-sun distance in AU.
pub(crate) fn sun_parallax(distance: f64) -> f64 {
    8.794 / (3600.0 * distance)
}

/// Atmospheric refraction correction Δe in degrees.
///
/// Applied only when the body is no lower than the depression threshold;
/// deeper below the horizon the correction is zero.
pub(crate) fn refraction_correction(pressure: f64, temperature: f64, elevation: f64) -> f64 {
    if elevation >= REFRACTION_THRESHOLD {
        (pressure / 1010.0) * (283.0 / (273.0 + temperature)) * 1.02
            / (60.0 * tan(degrees_to_radians(elevation + 10.3 / (elevation + 5.11))))
    } else {
        0.0
    }
}

/// Transforms geocentric equatorial coordinates into the observer's frame.
///
/// `parallax` is the body's equatorial horizontal parallax in degrees:
/// 8.794"/R for the sun, asin(6378.14/Δ) for the moon. Everything else is
/// identical between the two bodies.
pub(crate) fn topocentric_body(
    observer: &Observer,
    sidereal_time: f64,
    right_ascension: f64,
    declination: f64,
    parallax: f64,
) -> TopocentricBody {
    let hour_angle =
        normalize_degrees_0_to_360(sidereal_time + observer.longitude - right_ascension);

    let lat = degrees_to_radians(observer.latitude);
    let xi = degrees_to_radians(parallax);
    let delta = degrees_to_radians(declination);
    let h = degrees_to_radians(hour_angle);

    // Observer position on the flattened Earth.
    let u = atan(EARTH_FLATTENING * tan(lat));
    let x = cos(u) + observer.elevation / EARTH_RADIUS_M * cos(lat);
    let y = EARTH_FLATTENING * sin(u) + observer.elevation / EARTH_RADIUS_M * sin(lat);

    // Parallax in right ascension.
    let delta_alpha = atan2(-x * sin(xi) * sin(h), cos(delta) - x * sin(xi) * cos(h));

    let declination_prime = radians_to_degrees(atan2(
        (sin(delta) - y * sin(xi)) * cos(delta_alpha),
        cos(delta) - x * sin(xi) * cos(h),
    ));
    let delta_alpha = radians_to_degrees(delta_alpha);

    let right_ascension_prime = right_ascension + delta_alpha;
    let hour_angle_prime = hour_angle - delta_alpha;

    let delta_prime = degrees_to_radians(declination_prime);
    let h_prime = degrees_to_radians(hour_angle_prime);

    let elevation_uncorrected = radians_to_degrees(asin(
        sin(lat) * sin(delta_prime) + cos(lat) * cos(delta_prime) * cos(h_prime),
    ));
    let elevation = elevation_uncorrected
        + refraction_correction(observer.pressure, observer.temperature, elevation_uncorrected);

    let zenith = 90.0 - elevation;

    let azimuth_from_south = normalize_degrees_0_to_360(radians_to_degrees(atan2(
        sin(h_prime),
        cos(h_prime) * sin(lat) - tan(delta_prime) * cos(lat),
    )));
    let azimuth = normalize_degrees_0_to_360(azimuth_from_south + 180.0);

    TopocentricBody {
        right_ascension: right_ascension_prime,
        declination: declination_prime,
        hour_angle: hour_angle_prime,
        elevation_uncorrected,
        elevation,
        zenith,
        azimuth_from_south,
        azimuth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_parallax_magnitude() {
        // About 8.8 arcseconds at 1 AU
        let xi = sun_parallax(1.0);
        assert!((xi - 8.794 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn test_refraction_zero_below_threshold() {
        assert_eq!(refraction_correction(1013.25, 15.0, -5.0), 0.0);
        assert_eq!(refraction_correction(1013.25, 15.0, -0.834), 0.0);
    }

    #[test]
    fn test_refraction_near_horizon() {
        // Roughly half a degree of lift at the horizon under standard conditions
        let de = refraction_correction(1013.25, 15.0, 0.0);
        assert!(de > 0.4 && de < 0.6, "Δe = {de}");
    }

    #[test]
    fn test_refraction_small_at_high_elevation() {
        let de = refraction_correction(1013.25, 15.0, 60.0);
        assert!(de > 0.0 && de < 0.02, "Δe = {de}");
    }

    #[test]
    fn test_sidereal_time_reference() {
        // NREL worked example: 2003-10-17 19:30:30 UTC
        let jd = 2_452_930.312_847;
        let jc = (jd - 2_451_545.0) / 36_525.0;
        let nu = apparent_sidereal_time(jd, jc, -0.003_998_4, 23.440_465);
        assert!((nu - 318.511_910).abs() < 1e-3, "ν = {nu}");
    }

    #[test]
    fn test_topocentric_transform_reference() {
        // NREL worked example observer and geocentric coordinates
        let observer = Observer::new(39.742_476, -105.178_6, 1830.14, 820.0, 11.0);
        let nu = 318.511_910;
        let body = topocentric_body(&observer, nu, 202.227_41, -9.314_34, sun_parallax(0.996_542));

        assert!((body.hour_angle - 11.105_9).abs() < 2e-3);
        assert!((body.zenith - 50.111_62).abs() < 2e-3);
        assert!((body.azimuth - 194.340_24).abs() < 2e-3);
    }
}
