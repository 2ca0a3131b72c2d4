//! Earth heliocentric series, nutation and obliquity.
//!
//! Evaluates the truncated VSOP87 tables (L0..L5, B0..B1, R0..R4), the
//! 63-term nutation series and the mean obliquity polynomial, and combines
//! them into the geocentric sun position used by the solar and lunar
//! pipelines.

#![allow(clippy::many_single_char_names)]

mod coefficients;

use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial, powi,
    radians_to_degrees, sin, tan,
};
use coefficients::{
    OBLIQUITY_COEFFS, TERMS_B, TERMS_EPS, TERMS_L, TERMS_PSI, TERMS_R, TERMS_Y,
};

/// Nutation in longitude (Δψ) and obliquity (Δε), both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Nutation {
    pub delta_psi: f64,
    pub delta_epsilon: f64,
}

/// Geocentric sun coordinates with the intermediate quantities the
/// downstream pipelines reuse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GeocentricSun {
    /// Apparent sun longitude λ in degrees (aberration and nutation applied).
    pub longitude: f64,
    /// Geocentric right ascension α in degrees.
    pub right_ascension: f64,
    /// Geocentric declination δ in degrees.
    pub declination: f64,
    /// Earth-sun distance in astronomical units.
    pub distance: f64,
    /// Nutation at the same epoch.
    pub nutation: Nutation,
    /// True obliquity ε in degrees.
    pub obliquity: f64,
}

/// Sums one periodic table: Σ A·cos(B + C·JME).
fn sum_periodic_terms(table: &[[f64; 3]], jme: f64) -> f64 {
    table
        .iter()
        .map(|term| term[0] * cos(term[1] + term[2] * jme))
        .sum()
}

/// Combines the per-power table sums: (Σ Lᵢ·JMEⁱ) / 1e8, in radians.
fn heliocentric_value(term_sets: &[&[[f64; 3]]], jme: f64) -> f64 {
    let sum: f64 = term_sets
        .iter()
        .enumerate()
        .map(|(i, table)| sum_periodic_terms(table, jme) * powi(jme, i as i32))
        .sum();
    sum / 1e8
}

/// Earth heliocentric longitude L in degrees, normalized to [0, 360).
pub(crate) fn heliocentric_longitude(jme: f64) -> f64 {
    normalize_degrees_0_to_360(radians_to_degrees(heliocentric_value(TERMS_L, jme)))
}

/// Earth heliocentric latitude B in degrees.
pub(crate) fn heliocentric_latitude(jme: f64) -> f64 {
    radians_to_degrees(heliocentric_value(TERMS_B, jme))
}

/// Earth-sun distance R in astronomical units.
pub(crate) fn sun_earth_distance(jme: f64) -> f64 {
    heliocentric_value(TERMS_R, jme)
}

/// The five fundamental arguments X0..X4 in degrees at the given epoch.
///
/// X0: mean elongation of the moon from the sun, X1: mean anomaly of the
/// sun, X2: mean anomaly of the moon, X3: argument of latitude of the
/// moon, X4: longitude of the ascending node of the moon's mean orbit.
pub(crate) fn fundamental_arguments(jce: f64) -> [f64; 5] {
    [
        polynomial(&[297.85036, 445_267.111_480, -0.0019142, 1.0 / 189_474.0], jce),
        polynomial(&[357.52772, 35_999.050_340, -0.0001603, -1.0 / 300_000.0], jce),
        polynomial(&[134.96298, 477_198.867_398, 0.0086972, 1.0 / 56_250.0], jce),
        polynomial(&[93.27191, 483_202.017_538, -0.0036825, 1.0 / 327_270.0], jce),
        polynomial(&[125.04452, -1934.136_261, 0.0020708, 1.0 / 450_000.0], jce),
    ]
}

/// Nutation in longitude and obliquity from the 63-term series.
pub(crate) fn nutation(jce: f64) -> Nutation {
    let x = fundamental_arguments(jce);

    let mut delta_psi = 0.0;
    let mut delta_epsilon = 0.0;

    for (i, multipliers) in TERMS_Y.iter().enumerate() {
        let argument: f64 = multipliers
            .iter()
            .zip(x.iter())
            .map(|(&m, &xj)| f64::from(m) * xj)
            .sum();
        let argument = degrees_to_radians(argument);

        let psi = TERMS_PSI[i];
        let eps = TERMS_EPS[i];
        delta_psi += (psi[0] + psi[1] * jce) * sin(argument);
        delta_epsilon += (eps[0] + eps[1] * jce) * cos(argument);
    }

    Nutation {
        delta_psi: delta_psi / 36_000_000.0,
        delta_epsilon: delta_epsilon / 36_000_000.0,
    }
}

/// Mean obliquity of the ecliptic in arcseconds.
pub(crate) fn mean_obliquity(jme: f64) -> f64 {
    polynomial(OBLIQUITY_COEFFS, jme / 10.0)
}

/// True obliquity ε in degrees: ε0/3600 + Δε.
pub(crate) fn true_obliquity(jme: f64, delta_epsilon: f64) -> f64 {
    mean_obliquity(jme) / 3600.0 + delta_epsilon
}

/// Geocentric right ascension α in degrees from ecliptic coordinates.
pub(crate) fn right_ascension(longitude: f64, obliquity: f64, latitude: f64) -> f64 {
    let lambda = degrees_to_radians(longitude);
    let epsilon = degrees_to_radians(obliquity);
    let beta = degrees_to_radians(latitude);

    normalize_degrees_0_to_360(radians_to_degrees(atan2(
        sin(lambda) * cos(epsilon) - tan(beta) * sin(epsilon),
        cos(lambda),
    )))
}

/// Geocentric declination δ in degrees from ecliptic coordinates.
pub(crate) fn declination(longitude: f64, obliquity: f64, latitude: f64) -> f64 {
    let lambda = degrees_to_radians(longitude);
    let epsilon = degrees_to_radians(obliquity);
    let beta = degrees_to_radians(latitude);

    radians_to_degrees(asin(
        sin(beta) * cos(epsilon) + cos(beta) * sin(epsilon) * sin(lambda),
    ))
}

/// Geocentric sun position at the given ephemeris epoch.
///
/// JCE is derived from the passed JDE; aberration uses the series distance.
pub(crate) fn geocentric_sun(jde: f64) -> GeocentricSun {
    let jce = (jde - 2_451_545.0) / 36_525.0;
    let jme = jce / 10.0;

    let theta = normalize_degrees_0_to_360(heliocentric_longitude(jme) + 180.0);
    let beta = -heliocentric_latitude(jme);
    let distance = sun_earth_distance(jme);

    let nut = nutation(jce);
    let obliquity = true_obliquity(jme, nut.delta_epsilon);

    // Aberration correction in degrees.
    let delta_tau = -20.4898 / (3600.0 * distance);
    let longitude = theta + nut.delta_psi + delta_tau;

    GeocentricSun {
        longitude,
        right_ascension: right_ascension(longitude, obliquity, beta),
        declination: declination(longitude, obliquity, beta),
        distance,
        nutation: nut,
        obliquity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Epoch of the NREL worked example: 2003-10-17 12:30:30 local (UTC-7),
    // ΔT = 67 s.
    const JDE: f64 = 2_452_930.312_847 + 67.0 / 86_400.0;

    fn jme() -> f64 {
        (JDE - 2_451_545.0) / 365_250.0
    }

    fn jce() -> f64 {
        (JDE - 2_451_545.0) / 36_525.0
    }

    #[test]
    fn test_heliocentric_longitude_reference() {
        let l = heliocentric_longitude(jme());
        assert!((l - 24.018_261).abs() < 1e-4, "L = {l}");
    }

    #[test]
    fn test_heliocentric_latitude_reference() {
        let b = heliocentric_latitude(jme());
        assert!((b - (-0.000_101)).abs() < 1e-5, "B = {b}");
    }

    #[test]
    fn test_sun_earth_distance_reference() {
        let r = sun_earth_distance(jme());
        assert!((r - 0.996_542).abs() < 1e-5, "R = {r}");
    }

    #[test]
    fn test_nutation_reference() {
        let nut = nutation(jce());
        assert!((nut.delta_psi - (-0.003_998)).abs() < 1e-5);
        assert!((nut.delta_epsilon - 0.001_666).abs() < 1e-5);
    }

    #[test]
    fn test_true_obliquity_reference() {
        let nut = nutation(jce());
        let epsilon = true_obliquity(jme(), nut.delta_epsilon);
        assert!((epsilon - 23.440_465).abs() < 1e-4);
    }

    #[test]
    fn test_geocentric_sun_reference() {
        let sun = geocentric_sun(JDE);
        assert!((sun.longitude - 204.008_5).abs() < 2e-3);
        assert!((sun.right_ascension - 202.227_41).abs() < 2e-3);
        assert!((sun.declination - (-9.314_34)).abs() < 1e-3);
    }

    #[test]
    fn test_distance_stays_near_one_au() {
        let mut jde = 2_451_545.0;
        while jde < 2_451_545.0 + 366.0 {
            let jme = (jde - 2_451_545.0) / 365_250.0;
            let r = sun_earth_distance(jme);
            assert!(r > 0.983 && r < 1.017, "R = {r} at JDE {jde}");
            jde += 10.0;
        }
    }
}
