//! Solar and lunar position with eclipse geometry, per the NREL SAMPA
//! (Reda 2010).
//!
//! Builds the moon's geocentric position from the 60-term longitude,
//! distance and latitude series, runs it through the same topocentric
//! machinery as the sun, measures the angular overlap of the two disks and
//! feeds the unshaded-lune fraction into the Bird clear sky model for
//! eclipse-attenuated irradiance.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

mod coefficients;

use core::f64::consts::PI;
use core::fmt;

use crate::bird::{self, BirdIrradiance};
use crate::error::check_coordinates;
use crate::geometry;
use crate::math::{
    acos, asin, clamp_unit, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin, sqrt,
};
use crate::series;
use crate::spa;
use crate::types::{Instant, Observer};
use crate::Result;
use coefficients::{TERMS_B, TERMS_LR};

/// Atmospheric column inputs for the eclipse irradiance estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampaAtmosphere {
    /// Ozone in a vertical column, cm.
    pub ozone: f64,
    /// Precipitable water in a vertical column, cm.
    pub water: f64,
    /// Broadband aerosol optical depth.
    pub aerosol: f64,
    /// Ground albedo.
    pub albedo: f64,
    /// Forward-scatter ratio for the Bird model.
    pub ba: f64,
    /// Aerosol absorptance constant for the Bird model.
    pub k1: f64,
}

impl Default for SampaAtmosphere {
    fn default() -> Self {
        Self {
            ozone: 0.3,
            water: 1.5,
            aerosol: 0.04,
            albedo: 0.2,
            ba: bird::DEFAULT_FORWARD_SCATTER_RATIO,
            k1: bird::DEFAULT_AEROSOL_ABSORPTANCE,
        }
    }
}

/// Eclipse classification from the disk separation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EclipseKind {
    /// Disks do not overlap.
    NoEclipse,
    /// Disks touch exactly.
    StartOrEnd,
    /// Disks partially overlap.
    Partial,
    /// The moon's disk covers the sun's center beyond the difference of
    /// the radii.
    Total,
}

impl EclipseKind {
    /// Human-readable classification note.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoEclipse => "No Eclipse",
            Self::StartOrEnd => "Start or End of Eclipse",
            Self::Partial => "Partial Solar Eclipse",
            Self::Total => "Total Solar Eclipse",
        }
    }
}

impl fmt::Display for EclipseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Topocentric moon angles.
///
/// `elevation` is the refraction-corrected elevation (90° minus the
/// zenith); the same depression threshold as the solar side applies, so a
/// moon far below the horizon carries no refraction lift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonGeometry {
    /// Topocentric zenith angle in degrees.
    pub zenith: f64,
    /// Topocentric azimuth in degrees, eastward from north.
    pub azimuth: f64,
    /// Topocentric declination in degrees.
    pub declination: f64,
    /// Topocentric local hour angle in degrees.
    pub hour_angle: f64,
    /// Topocentric right ascension in degrees.
    pub right_ascension: f64,
    /// Refraction-corrected elevation in degrees.
    pub elevation: f64,
}

/// Eclipse-attenuated Bird irradiance, in W/m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseIrradiance {
    /// Direct normal irradiance, unattenuated.
    pub direct_normal: f64,
    /// Direct normal irradiance from the sun's unshaded lune.
    pub attenuated_direct_normal: f64,
    /// Global horizontal irradiance, unattenuated.
    pub global_horizontal: f64,
    /// Global horizontal irradiance from the sun's unshaded lune.
    pub attenuated_global_horizontal: f64,
    /// Diffuse horizontal irradiance, unattenuated.
    pub diffuse_horizontal: f64,
    /// Diffuse horizontal irradiance from the sun's unshaded lune.
    pub attenuated_diffuse_horizontal: f64,
}

impl From<&BirdIrradiance> for EclipseIrradiance {
    fn from(irr: &BirdIrradiance) -> Self {
        Self {
            direct_normal: irr.direct_normal,
            attenuated_direct_normal: irr.attenuated_direct_normal,
            global_horizontal: irr.global_horizontal,
            attenuated_global_horizontal: irr.attenuated_global_horizontal,
            diffuse_horizontal: irr.diffuse_horizontal,
            attenuated_diffuse_horizontal: irr.attenuated_diffuse_horizontal,
        }
    }
}

/// Angular disk geometry of the eclipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseGeometry {
    /// Radius of the sun's disk in degrees.
    pub sun_radius: f64,
    /// Radius of the moon's disk in degrees.
    pub moon_radius: f64,
    /// Area of the sun's unshaded lune (square degrees).
    pub unshaded_area: f64,
    /// Unshaded lune as a percentage of the sun's disk area.
    pub unshaded_percent: f64,
    /// Irradiance estimate with the beam scaled by the unshaded fraction.
    pub irradiance: EclipseIrradiance,
    /// Classification of the overlap.
    pub kind: EclipseKind,
}

/// Complete result of the combined sun/moon calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampaResult {
    /// Topocentric sun zenith angle in degrees.
    pub sun_zenith: f64,
    /// Topocentric sun azimuth in degrees, eastward from north.
    pub sun_azimuth: f64,
    /// Topocentric moon angles.
    pub moon: MoonGeometry,
    /// Disk overlap and irradiance.
    pub eclipse: EclipseGeometry,
}

/// Geocentric moon position from the truncated ELP series.
struct GeocentricMoon {
    /// Mean-corrected ecliptic longitude λ' in degrees (nutation not yet
    /// applied).
    longitude: f64,
    /// Ecliptic latitude β in degrees.
    latitude: f64,
    /// Earth-moon distance Δ in kilometers.
    distance: f64,
    /// Equatorial horizontal parallax in degrees.
    parallax: f64,
}

fn geocentric_moon(jce: f64) -> GeocentricMoon {
    let l_prime = normalize_degrees_0_to_360(polynomial(
        &[
            218.3164477,
            481267.88123421,
            -0.0015786,
            1.0 / 538841.0,
            -1.0 / 65194000.0,
        ],
        jce,
    ));
    let d = normalize_degrees_0_to_360(polynomial(
        &[
            297.8501921,
            445267.1114034,
            -0.0018819,
            1.0 / 545868.0,
            -1.0 / 113065000.0,
        ],
        jce,
    ));
    let m = normalize_degrees_0_to_360(polynomial(
        &[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0],
        jce,
    ));
    let m_prime = normalize_degrees_0_to_360(polynomial(
        &[
            134.9633964,
            477198.8675055,
            0.0087414,
            1.0 / 69699.0,
            -1.0 / 14712000.0,
        ],
        jce,
    ));
    let f = normalize_degrees_0_to_360(polynomial(
        &[
            93.2720950,
            483202.0175233,
            -0.0036539,
            -1.0 / 3526000.0,
            1.0 / 863310000.0,
        ],
        jce,
    ));

    // Eccentricity factor scaling terms with a sun anomaly multiplier.
    let e = 1.0 - 0.002516 * jce - 0.0000074 * jce * jce;
    let scale = |m_mult: f64| match m_mult.abs() as i32 {
        1 => e,
        2 => e * e,
        _ => 1.0,
    };

    let mut l = 0.0;
    let mut r = 0.0;
    for term in TERMS_LR {
        let argument =
            degrees_to_radians(term[0] * d + term[1] * m + term[2] * m_prime + term[3] * f);
        let s = scale(term[1]);
        l += term[4] * s * sin(argument);
        r += term[5] * s * cos(argument);
    }

    let mut b = 0.0;
    for term in TERMS_B {
        let argument =
            degrees_to_radians(term[0] * d + term[1] * m + term[2] * m_prime + term[3] * f);
        b += term[4] * scale(term[1]) * sin(argument);
    }

    // Venus, Jupiter and flattening perturbations.
    let a1 = 119.75 + 131.849 * jce;
    let a2 = 53.09 + 479264.29 * jce;
    let a3 = 313.45 + 481266.484 * jce;

    let dl = 3958.0 * sin(degrees_to_radians(a1))
        + 1962.0 * sin(degrees_to_radians(l_prime - f))
        + 318.0 * sin(degrees_to_radians(a2));
    let db = -2235.0 * sin(degrees_to_radians(l_prime))
        + 382.0 * sin(degrees_to_radians(a3))
        + 175.0 * sin(degrees_to_radians(a1 - f))
        + 175.0 * sin(degrees_to_radians(a1 + f))
        + 127.0 * sin(degrees_to_radians(l_prime - m_prime))
        - 115.0 * sin(degrees_to_radians(l_prime + m_prime));

    let longitude = normalize_degrees_0_to_360(l_prime + (l + dl) / 1e6);
    let latitude = normalize_degrees_0_to_360((b + db) / 1e6);
    let distance = 385000.56 + r / 1000.0;
    let parallax = radians_to_degrees(asin(6378.14 / distance));

    GeocentricMoon {
        longitude,
        latitude,
        distance,
        parallax,
    }
}

/// Computes the topocentric sun and moon positions, the eclipse disk
/// geometry and the Bird irradiance attenuated by the unshaded lune.
///
/// # Errors
/// Returns an error for out-of-range coordinates; eclipse-free geometry
/// reports [`EclipseKind::NoEclipse`] with 100% unshaded lune.
///
/// # Example
/// ```
/// # use solar_sampa::{sampa, Instant, Observer};
/// # use solar_sampa::sampa::{EclipseKind, SampaAtmosphere};
/// // Total eclipse of 2016-03-09 over Papua New Guinea
/// let observer = Observer::new(10.1, 148.8, 100.0, 1000.0, 25.0);
/// let result = sampa::sun_and_moon(
///     &Instant::new(2016, 3, 9, 1, 58, 19.0),
///     &observer,
///     &SampaAtmosphere::default(),
///     69.3,
/// )
/// .unwrap();
/// assert_eq!(result.eclipse.kind, EclipseKind::Total);
/// ```
pub fn sun_and_moon(
    instant: &Instant,
    observer: &Observer,
    atmosphere: &SampaAtmosphere,
    delta_t: f64,
) -> Result<SampaResult> {
    check_coordinates(observer.latitude, observer.longitude)?;

    let core = spa::compute_core(instant, observer, delta_t);

    let moon = geocentric_moon(core.jd.julian_ephemeris_century());

    // Apparent longitude and equatorial coordinates share the nutation and
    // obliquity already computed for the sun's epoch.
    let lambda = moon.longitude + core.sun.nutation.delta_psi;
    let right_ascension = series::right_ascension(lambda, core.sun.obliquity, moon.latitude);
    let declination = series::declination(lambda, core.sun.obliquity, moon.latitude);

    let sidereal_time = normalize_degrees_0_to_360(core.sidereal_time);
    let body = geometry::topocentric_body(
        observer,
        sidereal_time,
        right_ascension,
        declination,
        moon.parallax,
    );

    let sun_zenith = core.body.zenith;
    let sun_azimuth = core.body.azimuth;

    // Angular separation of the disk centers, spherical law of cosines.
    let separation = radians_to_degrees(acos(clamp_unit(
        cos(degrees_to_radians(sun_zenith)) * cos(degrees_to_radians(body.zenith))
            + sin(degrees_to_radians(sun_zenith))
                * sin(degrees_to_radians(body.zenith))
                * cos(degrees_to_radians(sun_azimuth - body.azimuth)),
    )));

    let sun_radius = 959.63 / (3600.0 * core.sun.distance);
    let moon_radius = 358473400.0
        * (1.0 + sin(degrees_to_radians(body.elevation)) * sin(degrees_to_radians(moon.parallax)))
        / (3600.0 * moon.distance);

    let (kind, shaded_area) =
        eclipse_overlap(separation, sun_radius, moon_radius);

    let sun_disk_area = PI * sun_radius * sun_radius;
    let unshaded_area = (sun_disk_area - shaded_area).max(0.0);
    let unshaded_percent = unshaded_area * 100.0 / sun_disk_area;

    let irradiance = bird::clear_sky_irradiance(
        core.sun.distance,
        sun_zenith,
        observer.pressure,
        atmosphere.ozone,
        atmosphere.water,
        atmosphere.aerosol,
        atmosphere.albedo,
        unshaded_percent / 100.0,
        atmosphere.ba,
        atmosphere.k1,
    );

    Ok(SampaResult {
        sun_zenith,
        sun_azimuth,
        moon: MoonGeometry {
            zenith: body.zenith,
            azimuth: body.azimuth,
            declination: body.declination,
            hour_angle: body.hour_angle,
            right_ascension: body.right_ascension,
            elevation: body.elevation,
        },
        eclipse: EclipseGeometry {
            sun_radius,
            moon_radius,
            unshaded_area,
            unshaded_percent,
            irradiance: EclipseIrradiance::from(&irradiance),
            kind,
        },
    })
}

/// Chrono convenience wrapper around [`sun_and_moon`].
///
/// # Errors
/// Same conditions as [`sun_and_moon`].
#[cfg(feature = "chrono")]
pub fn sun_and_moon_at<Tz: chrono::TimeZone>(
    datetime: &chrono::DateTime<Tz>,
    observer: &Observer,
    atmosphere: &SampaAtmosphere,
    delta_t: f64,
) -> Result<SampaResult> {
    sun_and_moon(&Instant::from(datetime), observer, atmosphere, delta_t)
}

/// Classifies the overlap and returns the shaded area of the sun's disk
/// (square degrees).
///
/// The partial case is the two-circle lens: each disk contributes a
/// circular segment cut by the chord through the intersection points.
#[allow(clippy::float_cmp)]
fn eclipse_overlap(separation: f64, sun_radius: f64, moon_radius: f64) -> (EclipseKind, f64) {
    let touching = moon_radius + sun_radius;

    if separation > touching {
        (EclipseKind::NoEclipse, 0.0)
    } else if separation == touching {
        (EclipseKind::StartOrEnd, 0.0)
    } else if separation <= (moon_radius - sun_radius).abs() {
        (EclipseKind::Total, PI * moon_radius * moon_radius)
    } else {
        let s = (separation * separation + sun_radius * sun_radius - moon_radius * moon_radius)
            / (2.0 * separation);
        let m = (separation * separation - sun_radius * sun_radius + moon_radius * moon_radius)
            / (2.0 * separation);
        let h = sqrt(
            4.0 * separation * separation * sun_radius * sun_radius
                - (separation * separation + sun_radius * sun_radius - moon_radius * moon_radius)
                    * (separation * separation + sun_radius * sun_radius
                        - moon_radius * moon_radius),
        ) / (2.0 * separation);

        let sun_segment = sun_radius * sun_radius * acos(clamp_unit(s / sun_radius)) - h * s;
        let moon_segment = moon_radius * moon_radius * acos(clamp_unit(m / moon_radius)) - h * m;

        (EclipseKind::Partial, sun_segment + moon_segment)
    }
}
