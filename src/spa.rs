//! Solar position per Reda & Andreas (2003), the NREL SPA.
//!
//! The full pipeline: Julian clock, Earth heliocentric series, nutation,
//! apparent sun longitude, apparent sidereal time, topocentric parallax,
//! refraction, incidence on a tilted surface, equation of time and
//! sunrise/transit/sunset from the three-day interpolation in appendix A.2
//! of the report.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use core::fmt;

use crate::error::check_coordinates;
use crate::geometry::{self, TopocentricBody};
use crate::math::{
    acos, asin, clamp_unit, cos, degrees_to_radians, normalize_degrees_0_to_360,
    normalize_to_unit_range, polynomial, radians_to_degrees, sin, trunc,
};
use crate::series::{self, GeocentricSun};
use crate::time::{CalendarDate, JulianDate};
use crate::types::{Instant, Observer, SurfaceOrientation};
use crate::Result;

/// Sun elevation at the moment of sunrise or sunset: the sun's upper limb
/// touches the horizon through typical refraction.
const SUNRISE_SUNSET_ELEVATION: f64 = -0.83337;

/// Whether the sunrise/sunset geometry was solvable for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizonNote {
    /// Sun crosses the horizon; all three times are meaningful.
    Normal,
    /// Circumpolar day: the cosine of the sunrise hour angle left [-1, 1],
    /// so the sun never crosses the horizon. Times are still populated
    /// from the clamped geometry.
    AlwaysAboveOrBelowHorizon,
}

impl HorizonNote {
    /// Human-readable note; empty for a normal day.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::AlwaysAboveOrBelowHorizon => {
                "Sun is always above or below the horizon for that day"
            }
        }
    }
}

impl fmt::Display for HorizonNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Topocentric sun angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunGeometry {
    /// Incidence angle on the requested surface in degrees.
    pub incidence: f64,
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

/// Equation of time and the day's horizon crossings as fractional hours UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    /// Equation of time in minutes.
    pub equation_of_time: f64,
    /// Solar transit (local solar noon) in fractional hours.
    pub transit: f64,
    /// Sunrise in fractional hours.
    pub sunrise: f64,
    /// Sunset in fractional hours.
    pub sunset: f64,
    /// Whether the day had a solvable horizon crossing.
    pub note: HorizonNote,
}

/// Complete result of the solar position calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaResult {
    /// Topocentric sun angles.
    pub geometry: SunGeometry,
    /// Equation of time and horizon crossings.
    pub times: SunTimes,
    /// The instant converted back from its Julian date, normalized to the
    /// proleptic Gregorian fields the clock actually used.
    pub date: CalendarDate,
}

/// Shared state between SPA and the lunar pipeline built on top of it.
pub(crate) struct SpaCore {
    pub jd: JulianDate,
    pub sun: GeocentricSun,
    /// Apparent sidereal time at Greenwich in degrees (unwrapped).
    pub sidereal_time: f64,
    pub body: TopocentricBody,
}

pub(crate) fn compute_core(instant: &Instant, observer: &Observer, delta_t: f64) -> SpaCore {
    let jd = JulianDate::from_instant(instant, delta_t);
    let sun = series::geocentric_sun(jd.julian_ephemeris_day());

    let sidereal_time = geometry::apparent_sidereal_time(
        jd.julian_date(),
        jd.julian_century(),
        sun.nutation.delta_psi,
        sun.obliquity,
    );

    let body = geometry::topocentric_body(
        observer,
        sidereal_time,
        sun.right_ascension,
        sun.declination,
        geometry::sun_parallax(sun.distance),
    );

    SpaCore {
        jd,
        sun,
        sidereal_time,
        body,
    }
}

/// Computes the topocentric sun position, surface incidence angle,
/// equation of time and sunrise/transit/sunset for one instant.
///
/// `delta_t` is ΔT in seconds; use [`crate::time::DEFAULT_DELTA_T`] or the
/// [`crate::time::DeltaT`] estimator when no measured value is at hand.
///
/// # Errors
/// Returns an error for out-of-range coordinates. Atmospheric inputs are
/// taken as given, and polar days report a [`HorizonNote`] instead of
/// failing.
///
/// # Example
/// ```
/// # use solar_sampa::{spa, Instant, Observer, SurfaceOrientation};
/// # use solar_sampa::time::DEFAULT_DELTA_T;
/// let observer = Observer::new(39.74, -105.18, 1830.0, 820.0, 11.0);
/// let result = spa::sun_position(
///     &Instant::new(2003, 10, 17, 19, 30, 30.0),
///     &observer,
///     &SurfaceOrientation::horizontal(),
///     DEFAULT_DELTA_T,
/// )
/// .unwrap();
/// assert!((result.geometry.zenith - 50.1).abs() < 0.1);
/// ```
pub fn sun_position(
    instant: &Instant,
    observer: &Observer,
    surface: &SurfaceOrientation,
    delta_t: f64,
) -> Result<SpaResult> {
    check_coordinates(observer.latitude, observer.longitude)?;

    let core = compute_core(instant, observer, delta_t);
    let body = &core.body;

    let incidence = incidence_angle(body.zenith, body.azimuth_from_south, surface);

    let equation_of_time = equation_of_time(
        core.jd.julian_ephemeris_millennium(),
        core.sun.right_ascension,
        core.sun.nutation.delta_psi,
        core.sun.obliquity,
    );
    let times = sun_times(instant, observer, delta_t, equation_of_time);

    Ok(SpaResult {
        geometry: SunGeometry {
            incidence,
            zenith: body.zenith,
            azimuth: body.azimuth,
            declination: body.declination,
            hour_angle: body.hour_angle,
            right_ascension: body.right_ascension,
            elevation: body.elevation,
        },
        times,
        date: core.jd.to_calendar(),
    })
}

/// Chrono convenience wrapper around [`sun_position`].
///
/// # Errors
/// Same conditions as [`sun_position`].
#[cfg(feature = "chrono")]
pub fn sun_position_at<Tz: chrono::TimeZone>(
    datetime: &chrono::DateTime<Tz>,
    observer: &Observer,
    surface: &SurfaceOrientation,
    delta_t: f64,
) -> Result<SpaResult> {
    sun_position(&Instant::from(datetime), observer, surface, delta_t)
}

/// Incidence angle on a tilted surface in degrees.
fn incidence_angle(zenith: f64, azimuth_from_south: f64, surface: &SurfaceOrientation) -> f64 {
    let theta = degrees_to_radians(zenith);
    let slope = degrees_to_radians(surface.slope);
    let gamma = degrees_to_radians(azimuth_from_south - surface.azimuth_rotation);

    radians_to_degrees(acos(
        cos(theta) * cos(slope) + sin(slope) * sin(theta) * cos(gamma),
    ))
}

/// Equation of time in minutes, wrapped into roughly ±20 minutes.
fn equation_of_time(jme: f64, right_ascension: f64, delta_psi: f64, obliquity: f64) -> f64 {
    let mean_longitude = normalize_degrees_0_to_360(polynomial(
        &[
            280.4664567,
            360007.6982779,
            0.03032028,
            1.0 / 49931.0,
            -1.0 / 15300.0,
            -1.0 / 2000000.0,
        ],
        jme,
    ));

    let eot = mean_longitude - 0.0057183 - right_ascension
        + delta_psi * cos(degrees_to_radians(obliquity));
    let minutes = 4.0 * eot;

    if minutes > 20.0 {
        minutes - 1440.0
    } else if minutes < -20.0 {
        minutes + 1440.0
    } else {
        minutes
    }
}

/// Sunrise, transit and sunset per appendix A.2 of the report.
///
/// All three α/δ samples are taken at UT midnight of the adjacent days (ΔT
/// cancels out of the civil construction), each with its own nutation.
fn sun_times(
    instant: &Instant,
    observer: &Observer,
    delta_t: f64,
    equation_of_time: f64,
) -> SunTimes {
    let midnight = Instant {
        year: instant.year,
        month: instant.month,
        day: trunc(instant.day),
        hour: 0.0,
        minute: 0.0,
        second: 0.0,
        microsecond: 0.0,
    };
    let jd = JulianDate::from_instant(&midnight, delta_t);

    // Apparent sidereal time at 0 UT, nutation and obliquity at the
    // matching ephemeris epoch.
    let jce = jd.julian_ephemeris_century();
    let nut = series::nutation(jce);
    let obliquity = series::true_obliquity(jce / 10.0, nut.delta_epsilon);
    let nu =
        geometry::apparent_sidereal_time(jd.julian_date(), jd.julian_century(), nut.delta_psi, obliquity);

    // Geocentric α/δ for the previous, current and next day.
    let days: [GeocentricSun; 3] = [
        series::geocentric_sun(jd.add_days(-1.0).julian_date()),
        series::geocentric_sun(jd.julian_date()),
        series::geocentric_sun(jd.add_days(1.0).julian_date()),
    ];

    let lat = degrees_to_radians(observer.latitude);

    let transit_fraction =
        (days[1].right_ascension - observer.longitude - nu) / 360.0;

    let cos_hour_angle = (sin(degrees_to_radians(SUNRISE_SUNSET_ELEVATION))
        - sin(lat) * sin(degrees_to_radians(days[1].declination)))
        / (cos(lat) * cos(degrees_to_radians(days[1].declination)));

    let note = if cos_hour_angle.abs() > 1.0 {
        HorizonNote::AlwaysAboveOrBelowHorizon
    } else {
        HorizonNote::Normal
    };

    let hour_angle_0 = radians_to_degrees(acos(clamp_unit(cos_hour_angle))) % 180.0;

    let m = [
        normalize_to_unit_range(transit_fraction),
        normalize_to_unit_range(transit_fraction - hour_angle_0 / 360.0),
        normalize_to_unit_range(transit_fraction + hour_angle_0 / 360.0),
    ];

    // Interpolation parameters, reduced to the unit range when a sample
    // pair straddles the 0/360 seam.
    let limit = |value: f64| {
        if value.abs() > 2.0 {
            normalize_to_unit_range(value)
        } else {
            value
        }
    };
    let a = limit(days[1].right_ascension - days[0].right_ascension);
    let b = limit(days[2].right_ascension - days[1].right_ascension);
    let c = b - a;
    let a_dec = limit(days[1].declination - days[0].declination);
    let b_dec = limit(days[2].declination - days[1].declination);
    let c_dec = b_dec - a_dec;

    let mut elevation = [0.0_f64; 3];
    let mut local_hour_angle = [0.0_f64; 3];
    let mut declination_prime = [0.0_f64; 3];

    for i in 0..3 {
        let nu_i = nu + 360.985647 * m[i];
        let n = m[i] + delta_t / 86400.0;

        let alpha_prime = days[1].right_ascension + (n * (a + b + c * n)) / 2.0;
        let delta_prime = days[1].declination + (n * (a_dec + b_dec + c_dec * n)) / 2.0;

        let h_prime = normalize_degrees_0_to_360(nu_i + observer.longitude - alpha_prime);

        elevation[i] = radians_to_degrees(asin(
            sin(lat) * sin(degrees_to_radians(delta_prime))
                + cos(lat) * cos(degrees_to_radians(delta_prime)) * cos(degrees_to_radians(h_prime)),
        ));
        local_hour_angle[i] = h_prime;
        declination_prime[i] = delta_prime;
    }

    let transit = m[0] - local_hour_angle[0] / 360.0;
    let sunrise = m[1]
        + (elevation[1] - SUNRISE_SUNSET_ELEVATION)
            / (360.0
                * cos(degrees_to_radians(declination_prime[1]))
                * cos(lat)
                * sin(degrees_to_radians(local_hour_angle[1])));
    let sunset = m[2]
        + (elevation[2] - SUNRISE_SUNSET_ELEVATION)
            / (360.0
                * cos(degrees_to_radians(declination_prime[2]))
                * cos(lat)
                * sin(degrees_to_radians(local_hour_angle[2])));

    SunTimes {
        equation_of_time,
        transit: normalize_to_unit_range(transit) * 24.0,
        sunrise: normalize_to_unit_range(sunrise) * 24.0,
        sunset: normalize_to_unit_range(sunset) * 24.0,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::DEFAULT_DELTA_T;

    const TOLERANCE: f64 = 1e-3;

    #[test]
    fn test_nrel_worked_example() {
        // Reda & Andreas (2003), section 6: 2003-10-17 12:30:30 at UTC-7,
        // Golden, Colorado, ΔT = 67 s.
        let observer = Observer::new(39.742476, -105.1786, 1830.14, 820.0, 11.0);
        let surface = SurfaceOrientation::new(30.0, -10.0);
        let result = sun_position(
            &Instant::new(2003, 10, 17, 19, 30, 30.0),
            &observer,
            &surface,
            67.0,
        )
        .unwrap();

        assert!((result.geometry.zenith - 50.11162).abs() < TOLERANCE);
        assert!((result.geometry.azimuth - 194.34024).abs() < TOLERANCE);
        assert!((result.geometry.incidence - 25.18700).abs() < TOLERANCE);
    }

    #[test]
    fn test_equation_of_time_bounds_over_year() {
        let observer = Observer::new(45.0, 0.0, 0.0, 1013.25, 15.0);
        for day in 1..=28 {
            for month in 1..=12 {
                let result = sun_position(
                    &Instant::new(2023, month, day, 12, 0, 0.0),
                    &observer,
                    &SurfaceOrientation::horizontal(),
                    DEFAULT_DELTA_T,
                )
                .unwrap();
                let eot = result.times.equation_of_time;
                assert!((-20.0..=20.0).contains(&eot), "EOT {eot} at {month}-{day}");
            }
        }
    }

    #[test]
    fn test_sun_times_ordering_mid_latitude() {
        let observer = Observer::new(48.2, 16.4, 200.0, 1013.25, 15.0);
        let result = sun_position(
            &Instant::new(2023, 6, 21, 12, 0, 0.0),
            &observer,
            &SurfaceOrientation::horizontal(),
            DEFAULT_DELTA_T,
        )
        .unwrap();

        let times = result.times;
        assert_eq!(times.note, HorizonNote::Normal);
        assert!(times.sunrise < times.transit && times.transit < times.sunset);
        // Midsummer Vienna: transit near 10:55 UT
        assert!((times.transit - 10.92).abs() < 0.15, "transit {}", times.transit);
        assert!(times.sunset - times.sunrise > 15.0, "long midsummer day");
    }

    #[test]
    fn test_polar_night_sets_note() {
        // Tromsø region in December: sun never rises
        let observer = Observer::new(78.0, 15.0, 0.0, 1013.25, -10.0);
        let result = sun_position(
            &Instant::new(2023, 12, 21, 12, 0, 0.0),
            &observer,
            &SurfaceOrientation::horizontal(),
            DEFAULT_DELTA_T,
        )
        .unwrap();

        assert_eq!(result.times.note, HorizonNote::AlwaysAboveOrBelowHorizon);
        assert_eq!(
            result.times.note.message(),
            "Sun is always above or below the horizon for that day"
        );
        assert!(result.geometry.elevation < 0.0);
    }

    #[test]
    fn test_polar_day_sets_note() {
        let observer = Observer::new(78.0, 15.0, 0.0, 1013.25, 5.0);
        let result = sun_position(
            &Instant::new(2023, 6, 21, 12, 0, 0.0),
            &observer,
            &SurfaceOrientation::horizontal(),
            DEFAULT_DELTA_T,
        )
        .unwrap();

        assert_eq!(result.times.note, HorizonNote::AlwaysAboveOrBelowHorizon);
        assert!(result.geometry.elevation > 0.0);
    }

    #[test]
    fn test_incidence_matches_zenith_for_horizontal_surface() {
        let observer = Observer::new(39.742476, -105.1786, 1830.14, 820.0, 11.0);
        let result = sun_position(
            &Instant::new(2003, 10, 17, 19, 30, 30.0),
            &observer,
            &SurfaceOrientation::horizontal(),
            67.0,
        )
        .unwrap();

        // For slope 0 the incidence angle degenerates to the zenith angle.
        assert!((result.geometry.incidence - result.geometry.zenith).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        let observer = Observer::new(91.0, 0.0, 0.0, 1013.25, 15.0);
        assert!(sun_position(
            &Instant::new(2023, 6, 21, 12, 0, 0.0),
            &observer,
            &SurfaceOrientation::horizontal(),
            DEFAULT_DELTA_T,
        )
        .is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_wrapper_matches_instant() {
        use chrono::{FixedOffset, TimeZone};

        let observer = Observer::new(39.742476, -105.1786, 1830.14, 820.0, 11.0);
        let surface = SurfaceOrientation::new(30.0, -10.0);

        let offset = FixedOffset::west_opt(7 * 3600).unwrap();
        let datetime = offset.with_ymd_and_hms(2003, 10, 17, 12, 30, 30).unwrap();

        let a = sun_position_at(&datetime, &observer, &surface, 67.0).unwrap();
        let b = sun_position(
            &Instant::new(2003, 10, 17, 19, 30, 30.0),
            &observer,
            &surface,
            67.0,
        )
        .unwrap();

        assert!((a.geometry.zenith - b.geometry.zenith).abs() < 1e-12);
        assert!((a.geometry.azimuth - b.geometry.azimuth).abs() < 1e-12);
    }
}
