//! SOLPOS: almanac-based solar position and extraterrestrial intensity.
//!
//! The Michalsky (1988) almanac position for 1950-2050, Spencer's Fourier
//! radius vector, Zimmerman's refraction correction, the Kasten-Young air
//! mass, Drummond's shadow band factor and the Perez clearness-index
//! renormalization, combined exactly as in the NREL `solpos.c` chain.
//! Out-of-domain conditions use sentinels rather than errors: air mass -1
//! past 93° refracted zenith, sunrise/sunset minutes ±2999 for days the
//! sun never crosses the horizon.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::error::check_coordinates;
use crate::math::{
    acos, asin, atan2, cos, degrees_to_radians, exp, normalize_degrees_0_to_360, powf, powi,
    radians_to_degrees, sin, tan,
};
use crate::Result;

/// Cumulative days before each month, index 1-12 (common year).
const MONTH_DAY_OFFSETS: [i32; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Solar constant in W/m².
const SOLAR_CONSTANT: f64 = 1367.0;

/// Sentinel for sunrise/sunset minutes when the sun never crosses the
/// horizon: 2999/-2999 for all-night days, reversed for all-day.
pub const NO_SUNRISE_SENTINEL: f64 = 2999.0;

/// Input record for the SOLPOS calculation.
///
/// Local civil time plus site data; the timezone offset converts to UT
/// internally. The surface and shadow band fields default to a
/// south-facing horizontal surface and the Eppley band geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolposRequest {
    /// Calendar year (algorithm rated for 1950-2050).
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Local hour.
    pub hour: f64,
    /// Local minute.
    pub minute: f64,
    /// Local second.
    pub second: f64,
    /// Timezone offset in hours, east positive.
    pub timezone: f64,
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
    /// Surface pressure in millibars.
    pub pressure: f64,
    /// Ambient temperature in degrees Celsius.
    pub temperature: f64,
    /// Azimuth the tilted surface faces, degrees from north.
    pub aspect: f64,
    /// Surface tilt from horizontal in degrees.
    pub tilt: f64,
    /// Shadow band width in cm.
    pub shadow_band_width: f64,
    /// Shadow band radius in cm.
    pub shadow_band_radius: f64,
    /// Drummond sky factor for partly cloudy skies.
    pub shadow_band_sky_factor: f64,
    /// Measurement interval in seconds; the position is computed for the
    /// interval midpoint.
    pub interval: f64,
}

impl SolposRequest {
    /// Creates a request with default surface and shadow band parameters:
    /// south-facing (aspect 180°), horizontal, Eppley band 7.6/31.7 cm
    /// with sky factor 0.04, instantaneous measurement.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: f64,
        minute: f64,
        second: f64,
        timezone: f64,
        latitude: f64,
        longitude: f64,
        pressure: f64,
        temperature: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            timezone,
            latitude,
            longitude,
            pressure,
            temperature,
            aspect: 180.0,
            tilt: 0.0,
            shadow_band_width: 7.6,
            shadow_band_radius: 31.7,
            shadow_band_sky_factor: 0.04,
            interval: 0.0,
        }
    }
}

/// Output record of the SOLPOS calculation, in the reference order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolposResult {
    /// Relative optical air mass; -1 past 93° refracted zenith.
    pub air_mass: f64,
    /// Pressure-corrected air mass; -1 past 93° refracted zenith.
    pub pressure_corrected_air_mass: f64,
    /// Refraction-corrected zenith angle in degrees.
    pub zenith: f64,
    /// Azimuth in degrees, eastward from north.
    pub azimuth: f64,
    /// Unrefracted elevation in degrees.
    pub uncorrected_elevation: f64,
    /// Refraction-corrected elevation in degrees, floored at -9°.
    pub elevation: f64,
    /// Extraterrestrial global horizontal irradiance in W/m².
    pub global_irradiance: f64,
    /// Extraterrestrial direct normal irradiance in W/m².
    pub direct_normal_irradiance: f64,
    /// Extraterrestrial irradiance on the tilted surface in W/m².
    pub tilted_irradiance: f64,
    /// Sunrise in minutes after midnight local standard time, or the
    /// [`NO_SUNRISE_SENTINEL`] convention.
    pub sunrise_minutes: f64,
    /// Sunset in minutes after midnight local standard time.
    pub sunset_minutes: f64,
    /// Drummond shadow band correction factor.
    pub shadow_band_correction: f64,
    /// Perez clearness renormalization factor.
    pub prime: f64,
    /// Inverse of `prime`.
    pub unprime: f64,
    /// Day angle in degrees.
    pub day_angle: f64,
    /// Declination in degrees.
    pub declination: f64,
    /// Equation of time in minutes.
    pub equation_of_time: f64,
    /// Right ascension in degrees.
    pub right_ascension: f64,
}

/// Computes the almanac solar position and extraterrestrial intensity.
///
/// # Errors
/// Returns an error for out-of-range coordinates; every astronomical
/// out-of-domain condition is reported through sentinel values instead.
///
/// # Example
/// ```
/// # use solar_sampa::solpos::{solar_position_and_intensity, SolposRequest};
/// let request = SolposRequest::new(
///     1999, 7, 22, 9.0, 45.0, 37.0, -5.0, 33.65, -84.43, 1006.0, 27.0,
/// );
/// let result = solar_position_and_intensity(&request).unwrap();
/// assert!((result.zenith - 41.59).abs() < 0.01);
/// ```
#[allow(clippy::too_many_lines)] // One pass through the reference chain
pub fn solar_position_and_intensity(request: &SolposRequest) -> Result<SolposResult> {
    check_coordinates(request.latitude, request.longitude)?;

    let leap_year = request.year % 4 == 0 && (request.year % 100 != 0 || request.year % 400 == 0);
    let mut daynum = request.day as i32 + MONTH_DAY_OFFSETS[request.month as usize];
    if leap_year && request.month > 2 {
        daynum += 1;
    }

    // Spencer day angle and Earth radius vector correction.
    let day_angle = 360.0 * f64::from(daynum - 1) / 365.0;
    let sd = sin(degrees_to_radians(day_angle));
    let cd = cos(degrees_to_radians(day_angle));
    let s2 = sin(degrees_to_radians(2.0 * day_angle));
    let c2 = cos(degrees_to_radians(2.0 * day_angle));
    let erv = 1.000110 + 0.034221 * cd + 0.001280 * sd + 0.000719 * c2 + 0.000077 * s2;

    // Universal time in hours, shifted to the interval midpoint.
    let utime = (request.hour * 3600.0 + request.minute * 60.0 + request.second
        - request.interval / 2.0)
        / 3600.0
        - request.timezone;

    // Days from noon 1 January 2000 on the almanac's 1949-based scale.
    let delta = request.year - 1949;
    let leap_days = delta / 4;
    let julday =
        32916.5 + f64::from(delta) * 365.0 + f64::from(leap_days) + f64::from(daynum) + utime / 24.0;
    let ectime = julday - 51545.0;

    let mnlong = normalize_degrees_0_to_360(280.460 + 0.9856474 * ectime);
    let mnanom = normalize_degrees_0_to_360(357.528 + 0.9856003 * ectime);
    let eclong = normalize_degrees_0_to_360(
        mnlong
            + 1.915 * sin(degrees_to_radians(mnanom))
            + 0.020 * sin(degrees_to_radians(2.0 * mnanom)),
    );
    let ecobli = 23.439 - 4.0e-7 * ectime;

    let declination = radians_to_degrees(asin(
        sin(degrees_to_radians(ecobli)) * sin(degrees_to_radians(eclong)),
    ));
    let right_ascension = normalize_degrees_0_to_360(radians_to_degrees(atan2(
        cos(degrees_to_radians(ecobli)) * sin(degrees_to_radians(eclong)),
        cos(degrees_to_radians(eclong)),
    )));

    // Greenwich and local mean sidereal time, hour angle in ±180.
    let gmst = {
        let hours = (6.697375 + 0.0657098242 * ectime + utime) % 24.0;
        if hours < 0.0 {
            hours + 24.0
        } else {
            hours
        }
    };
    let lmst = normalize_degrees_0_to_360(gmst * 15.0 + request.longitude);
    let mut hour_angle = lmst - right_ascension;
    if hour_angle < -180.0 {
        hour_angle += 360.0;
    } else if hour_angle > 180.0 {
        hour_angle -= 360.0;
    }

    let cd_decl = cos(degrees_to_radians(declination));
    let sd_decl = sin(degrees_to_radians(declination));
    let cl = cos(degrees_to_radians(request.latitude));
    let sl = sin(degrees_to_radians(request.latitude));
    let ch = cos(degrees_to_radians(hour_angle));

    let cos_zenith = (sd_decl * sl + cd_decl * cl * ch).clamp(-1.0, 1.0);
    let zenith_etr = radians_to_degrees(acos(cos_zenith)).min(99.0);
    let uncorrected_elevation = 90.0 - zenith_etr;

    // Sunset hour angle, with the near-polar guard on cos δ · cos φ.
    let cdcl = cd_decl * cl;
    let ssha = if cdcl.abs() >= 0.001 {
        let cssha = -sl * sd_decl / cdcl;
        if cssha < -1.0 {
            180.0
        } else if cssha > 1.0 {
            0.0
        } else {
            radians_to_degrees(acos(cssha))
        }
    } else if (declination >= 0.0 && request.latitude > 0.0)
        || (declination < 0.0 && request.latitude < 0.0)
    {
        180.0
    } else {
        0.0
    };

    // Drummond shadow band factor. The first term takes radians of the
    // full sl·sd·ssha product, as in the reference model.
    let p = 0.6366198 * request.shadow_band_width / request.shadow_band_radius * powi(cd_decl, 3);
    let t1 = degrees_to_radians(sl * sd_decl * ssha);
    let t2 = cl * cd_decl * sin(degrees_to_radians(ssha));
    let shadow_band_correction = request.shadow_band_sky_factor + 1.0 / (1.0 - p * (t1 + t2));

    // True solar time offset and equation of time.
    let tst = (180.0 + hour_angle) * 4.0;
    let mut tstfix = tst - request.hour * 60.0 - request.minute - request.second / 60.0
        + request.interval / 120.0;
    while tstfix > 720.0 {
        tstfix -= 1440.0;
    }
    while tstfix < -720.0 {
        tstfix += 1440.0;
    }
    let equation_of_time = tstfix + 60.0 * request.timezone - 4.0 * request.longitude;

    let (sunrise_minutes, sunset_minutes) = if ssha <= 1.0 {
        (NO_SUNRISE_SENTINEL, -NO_SUNRISE_SENTINEL)
    } else if ssha >= 179.0 {
        (-NO_SUNRISE_SENTINEL, NO_SUNRISE_SENTINEL)
    } else {
        (720.0 - 4.0 * ssha - tstfix, 720.0 + 4.0 * ssha - tstfix)
    };

    // Azimuth with the hemisphere branch on the hour angle.
    let ce = cos(degrees_to_radians(uncorrected_elevation));
    let se = sin(degrees_to_radians(uncorrected_elevation));
    let mut azimuth = 180.0;
    let cecl = ce * cl;
    if cecl.abs() >= 0.001 {
        let ca = ((se * sl - sd_decl) / cecl).clamp(-1.0, 1.0);
        azimuth = 180.0 - radians_to_degrees(acos(ca));
        if hour_angle > 0.0 {
            azimuth = 360.0 - azimuth;
        }
    }

    // Zimmerman refraction, three regimes by elevation, scaled by the
    // pressure/temperature ratio.
    let refraction = if uncorrected_elevation > 85.0 {
        0.0
    } else {
        let tan_elev = tan(degrees_to_radians(uncorrected_elevation));
        let arcsec = if uncorrected_elevation >= 5.0 {
            58.1 / tan_elev - 0.07 / powi(tan_elev, 3) + 0.000086 / powi(tan_elev, 5)
        } else if uncorrected_elevation >= -0.575 {
            1735.0
                + uncorrected_elevation
                    * (-518.2
                        + uncorrected_elevation
                            * (103.4 + uncorrected_elevation * (-12.79 + uncorrected_elevation * 0.711)))
        } else {
            -20.774 / tan_elev
        };
        arcsec * (request.pressure * 283.0) / (1013.0 * (273.0 + request.temperature)) / 3600.0
    };
    let elevation = (uncorrected_elevation + refraction).max(-9.0);
    let zenith = 90.0 - elevation;
    let cos_zen_ref = cos(degrees_to_radians(zenith));

    let (air_mass, pressure_corrected_air_mass) = if zenith > 93.0 {
        (-1.0, -1.0)
    } else {
        let amass = 1.0 / (cos(degrees_to_radians(zenith)) + 0.50572 * powf(96.07995 - zenith, -1.6364));
        (amass, amass * request.pressure / 1013.0)
    };

    // The Perez factor is evaluated even with the -1 sentinel air mass,
    // as in the reference model.
    let unprime = 1.031 * exp(-1.4 / (0.9 + 9.4 / air_mass)) + 0.1;
    let prime = 1.0 / unprime;

    let (direct_normal_irradiance, global_irradiance) = if cos_zen_ref > 0.0 {
        let etrn = SOLAR_CONSTANT * erv;
        (etrn, etrn * cos_zen_ref)
    } else {
        (0.0, 0.0)
    };

    // Incidence on the tilted surface.
    let ca = cos(degrees_to_radians(azimuth));
    let sa = sin(degrees_to_radians(azimuth));
    let cp = cos(degrees_to_radians(request.aspect));
    let sp = sin(degrees_to_radians(request.aspect));
    let ct = cos(degrees_to_radians(request.tilt));
    let st = sin(degrees_to_radians(request.tilt));
    let sz = sin(degrees_to_radians(zenith));
    let cos_incidence = cos_zen_ref * ct + sz * st * (ca * cp + sa * sp);
    let tilted_irradiance = if cos_incidence > 0.0 {
        direct_normal_irradiance * cos_incidence
    } else {
        0.0
    };

    Ok(SolposResult {
        air_mass,
        pressure_corrected_air_mass,
        zenith,
        azimuth,
        uncorrected_elevation,
        elevation,
        global_irradiance,
        direct_normal_irradiance,
        tilted_irradiance,
        sunrise_minutes,
        sunset_minutes,
        shadow_band_correction,
        prime,
        unprime,
        day_angle,
        declination,
        equation_of_time,
        right_ascension,
    })
}
