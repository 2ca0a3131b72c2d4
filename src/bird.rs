//! Bird clear sky model: broadband direct, global and diffuse irradiance
//! on a horizontal surface.
//!
//! Constants follow the NREL `bird.c` reference rather than the 1981
//! report where the two disagree (air mass 0.50572/96.07995/-1.6364,
//! ozone exponent -0.3034, solar constant 1367, forward-scatter ratio
//! default 0.85). The attenuated outputs scale the direct beam by an
//! eclipse factor while keeping the unattenuated diffuse sky term, the way
//! the eclipse irradiance model expects.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::math::{cos, degrees_to_radians, exp, powf};

/// Default ratio of forward-scattered to total aerosol-scattered irradiance.
pub const DEFAULT_FORWARD_SCATTER_RATIO: f64 = 0.85;

/// Default aerosol absorptance constant.
pub const DEFAULT_AEROSOL_ABSORPTANCE: f64 = 0.1;

/// Solar constant in W/m², per the reference implementation.
const SOLAR_CONSTANT: f64 = 1367.0;

/// Broadband clear sky irradiance estimates in W/m².
///
/// When the sun is below the horizon (zenith outside [0°, 90°)) or the
/// sun distance is non-positive, every field including the air mass is
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BirdIrradiance {
    /// Relative optical air mass (not pressure corrected).
    pub air_mass: f64,
    /// Direct normal irradiance.
    pub direct_normal: f64,
    /// Global horizontal irradiance.
    pub global_horizontal: f64,
    /// Diffuse horizontal irradiance.
    pub diffuse_horizontal: f64,
    /// Direct normal irradiance scaled by the eclipse factor.
    pub attenuated_direct_normal: f64,
    /// Global horizontal irradiance with the attenuated beam.
    pub attenuated_global_horizontal: f64,
    /// Diffuse horizontal irradiance with the attenuated beam.
    pub attenuated_diffuse_horizontal: f64,
}

/// Estimates clear sky irradiance.
///
/// # Arguments
/// * `r` - Sun distance from the Earth's center in astronomical units
/// * `zenith` - Solar zenith angle in degrees
/// * `pressure` - Surface pressure in millibars
/// * `ozone` - Ozone in a vertical column, cm
/// * `water` - Precipitable water in a vertical column, cm
/// * `aerosol` - Broadband aerosol optical depth
/// * `albedo` - Ground albedo
/// * `dni_mod` - Beam attenuation factor in [0, 1]; negative skips the
///   attenuated outputs
/// * `ba` - Forward-scatter ratio, usually [`DEFAULT_FORWARD_SCATTER_RATIO`]
/// * `k1` - Aerosol absorptance constant, usually [`DEFAULT_AEROSOL_ABSORPTANCE`]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn clear_sky_irradiance(
    r: f64,
    zenith: f64,
    pressure: f64,
    ozone: f64,
    water: f64,
    aerosol: f64,
    albedo: f64,
    dni_mod: f64,
    ba: f64,
    k1: f64,
) -> BirdIrradiance {
    if !(0.0..90.0).contains(&zenith) || r <= 0.0 {
        return BirdIrradiance::default();
    }

    let cos_zenith = cos(degrees_to_radians(zenith));

    // Kasten-Young relative air mass.
    let m = 1.0 / (cos_zenith + 0.50572 * powf(96.07995 - zenith, -1.6364));
    let m_prime = m * pressure / 1013.0;

    let xo = ozone * m;
    let xw = water * m;

    // Transmittance chain: Rayleigh, ozone, uniformly mixed gases, water
    // vapor, aerosol.
    let tr = exp(-0.0903 * powf(m_prime, 0.84) * (1.0 + m_prime - powf(m_prime, 1.01)));
    let to = 1.0 - 0.1611 * xo * powf(1.0 + 139.48 * xo, -0.3034)
        - 0.002715 * xo / (1.0 + 0.044 * xo + 0.0003 * xo * xo);
    let tum = exp(-0.0127 * powf(m_prime, 0.26));
    let tw = 1.0 - 2.4959 * xw / (powf(1.0 + 79.034 * xw, 0.6828) + 6.385 * xw);
    let ta = exp(-powf(aerosol, 0.873) * (1.0 + aerosol - powf(aerosol, 0.7088)) * powf(m, 0.9108));

    let taa = 1.0 - k1 * (1.0 - m + powf(m, 1.06)) * (1.0 - ta);
    let tas = ta / taa;
    let rs = 0.0685 + (1.0 - ba) * (1.0 - tas);

    let io = SOLAR_CONSTANT / (r * r);
    let id = io * cos_zenith * 0.9662 * tr * to * tum * tw * ta;
    let ias = io * cos_zenith * 0.79 * to * tw * tum * taa
        * (0.5 * (1.0 - tr) + ba * (1.0 - tas))
        / (1.0 - m + powf(m, 1.02));
    let it = (id + ias) / (1.0 - albedo * rs);

    let direct_normal = (0.9662 * io * tr * to * tum * tw * ta).max(0.0);
    let direct_horizontal = direct_normal * cos_zenith;
    let diffuse_horizontal = it - direct_horizontal;

    let mut attenuated_direct_normal = 0.0;
    let mut attenuated_global_horizontal = 0.0;
    let mut attenuated_diffuse_horizontal = 0.0;
    if dni_mod >= 0.0 {
        attenuated_direct_normal = direct_normal * dni_mod;
        let attenuated_direct_horizontal = attenuated_direct_normal * cos_zenith;
        attenuated_global_horizontal =
            (attenuated_direct_horizontal + ias) / (1.0 - albedo * rs);
        attenuated_diffuse_horizontal =
            attenuated_global_horizontal - attenuated_direct_horizontal;
    }

    BirdIrradiance {
        air_mass: m,
        direct_normal,
        global_horizontal: it,
        diffuse_horizontal,
        attenuated_direct_normal,
        attenuated_global_horizontal,
        attenuated_diffuse_horizontal,
    }
}
