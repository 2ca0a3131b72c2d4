//! # Solar and Lunar Ephemeris Library
//!
//! Solar position, lunar position, eclipse geometry and clear sky
//! irradiance from four published algorithms.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library implements:
//! - **SPA** (Solar Position Algorithm): NREL's authoritative sun position
//!   (±0.0003°, years -2000 to 6000), with incidence angle, equation of
//!   time and sunrise/transit/sunset
//! - **SAMPA** (Solar and Moon Position Algorithm): lunar position built on
//!   SPA, solar eclipse geometry and eclipse-attenuated irradiance
//! - **SOLPOS**: NREL's almanac-based position and extraterrestrial
//!   intensity for 1950-2050 (±0.01°), including shadow band correction
//!   and sunrise/sunset in local minutes
//! - **Bird**: broadband clear sky direct, global and diffuse irradiance
//!
//! In addition, it provides an estimator for Delta T (ΔT) values based on
//! the work of F. Espenak & J. Meeus.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//!   (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! ## Quick Start
//!
//! ### Sun position, sunrise and sunset (SPA)
//! ```rust
//! use solar_sampa::{spa, Instant, Observer, SurfaceOrientation};
//!
//! // Vienna, midsummer noon UTC
//! let when = Instant::new(2026, 6, 21, 12, 0, 0.0);
//! let site = Observer::new(48.21, 16.37, 190.0, 1010.0, 11.0);
//! let result = spa::sun_position(
//!     &when,
//!     &site,
//!     &SurfaceOrientation::horizontal(),
//!     69.0, // delta T (seconds)
//! ).unwrap();
//!
//! println!("Zenith:  {:.3}°", result.geometry.zenith);
//! println!("Azimuth: {:.3}°", result.geometry.azimuth);
//! println!("Transit: {:.3} h UT", result.times.transit);
//! ```
//!
//! ### Sun and moon with eclipse geometry (SAMPA)
//! ```rust
//! use solar_sampa::sampa::{self, SampaAtmosphere};
//! use solar_sampa::{Instant, Observer};
//!
//! // Total eclipse over Papua New Guinea, 2016-03-09
//! let when = Instant::new(2016, 3, 9, 1, 58, 19.0);
//! let site = Observer::new(10.1, 148.8, 100.0, 1000.0, 25.0);
//! let result = sampa::sun_and_moon(&when, &site, &SampaAtmosphere::default(), 69.3).unwrap();
//!
//! println!("Sun-moon separation covers {:.1}% of the disk",
//!     100.0 - result.eclipse.unshaded_percent);
//! println!("{}", result.eclipse.kind);
//! ```
//!
//! ### Almanac position and intensity (SOLPOS)
//! ```rust
//! use solar_sampa::solpos::{solar_position_and_intensity, SolposRequest};
//!
//! // Atlanta, 1999-07-22 09:45:37 EST
//! let request = SolposRequest::new(
//!     1999, 7, 22, 9.0, 45.0, 37.0, -5.0, 33.65, -84.43, 1006.0, 27.0,
//! );
//! let result = solar_position_and_intensity(&request).unwrap();
//!
//! println!("Refracted zenith: {:.3}°", result.zenith);
//! println!("ETR on horizontal: {:.1} W/m²", result.global_irradiance);
//! ```
//!
//! ## References
//!
//! - Reda, I.; Andreas, A. (2003). Solar position algorithm for solar
//!   radiation applications. Solar Energy, 76(5), 577-589.
//!   DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>
//! - Reda, I. (2010). Solar eclipse monitoring for solar energy
//!   applications using the solar and moon position algorithms.
//!   NREL/TP-3B0-47681.
//! - Bird, R.; Hulstrom, R. (1981). A simplified clear sky model for
//!   direct and diffuse insolation on horizontal surfaces. SERI/TR-642-761.
//! - Michalsky, J. (1988). The Astronomical Almanac's algorithm for
//!   approximate solar position (1950-2050). Solar Energy, 40(3), 227-235.
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{Instant, Observer, SurfaceOrientation};

// Algorithm modules
pub mod bird;
pub mod sampa;
pub mod solpos;
pub mod spa;

// Core modules
pub mod error;
pub mod time;
pub mod types;

// Internal modules
mod geometry;
mod math;
mod series;
